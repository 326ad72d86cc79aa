use thiserror::Error;

pub type DynError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum CommonError {
    #[error("could not find resource")]
    NotFound {
        msg: String,
        lookup_id: String,
        #[source]
        source: Option<anyhow::Error>,
    },
    #[error("decryption failed")]
    Decryption { msg: String },
    #[error("invalid configuration")]
    InvalidConfiguration {
        msg: String,
        #[source]
        source: Option<anyhow::Error>,
    },
    #[error("invalid response")]
    InvalidResponse {
        msg: String,
        #[source]
        source: Option<anyhow::Error>,
    },
    #[error("repository error")]
    Repository {
        msg: String,
        #[source]
        source: Option<anyhow::Error>,
    },
    #[error("unknown error")]
    Unknown(
        #[from]
        anyhow::Error,
    ),
    #[error("io error")]
    IoError {
        #[from]
        #[source]
        source: std::io::Error,
    },
    #[error("url parse error")]
    UrlParseError {
        #[from]
        #[source]
        source: url::ParseError,
    },
    #[error("serde json error")]
    SerdeSerializationError {
        #[from]
        #[source]
        source: serde_json::Error,
    },
    #[error("reqwest error")]
    ReqwestError {
        #[from]
        #[source]
        source: reqwest::Error,
    },
    #[error("tokio task error")]
    TokioJoinError {
        #[from]
        #[source]
        source: tokio::task::JoinError,
    },
}
