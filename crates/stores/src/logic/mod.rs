pub mod app_store;
pub mod identifiers;
pub mod play_store;

use async_trait::async_trait;

use crate::types::{ReleaseInfo, StoreKind};

pub use app_store::{AppStoreClient, AppStoreConnectCredentials};
pub use identifiers::{android_package_from_url, ios_app_id_from_url};
pub use play_store::{PlayStoreClient, ServiceAccountKey};

/// Capability shared by both store backends so callers can treat them
/// uniformly and tests can substitute fakes.
#[async_trait]
pub trait StoreClientLike: Send + Sync {
    fn store_kind(&self) -> StoreKind;

    /// Look up the currently published production release for the given
    /// store-native app identifier (Android package name, iOS numeric id).
    async fn get_release(&self, app_identifier: &str) -> Result<ReleaseInfo, StoreClientError>;
}

/// Errors raised by the store clients.
///
/// Version-name and build-number mismatches are deliberately absent: those
/// are data-quality signals that yield partial `ReleaseInfo` fields, not
/// errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("store API error: status {status}, body: {body}")]
    Api { status: u16, body: String },

    #[error("failed to parse response: {source}, body: {body}")]
    Parse {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid signing key: {0}")]
    SigningKey(String),

    #[error("no production releases found for {0}")]
    NoReleases(String),
}
