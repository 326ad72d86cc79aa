//! Read-only collaborator interfaces.
//!
//! Companies, apps, and encrypted secrets are owned and mutated by the CRUD
//! layer; the monitor only reads point-in-time snapshots through these
//! traits.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::error::CommonError;
use vault::SealedSecret;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct App {
    pub id: String,
    pub company_id: String,
    pub name: String,
    /// Absence of a store URL means "not tracked on that store" — a valid,
    /// expected state.
    #[serde(default)]
    pub android_store_url: Option<String>,
    #[serde(default)]
    pub ios_store_url: Option<String>,
}

/// The closed set of per-company secret slots. At most one secret exists per
/// (company, type); a newer write replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecretType {
    AndroidServiceAccount,
    IosPrivateKey,
    IosIssuerId,
    IosKeyId,
}

impl SecretType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecretType::AndroidServiceAccount => "android_service_account",
            SecretType::IosPrivateKey => "ios_private_key",
            SecretType::IosIssuerId => "ios_issuer_id",
            SecretType::IosKeyId => "ios_key_id",
        }
    }
}

impl std::fmt::Display for SecretType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecretType {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "android_service_account" => Ok(SecretType::AndroidServiceAccount),
            "ios_private_key" => Ok(SecretType::IosPrivateKey),
            "ios_issuer_id" => Ok(SecretType::IosIssuerId),
            "ios_key_id" => Ok(SecretType::IosKeyId),
            _ => Err(CommonError::Repository {
                msg: format!("Invalid secret_type: {s}"),
                source: None,
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanySecret {
    pub company_id: String,
    pub secret_type: SecretType,
    pub ciphertext: SealedSecret,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait CompanyRepositoryLike: Send + Sync {
    async fn list_companies(&self) -> Result<Vec<Company>, CommonError>;

    async fn list_apps_by_company(&self, company_id: &str) -> Result<Vec<App>, CommonError>;
}

#[async_trait]
pub trait SecretRepositoryLike: Send + Sync {
    async fn get_secret(
        &self,
        company_id: &str,
        secret_type: SecretType,
    ) -> Result<Option<CompanySecret>, CommonError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_type_string_roundtrip() {
        for secret_type in [
            SecretType::AndroidServiceAccount,
            SecretType::IosPrivateKey,
            SecretType::IosIssuerId,
            SecretType::IosKeyId,
        ] {
            assert_eq!(
                SecretType::from_str(secret_type.as_str()).unwrap(),
                secret_type
            );
        }
        assert!(SecretType::from_str("slack_webhook").is_err());
    }
}
