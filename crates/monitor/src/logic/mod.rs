pub mod credentials;
pub mod round;

use std::sync::Arc;

use stores::{
    AppStoreClient, AppStoreConnectCredentials, PlayStoreClient, ServiceAccountKey,
    StoreClientError, StoreClientLike,
};

pub use credentials::{CompanyCredentials, load_company_credentials};
pub use round::RoundSummary;

/// Builds per-tenant store clients from decrypted credentials. The scheduler
/// only ever sees `StoreClientLike`, which keeps it store-agnostic and lets
/// tests substitute fakes.
pub trait StoreClientFactoryLike: Send + Sync {
    fn android_client(
        &self,
        key: &ServiceAccountKey,
    ) -> Result<Arc<dyn StoreClientLike>, StoreClientError>;

    fn ios_client(
        &self,
        credentials: &AppStoreConnectCredentials,
    ) -> Result<Arc<dyn StoreClientLike>, StoreClientError>;
}

/// Factory for the real HTTP-backed store clients.
#[derive(Debug, Clone, Default)]
pub struct HttpStoreClientFactory;

impl StoreClientFactoryLike for HttpStoreClientFactory {
    fn android_client(
        &self,
        key: &ServiceAccountKey,
    ) -> Result<Arc<dyn StoreClientLike>, StoreClientError> {
        Ok(Arc::new(PlayStoreClient::new(key.clone())))
    }

    fn ios_client(
        &self,
        credentials: &AppStoreConnectCredentials,
    ) -> Result<Arc<dyn StoreClientLike>, StoreClientError> {
        Ok(Arc::new(AppStoreClient::new(credentials)?))
    }
}
