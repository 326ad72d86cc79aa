pub mod logic;
pub mod types;

pub use logic::{
    AppStoreClient, AppStoreConnectCredentials, PlayStoreClient, ServiceAccountKey,
    StoreClientError, StoreClientLike,
};
pub use types::{ReleaseInfo, StoreKind};
