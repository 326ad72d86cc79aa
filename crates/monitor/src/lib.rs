pub mod logic;
pub mod repository;
pub mod service;
pub mod subsystem;

pub use logic::round::RoundSummary;
pub use logic::{HttpStoreClientFactory, StoreClientFactoryLike};
pub use service::{MonitorConfig, MonitorService, MonitorServiceParams};
