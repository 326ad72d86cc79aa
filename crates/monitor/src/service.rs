use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::info;
use vault::SecretVault;

use crate::logic::round::{self, RoundSummary};
use crate::logic::StoreClientFactoryLike;
use crate::repository::{CompanyRepositoryLike, SecretRepositoryLike};

/// Process-wide, read-only scheduling knobs, fixed for the process lifetime.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Companies processed simultaneously.
    pub max_concurrent_companies: usize,
    /// Apps processed simultaneously within one company.
    pub max_concurrent_apps: usize,
    /// Hard deadline for one app's store checks.
    pub app_check_timeout: Duration,
    /// Time between round starts.
    pub round_interval: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            max_concurrent_companies: 10,
            max_concurrent_apps: 5,
            app_check_timeout: Duration::from_secs(30),
            round_interval: Duration::from_secs(60 * 60),
        }
    }
}

impl MonitorConfig {
    /// Read overrides from the environment, falling back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_concurrent_companies: env_usize("MONITOR_MAX_CONCURRENT_COMPANIES")
                .unwrap_or(defaults.max_concurrent_companies),
            max_concurrent_apps: env_usize("MONITOR_MAX_CONCURRENT_APPS")
                .unwrap_or(defaults.max_concurrent_apps),
            app_check_timeout: env_secs("MONITOR_APP_CHECK_TIMEOUT_SECS")
                .unwrap_or(defaults.app_check_timeout),
            round_interval: env_secs("MONITOR_ROUND_INTERVAL_SECS")
                .unwrap_or(defaults.round_interval),
        }
    }
}

fn env_usize(key: &str) -> Option<usize> {
    std::env::var(key).ok()?.parse().ok()
}

fn env_secs(key: &str) -> Option<Duration> {
    Some(Duration::from_secs(std::env::var(key).ok()?.parse().ok()?))
}

/// Parameters for constructing a MonitorService.
pub struct MonitorServiceParams {
    pub companies: Arc<dyn CompanyRepositoryLike>,
    pub secrets: Arc<dyn SecretRepositoryLike>,
    pub vault: Arc<SecretVault>,
    pub clients: Arc<dyn StoreClientFactoryLike>,
    pub config: MonitorConfig,
}

/// The hourly release monitor. Reads collaborator snapshots, decrypts
/// credentials just in time, and fans store checks out under bounded
/// concurrency. Holds no state across rounds.
#[derive(Clone)]
pub struct MonitorService {
    pub companies: Arc<dyn CompanyRepositoryLike>,
    pub secrets: Arc<dyn SecretRepositoryLike>,
    pub vault: Arc<SecretVault>,
    pub clients: Arc<dyn StoreClientFactoryLike>,
    pub config: MonitorConfig,
}

impl MonitorService {
    pub fn new(params: MonitorServiceParams) -> Self {
        Self {
            companies: params.companies,
            secrets: params.secrets,
            vault: params.vault,
            clients: params.clients,
            config: params.config,
        }
    }

    /// Run monitoring rounds until `cancel` fires: one round immediately,
    /// then one per configured interval. Blocks for the process lifetime.
    pub async fn run(&self, cancel: CancellationToken) {
        let mut interval = tokio::time::interval(self.config.round_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("release monitor stopping");
                    return;
                }
                _ = interval.tick() => {}
            }
            self.run_round(&cancel).await;
        }
    }

    /// Execute one complete round across all companies and their apps.
    pub async fn run_round(&self, cancel: &CancellationToken) -> RoundSummary {
        round::run_round(self, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = MonitorConfig::default();
        assert_eq!(config.max_concurrent_companies, 10);
        assert_eq!(config.max_concurrent_apps, 5);
        assert_eq!(config.app_check_timeout, Duration::from_secs(30));
        assert_eq!(config.round_interval, Duration::from_secs(3600));
    }
}
