use chrono::{DateTime, Utc};
use serde::Serialize;

/// Mobile application distribution platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    Android,
    Ios,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Android => "android",
            StoreKind::Ios => "ios",
        }
    }
}

impl std::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The currently published production release of one app on one store.
/// Produced fresh on every check; never cached or persisted by this crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleaseInfo {
    pub store: StoreKind,
    pub app_id: String,
    pub bundle_id: Option<String>,
    /// Human-readable version string. Empty when the store-side name did not
    /// match the expected pattern; `code` is still authoritative then.
    pub semantic: String,
    /// The store's monotonically increasing numeric build identifier.
    /// Zero when the store-side build number could not be parsed.
    pub code: i64,
    pub released_at: Option<DateTime<Utc>>,
}
