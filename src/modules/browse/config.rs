use std::time::Duration;

/// Tunables for the browsing core, with defaults matching the Jikan v4
/// public policy and the UI's debounce behavior.
#[derive(Debug, Clone)]
pub struct BrowseConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Sustained request rate (Jikan allows roughly 1/sec with short bursts).
    pub requests_per_second: f64,
    pub burst: u32,
    /// Quiescence interval before a changed filter snapshot is acted on.
    pub debounce: Duration,
    /// Process-lifetime TTL for search and list results.
    pub search_ttl: Duration,
    /// TTL for persisted detail aggregates.
    pub detail_ttl: Duration,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.jikan.moe/v4".to_string(),
            user_agent: "aniview/0.1".to_string(),
            timeout_secs: 30,
            requests_per_second: 1.0,
            burst: 3,
            debounce: Duration::from_millis(500),
            search_ttl: Duration::from_secs(5 * 60),
            detail_ttl: Duration::from_secs(60 * 60),
        }
    }
}
