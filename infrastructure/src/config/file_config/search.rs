//! Web search configuration (`[search]` section)

use serde::{Deserialize, Serialize};

/// Search scope used when none is configured.
pub const DEFAULT_SEARCH_ENGINE_ID: &str = "017576662512468239146:omuauf_lfve";

/// Google Custom Search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// Run the search-augmented retry for freshness-flagged questions.
    pub enabled: bool,
    pub api_key_env: String,
    pub api_key: Option<String>,
    pub engine_id_env: String,
    pub engine_id: Option<String>,
    pub base_url: String,
    /// Results requested per search (the API accepts 1..=10).
    pub results: usize,
    /// Safe-search level: "off", "medium" or "high".
    pub safe: String,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key_env: "GOOGLE_SEARCH_API_KEY".to_string(),
            api_key: None,
            engine_id_env: "GOOGLE_SEARCH_ENGINE_ID".to_string(),
            engine_id: None,
            base_url: "https://www.googleapis.com".to_string(),
            results: 5,
            safe: "medium".to_string(),
        }
    }
}
