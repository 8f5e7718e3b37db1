//! Outbound HTTP configuration (`[http]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHttpConfig {
    /// Upper bound for every outbound request.
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for FileHttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: concat!("supportbot/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FileHttpConfig {
    /// Zero falls back to the default so requests stay bounded.
    pub fn timeout(&self) -> Duration {
        match self.timeout_seconds {
            0 => Duration::from_secs(Self::default().timeout_seconds),
            secs => Duration::from_secs(secs),
        }
    }
}
