//! Logging configuration (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL conversation event log; disabled when unset.
    pub conversation_log: Option<PathBuf>,
    /// Directory for daily-rotated diagnostic logs; disabled when unset.
    pub log_dir: Option<PathBuf>,
}
