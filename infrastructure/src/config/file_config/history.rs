//! Chat history configuration (`[history]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHistoryConfig {
    /// JSONL store; defaults to the platform data directory.
    pub path: Option<PathBuf>,
    /// User name when `--user` is not given.
    pub default_user: String,
}

impl Default for FileHistoryConfig {
    fn default() -> Self {
        Self {
            path: None,
            default_user: "guest".to_string(),
        }
    }
}

impl FileHistoryConfig {
    /// Configured path, else `<data_dir>/supportbot/history.jsonl`.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("supportbot").join("history.jsonl")))
    }

    /// REPL line history next to the chat history.
    pub fn repl_history_path(&self) -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("supportbot").join("repl_history.txt"))
    }
}
