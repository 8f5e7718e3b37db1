//! Chat history port
//!
//! Persistence boundary for resolved question/answer pairs.

use async_trait::async_trait;
use supportbot_domain::{ChatRecord, UserId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("history storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("history serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("history store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait ChatHistoryRepository: Send + Sync {
    /// Persist one record.
    async fn append(&self, record: &ChatRecord) -> Result<(), HistoryError>;

    /// Records of one user, newest first, at most `limit` when given.
    async fn list_for_user(
        &self,
        user: &UserId,
        limit: Option<usize>,
    ) -> Result<Vec<ChatRecord>, HistoryError>;
}
