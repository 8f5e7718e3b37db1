//! Chat History use case. Read back a user's past questions.

use crate::ports::chat_history::{ChatHistoryRepository, HistoryError};
use std::sync::Arc;
use supportbot_domain::{ChatRecord, DomainError, UserId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatHistoryError {
    #[error("{0}")]
    Invalid(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] HistoryError),
}

pub struct ChatHistoryUseCase {
    history: Arc<dyn ChatHistoryRepository>,
}

impl ChatHistoryUseCase {
    pub fn new(history: Arc<dyn ChatHistoryRepository>) -> Self {
        Self { history }
    }

    /// Records of `user`, newest first.
    pub async fn execute(
        &self,
        user: &str,
        limit: Option<usize>,
    ) -> Result<Vec<ChatRecord>, ChatHistoryError> {
        let user = UserId::try_new(user)?;
        let mut records = self.history.list_for_user(&user, limit).await?;
        // Adapters already sort; this keeps the contract independent of them.
        supportbot_domain::chat::newest_first(&mut records);
        if let Some(limit) = limit {
            records.truncate(limit);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use supportbot_domain::{Answer, AnswerSource, Question};

    struct Unsorted(Vec<ChatRecord>);

    #[async_trait]
    impl ChatHistoryRepository for Unsorted {
        async fn append(&self, _record: &ChatRecord) -> Result<(), HistoryError> {
            Ok(())
        }

        async fn list_for_user(
            &self,
            user: &UserId,
            _limit: Option<usize>,
        ) -> Result<Vec<ChatRecord>, HistoryError> {
            Ok(self.0.iter().filter(|r| &r.user == user).cloned().collect())
        }
    }

    fn record(user: &str, text: &str, minute: u32) -> ChatRecord {
        ChatRecord::at(
            UserId::try_new(user).unwrap(),
            Question::try_new(text).unwrap(),
            Answer::new("ok", AnswerSource::SearchDigest),
            Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn newest_first_and_limited() {
        let store = Unsorted(vec![
            record("alice", "first", 1),
            record("alice", "third", 3),
            record("bob", "other", 4),
            record("alice", "second", 2),
        ]);
        let use_case = ChatHistoryUseCase::new(Arc::new(store));

        let records = use_case.execute("alice", Some(2)).await.unwrap();

        let questions: Vec<_> = records.iter().map(|r| r.question.as_str()).collect();
        assert_eq!(questions, vec!["third", "second"]);
    }

    #[tokio::test]
    async fn blank_user_is_invalid() {
        let use_case = ChatHistoryUseCase::new(Arc::new(Unsorted(vec![])));
        let err = use_case.execute(" ", None).await.unwrap_err();
        assert!(matches!(err, ChatHistoryError::Invalid(_)));
    }
}
