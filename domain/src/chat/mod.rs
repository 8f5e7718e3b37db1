//! Chat records. One resolved question/answer pair owned by a user.

use crate::core::answer::{Answer, AnswerSource};
use crate::core::identity::UserId;
use crate::core::question::Question;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted question/answer pair (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRecord {
    pub id: Uuid,
    pub user: UserId,
    pub question: String,
    pub answer: String,
    pub source: AnswerSource,
    pub created_at: DateTime<Utc>,
}

impl ChatRecord {
    /// Record an answer for a question, stamped with the current time.
    pub fn new(user: UserId, question: Question, answer: Answer) -> Self {
        Self::at(user, question, answer, Utc::now())
    }

    pub fn at(user: UserId, question: Question, answer: Answer, created_at: DateTime<Utc>) -> Self {
        let source = answer.source().clone();
        Self {
            id: Uuid::new_v4(),
            user,
            question: question.into_content(),
            answer: answer.into_body(),
            source,
            created_at,
        }
    }
}

/// Sort newest first.
pub fn newest_first(records: &mut [ChatRecord]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
