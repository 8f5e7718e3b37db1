//! JSONL file store for chat records.
//!
//! One [`ChatRecord`] per line. Writes append; reads scan the whole file and
//! skip lines that fail to parse, so a truncated last line never hides the
//! rest of the history.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use supportbot_application::{ChatHistoryRepository, HistoryError};
use supportbot_domain::chat::newest_first;
use supportbot_domain::{ChatRecord, UserId};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, warn};

pub struct JsonlChatHistory {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonlChatHistory {
    /// Store backed by `path`; the file and its parents are created on first write.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<ChatRecord>, HistoryError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<ChatRecord>(line) {
                Ok(record) => records.push(record),
                Err(e) => warn!(
                    "Skipping unreadable history line {} in {}: {}",
                    idx + 1,
                    self.path.display(),
                    e
                ),
            }
        }
        Ok(records)
    }
}

#[async_trait]
impl ChatHistoryRepository for JsonlChatHistory {
    async fn append(&self, record: &ChatRecord) -> Result<(), HistoryError> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let _guard = self.lock.lock().await;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        debug!(record = %record.id, path = %self.path.display(), "Stored chat record");
        Ok(())
    }

    async fn list_for_user(
        &self,
        user: &UserId,
        limit: Option<usize>,
    ) -> Result<Vec<ChatRecord>, HistoryError> {
        let mut records: Vec<ChatRecord> = {
            let _guard = self.lock.lock().await;
            self.read_all().await?
        }
        .into_iter()
        .filter(|r| &r.user == user)
        .collect();

        newest_first(&mut records);
        if let Some(limit) = limit {
            records.truncate(limit);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use supportbot_domain::{Answer, AnswerSource, ProviderKind, Question};

    fn record(user: &str, question: &str, minute: u32) -> ChatRecord {
        ChatRecord::at(
            UserId::try_new(user).unwrap(),
            Question::try_new(question).unwrap(),
            Answer::new(
                format!("answer to {}", question),
                AnswerSource::Provider(ProviderKind::Gemini),
            ),
            Utc.with_ymd_and_hms(2024, 3, 10, 9, minute, 0).unwrap(),
        )
    }

    fn alice() -> UserId {
        UserId::try_new("alice").unwrap()
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlChatHistory::new(dir.path().join("none.jsonl"));
        assert!(store.list_for_user(&alice(), None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_round_trip_newest_first_per_user() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlChatHistory::new(dir.path().join("nested").join("history.jsonl"));

        store.append(&record("alice", "first", 1)).await.unwrap();
        store.append(&record("bob", "bob's", 2)).await.unwrap();
        store.append(&record("alice", "third", 3)).await.unwrap();
        store.append(&record("alice", "second", 2)).await.unwrap();

        let records = store.list_for_user(&alice(), None).await.unwrap();
        let questions: Vec<_> = records.iter().map(|r| r.question.as_str()).collect();
        assert_eq!(questions, vec!["third", "second", "first"]);
        assert!(records.iter().all(|r| r.user == alice()));
        assert_eq!(records[0].source, AnswerSource::Provider(ProviderKind::Gemini));

        let limited = store.list_for_user(&alice(), Some(1)).await.unwrap();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].question, "third");
    }

    #[tokio::test]
    async fn test_corrupt_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.jsonl");
        let store = JsonlChatHistory::new(&path);

        store.append(&record("alice", "kept", 5)).await.unwrap();
        let mut raw = std::fs::read_to_string(&path).unwrap();
        raw.push_str("{\"id\": \"truncated\n");
        std::fs::write(&path, raw).unwrap();

        let records = store.list_for_user(&alice(), None).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, "kept");
    }
}
