//! Chat history storage.
//!
//! Provides [`JsonlChatHistory`], an append-only JSONL file implementing the
//! [`ChatHistoryRepository`](supportbot_application::ChatHistoryRepository) port.

mod jsonl;

pub use jsonl::JsonlChatHistory;
