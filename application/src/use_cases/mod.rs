//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod ask_question;
pub mod chat_history;
pub mod resolve_answer;
