//! Domain layer for supportbot
//!
//! This crate contains the value objects and the pure logic of answer
//! resolution. It has no dependencies on network, storage or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! - **Question / Answer**: one question in, exactly one non-empty answer out
//! - **Freshness**: keyword classification that gates the web-search retry
//! - **Search**: ranked results rendered as prompt context or as a digest
//! - **Local Responder**: ordered keyword rule table, the terminal fallback

pub mod chat;
pub mod core;
pub mod freshness;
pub mod prompt;
pub mod responder;
pub mod search;
pub mod util;

// Re-export commonly used types
pub use chat::ChatRecord;
pub use core::{
    answer::{Answer, AnswerSource},
    error::DomainError,
    identity::{SessionId, UserId},
    provider::ProviderKind,
    question::Question,
};
pub use freshness::FreshnessClassifier;
pub use prompt::{Prompt, PromptTemplate};
pub use responder::{LocalAnswer, LocalResponder, ThreadRngPicker, VariantPicker};
pub use search::{ContextBlock, MAX_PRESENTED_RESULTS, SearchResult, search_digest};
