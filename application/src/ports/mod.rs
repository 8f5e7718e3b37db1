//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod answer_provider;
pub mod chat_history;
pub mod context_retriever;
pub mod conversation_logger;
