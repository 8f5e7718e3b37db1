//! Application layer for supportbot
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ResolutionParams;
pub use ports::{
    answer_provider::{AnswerProvider, AnswerRequest, ProviderError},
    chat_history::{ChatHistoryRepository, HistoryError},
    context_retriever::{ContextRetriever, DEFAULT_SEARCH_RESULTS, NoContextRetriever},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
};
pub use use_cases::ask_question::{
    AskQuestionError, AskQuestionInput, AskQuestionOutput, AskQuestionUseCase,
};
pub use use_cases::chat_history::{ChatHistoryError, ChatHistoryUseCase};
pub use use_cases::resolve_answer::ResolveAnswerUseCase;
