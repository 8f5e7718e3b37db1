//! Infrastructure layer for supportbot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod credentials;
pub mod history;
pub mod http;
pub mod logging;
pub mod providers;
pub mod search;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigLoader, FileConfig, Severity};
pub use credentials::Credential;
pub use history::JsonlChatHistory;
pub use http::build_client;
pub use logging::JsonlConversationLogger;
pub use providers::{
    AnthropicProvider, DialogflowProvider, GeminiProvider, OpenAiProvider, build_providers,
};
pub use search::GoogleSearchRetriever;
