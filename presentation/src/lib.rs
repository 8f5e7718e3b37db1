//! Presentation layer for supportbot
//!
//! This crate contains CLI definitions, output formatters,
//! progress indication, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplCommand};
pub use cli::commands::{Cli, Command, join_question};
pub use output::console::ConsoleFormatter;
pub use progress::ResolutionSpinner;
