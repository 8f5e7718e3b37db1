//! Configuration file loading for supportbot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SUPPORTBOT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./supportbot.toml` or `./.supportbot.toml`
//! 4. Global: `$XDG_CONFIG_HOME/supportbot/config.toml`
//! 5. Default values
//!
//! Provider credentials are not read here: adapters resolve them per request
//! (see [`crate::credentials`]).

mod file_config;
mod issue;
mod loader;

pub use file_config::{
    DEFAULT_SEARCH_ENGINE_ID, FileAnthropicConfig, FileConfig, FileDialogflowConfig,
    FileGeminiConfig, FileHistoryConfig, FileHttpConfig, FileLoggingConfig, FileOpenAiConfig,
    FileProvidersConfig, FileResolutionConfig, FileSearchConfig,
};
pub use issue::{ConfigIssue, ConfigIssueCode, Severity};
pub use loader::{ConfigLoader, ENV_PREFIX};
