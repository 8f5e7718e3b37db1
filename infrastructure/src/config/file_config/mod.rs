//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every field has a default, so a partial file (or none at all) is valid.

mod history;
mod http;
mod logging;
mod providers;
mod resolution;
mod search;

pub use history::FileHistoryConfig;
pub use http::FileHttpConfig;
pub use logging::FileLoggingConfig;
pub use providers::{
    FileAnthropicConfig, FileDialogflowConfig, FileGeminiConfig, FileOpenAiConfig,
    FileProvidersConfig,
};
pub use resolution::FileResolutionConfig;
pub use search::{DEFAULT_SEARCH_ENGINE_ID, FileSearchConfig};

use super::issue::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use supportbot_domain::MAX_PRESENTED_RESULTS;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Answer providers and the order they are tried in
    pub providers: FileProvidersConfig,
    /// Web search used for freshness-flagged questions
    pub search: FileSearchConfig,
    /// Resolution chain knobs
    pub resolution: FileResolutionConfig,
    /// Shared HTTP client settings
    pub http: FileHttpConfig,
    /// Chat history store
    pub history: FileHistoryConfig,
    /// Log files
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let (kinds, unknown) = self.providers.parse_order();
        for name in unknown {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::UnknownProvider { name: name.clone() },
                format!("providers.order: unknown provider '{}' is ignored", name),
            ));
        }
        for name in self.providers.duplicate_names() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::DuplicateProvider { name: name.clone() },
                format!(
                    "providers.order: '{}' is listed more than once, only the first entry is used",
                    name
                ),
            ));
        }
        if kinds.is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyProviderOrder,
                "providers.order is empty; only local answers will be given",
            ));
        }

        if self.http.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout,
                format!(
                    "http.timeout_seconds cannot be 0, using {}s",
                    FileHttpConfig::default().timeout_seconds
                ),
            ));
        }

        if !(1..=10).contains(&self.search.results) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::SearchResultsOutOfRange {
                    value: self.search.results,
                },
                format!(
                    "search.results must be between 1 and 10 (got {}), value is clamped",
                    self.search.results
                ),
            ));
        }

        let presented = self.resolution.presented_results;
        if !(1..=MAX_PRESENTED_RESULTS).contains(&presented) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::PresentedResultsOutOfRange { value: presented },
                format!(
                    "resolution.presented_results must be between 1 and {} (got {}), value is clamped",
                    MAX_PRESENTED_RESULTS, presented
                ),
            ));
        }

        let safe = self.search.safe.to_lowercase();
        if !["off", "medium", "high", "active"].contains(&safe.as_str()) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidSafeSearch {
                    value: self.search.safe.clone(),
                },
                format!(
                    "search.safe: unknown value '{}', expected off, medium or high",
                    self.search.safe
                ),
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::issue::Severity;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[providers]
order = ["gemini", "anthropic"]

[providers.anthropic]
api_key_env = "MY_CLAUDE_KEY"
max_tokens = 512

[search]
enabled = false
engine_id = "custom-cx"

[resolution]
presented_results = 2
extra_freshness_keywords = ["election"]

[http]
timeout_seconds = 10

[history]
path = "/tmp/supportbot/history.jsonl"
default_user = "alice"

[logging]
conversation_log = "/tmp/supportbot/events.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.providers.order, vec!["gemini", "anthropic"]);
        assert_eq!(config.providers.anthropic.api_key_env, "MY_CLAUDE_KEY");
        assert_eq!(config.providers.anthropic.max_tokens, 512);
        assert_eq!(config.providers.anthropic.api_version, "2023-06-01");
        assert!(!config.search.enabled);
        assert_eq!(config.search.engine_id.as_deref(), Some("custom-cx"));
        assert_eq!(config.resolution.presented_results, 2);
        assert_eq!(config.http.timeout_seconds, 10);
        assert_eq!(config.history.default_user, "alice");
        assert!(config.logging.conversation_log.is_some());
        assert!(config.logging.log_dir.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.providers.order.len(), 4);
        assert!(config.search.enabled);
        assert_eq!(config.search.results, 5);
        assert_eq!(config.search.safe, "medium");
        assert_eq!(config.resolution.presented_results, 3);
        assert_eq!(config.http.timeout_seconds, 30);
        assert_eq!(config.history.default_user, "guest");
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_duplicate_providers() {
        let config: FileConfig = toml::from_str(
            r#"
[providers]
order = ["anthropic", "openai", "anthropic"]
"#,
        )
        .unwrap();

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::DuplicateProvider {
                name: "anthropic".to_string()
            }
        );
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_validate_reports_problems() {
        let config: FileConfig = toml::from_str(
            r#"
[providers]
order = ["watson"]

[http]
timeout_seconds = 0

[search]
results = 25
safe = "strict"

[resolution]
presented_results = 5
"#,
        )
        .unwrap();

        let issues = config.validate();
        let codes: Vec<_> = issues.iter().map(|i| i.code.clone()).collect();
        assert!(codes.contains(&ConfigIssueCode::UnknownProvider {
            name: "watson".to_string()
        }));
        assert!(codes.contains(&ConfigIssueCode::EmptyProviderOrder));
        assert!(codes.contains(&ConfigIssueCode::ZeroTimeout));
        assert!(codes.contains(&ConfigIssueCode::SearchResultsOutOfRange { value: 25 }));
        assert!(codes.contains(&ConfigIssueCode::PresentedResultsOutOfRange { value: 5 }));
        assert!(codes.contains(&ConfigIssueCode::InvalidSafeSearch {
            value: "strict".to_string()
        }));
        assert!(
            issues
                .iter()
                .any(|i| i.severity == Severity::Error && i.code == ConfigIssueCode::ZeroTimeout)
        );
    }
}
