//! Provider configuration from TOML (`[providers]` section)

use serde::{Deserialize, Serialize};
use supportbot_domain::ProviderKind;

/// Anthropic Messages API configuration (provider A).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnthropicConfig {
    /// Environment variable consulted first for the API key.
    pub api_key_env: String,
    /// Settings fallback when the environment variable is unset.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    /// `anthropic-version` header.
    pub api_version: String,
}

impl Default for FileAnthropicConfig {
    fn default() -> Self {
        Self {
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.anthropic.com".to_string(),
            model: "claude-3-5-sonnet-20241022".to_string(),
            max_tokens: 1000,
            temperature: 0.7,
            api_version: "2023-06-01".to_string(),
        }
    }
}

/// OpenAI Chat Completions configuration (provider B).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    pub api_key_env: String,
    pub api_key: Option<String>,
    /// Base URL (can be pointed at a compatible gateway).
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-4-turbo-preview".to_string(),
            max_tokens: 1000,
            temperature: 0.7,
        }
    }
}

/// Gemini `generateContent` configuration (provider C).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    pub api_key_env: String,
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GOOGLE_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-pro".to_string(),
        }
    }
}

/// Dialogflow ES `detectIntent` configuration (provider D).
///
/// `api_key` holds an OAuth bearer access token for the agent's project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDialogflowConfig {
    pub project_id_env: String,
    pub project_id: Option<String>,
    pub api_key_env: String,
    pub api_key: Option<String>,
    pub base_url: String,
    pub language_code: String,
}

impl Default for FileDialogflowConfig {
    fn default() -> Self {
        Self {
            project_id_env: "DIALOGFLOW_PROJECT_ID".to_string(),
            project_id: None,
            api_key_env: "DIALOGFLOW_ACCESS_TOKEN".to_string(),
            api_key: None,
            base_url: "https://dialogflow.googleapis.com".to_string(),
            language_code: "en-US".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Provider names in the order they are tried.
    pub order: Vec<String>,
    pub anthropic: FileAnthropicConfig,
    pub openai: FileOpenAiConfig,
    pub gemini: FileGeminiConfig,
    pub dialogflow: FileDialogflowConfig,
}

impl Default for FileProvidersConfig {
    fn default() -> Self {
        Self {
            order: ProviderKind::DEFAULT_ORDER
                .iter()
                .map(|k| k.as_str().to_string())
                .collect(),
            anthropic: FileAnthropicConfig::default(),
            openai: FileOpenAiConfig::default(),
            gemini: FileGeminiConfig::default(),
            dialogflow: FileDialogflowConfig::default(),
        }
    }
}

impl FileProvidersConfig {
    /// Parse `order` into provider kinds, returning unknown names separately.
    /// Duplicates keep their first position.
    pub fn parse_order(&self) -> (Vec<ProviderKind>, Vec<String>) {
        let mut kinds = Vec::new();
        let mut unknown = Vec::new();
        for name in &self.order {
            match name.parse::<ProviderKind>() {
                Ok(kind) if !kinds.contains(&kind) => kinds.push(kind),
                Ok(_) => {}
                Err(_) => unknown.push(name.clone()),
            }
        }
        (kinds, unknown)
    }

    /// Entries of `order` naming a provider already listed earlier.
    pub fn duplicate_names(&self) -> Vec<String> {
        let mut seen = Vec::new();
        let mut duplicates = Vec::new();
        for name in &self.order {
            if let Ok(kind) = name.parse::<ProviderKind>() {
                if seen.contains(&kind) {
                    duplicates.push(name.clone());
                } else {
                    seen.push(kind);
                }
            }
        }
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let config = FileProvidersConfig::default();
        assert_eq!(
            config.order,
            vec!["anthropic", "openai", "gemini", "dialogflow"]
        );
        let (kinds, unknown) = config.parse_order();
        assert_eq!(kinds, ProviderKind::DEFAULT_ORDER.to_vec());
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_parse_order_skips_unknown_and_duplicates() {
        let config = FileProvidersConfig {
            order: vec![
                "gemini".to_string(),
                "watson".to_string(),
                "claude".to_string(),
                "gemini".to_string(),
            ],
            ..Default::default()
        };
        let (kinds, unknown) = config.parse_order();
        assert_eq!(kinds, vec![ProviderKind::Gemini, ProviderKind::Anthropic]);
        assert_eq!(unknown, vec!["watson"]);
        assert_eq!(config.duplicate_names(), vec!["gemini"]);
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: FileProvidersConfig = toml::from_str(
            r#"
[openai]
model = "gpt-4o-mini"
base_url = "http://localhost:8080"
"#,
        )
        .unwrap();
        assert_eq!(config.openai.model, "gpt-4o-mini");
        assert_eq!(config.openai.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.openai.max_tokens, 1000);
        assert_eq!(config.anthropic.model, "claude-3-5-sonnet-20241022");
        assert_eq!(config.dialogflow.language_code, "en-US");
    }
}
