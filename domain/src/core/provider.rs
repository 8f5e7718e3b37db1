//! Answer provider identity

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// External answer sources, in their default priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Anthropic Messages API
    Anthropic,
    /// OpenAI Chat Completions API
    OpenAi,
    /// Google Gemini `generateContent`
    Gemini,
    /// Dialogflow intent detection
    Dialogflow,
}

impl ProviderKind {
    /// Default priority order used when the configuration does not override it.
    pub const DEFAULT_ORDER: [ProviderKind; 4] = [
        ProviderKind::Anthropic,
        ProviderKind::OpenAi,
        ProviderKind::Gemini,
        ProviderKind::Dialogflow,
    ];

    /// Configuration key of this provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
            ProviderKind::Dialogflow => "dialogflow",
        }
    }

    /// Human readable name for logs and console output.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "Claude",
            ProviderKind::OpenAi => "GPT-4",
            ProviderKind::Gemini => "Gemini",
            ProviderKind::Dialogflow => "Dialogflow",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "anthropic" | "claude" => Ok(ProviderKind::Anthropic),
            "openai" | "gpt" => Ok(ProviderKind::OpenAi),
            "gemini" | "google" => Ok(ProviderKind::Gemini),
            "dialogflow" => Ok(ProviderKind::Dialogflow),
            other => Err(format!("unknown provider '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("Claude".parse(), Ok(ProviderKind::Anthropic));
        assert_eq!("openai".parse(), Ok(ProviderKind::OpenAi));
        assert_eq!(" gemini ".parse(), Ok(ProviderKind::Gemini));
        assert!("bard".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_display_round_trips_config_key() {
        for kind in ProviderKind::DEFAULT_ORDER {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }
}
