//! Answer value object

use super::provider::ProviderKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a resolved answer came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum AnswerSource {
    /// A provider answered the bare question.
    Provider(ProviderKind),
    /// A provider answered with search results injected as context.
    ContextualProvider(ProviderKind),
    /// Raw search results formatted as the answer.
    SearchDigest,
    /// A rule of the local responder (rule name).
    LocalRule(String),
}

impl fmt::Display for AnswerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerSource::Provider(kind) => write!(f, "{}", kind),
            AnswerSource::ContextualProvider(kind) => write!(f, "{}+search", kind),
            AnswerSource::SearchDigest => f.write_str("search"),
            AnswerSource::LocalRule(rule) => write!(f, "local:{}", rule),
        }
    }
}

/// The single answer body returned for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    body: String,
    source: AnswerSource,
}

impl Answer {
    pub fn new(body: impl Into<String>, source: AnswerSource) -> Self {
        Self {
            body: body.into(),
            source,
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn source(&self) -> &AnswerSource {
        &self.source
    }

    pub fn into_body(self) -> String {
        self.body
    }

    /// Whether the answer was produced by a networked source.
    pub fn is_remote(&self) -> bool {
        !matches!(self.source, AnswerSource::LocalRule(_))
    }
}
