//! Answer provider port
//!
//! Defines the uniform capability every external answer source implements.
//! Adapters report *why* an attempt failed through [`ProviderError`]; the
//! resolution chain only ever sees the collapsed `Option` from
//! [`AnswerProvider::try_answer`].

use async_trait::async_trait;
use supportbot_domain::util::preview;
use supportbot_domain::{ContextBlock, ProviderKind, Question, SessionId};
use thiserror::Error;
use tracing::{debug, warn};

/// Why a remote attempt produced no answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("not configured: {0}")]
    NotConfigured(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("rate limited")]
    RateLimited,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("empty response")]
    Empty,
}

impl ProviderError {
    /// Missing credentials are expected in normal operation.
    pub fn is_not_configured(&self) -> bool {
        matches!(self, ProviderError::NotConfigured(_))
    }

    /// Short category label for structured logs.
    pub fn category(&self) -> &'static str {
        match self {
            ProviderError::NotConfigured(_) => "not_configured",
            ProviderError::Transport(_) => "transport",
            ProviderError::Timeout => "timeout",
            ProviderError::RateLimited => "rate_limited",
            ProviderError::Api { .. } => "api",
            ProviderError::Malformed(_) => "malformed",
            ProviderError::Empty => "empty",
        }
    }
}

/// Everything an adapter needs for one attempt.
#[derive(Debug, Clone, Copy)]
pub struct AnswerRequest<'a> {
    pub question: &'a Question,
    /// Search results to ground on; only set for context-capable providers.
    pub context: Option<&'a ContextBlock>,
    /// Intent session of the requesting user.
    pub session: &'a SessionId,
}

impl<'a> AnswerRequest<'a> {
    pub fn new(question: &'a Question, session: &'a SessionId) -> Self {
        Self {
            question,
            context: None,
            session,
        }
    }

    pub fn with_context(mut self, context: &'a ContextBlock) -> Self {
        self.context = Some(context);
        self
    }
}

/// An external answer source.
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Whether the provider can take part in the search-context retry.
    fn supports_context(&self) -> bool {
        true
    }

    /// One bounded attempt. Non-blank text on success.
    async fn answer(&self, request: AnswerRequest<'_>) -> Result<String, ProviderError>;

    /// Same attempt, with every failure logged and collapsed to `None`.
    async fn try_answer(&self, request: AnswerRequest<'_>) -> Option<String> {
        match self.answer(request).await {
            Ok(text) if !text.trim().is_empty() => Some(text),
            Ok(_) => {
                warn!(provider = %self.kind(), category = "empty", "Provider returned blank text");
                None
            }
            Err(e) if e.is_not_configured() => {
                debug!(provider = %self.kind(), "Skipping provider: {}", e);
                None
            }
            Err(e) => {
                warn!(
                    provider = %self.kind(),
                    category = e.category(),
                    question = %preview(request.question.content(), 50),
                    "Provider attempt failed: {}",
                    e
                );
                None
            }
        }
    }
}
