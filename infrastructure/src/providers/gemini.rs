//! Provider C: Gemini `generateContent`.

use crate::config::FileGeminiConfig;
use crate::credentials::Credential;
use crate::http::{non_blank, send_json};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use supportbot_application::{AnswerProvider, AnswerRequest, ProviderError};
use supportbot_domain::{PromptTemplate, ProviderKind};
use tracing::debug;

pub struct GeminiProvider {
    client: Client,
    credential: Credential,
    config: FileGeminiConfig,
}

impl GeminiProvider {
    pub fn new(client: Client, config: FileGeminiConfig) -> Self {
        let credential = Credential::new(config.api_key_env.clone(), config.api_key.clone());
        Self {
            client,
            credential,
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl AnswerProvider for GeminiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    async fn answer(&self, request: AnswerRequest<'_>) -> Result<String, ProviderError> {
        let api_key = self.credential.resolve().ok_or_else(|| {
            ProviderError::NotConfigured(format!("{} is not set", self.credential.env_var()))
        })?;

        let question = request.question.content();
        let prompt = match request.context {
            Some(context) => PromptTemplate::generation_with_context(question, context),
            None => PromptTemplate::generation_question(question),
        };
        debug!(model = %self.config.model, grounded = request.context.is_some(), "Calling Gemini");

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: &prompt.user,
                }],
            }],
        };
        let response = send_json(
            self.client
                .post(self.endpoint())
                .query(&[("key", api_key.as_str())])
                .json(&body),
        )
        .await?;

        parse_response(response)
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Option<Vec<Candidate>>,
    #[serde(default, rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct PromptFeedback {
    #[serde(default, rename = "blockReason")]
    block_reason: Option<String>,
}

/// `candidates[0].content.parts[*].text` joined, trimmed.
pub(crate) fn parse_response(body: Value) -> Result<String, ProviderError> {
    let response: GenerateResponse = serde_json::from_value(body)
        .map_err(|e| ProviderError::Malformed(format!("generateContent response: {}", e)))?;

    let Some(candidates) = response.candidates else {
        let reason = response
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .unwrap_or_else(|| "no candidates".to_string());
        return Err(ProviderError::Malformed(reason));
    };

    let content = candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .ok_or(ProviderError::Empty)?;
    let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
    non_blank(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use supportbot_domain::{Question, SessionId};

    #[test]
    fn test_parse_joins_parts() {
        let body = json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "The Pacific "}, {"text": "is largest. "}]},
                "finishReason": "STOP"
            }]
        });
        assert_eq!(parse_response(body).unwrap(), "The Pacific is largest.");
    }

    #[test]
    fn test_blocked_prompt_is_malformed() {
        let body = json!({"promptFeedback": {"blockReason": "SAFETY"}});
        assert_eq!(
            parse_response(body),
            Err(ProviderError::Malformed("SAFETY".to_string()))
        );
    }

    #[test]
    fn test_empty_candidates() {
        assert_eq!(parse_response(json!({"candidates": []})), Err(ProviderError::Empty));
        assert_eq!(
            parse_response(json!({"candidates": [{"content": {"parts": [{"text": "  "}]}}]})),
            Err(ProviderError::Empty)
        );
    }

    #[test]
    fn test_endpoint_includes_model() {
        let provider = GeminiProvider::new(Client::new(), FileGeminiConfig::default());
        assert_eq!(
            provider.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[tokio::test]
    async fn test_missing_key_is_not_configured() {
        let config = FileGeminiConfig {
            api_key_env: "SUPPORTBOT_TEST_UNSET_GEMINI_KEY".to_string(),
            ..Default::default()
        };
        let provider = GeminiProvider::new(Client::new(), config);
        let question = Question::try_new("hello").unwrap();
        let session = SessionId::ephemeral();

        let result = provider.answer(AnswerRequest::new(&question, &session)).await;
        assert!(matches!(result, Err(ProviderError::NotConfigured(_))));
    }
}
