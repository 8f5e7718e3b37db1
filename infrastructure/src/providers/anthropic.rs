//! Provider A: Anthropic Messages API.

use crate::config::FileAnthropicConfig;
use crate::credentials::Credential;
use crate::http::{non_blank, send_json};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use supportbot_application::{AnswerProvider, AnswerRequest, ProviderError};
use supportbot_domain::{Prompt, PromptTemplate, ProviderKind};
use tracing::debug;

pub struct AnthropicProvider {
    client: Client,
    credential: Credential,
    config: FileAnthropicConfig,
}

impl AnthropicProvider {
    pub fn new(client: Client, config: FileAnthropicConfig) -> Self {
        let credential = Credential::new(config.api_key_env.clone(), config.api_key.clone());
        Self {
            client,
            credential,
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'))
    }

    fn request_body<'a>(&'a self, prompt: &'a Prompt) -> MessagesRequest<'a> {
        MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            system: prompt.system.as_deref(),
            messages: vec![Message {
                role: "user",
                content: &prompt.user,
            }],
        }
    }
}

#[async_trait]
impl AnswerProvider for AnthropicProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Anthropic
    }

    async fn answer(&self, request: AnswerRequest<'_>) -> Result<String, ProviderError> {
        let api_key = self.credential.resolve().ok_or_else(|| {
            ProviderError::NotConfigured(format!("{} is not set", self.credential.env_var()))
        })?;

        let question = request.question.content();
        let prompt = match request.context {
            Some(context) => PromptTemplate::messages_with_context(question, context),
            None => PromptTemplate::messages_question(question),
        };
        debug!(model = %self.config.model, grounded = request.context.is_some(), "Calling Anthropic");

        let body = send_json(
            self.client
                .post(self.endpoint())
                .header("x-api-key", api_key)
                .header("anthropic-version", &self.config.api_version)
                .json(&self.request_body(&prompt)),
        )
        .await?;

        parse_response(body)
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// Text of the first content block, trimmed.
pub(crate) fn parse_response(body: Value) -> Result<String, ProviderError> {
    let response: MessagesResponse = serde_json::from_value(body)
        .map_err(|e| ProviderError::Malformed(format!("messages response: {}", e)))?;
    let first = response
        .content
        .into_iter()
        .next()
        .ok_or(ProviderError::Empty)?;
    let text = first
        .text
        .ok_or_else(|| ProviderError::Malformed("first content block has no text".to_string()))?;
    non_blank(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use supportbot_domain::{Question, SessionId};

    #[test]
    fn test_parse_first_block() {
        let body = json!({
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "content": [
                {"type": "text", "text": "  Paris is the capital.  "},
                {"type": "text", "text": "ignored"}
            ],
            "stop_reason": "end_turn"
        });
        assert_eq!(parse_response(body).unwrap(), "Paris is the capital.");
    }

    #[test]
    fn test_parse_malformed_and_empty() {
        assert!(matches!(
            parse_response(json!({"type": "error"})),
            Err(ProviderError::Malformed(_))
        ));
        assert_eq!(parse_response(json!({"content": []})), Err(ProviderError::Empty));
        assert_eq!(
            parse_response(json!({"content": [{"type": "text", "text": "   "}]})),
            Err(ProviderError::Empty)
        );
    }

    #[test]
    fn test_request_body_shape() {
        let provider = AnthropicProvider::new(Client::new(), FileAnthropicConfig::default());
        let prompt = Prompt::user("hi");
        let body = serde_json::to_value(provider.request_body(&prompt)).unwrap();
        assert_eq!(body["model"], "claude-3-5-sonnet-20241022");
        assert_eq!(body["max_tokens"], 1000);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "hi");
        assert!(body.get("system").is_none());
    }

    #[tokio::test]
    async fn test_missing_key_is_not_configured() {
        let config = FileAnthropicConfig {
            api_key_env: "SUPPORTBOT_TEST_UNSET_ANTHROPIC_KEY".to_string(),
            api_key: None,
            ..Default::default()
        };
        let provider = AnthropicProvider::new(Client::new(), config);
        let question = Question::try_new("hello").unwrap();
        let session = SessionId::ephemeral();

        let result = provider.answer(AnswerRequest::new(&question, &session)).await;
        assert!(matches!(result, Err(ProviderError::NotConfigured(_))));
    }
}
