//! Provider B: OpenAI Chat Completions.

use crate::config::FileOpenAiConfig;
use crate::credentials::Credential;
use crate::http::{non_blank, send_json};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use supportbot_application::{AnswerProvider, AnswerRequest, ProviderError};
use supportbot_domain::{Prompt, PromptTemplate, ProviderKind};
use tracing::debug;

pub struct OpenAiProvider {
    client: Client,
    credential: Credential,
    config: FileOpenAiConfig,
}

impl OpenAiProvider {
    pub fn new(client: Client, config: FileOpenAiConfig) -> Self {
        let credential = Credential::new(config.api_key_env.clone(), config.api_key.clone());
        Self {
            client,
            credential,
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn request_body<'a>(&'a self, prompt: &'a Prompt) -> ChatRequest<'a> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = prompt.system.as_deref() {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: &prompt.user,
        });
        ChatRequest {
            model: &self.config.model,
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        }
    }
}

#[async_trait]
impl AnswerProvider for OpenAiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    async fn answer(&self, request: AnswerRequest<'_>) -> Result<String, ProviderError> {
        let api_key = self.credential.resolve().ok_or_else(|| {
            ProviderError::NotConfigured(format!("{} is not set", self.credential.env_var()))
        })?;

        let question = request.question.content();
        let prompt = match request.context {
            Some(context) => PromptTemplate::chat_with_context(question, context),
            None => PromptTemplate::chat_question(question),
        };
        debug!(model = %self.config.model, grounded = request.context.is_some(), "Calling OpenAI");

        let body = send_json(
            self.client
                .post(self.endpoint())
                .bearer_auth(api_key)
                .json(&self.request_body(&prompt)),
        )
        .await?;

        parse_response(body)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// `choices[0].message.content`, trimmed.
pub(crate) fn parse_response(body: Value) -> Result<String, ProviderError> {
    let response: ChatResponse = serde_json::from_value(body)
        .map_err(|e| ProviderError::Malformed(format!("chat completion: {}", e)))?;
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(ProviderError::Empty)?;
    non_blank(choice.message.content.as_deref().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use supportbot_domain::{ContextBlock, Question, SearchResult, SessionId};

    #[test]
    fn test_parse_first_choice() {
        let body = json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "\nHello there!\n"}, "finish_reason": "stop"}
            ]
        });
        assert_eq!(parse_response(body).unwrap(), "Hello there!");
    }

    #[test]
    fn test_parse_malformed_and_empty() {
        assert!(matches!(
            parse_response(json!({"error": {"message": "nope"}})),
            Err(ProviderError::Malformed(_))
        ));
        assert_eq!(parse_response(json!({"choices": []})), Err(ProviderError::Empty));
        assert_eq!(
            parse_response(json!({"choices": [{"message": {"role": "assistant", "content": null}}]})),
            Err(ProviderError::Empty)
        );
    }

    #[test]
    fn test_request_body_has_system_and_user() {
        let provider = OpenAiProvider::new(Client::new(), FileOpenAiConfig::default());
        let context = ContextBlock::from_results(&[SearchResult::new(
            Some("Rates"),
            Some("Rates held"),
            Some("https://example.com"),
        )])
        .unwrap();
        let prompt = PromptTemplate::chat_with_context("interest rate?", &context);
        let body = serde_json::to_value(provider.request_body(&prompt)).unwrap();

        assert_eq!(body["model"], "gpt-4-turbo-preview");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert!(
            body["messages"][1]["content"]
                .as_str()
                .unwrap()
                .contains("Rates held")
        );
    }

    #[tokio::test]
    async fn test_missing_key_is_not_configured() {
        let config = FileOpenAiConfig {
            api_key_env: "SUPPORTBOT_TEST_UNSET_OPENAI_KEY".to_string(),
            ..Default::default()
        };
        let provider = OpenAiProvider::new(Client::new(), config);
        let question = Question::try_new("hello").unwrap();
        let session = SessionId::ephemeral();

        let result = provider.answer(AnswerRequest::new(&question, &session)).await;
        assert!(matches!(result, Err(ProviderError::NotConfigured(_))));
    }
}
