//! Provider D: Dialogflow ES intent matching.
//!
//! Sends the raw question to `detectIntent` under the caller's session so
//! follow-up intents keep their conversational context per user. This
//! provider does not take part in the search-context retry.

use crate::config::FileDialogflowConfig;
use crate::credentials::Credential;
use crate::http::send_json;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use supportbot_application::{AnswerProvider, AnswerRequest, ProviderError};
use supportbot_domain::ProviderKind;
use tracing::debug;

/// Reply when an intent matched without fulfillment or display name.
pub const CLARIFYING_REPLY: &str =
    "I'm here to help! Could you please tell me more about what you need assistance with?";

pub struct DialogflowProvider {
    client: Client,
    project: Credential,
    token: Credential,
    config: FileDialogflowConfig,
}

impl DialogflowProvider {
    pub fn new(client: Client, config: FileDialogflowConfig) -> Self {
        let project = Credential::new(config.project_id_env.clone(), config.project_id.clone());
        let token = Credential::new(config.api_key_env.clone(), config.api_key.clone());
        Self {
            client,
            project,
            token,
            config,
        }
    }

    fn endpoint(&self, project: &str, session: &str) -> String {
        format!(
            "{}/v2/projects/{}/agent/sessions/{}:detectIntent",
            self.config.base_url.trim_end_matches('/'),
            project,
            session
        )
    }
}

#[async_trait]
impl AnswerProvider for DialogflowProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Dialogflow
    }

    fn supports_context(&self) -> bool {
        false
    }

    async fn answer(&self, request: AnswerRequest<'_>) -> Result<String, ProviderError> {
        let project = self.project.resolve().ok_or_else(|| {
            ProviderError::NotConfigured(format!("{} is not set", self.project.env_var()))
        })?;
        let token = self.token.resolve().ok_or_else(|| {
            ProviderError::NotConfigured(format!("{} is not set", self.token.env_var()))
        })?;

        let session = request.session.as_str();
        debug!(session, "Calling Dialogflow detectIntent");

        let body = json!({
            "queryInput": {
                "text": {
                    "text": request.question.content(),
                    "languageCode": self.config.language_code,
                }
            }
        });
        let response = send_json(
            self.client
                .post(self.endpoint(&project, session))
                .bearer_auth(token)
                .json(&body),
        )
        .await?;

        parse_response(response)
    }
}

#[derive(Deserialize)]
struct DetectIntentResponse {
    #[serde(rename = "queryResult")]
    query_result: QueryResult,
}

#[derive(Deserialize)]
struct QueryResult {
    #[serde(default, rename = "fulfillmentText")]
    fulfillment_text: Option<String>,
    #[serde(default)]
    intent: Option<Intent>,
}

#[derive(Deserialize)]
struct Intent {
    #[serde(default, rename = "displayName")]
    display_name: Option<String>,
}

/// Fulfillment text, else an acknowledgment of the matched intent, else a
/// clarifying question.
pub(crate) fn parse_response(body: Value) -> Result<String, ProviderError> {
    let response: DetectIntentResponse = serde_json::from_value(body)
        .map_err(|e| ProviderError::Malformed(format!("detectIntent response: {}", e)))?;
    let result = response.query_result;

    if let Some(text) = result.fulfillment_text.as_deref().map(str::trim)
        && !text.is_empty()
    {
        return Ok(text.to_string());
    }

    if let Some(name) = result
        .intent
        .and_then(|i| i.display_name)
        .filter(|n| !n.trim().is_empty())
    {
        return Ok(format!(
            "I understand you're asking about {}. How can I help you with that?",
            name.trim()
        ));
    }

    Ok(CLARIFYING_REPLY.to_string())
}
