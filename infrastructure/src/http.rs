//! Shared HTTP plumbing for the remote adapters.
//!
//! One `reqwest::Client` with a bounded timeout is built at startup and
//! shared by every provider and the search retriever.

use crate::config::FileHttpConfig;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use supportbot_application::ProviderError;
use supportbot_domain::util::preview;

/// Build the shared client from `[http]` settings.
pub fn build_client(config: &FileHttpConfig) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(config.timeout())
        .user_agent(config.user_agent.clone())
        .build()
}

/// Send `request` and decode a JSON body, mapping every failure to a
/// [`ProviderError`] category.
pub(crate) async fn send_json(request: RequestBuilder) -> Result<Value, ProviderError> {
    let response = request.send().await.map_err(transport_error)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(status_error(status, &body));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| ProviderError::Malformed(format!("invalid JSON body: {}", e)))
}

pub(crate) fn transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Transport(e.to_string())
    }
}

pub(crate) fn status_error(status: StatusCode, body: &str) -> ProviderError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return ProviderError::RateLimited;
    }
    ProviderError::Api {
        status: status.as_u16(),
        message: api_error_message(body),
    }
}

/// `error.message` from a JSON error body, else a preview of the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| preview(body, 200))
}

/// Trimmed text, or `Empty` when nothing is left.
pub(crate) fn non_blank(text: &str) -> Result<String, ProviderError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(ProviderError::Empty)
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_status() {
        assert_eq!(
            status_error(StatusCode::TOO_MANY_REQUESTS, ""),
            ProviderError::RateLimited
        );
    }

    #[test]
    fn test_api_error_uses_json_message() {
        let body = r#"{"error": {"type": "authentication_error", "message": "invalid x-api-key"}}"#;
        assert_eq!(
            status_error(StatusCode::UNAUTHORIZED, body),
            ProviderError::Api {
                status: 401,
                message: "invalid x-api-key".to_string()
            }
        );
    }

    #[test]
    fn test_api_error_falls_back_to_body() {
        let err = status_error(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(
            err,
            ProviderError::Api {
                status: 502,
                message: "upstream down".to_string()
            }
        );
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("  hi \n").unwrap(), "hi");
        assert_eq!(non_blank(" \n\t"), Err(ProviderError::Empty));
    }

    #[test]
    fn test_build_client() {
        assert!(build_client(&FileHttpConfig::default()).is_ok());
    }
}
