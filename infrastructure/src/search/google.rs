//! Google Custom Search retriever.
//!
//! `GET {base}/customsearch/v1?key=&cx=&q=&num=&safe=` and maps `items[]` to
//! [`SearchResult`]s in the order the API returns them.
//!
//! | Setting | Source | Default |
//! |---------|--------|---------|
//! | API key | `GOOGLE_SEARCH_API_KEY`, then `search.api_key` | none (search disabled) |
//! | Engine id | `GOOGLE_SEARCH_ENGINE_ID`, then `search.engine_id` | [`DEFAULT_SEARCH_ENGINE_ID`] |

use crate::config::{DEFAULT_SEARCH_ENGINE_ID, FileSearchConfig};
use crate::credentials::Credential;
use crate::http::send_json;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use supportbot_application::{ContextRetriever, ProviderError};
use supportbot_domain::SearchResult;
use supportbot_domain::util::preview;
use tracing::debug;

/// The API rejects `num` outside 1..=10.
const MAX_RESULTS_PER_REQUEST: usize = 10;

pub struct GoogleSearchRetriever {
    client: Client,
    api_key: Credential,
    engine_id: Credential,
    config: FileSearchConfig,
}

impl GoogleSearchRetriever {
    pub fn new(client: Client, config: FileSearchConfig) -> Self {
        let api_key = Credential::new(config.api_key_env.clone(), config.api_key.clone());
        let engine_id = Credential::new(config.engine_id_env.clone(), config.engine_id.clone());
        Self {
            client,
            api_key,
            engine_id,
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/customsearch/v1",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl ContextRetriever for GoogleSearchRetriever {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>, ProviderError> {
        let api_key = self.api_key.resolve().ok_or_else(|| {
            ProviderError::NotConfigured(format!("{} is not set", self.api_key.env_var()))
        })?;
        let engine_id = self
            .engine_id
            .resolve()
            .unwrap_or_else(|| DEFAULT_SEARCH_ENGINE_ID.to_string());
        let num = limit.clamp(1, MAX_RESULTS_PER_REQUEST).to_string();

        debug!(query = %preview(query, 50), cx = %engine_id, "Searching the web");

        let body = send_json(self.client.get(self.endpoint()).query(&[
            ("key", api_key.as_str()),
            ("cx", engine_id.as_str()),
            ("q", query),
            ("num", num.as_str()),
            ("safe", self.config.safe.as_str()),
        ]))
        .await?;

        parse_response(body)
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<Item>,
}

#[derive(Deserialize)]
struct Item {
    title: Option<String>,
    snippet: Option<String>,
    link: Option<String>,
}

/// `items[]` in API order; no `items` key means no results.
pub(crate) fn parse_response(body: Value) -> Result<Vec<SearchResult>, ProviderError> {
    if !body.is_object() {
        return Err(ProviderError::Malformed(
            "search response is not an object".to_string(),
        ));
    }
    let response: SearchResponse = serde_json::from_value(body)
        .map_err(|e| ProviderError::Malformed(format!("search response: {}", e)))?;

    Ok(response
        .items
        .iter()
        .map(|item| {
            SearchResult::new(
                item.title.as_deref(),
                item.snippet.as_deref(),
                item.link.as_deref(),
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_items_in_order() {
        let body = json!({
            "kind": "customsearch#search",
            "items": [
                {"title": "First", "snippet": "one", "link": "https://a.example"},
                {"title": "Second", "link": "https://b.example"},
                {"snippet": "untitled"}
            ]
        });
        let results = parse_response(body).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].title, "First");
        assert_eq!(results[1].snippet, "No description");
        assert_eq!(results[2].title, "No title");
        assert_eq!(results[2].link, "");
    }

    #[test]
    fn test_no_items_is_empty() {
        let body = json!({"kind": "customsearch#search", "searchInformation": {"totalResults": "0"}});
        assert!(parse_response(body).unwrap().is_empty());
    }

    #[test]
    fn test_non_object_is_malformed() {
        assert!(matches!(
            parse_response(json!([1, 2])),
            Err(ProviderError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_key_is_absent() {
        let config = FileSearchConfig {
            api_key_env: "SUPPORTBOT_TEST_UNSET_SEARCH_KEY".to_string(),
            ..Default::default()
        };
        let retriever = GoogleSearchRetriever::new(Client::new(), config);

        let result = retriever.search("latest news", 5).await;
        assert!(matches!(result, Err(ProviderError::NotConfigured(_))));
        assert!(retriever.try_search("latest news", 5).await.is_none());
    }
}
