//! Context retriever port
//!
//! A web-search source that returns ranked results for grounding a
//! provider prompt. Like answer providers, failures are reported for
//! observability and collapsed to `None` for control flow.

use super::answer_provider::ProviderError;
use async_trait::async_trait;
use supportbot_domain::SearchResult;
use supportbot_domain::util::preview;
use tracing::{debug, info, warn};

/// Number of results requested per search.
pub const DEFAULT_SEARCH_RESULTS: usize = 5;

#[async_trait]
pub trait ContextRetriever: Send + Sync {
    /// Ranked results, in provider order.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>, ProviderError>;

    /// Results, or `None` when search is unconfigured, failed, or found nothing.
    async fn try_search(&self, query: &str, limit: usize) -> Option<Vec<SearchResult>> {
        match self.search(query, limit).await {
            Ok(results) if results.is_empty() => {
                debug!(query = %preview(query, 50), "Search returned no results");
                None
            }
            Ok(results) => {
                info!(count = results.len(), "Search returned results");
                Some(results)
            }
            Err(e) if e.is_not_configured() => {
                debug!("Skipping web search: {}", e);
                None
            }
            Err(e) => {
                warn!(category = e.category(), "Web search failed: {}", e);
                None
            }
        }
    }
}

/// Retriever used when web search is disabled.
pub struct NoContextRetriever;

#[async_trait]
impl ContextRetriever for NoContextRetriever {
    async fn search(&self, _query: &str, _limit: usize) -> Result<Vec<SearchResult>, ProviderError> {
        Err(ProviderError::NotConfigured("web search disabled".to_string()))
    }
}
