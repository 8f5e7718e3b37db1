//! Resolution parameters. Knobs of the answer resolution chain.

use crate::ports::context_retriever::DEFAULT_SEARCH_RESULTS;
use serde::{Deserialize, Serialize};
use supportbot_domain::MAX_PRESENTED_RESULTS;

/// Static parameters for [`ResolveAnswerUseCase`](crate::use_cases::resolve_answer::ResolveAnswerUseCase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionParams {
    /// Run the search-augmented retry for freshness-flagged questions.
    pub search_enabled: bool,
    /// Results requested from the context retriever.
    pub search_results: usize,
    /// Results used for prompt context and for the search digest, at most
    /// [`MAX_PRESENTED_RESULTS`].
    pub presented_results: usize,
}

impl Default for ResolutionParams {
    fn default() -> Self {
        Self {
            search_enabled: true,
            search_results: DEFAULT_SEARCH_RESULTS,
            presented_results: MAX_PRESENTED_RESULTS,
        }
    }
}

impl ResolutionParams {
    pub fn with_search_enabled(mut self, enabled: bool) -> Self {
        self.search_enabled = enabled;
        self
    }

    pub fn with_search_results(mut self, n: usize) -> Self {
        self.search_results = n.max(1);
        self
    }

    pub fn with_presented_results(mut self, n: usize) -> Self {
        self.presented_results = n.clamp(1, MAX_PRESENTED_RESULTS);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_request_five_present_three() {
        let params = ResolutionParams::default();
        assert!(params.search_enabled);
        assert_eq!(params.search_results, 5);
        assert_eq!(params.presented_results, 3);
    }

    #[test]
    fn builders_clamp_to_range() {
        let params = ResolutionParams::default()
            .with_search_results(0)
            .with_presented_results(0);
        assert_eq!(params.search_results, 1);
        assert_eq!(params.presented_results, 1);

        let params = ResolutionParams::default().with_presented_results(5);
        assert_eq!(params.presented_results, MAX_PRESENTED_RESULTS);
    }
}
