//! Resolution chain configuration (`[resolution]` section)

use super::search::FileSearchConfig;
use serde::{Deserialize, Serialize};
use supportbot_application::ResolutionParams;
use supportbot_domain::{FreshnessClassifier, MAX_PRESENTED_RESULTS};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResolutionConfig {
    /// Results used for prompt context and the search digest (1 to 3).
    pub presented_results: usize,
    /// Keywords added to the built-in freshness list.
    pub extra_freshness_keywords: Vec<String>,
}

impl Default for FileResolutionConfig {
    fn default() -> Self {
        Self {
            presented_results: MAX_PRESENTED_RESULTS,
            extra_freshness_keywords: Vec::new(),
        }
    }
}

impl FileResolutionConfig {
    pub fn to_params(&self, search: &FileSearchConfig) -> ResolutionParams {
        ResolutionParams::default()
            .with_search_enabled(search.enabled)
            .with_search_results(search.results)
            .with_presented_results(self.presented_results)
    }

    pub fn to_classifier(&self) -> FreshnessClassifier {
        FreshnessClassifier::default().with_extra_keywords(self.extra_freshness_keywords.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use supportbot_domain::{Question, SearchResult, search_digest};

    #[test]
    fn test_to_params_uses_search_section() {
        let search = FileSearchConfig {
            enabled: false,
            results: 8,
            ..Default::default()
        };
        let params = FileResolutionConfig::default().to_params(&search);
        assert!(!params.search_enabled);
        assert_eq!(params.search_results, 8);
        assert_eq!(params.presented_results, 3);
    }

    #[test]
    fn test_presented_results_capped_at_three() {
        let config: FileResolutionConfig = toml::from_str("presented_results = 5").unwrap();
        let params = config.to_params(&FileSearchConfig::default());
        assert_eq!(params.presented_results, MAX_PRESENTED_RESULTS);

        let results: Vec<_> = (1..=5)
            .map(|i| SearchResult::new(Some(format!("Result {i}").as_str()), None, None))
            .collect();
        let digest = search_digest("q", &results, params.presented_results);
        assert!(digest.contains("Result 3"));
        assert!(!digest.contains("Result 4"));
    }

    #[test]
    fn test_extra_keywords_extend_classifier() {
        let config = FileResolutionConfig {
            extra_freshness_keywords: vec!["Election".to_string()],
            ..Default::default()
        };
        let classifier = config.to_classifier();
        let question = Question::try_new("who won the election").unwrap();
        assert!(classifier.needs_freshness(&question));
    }
}
