//! Freshness classification.
//!
//! A question is *freshness-flagged* when its answer may depend on
//! real-time information. The flag only decides whether the resolution
//! chain runs a web search after every provider came back empty.

use crate::core::question::Question;

/// Keywords that mark a question as needing current information.
///
/// Matching is a lower-case substring test, so `"rate"` also matches
/// `"accurate"`. Over-matching only costs one extra search call.
pub const FRESHNESS_KEYWORDS: &[&str] = &[
    "prime minister",
    "president",
    "current",
    "latest",
    "news",
    "today",
    "recent",
    "weather",
    "stock",
    "price",
    "rate",
    "score",
    "result",
    "update",
    "2024",
    "2025",
    "now",
    "live",
    "happening",
    "breaking",
    "india",
    "usa",
    "world",
];

/// Keyword based freshness classifier.
#[derive(Debug, Clone)]
pub struct FreshnessClassifier {
    keywords: Vec<String>,
}

impl Default for FreshnessClassifier {
    fn default() -> Self {
        Self::new(FRESHNESS_KEYWORDS.iter().map(|k| k.to_string()))
    }
}

impl FreshnessClassifier {
    pub fn new(keywords: impl IntoIterator<Item = String>) -> Self {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// Add extra keywords (e.g. the current year) on top of the defaults.
    pub fn with_extra_keywords(mut self, extra: impl IntoIterator<Item = String>) -> Self {
        self.keywords.extend(
            extra
                .into_iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty()),
        );
        self
    }

    /// First keyword found in the question, if any.
    pub fn matched_keyword(&self, question: &Question) -> Option<&str> {
        let text = question.normalized();
        self.keywords
            .iter()
            .find(|k| text.contains(k.as_str()))
            .map(String::as_str)
    }

    pub fn needs_freshness(&self, question: &Question) -> bool {
        self.matched_keyword(question).is_some()
    }
}
