//! Web search results and their two presentations.
//!
//! - [`ContextBlock`]: results rendered as grounding text for a provider prompt
//! - [`search_digest`]: results rendered as the user-facing answer when no
//!   provider could use them

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Results used for prompt context or a digest, regardless of how many were fetched.
pub const MAX_PRESENTED_RESULTS: usize = 3;

/// One ranked search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub snippet: String,
    pub link: String,
}

impl SearchResult {
    /// Build a result, substituting placeholders for missing fields.
    pub fn new(title: Option<&str>, snippet: Option<&str>, link: Option<&str>) -> Self {
        Self {
            title: title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or("No title")
                .to_string(),
            snippet: snippet
                .filter(|s| !s.trim().is_empty())
                .unwrap_or("No description")
                .to_string(),
            link: link.unwrap_or_default().to_string(),
        }
    }
}

/// Search results formatted as prompt context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextBlock(String);

impl ContextBlock {
    /// Format the first [`MAX_PRESENTED_RESULTS`] results.
    ///
    /// Returns `None` when there is nothing to ground on.
    pub fn from_results(results: &[SearchResult]) -> Option<Self> {
        Self::from_results_capped(results, MAX_PRESENTED_RESULTS)
    }

    pub fn from_results_capped(results: &[SearchResult], cap: usize) -> Option<Self> {
        if results.is_empty() || cap == 0 {
            return None;
        }
        let mut text = String::from("Recent search results:\n");
        for (i, item) in results.iter().take(cap).enumerate() {
            let _ = write!(
                text,
                "{}. {}\n   {}\n   Source: {}\n\n",
                i + 1,
                item.title,
                item.snippet,
                item.link
            );
        }
        Some(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContextBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Present raw search results as the answer itself.
pub fn search_digest(question: &str, results: &[SearchResult], cap: usize) -> String {
    if results.is_empty() || cap == 0 {
        return "I couldn't find recent information about that topic. Let me help you with what I know instead.".to_string();
    }

    let mut out = format!("🔍 **Search Results for: {}**\n\n", question);
    for (i, item) in results.iter().take(cap).enumerate() {
        let _ = write!(
            out,
            "**{}. {}**\n{}\n🔗 [Read more]({})\n\n",
            i + 1,
            item.title,
            item.snippet,
            item.link
        );
    }
    out.push_str(
        "💡 *These are the most recent and relevant results I found. For the most up-to-date information, please check the linked sources.*",
    );
    out
}
