//! Local responder. The always-succeeding terminal fallback.
//!
//! Maps keyword patterns in a question to canned answers using an ordered
//! rule table ([`rules::default_rules`]). The first matching rule fires;
//! when nothing matches, one of eight generic "tell me more" prompts is
//! returned. Variant selection goes through an injected [`VariantPicker`].

mod picker;
mod replies;
mod rules;

pub use picker::{FixedPicker, SeededPicker, ThreadRngPicker, VariantPicker};
pub use rules::{DEFAULT_REPLY, Reply, Rule, RuleCategory, default_rules};

use crate::core::question::Question;
use std::sync::Arc;

/// Name reported when no rule matched.
pub const DEFAULT_RULE: &str = "default";

/// A local answer and the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAnswer {
    pub rule: &'static str,
    pub body: String,
}

/// Rule-table responder.
#[derive(Clone)]
pub struct LocalResponder {
    rules: Vec<Rule>,
    fallback: Reply,
    picker: Arc<dyn VariantPicker>,
}

impl std::fmt::Debug for LocalResponder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalResponder")
            .field("rules", &self.rules.len())
            .finish_non_exhaustive()
    }
}

impl Default for LocalResponder {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRngPicker))
    }
}

impl LocalResponder {
    /// Responder with the default rule table and the given random source.
    pub fn new(picker: Arc<dyn VariantPicker>) -> Self {
        Self::with_rules(default_rules(), DEFAULT_REPLY, picker)
    }

    pub fn with_rules(rules: Vec<Rule>, fallback: Reply, picker: Arc<dyn VariantPicker>) -> Self {
        Self {
            rules,
            fallback,
            picker,
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallback(&self) -> Reply {
        self.fallback
    }

    /// Answer a question. Total: always returns a non-empty body.
    pub fn respond(&self, question: &Question) -> LocalAnswer {
        let text = question.normalized();
        match self.rules.iter().find(|rule| rule.matches(&text)) {
            Some(rule) => LocalAnswer {
                rule: rule.name,
                body: self.render(rule.reply),
            },
            None => LocalAnswer {
                rule: DEFAULT_RULE,
                body: self.render(self.fallback),
            },
        }
    }

    fn render(&self, reply: Reply) -> String {
        let variants = reply.variants();
        match variants {
            [] => "I'm here to help! Could you tell me more about what you need?".to_string(),
            [only] => (*only).to_string(),
            many => {
                let idx = self.picker.pick(many.len()).min(many.len() - 1);
                many[idx].to_string()
            }
        }
    }
}
