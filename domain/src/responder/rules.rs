//! The ordered keyword rule table.
//!
//! Rules are evaluated top to bottom against the lower-cased question and
//! the first match fires, so specific factual rules sit above the broad
//! social ones.

use super::replies;

/// What a rule answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// One fixed block of text.
    Fixed(&'static str),
    /// One of several equivalent variants, chosen by the picker.
    OneOf(&'static [&'static str]),
}

impl Reply {
    /// Every string this reply can produce.
    pub fn variants(&self) -> &[&'static str] {
        match self {
            Reply::Fixed(text) => std::slice::from_ref(text),
            Reply::OneOf(texts) => texts,
        }
    }
}

/// Rule categories, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    Factual,
    Leader,
    Freshness,
    Social,
}

/// A `(predicate, reply)` pair.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub category: RuleCategory,
    matches: fn(&str) -> bool,
    pub reply: Reply,
}

impl Rule {
    pub const fn new(
        name: &'static str,
        category: RuleCategory,
        matches: fn(&str) -> bool,
        reply: Reply,
    ) -> Self {
        Self {
            name,
            category,
            matches,
            reply,
        }
    }

    /// `text` must already be lower-cased.
    pub fn matches(&self, text: &str) -> bool {
        (self.matches)(text)
    }
}

fn has_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

const GREETING_WORDS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
];
const WELL_BEING_WORDS: &[&str] = &[
    "how are you",
    "how do you feel",
    "are you okay",
    "how's it going",
    "how are you doing",
];
const CAPABILITY_WORDS: &[&str] = &[
    "what can you do",
    "help",
    "capabilities",
    "what do you do",
    "how can you help",
    "what are your skills",
];
const PROFESSIONAL_WORDS: &[&str] = &[
    "business",
    "work",
    "career",
    "professional",
    "job",
    "interview",
];
const TECHNICAL_WORDS: &[&str] = &[
    "code",
    "programming",
    "technical",
    "software",
    "development",
    "bug",
    "error",
];
const CREATIVE_WORDS: &[&str] = &[
    "write", "creative", "story", "content", "blog", "article", "poem",
];
const LEARNING_WORDS: &[&str] = &["learn", "study", "education", "teach", "explain", "understand"];
const PROBLEM_WORDS: &[&str] = &["problem", "issue", "trouble", "stuck", "difficult", "challenge"];
const GRATITUDE_WORDS: &[&str] = &["thank you", "thanks", "appreciate", "grateful", "awesome"];
const FAREWELL_WORDS: &[&str] = &[
    "bye",
    "goodbye",
    "see you later",
    "farewell",
    "have a good day",
];
const FRESHNESS_WORDS: &[&str] = &["current", "latest", "now", "today"];

/// The rule table in evaluation order.
pub fn default_rules() -> Vec<Rule> {
    use RuleCategory::*;

    vec![
        Rule::new(
            "capital_france",
            Factual,
            |q| q.contains("capital") && q.contains("france"),
            Reply::Fixed(replies::CAPITAL_FRANCE),
        ),
        Rule::new(
            "capital_india",
            Factual,
            |q| q.contains("capital") && q.contains("india"),
            Reply::Fixed(replies::CAPITAL_INDIA),
        ),
        Rule::new(
            "capital_usa",
            Factual,
            |q| q.contains("capital") && q.contains("usa"),
            Reply::Fixed(replies::CAPITAL_USA),
        ),
        Rule::new(
            "capital_china",
            Factual,
            |q| q.contains("capital") && q.contains("china"),
            Reply::Fixed(replies::CAPITAL_CHINA),
        ),
        Rule::new(
            "largest_country",
            Factual,
            |q| q.contains("largest") && (q.contains("country") || q.contains("nation")),
            Reply::Fixed(replies::LARGEST_COUNTRY),
        ),
        Rule::new(
            "population_india",
            Factual,
            |q| q.contains("population") && q.contains("india"),
            Reply::Fixed(replies::POPULATION_INDIA),
        ),
        Rule::new(
            "population_china",
            Factual,
            |q| q.contains("population") && q.contains("china"),
            Reply::Fixed(replies::POPULATION_CHINA),
        ),
        Rule::new(
            "largest_ocean",
            Factual,
            |q| q.contains("ocean") && q.contains("largest"),
            Reply::Fixed(replies::LARGEST_OCEAN),
        ),
        Rule::new(
            "prime_minister_india",
            Leader,
            |q| q.contains("prime minister") && q.contains("india"),
            Reply::Fixed(replies::PRIME_MINISTER_INDIA),
        ),
        Rule::new(
            "president_usa",
            Leader,
            |q| q.contains("president") && (q.contains("usa") || q.contains("america")),
            Reply::Fixed(replies::PRESIDENT_USA),
        ),
        Rule::new(
            "current_information",
            Freshness,
            |q| has_any(q, FRESHNESS_WORDS),
            Reply::Fixed(replies::CURRENT_INFO),
        ),
        Rule::new(
            "greeting",
            Social,
            |q| has_any(q, GREETING_WORDS),
            Reply::OneOf(replies::GREETINGS),
        ),
        Rule::new(
            "well_being",
            Social,
            |q| has_any(q, WELL_BEING_WORDS),
            Reply::OneOf(replies::WELL_BEING),
        ),
        Rule::new(
            "capabilities",
            Social,
            |q| has_any(q, CAPABILITY_WORDS),
            Reply::Fixed(replies::CAPABILITIES),
        ),
        Rule::new(
            "professional",
            Social,
            |q| has_any(q, PROFESSIONAL_WORDS),
            Reply::Fixed(replies::PROFESSIONAL),
        ),
        Rule::new(
            "technical",
            Social,
            |q| has_any(q, TECHNICAL_WORDS),
            Reply::Fixed(replies::TECHNICAL),
        ),
        Rule::new(
            "creative",
            Social,
            |q| has_any(q, CREATIVE_WORDS),
            Reply::Fixed(replies::CREATIVE),
        ),
        Rule::new(
            "learning",
            Social,
            |q| has_any(q, LEARNING_WORDS),
            Reply::Fixed(replies::LEARNING),
        ),
        Rule::new(
            "problem_solving",
            Social,
            |q| has_any(q, PROBLEM_WORDS),
            Reply::Fixed(replies::PROBLEM_SOLVING),
        ),
        Rule::new(
            "gratitude",
            Social,
            |q| has_any(q, GRATITUDE_WORDS),
            Reply::OneOf(replies::GRATITUDE),
        ),
        Rule::new(
            "farewell",
            Social,
            |q| has_any(q, FAREWELL_WORDS),
            Reply::OneOf(replies::FAREWELLS),
        ),
    ]
}

/// Reply used when no rule matches.
pub const DEFAULT_REPLY: Reply = Reply::OneOf(replies::TELL_ME_MORE);
