//! Prompt templates for the provider adapters

use crate::search::ContextBlock;

/// A provider prompt: optional system framing plus the user turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: Option<String>,
    pub user: String,
}

impl Prompt {
    pub fn user(user: impl Into<String>) -> Self {
        Self {
            system: None,
            user: user.into(),
        }
    }

    pub fn with_system(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            user: user.into(),
        }
    }
}

/// Templates for generating prompts per provider style
pub struct PromptTemplate;

impl PromptTemplate {
    /// Single-turn prompt for the messages API (persona folded into the user turn)
    pub fn messages_question(question: &str) -> Prompt {
        Prompt::user(format!(
            r#"You are a helpful, friendly, and intelligent AI assistant. You excel at:
- Having natural, engaging conversations
- Providing detailed, accurate information
- Being empathetic and understanding
- Offering creative solutions
- Explaining complex topics simply

Please respond to this user question in a conversational, helpful way: {}"#,
            question
        ))
    }

    /// Messages API prompt grounded on search results
    pub fn messages_with_context(question: &str, context: &ContextBlock) -> Prompt {
        Prompt::user(format!(
            r#"Based on the latest search results, please provide a comprehensive answer to: {}

{}

Please provide a detailed, accurate response using the search results. If the search results don't contain enough information, please mention that and provide what information is available."#,
            question, context
        ))
    }

    /// System framing for chat-completion style APIs
    pub fn chat_system() -> &'static str {
        r#"You are a highly intelligent and helpful AI assistant. You excel at:
- Providing accurate, detailed information
- Having engaging conversations
- Solving complex problems
- Being creative and insightful
- Explaining things clearly

Be conversational, friendly, and helpful in your responses."#
    }

    /// System framing for chat-completion APIs when search context is supplied
    pub fn chat_context_system() -> &'static str {
        "You are a helpful AI assistant that provides accurate, up-to-date information based on search results. Always cite sources when possible. If the search results don't contain enough information, say so instead of guessing."
    }

    pub fn chat_question(question: &str) -> Prompt {
        Prompt::with_system(Self::chat_system(), question)
    }

    pub fn chat_with_context(question: &str, context: &ContextBlock) -> Prompt {
        Prompt::with_system(Self::chat_context_system(), Self::grounded_question(question, context))
    }

    /// Single-prompt generation request
    pub fn generation_question(question: &str) -> Prompt {
        Prompt::user(format!(
            r#"You are a helpful, intelligent AI assistant. You excel at:
- Having natural conversations
- Providing accurate information
- Being creative and insightful
- Solving problems effectively

Please respond to this user question in a helpful, conversational way: {}"#,
            question
        ))
    }

    pub fn generation_with_context(question: &str, context: &ContextBlock) -> Prompt {
        Prompt::user(Self::grounded_question(question, context))
    }

    fn grounded_question(question: &str, context: &ContextBlock) -> String {
        format!(
            "Question: {}\n\nSearch Results:\n{}\n\nPlease provide a comprehensive answer based on the search results. If they are not sufficient, say what is missing rather than making it up.",
            question, context
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchResult;

    fn context() -> ContextBlock {
        ContextBlock::from_results(&[SearchResult::new(
            Some("Budget passed"),
            Some("Parliament approved the budget."),
            Some("https://news.example/budget"),
        )])
        .unwrap()
    }

    #[test]
    fn test_messages_question_embeds_question() {
        let prompt = PromptTemplate::messages_question("How do tides work?");
        assert!(prompt.system.is_none());
        assert!(prompt.user.ends_with("How do tides work?"));
    }

    #[test]
    fn test_contextual_prompts_flag_insufficient_context() {
        let ctx = context();
        for prompt in [
            PromptTemplate::messages_with_context("q", &ctx),
            PromptTemplate::chat_with_context("q", &ctx),
            PromptTemplate::generation_with_context("q", &ctx),
        ] {
            assert!(prompt.user.contains("Budget passed"));
            assert!(
                prompt.user.contains("don't contain enough information")
                    || prompt.user.contains("not sufficient")
            );
        }
    }

    #[test]
    fn test_chat_question_uses_system_framing() {
        let prompt = PromptTemplate::chat_question("hi");
        assert_eq!(prompt.system.as_deref(), Some(PromptTemplate::chat_system()));
        assert_eq!(prompt.user, "hi");
    }
}
