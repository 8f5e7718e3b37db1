//! Prompt construction for the conversational providers.

mod template;

pub use template::{Prompt, PromptTemplate};
