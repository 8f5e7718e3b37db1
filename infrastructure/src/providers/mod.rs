//! Answer provider adapters (reqwest).
//!
//! | Kind | API | Context retry |
//! |------|-----|:---:|
//! | [`AnthropicProvider`] | Messages | yes |
//! | [`OpenAiProvider`] | Chat Completions | yes |
//! | [`GeminiProvider`] | `generateContent` | yes |
//! | [`DialogflowProvider`] | `detectIntent` | no |

mod anthropic;
mod dialogflow;
mod gemini;
mod openai;
mod registry;

pub use anthropic::AnthropicProvider;
pub use dialogflow::{CLARIFYING_REPLY, DialogflowProvider};
pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;
pub use registry::build_providers;
