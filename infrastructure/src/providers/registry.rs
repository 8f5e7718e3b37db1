//! Builds the ordered provider chain from `[providers]` configuration.

use super::{AnthropicProvider, DialogflowProvider, GeminiProvider, OpenAiProvider};
use crate::config::FileProvidersConfig;
use reqwest::Client;
use std::sync::Arc;
use supportbot_application::AnswerProvider;
use supportbot_domain::ProviderKind;
use tracing::{debug, warn};

/// One adapter per entry of `providers.order`, in that order.
///
/// Unknown names and repeated entries are skipped. Adapters are always built: a provider without
/// credentials simply reports itself as not configured at call time.
pub fn build_providers(client: &Client, config: &FileProvidersConfig) -> Vec<Arc<dyn AnswerProvider>> {
    let (kinds, unknown) = config.parse_order();
    for name in unknown {
        warn!("Unknown provider '{}' in providers.order, skipping", name);
    }
    for name in config.duplicate_names() {
        warn!("Provider '{}' listed twice in providers.order, keeping the first", name);
    }

    kinds
        .into_iter()
        .map(|kind| {
            debug!(provider = %kind, "Registering answer provider");
            build_provider(kind, client.clone(), config)
        })
        .collect()
}

fn build_provider(
    kind: ProviderKind,
    client: Client,
    config: &FileProvidersConfig,
) -> Arc<dyn AnswerProvider> {
    match kind {
        ProviderKind::Anthropic => Arc::new(AnthropicProvider::new(client, config.anthropic.clone())),
        ProviderKind::OpenAi => Arc::new(OpenAiProvider::new(client, config.openai.clone())),
        ProviderKind::Gemini => Arc::new(GeminiProvider::new(client, config.gemini.clone())),
        ProviderKind::Dialogflow => {
            Arc::new(DialogflowProvider::new(client, config.dialogflow.clone()))
        }
    }
}
