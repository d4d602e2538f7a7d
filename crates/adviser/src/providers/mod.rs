//! Chat completion providers.

mod openai;
mod simulated;

use std::sync::Arc;

use async_trait::async_trait;
use log::info;

pub use openai::OpenAiChatProvider;
pub use simulated::{SimulatedAdviser, SIMULATED_LATENCY};

use crate::config::AdviserConfig;
use crate::error::AdviserError;
use crate::types::ChatMessage;

/// Produces one assistant reply for the conversation so far.
#[async_trait]
pub trait ChatCompletionProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// `history` holds the turns before `user_turn`, oldest first.
    async fn complete(
        &self,
        history: &[ChatMessage],
        user_turn: &ChatMessage,
    ) -> Result<String, AdviserError>;
}

/// HTTP provider when an API key is configured, simulated adviser otherwise.
pub fn from_config(config: &AdviserConfig) -> Arc<dyn ChatCompletionProvider> {
    match OpenAiChatProvider::new(config.clone()) {
        Ok(provider) => {
            info!("Adviser using {} model {}", provider.name(), config.model);
            Arc::new(provider)
        }
        Err(_) => {
            info!("No adviser API key configured, using simulated adviser");
            Arc::new(SimulatedAdviser::new().with_latency(SIMULATED_LATENCY))
        }
    }
}
