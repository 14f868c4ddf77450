use std::sync::Arc;
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

pub mod gemini;

/// Builds the model client from explicit configuration. Holds no global
/// state; the API key is read from the environment variable the config names.
pub fn create_provider(config: &AiConfig) -> Arc<dyn AiProvider> {
    let api_key = config.api_key();
    if api_key.is_none() {
        log::warn!("⚠️ {} is not set; analyze requests will fail until it is provided", config.api_key_env);
    }

    Arc::new(GeminiProvider::new(config, api_key))
}
