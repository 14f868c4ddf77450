use std::sync::Arc;
use uuid::Uuid;
use crate::config::constants::SESSION_ID_PREFIX;
use crate::constants::prompts::{ANALYZE_INSTRUCTION, DEFECT_SYSTEM_PROMPT};
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::image_upload::EncodedImage;
use crate::traits::ai_provider::AiProvider;

/// Wraps a model provider with the fixed defect-taxonomy prompt.
#[derive(Clone)]
pub struct DefectClassifier {
    provider: Arc<dyn AiProvider>,
}

impl DefectClassifier {
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self { provider }
    }

    pub fn new_session_id() -> String {
        format!("{}{}", SESSION_ID_PREFIX, Uuid::new_v4())
    }

    /// Returns the model's raw reply for one image. Every call runs under a
    /// fresh session id.
    pub async fn classify(&self, image: &EncodedImage) -> Result<String, AiProviderError> {
        let session_id = Self::new_session_id();
        log::info!("🔍 [{}] Classifying '{}' with {}", session_id, image.filename, self.provider.model_name());

        self.provider
            .chat(
                session_id,
                DEFECT_SYSTEM_PROMPT.to_string(),
                ANALYZE_INSTRUCTION.to_string(),
                vec![image.clone()],
            )
            .await
    }
}
