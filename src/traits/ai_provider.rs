use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::image_upload::EncodedImage;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {

    /// Sends one user turn (text plus inline images) under the given system
    /// prompt and returns the model's raw text reply.
    async fn chat(
        &self,
        session_id: String,
        system_prompt: String,
        user_prompt: String,
        images: Vec<EncodedImage>,
    ) -> Result<String, AiProviderError>;

    fn model_name(&self) -> String;
}
