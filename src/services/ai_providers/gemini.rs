use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::API_KEY_HEADER;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_part::GeminiPart;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::config::ai_config::AiConfig;
use crate::structs::image_upload::EncodedImage;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct GeminiProvider {
    api_key: Option<String>,
    api_key_env: String,
    base_url: String,
    client: Client,
    model: String,
    temperature: Option<f64>,
    max_output_tokens: Option<u32>,
}

impl GeminiProvider {
    pub fn new(config: &AiConfig, api_key: Option<String>) -> Self {
        Self {
            api_key,
            api_key_env: config.api_key_env.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }

    fn get_request(&self, system_prompt: String, user_prompt: String, images: Vec<EncodedImage>) -> GeminiRequest {
        let system_instruction = if system_prompt.is_empty() {
            None
        } else {
            Some(GeminiContent {
                role: None,
                parts: vec![GeminiPart::text(&system_prompt)],
            })
        };

        let mut parts = vec![GeminiPart::text(&user_prompt)];
        for image in &images {
            parts.push(GeminiPart::image(&image.mime_type, &image.base64));
        }

        GeminiRequest {
            system_instruction,
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts,
            }],
            generation_config: Some(GeminiGenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
                candidate_count: Some(1),
            }),
        }
    }

    /// The key goes in a header, never the URL: reqwest error text carries the URL.
    async fn make_request(&self, url: String, api_key: &str, request_body: GeminiRequest) -> Result<reqwest::Response, AiProviderError> {
        log::debug!("📦 Request model: {}", self.model);

        self.client
            .post(&url)
            .header("Content-Type", "application/json")
            .header(API_KEY_HEADER, api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.without_url().to_string()))
    }

    /// Joins the text parts of the first candidate.
    fn extract_reply_text(json: &serde_json::Value) -> Result<String, AiProviderError> {
        if let Some(error) = json.get("error") {
            let error_message = error.get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown error");
            let error_code = error.get("code")
                .and_then(|c| c.as_i64())
                .unwrap_or(0);

            return Err(AiProviderError::ApiError(format!("Code {}: {}", error_code, error_message)));
        }

        let parts = json
            .get("candidates")
            .and_then(|candidates| candidates.as_array())
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.as_array())
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))?;

        let text: String = parts
            .iter()
            .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
            .collect();

        if text.is_empty() {
            return Err(AiProviderError::SerializationError("No text part in response".to_string()));
        }

        Ok(text)
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn chat(
        &self,
        session_id: String,
        system_prompt: String,
        user_prompt: String,
        images: Vec<EncodedImage>,
    ) -> Result<String, AiProviderError> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            AiProviderError::AuthenticationError(format!("{} is not set", self.api_key_env))
        })?;

        log::info!("🤖 [{}] Sending {} image(s) to {}", session_id, images.len(), self.model);

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let request_body = self.get_request(system_prompt, user_prompt, images);

        let response = self.make_request(url, api_key, request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::error!("❌ [{}] Gemini API error response ({}): {}", session_id, status, error_text);

            return Err(AiProviderError::from_status(status.as_u16(), error_text));
        }

        let json: serde_json::Value = response.json().await
            .map_err(|e| AiProviderError::SerializationError(e.without_url().to_string()))?;

        let reply = Self::extract_reply_text(&json)?;
        log::debug!("📨 [{}] Received {} characters from model", session_id, reply.len());

        Ok(reply)
    }

    fn model_name(&self) -> String {
        self.model.clone()
    }
}
