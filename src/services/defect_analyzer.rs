use std::sync::Arc;
use crate::errors::DetectiveResult;
use crate::services::defect_classifier::DefectClassifier;
use crate::services::response_parser::ResponseParser;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::image_upload::ImageUpload;
use crate::traits::ai_provider::AiProvider;
use crate::traits::analysis_store::AnalysisStore;

/// Upload to stored record: intake, classification, parsing, assembly,
/// persistence. Shared by the HTTP handlers and the CLI.
#[derive(Clone)]
pub struct DefectAnalyzer {
    classifier: DefectClassifier,
    store: Arc<dyn AnalysisStore>,
    store_image: bool,
}

impl DefectAnalyzer {
    pub fn new(provider: Arc<dyn AiProvider>, store: Arc<dyn AnalysisStore>, store_image: bool) -> Self {
        Self {
            classifier: DefectClassifier::new(provider),
            store,
            store_image,
        }
    }

    /// Nothing is persisted when validation or the model call fails.
    pub async fn analyze(&self, upload: ImageUpload) -> DetectiveResult<AnalysisResult> {
        let image = upload.encode()?;
        log::info!("📸 Received '{}' ({}, {} base64 chars)", image.filename, image.mime_type, image.base64.len());

        let reply = self.classifier.classify(&image).await?;
        let parsed = ResponseParser::parse(&reply);
        if parsed.fallback {
            log::warn!("⚠️ Model reply for '{}' was not usable JSON; storing sentinel result", image.filename);
        }

        let image_base64 = if self.store_image { Some(image.base64) } else { None };
        let analysis = AnalysisResult::assemble(&image.filename, image_base64, parsed);

        self.store.insert(&analysis).await?;
        log::info!("✅ Analysis {} complete: {} defect(s)", analysis.id, analysis.total_defects);

        Ok(analysis)
    }

    pub async fn history(&self, limit: u32) -> DetectiveResult<Vec<AnalysisResult>> {
        self.store.list_recent(limit).await
    }

    pub async fn get(&self, id: &str) -> DetectiveResult<AnalysisResult> {
        self.store.get_by_id(id).await
    }

    pub fn store_backend(&self) -> &'static str {
        self.store.backend_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ai_provider_error::AiProviderError;
    use crate::errors::DetectiveError;
    use crate::services::stores::memory_store::MemoryAnalysisStore;
    use crate::traits::ai_provider::MockAiProvider;

    fn provider_replying(reply: &'static str) -> Arc<dyn AiProvider> {
        let mut provider = MockAiProvider::new();
        provider.expect_model_name().return_const("mock-model".to_string());
        provider
            .expect_chat()
            .returning(move |_, _, _, _| Ok(reply.to_string()));
        Arc::new(provider)
    }

    fn jpeg_upload() -> ImageUpload {
        ImageUpload::new("white.jpg", Some("image/jpeg"), vec![0xFF, 0xD8, 0xFF, 0xE0])
    }

    #[tokio::test]
    async fn clean_image_is_stored_with_zero_defects() {
        let store = MemoryAnalysisStore::new();
        let analyzer = DefectAnalyzer::new(
            provider_replying(r#"{"defects_found": [], "total_defects": 0}"#),
            Arc::new(store.clone()),
            true,
        );

        let analysis = analyzer.analyze(jpeg_upload()).await.unwrap();
        assert_eq!(analysis.total_defects, 0);
        assert!(analysis.defects_found.is_empty());
        assert_eq!(analysis.image_base64.as_deref(), Some("/9j/4A=="));

        let stored = analyzer.get(&analysis.id).await.unwrap();
        assert_eq!(stored, analysis);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn unparsable_reply_stores_sentinel() {
        let analyzer = DefectAnalyzer::new(
            provider_replying("not json at all"),
            Arc::new(MemoryAnalysisStore::new()),
            true,
        );

        let analysis = analyzer.analyze(jpeg_upload()).await.unwrap();
        let stored = analyzer.get(&analysis.id).await.unwrap();
        assert_eq!(stored.total_defects, 1);
        assert_eq!(stored.defects_found.len(), 1);
        assert_eq!(stored.defects_found[0].defect_type, "Analysis Error");
        assert_eq!(stored.defects_found[0].confidence, 50.0);
        assert_eq!(stored.defects_found[0].severity, "Unknown");
        assert!(stored.analysis_complete);
    }

    #[tokio::test]
    async fn non_image_upload_is_rejected_without_calling_the_model() {
        let mut provider = MockAiProvider::new();
        provider.expect_chat().never();
        let store = MemoryAnalysisStore::new();
        let analyzer = DefectAnalyzer::new(Arc::new(provider), Arc::new(store.clone()), true);

        let upload = ImageUpload::new("notes.txt", Some("text/plain"), b"hello".to_vec());
        let error = analyzer.analyze(upload).await.unwrap_err();
        assert!(matches!(error, DetectiveError::InvalidInput(_)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn provider_failure_persists_nothing() {
        let mut provider = MockAiProvider::new();
        provider.expect_model_name().return_const("mock-model".to_string());
        provider
            .expect_chat()
            .returning(|_, _, _, _| Err(AiProviderError::ApiError("HTTP 500: boom".to_string())));
        let store = MemoryAnalysisStore::new();
        let analyzer = DefectAnalyzer::new(Arc::new(provider), Arc::new(store.clone()), true);

        let error = analyzer.analyze(jpeg_upload()).await.unwrap_err();
        assert!(matches!(error, DetectiveError::Provider(_)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn image_is_dropped_when_not_kept() {
        let analyzer = DefectAnalyzer::new(
            provider_replying(r#"{"defects_found": []}"#),
            Arc::new(MemoryAnalysisStore::new()),
            false,
        );

        let analysis = analyzer.analyze(jpeg_upload()).await.unwrap();
        assert_eq!(analysis.image_base64, None);
        assert_eq!(analysis.total_defects, 0);
    }
}
