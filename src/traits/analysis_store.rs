use async_trait::async_trait;
use crate::errors::DetectiveResult;
use crate::structs::analysis_result::AnalysisResult;

/// Persistence gateway for analysis records.
#[async_trait]
pub trait AnalysisStore: Send + Sync {

    /// Stores the record as-is. No idempotency: inserting the same logical
    /// analysis twice yields two documents.
    async fn insert(&self, record: &AnalysisResult) -> DetectiveResult<()>;

    /// Up to `limit` records, newest `upload_time` first.
    async fn list_recent(&self, limit: u32) -> DetectiveResult<Vec<AnalysisResult>>;

    /// `DetectiveError::NotFound` when no record carries `id`.
    async fn get_by_id(&self, id: &str) -> DetectiveResult<AnalysisResult>;

    fn backend_name(&self) -> &'static str;
}
