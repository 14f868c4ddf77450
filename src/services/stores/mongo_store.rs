use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use crate::errors::{DetectiveError, DetectiveResult};
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::database_config::DatabaseConfig;
use crate::traits::analysis_store::AnalysisStore;

/// MongoDB-backed store. `upload_time` is kept as fixed-width text, so the
/// history sort runs on the string field.
#[derive(Clone)]
pub struct MongoAnalysisStore {
    collection: Collection<AnalysisResult>,
}

impl MongoAnalysisStore {
    /// Creating the client does not contact the server; connection problems
    /// surface on the first operation.
    pub async fn connect(config: &DatabaseConfig) -> DetectiveResult<Self> {
        let client = Client::with_uri_str(&config.url)
            .await
            .map_err(|e| DetectiveError::storage_error("connect", &e.to_string()))?;

        let collection = client
            .database(&config.name)
            .collection::<AnalysisResult>(&config.collection);

        log::info!("🗄️ Using MongoDB database '{}' collection '{}'", config.name, config.collection);
        Ok(Self { collection })
    }
}

#[async_trait]
impl AnalysisStore for MongoAnalysisStore {
    async fn insert(&self, record: &AnalysisResult) -> DetectiveResult<()> {
        self.collection
            .insert_one(record)
            .await
            .map_err(|e| DetectiveError::storage_error("insert", &e.to_string()))?;

        log::debug!("💾 Stored analysis {}", record.id);
        Ok(())
    }

    async fn list_recent(&self, limit: u32) -> DetectiveResult<Vec<AnalysisResult>> {
        // MongoDB treats a zero limit as "no limit".
        if limit == 0 {
            return Ok(Vec::new());
        }

        let cursor = self.collection
            .find(doc! {})
            .sort(doc! { "upload_time": -1 })
            .limit(i64::from(limit))
            .await
            .map_err(|e| DetectiveError::storage_error("find", &e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| DetectiveError::storage_error("read history", &e.to_string()))
    }

    async fn get_by_id(&self, id: &str) -> DetectiveResult<AnalysisResult> {
        self.collection
            .find_one(doc! { "id": id })
            .await
            .map_err(|e| DetectiveError::storage_error("find_one", &e.to_string()))?
            .ok_or_else(|| DetectiveError::not_found("Analysis not found"))
    }

    fn backend_name(&self) -> &'static str {
        "mongodb"
    }
}
