use std::sync::Arc;
use crate::enums::storage_backend::StorageBackend;
use crate::errors::DetectiveResult;
use crate::services::stores::memory_store::MemoryAnalysisStore;
use crate::services::stores::mongo_store::MongoAnalysisStore;
use crate::structs::config::database_config::DatabaseConfig;
use crate::traits::analysis_store::AnalysisStore;

pub mod memory_store;
pub mod mongo_store;

pub async fn create_store(config: &DatabaseConfig) -> DetectiveResult<Arc<dyn AnalysisStore>> {
    match config.backend {
        StorageBackend::Mongodb => Ok(Arc::new(MongoAnalysisStore::connect(config).await?)),
        StorageBackend::Memory => {
            log::info!("🧠 Using in-memory analysis store; records are lost on exit");
            Ok(Arc::new(MemoryAnalysisStore::new()))
        }
    }
}
