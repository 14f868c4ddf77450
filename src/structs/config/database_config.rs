use serde::{Deserialize, Serialize};
use crate::enums::storage_backend::StorageBackend;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    #[serde(default = "ConfigHelper::default_mongo_url")]
    pub url: String,

    #[serde(default = "ConfigHelper::default_db_name")]
    pub name: String,

    #[serde(default = "ConfigHelper::default_collection")]
    pub collection: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            url: ConfigHelper::default_mongo_url(),
            name: ConfigHelper::default_db_name(),
            collection: ConfigHelper::default_collection(),
        }
    }
}
