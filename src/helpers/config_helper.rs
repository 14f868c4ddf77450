use crate::config::constants::{
    DEFAULT_DB_NAME, DEFAULT_GEMINI_MODEL, DEFAULT_HOST, DEFAULT_LOG_LEVEL, DEFAULT_MONGO_URL,
    DEFAULT_PORT, ANALYSES_COLLECTION, GEMINI_BASE_URL, GOOGLE_API_KEY_ENV,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_PORT
    }

    pub fn default_cors_origins() -> Vec<String> {
        vec!["*".to_string()]
    }

    pub fn default_mongo_url() -> String {
        DEFAULT_MONGO_URL.to_string()
    }

    pub fn default_db_name() -> String {
        DEFAULT_DB_NAME.to_string()
    }

    pub fn default_collection() -> String {
        ANALYSES_COLLECTION.to_string()
    }

    pub fn default_model() -> String {
        DEFAULT_GEMINI_MODEL.to_string()
    }

    pub fn default_base_url() -> String {
        GEMINI_BASE_URL.to_string()
    }

    pub fn default_api_key_env() -> String {
        GOOGLE_API_KEY_ENV.to_string()
    }

    pub fn default_store_image() -> bool {
        true
    }

    pub fn default_log_level() -> String {
        DEFAULT_LOG_LEVEL.to_string()
    }
}
