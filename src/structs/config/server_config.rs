use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "ConfigHelper::default_host")]
    pub host: String,

    #[serde(default = "ConfigHelper::default_port")]
    pub port: u16,

    #[serde(default = "ConfigHelper::default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Upper bound on the multipart body. Unlimited when absent.
    #[serde(default)]
    pub max_upload_bytes: Option<u64>,
}

impl ServerConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: ConfigHelper::default_host(),
            port: ConfigHelper::default_port(),
            cors_origins: ConfigHelper::default_cors_origins(),
            max_upload_bytes: None,
        }
    }
}
