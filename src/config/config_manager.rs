use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DB_NAME_ENV, HOST_ENV, MONGO_URL_ENV, PORT_ENV, STORAGE_BACKEND_ENV,
};
use crate::enums::storage_backend::StorageBackend;
use crate::errors::{DetectiveError, DetectiveResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// The file `load` reads: the explicit path, else the home-directory
    /// default when it exists. `None` means built-in defaults.
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Some(Self::default_config_path()).filter(|path| path.exists()),
        }
    }

    /// File, then environment overrides. Runs before the logger exists, so
    /// callers report the source via `resolve_path` once logging is up.
    pub fn load(path: Option<&Path>) -> DetectiveResult<Config> {
        let mut config = match Self::resolve_path(path) {
            Some(file) => Self::load_file(&file)?,
            None => Config::default(),
        };

        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn load_file(path: &Path) -> DetectiveResult<Config> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// `lookup` is injected so tests do not touch the process environment.
    pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> DetectiveResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value_of = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = value_of(MONGO_URL_ENV) {
            config.database.url = url;
        }
        if let Some(name) = value_of(DB_NAME_ENV) {
            config.database.name = name;
        }
        if let Some(backend) = value_of(STORAGE_BACKEND_ENV) {
            config.database.backend = backend
                .parse::<StorageBackend>()
                .map_err(|e| DetectiveError::config_error(&e, Some(STORAGE_BACKEND_ENV)))?;
        }
        if let Some(host) = value_of(HOST_ENV) {
            config.server.host = host;
        }
        if let Some(port) = value_of(PORT_ENV) {
            config.server.port = port
                .trim()
                .parse()
                .map_err(|_| DetectiveError::config_error(&format!("'{}' is not a valid port", port), Some(PORT_ENV)))?;
        }

        Ok(())
    }

    pub fn create_sample_config(path: &Path) -> DetectiveResult<()> {
        let sample_config = r#"# Defect Detective configuration
# Environment variables MONGO_URL, DB_NAME, HOST, PORT and
# DEFECT_DETECTIVE_STORAGE override the values below.

[server]
host = "0.0.0.0"
port = 8001
cors_origins = ["*"]
# max_upload_bytes = 10485760

[database]
# "mongodb" or "memory"
backend = "mongodb"
url = "mongodb://localhost:27017"
name = "defect_detective"
collection = "analyses"

[ai]
model = "gemini-2.0-flash"
base_url = "https://generativelanguage.googleapis.com/v1beta"
# Name of the environment variable holding the API key
api_key_env = "GOOGLE_API_KEY"
# temperature = 0.2
# max_output_tokens = 2048
store_image = true

[logging]
# Overridden by RUST_LOG
level = "info"
"#;

        if path.exists() {
            return Err(DetectiveError::config_error(
                &format!("{} already exists", path.display()),
                None,
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, sample_config)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config, api_key_present: bool) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.server.host.trim().is_empty() {
            errors.push("server.host must not be empty".to_string());
        }
        if config.server.port == 0 {
            errors.push("server.port must be between 1 and 65535".to_string());
        }
        if config.server.cors_origins.is_empty() {
            errors.push("server.cors_origins must list at least one origin (use \"*\" for any)".to_string());
        }
        if config.server.max_upload_bytes == Some(0) {
            errors.push("server.max_upload_bytes must be greater than zero when set".to_string());
        }

        if config.database.backend == StorageBackend::Mongodb {
            if !(config.database.url.starts_with("mongodb://") || config.database.url.starts_with("mongodb+srv://")) {
                errors.push(format!("database.url '{}' must start with mongodb:// or mongodb+srv://", config.database.url));
            }
            if config.database.name.trim().is_empty() {
                errors.push("database.name must not be empty".to_string());
            }
            if config.database.collection.trim().is_empty() {
                errors.push("database.collection must not be empty".to_string());
            }
        }

        if config.ai.model.trim().is_empty() {
            errors.push("ai.model must not be empty".to_string());
        }
        if !api_key_present {
            errors.push(format!("environment variable {} is not set", config.ai.api_key_env));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
