use thiserror::Error;
use warp::http::StatusCode;
use crate::enums::ai_provider_error::AiProviderError;

#[derive(Debug, Error)]
pub enum DetectiveError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Provider(#[from] AiProviderError),

    #[error("Storage error during {operation}: {reason}")]
    Storage {
        operation: String,
        reason: String,
    },

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}{}", .field.as_ref().map(|f| format!(" (field: {})", f)).unwrap_or_default())]
    Configuration {
        message: String,
        field: Option<String>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DetectiveError {
    pub fn invalid_input(message: &str) -> Self {
        Self::InvalidInput(message.to_string())
    }

    pub fn not_found(message: &str) -> Self {
        Self::NotFound(message.to_string())
    }

    pub fn storage_error(operation: &str, reason: &str) -> Self {
        Self::Storage {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn config_error(message: &str, field: Option<&str>) -> Self {
        Self::Configuration {
            message: message.to_string(),
            field: field.map(|f| f.to_string()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

pub type DetectiveResult<T> = Result<T, DetectiveError>;

impl From<toml::de::Error> for DetectiveError {
    fn from(error: toml::de::Error) -> Self {
        DetectiveError::Configuration {
            message: error.message().to_string(),
            field: None,
        }
    }
}

impl From<warp::Error> for DetectiveError {
    fn from(error: warp::Error) -> Self {
        DetectiveError::Upload(error.to_string())
    }
}
