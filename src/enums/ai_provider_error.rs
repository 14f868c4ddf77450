use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum AiProviderError {
    ApiError(String),
    NetworkError(String),
    SerializationError(String),
    AuthenticationError(String),
}

impl AiProviderError {
    pub fn from_status(status: u16, error_text: String) -> Self {
        match status {
            400 => AiProviderError::ApiError(format!("Bad request: {}", error_text)),
            401 => AiProviderError::AuthenticationError(error_text),
            403 => AiProviderError::ApiError(format!("Forbidden: {}", error_text)),
            429 => AiProviderError::ApiError(format!("Rate limit exceeded: {}", error_text)),
            _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, error_text)),
        }
    }
}

impl fmt::Display for AiProviderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AiProviderError::ApiError(msg) => write!(f, "Model API Error: {}", msg),
            AiProviderError::NetworkError(msg) => write!(f, "Network Error: {}", msg),
            AiProviderError::SerializationError(msg) => write!(f, "Serialization Error: {}", msg),
            AiProviderError::AuthenticationError(msg) => write!(f, "Authentication Error: {}", msg),
        }
    }
}

impl Error for AiProviderError {}
