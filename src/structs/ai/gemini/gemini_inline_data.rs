use serde::{Deserialize, Serialize};

/// Base64 payload sent inline with a content part.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GeminiInlineData {
    pub mime_type: String,
    pub data: String,
}
