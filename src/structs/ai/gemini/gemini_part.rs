use serde::{Deserialize, Serialize};
use crate::structs::ai::gemini::gemini_inline_data::GeminiInlineData;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum GeminiPart {
    Text {
        text: String,
    },
    InlineData {
        inline_data: GeminiInlineData,
    },
}

impl GeminiPart {
    pub fn text(text: &str) -> Self {
        GeminiPart::Text { text: text.to_string() }
    }

    pub fn image(mime_type: &str, base64: &str) -> Self {
        GeminiPart::InlineData {
            inline_data: GeminiInlineData {
                mime_type: mime_type.to_string(),
                data: base64.to_string(),
            },
        }
    }
}
