use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crate::config::constants::IMAGE_CONTENT_TYPE_PREFIX;
use crate::errors::{DetectiveError, DetectiveResult};

/// A received file before it is sent to the model.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// An upload that passed the media-type check, ready for the model.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedImage {
    pub filename: String,
    pub mime_type: String,
    pub base64: String,
}

impl ImageUpload {
    pub fn new(filename: &str, content_type: Option<&str>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.to_string(),
            content_type: content_type.map(|c| c.to_string()),
            bytes,
        }
    }

    /// Only the declared type is checked; the payload itself is not sniffed.
    pub fn validate(&self) -> DetectiveResult<&str> {
        match self.content_type.as_deref() {
            Some(content_type) if content_type.starts_with(IMAGE_CONTENT_TYPE_PREFIX) => Ok(content_type),
            _ => Err(DetectiveError::invalid_input("Only image files are supported")),
        }
    }

    pub fn encode(self) -> DetectiveResult<EncodedImage> {
        let mime_type = self.validate()?.to_string();

        Ok(EncodedImage {
            filename: self.filename,
            mime_type,
            base64: STANDARD.encode(&self.bytes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_image_payload() {
        let upload = ImageUpload::new("dot.png", Some("image/png"), b"hello".to_vec());
        let encoded = upload.encode().unwrap();
        assert_eq!(encoded.base64, "aGVsbG8=");
        assert_eq!(encoded.mime_type, "image/png");
        assert_eq!(encoded.filename, "dot.png");
    }

    #[test]
    fn rejects_non_image_types() {
        let upload = ImageUpload::new("notes.txt", Some("text/plain"), b"text".to_vec());
        let error = upload.encode().unwrap_err();
        assert!(matches!(error, DetectiveError::InvalidInput(_)));
        assert_eq!(error.to_string(), "Only image files are supported");
    }

    #[test]
    fn rejects_missing_content_type() {
        let upload = ImageUpload::new("blob", None, vec![1, 2, 3]);
        assert!(upload.validate().is_err());
    }

    #[test]
    fn accepts_any_declared_image_subtype() {
        let upload = ImageUpload::new("fake.jpg", Some("image/x-anything"), b"not really".to_vec());
        assert!(upload.encode().is_ok());
    }
}
