use bytes::BufMut;
use futures::TryStreamExt;
use warp::multipart::FormData;
use crate::config::constants::UPLOAD_FIELD_NAME;
use crate::errors::{DetectiveError, DetectiveResult};
use crate::structs::image_upload::ImageUpload;

/// Reads the `file` part of a multipart form fully into memory. Other parts
/// are skipped.
pub async fn read_image_upload(mut form: FormData) -> DetectiveResult<ImageUpload> {
    while let Some(part) = form.try_next().await? {
        if part.name() != UPLOAD_FIELD_NAME {
            continue;
        }

        let filename = part.filename().unwrap_or_default().to_string();
        let content_type = part.content_type().map(|c| c.to_string());

        let bytes = part
            .stream()
            .try_fold(Vec::new(), |mut buffer, chunk| async move {
                buffer.put(chunk);
                Ok(buffer)
            })
            .await?;

        return Ok(ImageUpload {
            filename,
            content_type,
            bytes,
        });
    }

    Err(DetectiveError::invalid_input("No file uploaded in form field 'file'"))
}
