use super::ApiClient;
use crate::constants::{MAX_UPLOAD_MB, VALID_IMAGE_MIMES};
use crate::error::Result;
use crate::images::{upload_image_url, EntityKind};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::path::Path;
use tracing::{error, info, instrument, warn};

/// Structured outcome of an image upload; failures are data, not errors,
/// so the caller can display `message` directly.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadOutcome {
    pub success: bool,
    pub image_url: Option<String>,
    pub message: String,
}

impl UploadOutcome {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            image_url: None,
            message: message.into(),
        }
    }
}

/// Field names the backend has been seen storing the uploaded filename
/// under, in priority order. Blank values lose to later candidates.
const FILE_NAME_FIELDS: [&str; 10] = [
    "/data/foto",
    "/data/imagen",
    "/data/img",
    "/foto",
    "/imagen",
    "/img",
    "/imageUrl",
    "/url",
    "/fileName",
    "/filename",
];

/// Extracts the uploaded file's name from whichever field the backend
/// chose this time.
pub fn extract_file_name(body: &Value) -> Option<String> {
    for pointer in FILE_NAME_FIELDS {
        if let Some(name) = body.pointer(pointer).and_then(Value::as_str) {
            if !name.trim().is_empty() {
                return Some(name.to_string());
            }
        }
    }
    None
}

pub fn is_valid_image_mime(mime: &str) -> bool {
    VALID_IMAGE_MIMES.contains(&mime)
}

/// Size cap check, inclusive at the boundary
pub fn is_valid_file_size(size_bytes: u64, max_mb: u64) -> bool {
    size_bytes <= max_mb * 1024 * 1024
}

/// Best-effort MIME guess from the file extension
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

impl ApiClient {
    /// Uploads an image for `entity`/`id` and reports a structured outcome.
    /// Never returns a hard error: transport and server failures both land
    /// in `UploadOutcome { success: false, .. }`.
    #[instrument(skip(self, file_path), fields(file = %file_path.display()))]
    pub async fn upload_image(&self, entity: &str, id: i64, file_path: &Path) -> UploadOutcome {
        match self.try_upload(entity, id, file_path).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Image upload failed: {}", e);
                UploadOutcome::failure(format!("Connection error while uploading image: {}", e))
            }
        }
    }

    async fn try_upload(&self, entity: &str, id: i64, file_path: &Path) -> Result<UploadOutcome> {
        let bytes = tokio::fs::read(file_path).await?;
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "imagen".to_string());

        let url = format!("{}/{}/upload-image", self.api_url(entity), id);
        info!(
            "Uploading image to {}: {} ({} bytes)",
            url,
            file_name,
            bytes.len()
        );

        let mut part = Part::bytes(bytes).file_name(file_name);
        if let Some(mime) = mime_for_path(file_path) {
            part = part.mime_str(mime)?;
        }
        let form = Form::new().part("imagen", part);

        let response = self.http().post(&url).multipart(form).send().await?;
        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        if !status.is_success() {
            let message = body
                .pointer("/message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Upload rejected with status {}", status));
            return Ok(UploadOutcome::failure(message));
        }

        let message = body
            .pointer("/message")
            .and_then(Value::as_str)
            .unwrap_or("Image uploaded successfully")
            .to_string();

        let image_url = match extract_file_name(&body) {
            Some(name) => Some(upload_image_url(
                self.base_url(),
                EntityKind::parse(entity),
                &name,
            )),
            None => {
                warn!("Could not extract uploaded file name from response: {}", body);
                None
            }
        };

        Ok(UploadOutcome {
            success: true,
            image_url,
            message,
        })
    }
}
