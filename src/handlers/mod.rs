use std::sync::Arc;

use axum::extract::{FromRequest, Multipart};
use tracing::debug;

use crate::client::FormsBackend;
use crate::config::ModelSettings;
use crate::error::AppError;
use crate::openai::ChatModel;

pub mod ai;
pub mod forms;
pub mod health;

/// Multipart field that carries the uploaded form.
pub const UPLOAD_FIELD: &str = "file";

// AppState struct containing shared resources
pub struct AppState {
    pub backend: Arc<dyn FormsBackend>,
    pub model: Arc<dyn ChatModel>,
    pub models: ModelSettings,
}

/// JSON body extractor whose rejections go through `AppError`, so a
/// malformed body gets the same `{"detail", "code"}` shape as every other
/// error.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// A file received through a multipart upload.
#[derive(Debug)]
pub struct Upload {
    pub file_name: Option<String>,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Pull the `file` part out of a multipart body.
///
/// The declared content type is returned as-is; the pipelines decide
/// whether it is acceptable.
pub async fn read_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(|s| s.to_string());
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field.bytes().await?.to_vec();

        debug!(
            "Received upload {:?} ({}, {} bytes)",
            file_name,
            content_type,
            bytes.len()
        );

        return Ok(Upload {
            file_name,
            content_type,
            bytes,
        });
    }

    Err(AppError::InvalidRequest(format!(
        "No '{}' field in multipart body",
        UPLOAD_FIELD
    )))
}
