use axum::{
    extract::{Multipart, State},
    response::Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::error::AppError;
use crate::handlers::{read_upload, AppJson, AppState};
use crate::models::form::FormSchema;
use crate::services::enhancement::enhance;
use crate::services::extraction::{extract, extract_text};

// Infer a form schema from an uploaded scan
pub async fn process_form(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let upload = read_upload(multipart).await?;
    info!(
        "Received form to process: {:?} ({})",
        upload.file_name, upload.content_type
    );

    let schema = extract(
        state.model.as_ref(),
        &state.models,
        &upload.bytes,
        &upload.content_type,
    )
    .await?;

    let component_count = schema
        .get("components")
        .and_then(|components| components.as_array())
        .map_or(0, |components| components.len());
    info!("Extracted form with {} components", component_count);
    Ok(Json(json!({ "form_structure": schema })))
}

// Refine an existing schema
pub async fn enhance_form(
    State(state): State<Arc<AppState>>,
    AppJson(schema): AppJson<FormSchema>,
) -> Result<Json<FormSchema>, AppError> {
    info!("Received request to enhance form");

    let enhanced = enhance(state.model.as_ref(), &state.models, &schema).await?;
    Ok(Json(enhanced))
}

// Transcribe the text of an uploaded scan
pub async fn extract_form_text(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let upload = read_upload(multipart).await?;
    info!(
        "Received form for text extraction: {:?} ({})",
        upload.file_name, upload.content_type
    );

    let text = extract_text(
        state.model.as_ref(),
        &state.models,
        &upload.bytes,
        &upload.content_type,
    )
    .await?;

    info!("Extracted {} characters of text", text.len());
    Ok(Json(json!({ "text": text })))
}
