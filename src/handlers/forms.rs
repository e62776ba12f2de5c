use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::error::AppError;
use crate::handlers::{AppJson, AppState};
use crate::models::form::{FormSchema, SubmissionData};
use crate::models::report::Report;
use crate::services::report::generate_report;

// List all forms
pub async fn list_forms(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    info!("Received request to list forms");
    let forms = state.backend.list_forms().await?;
    Ok(Json(forms))
}

// Get a single form
pub async fn get_form(
    State(state): State<Arc<AppState>>,
    Path(form_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    info!("Received request for form: {}", form_id);
    let form = state.backend.get_form(&form_id).await?;
    Ok(Json(form))
}

// Create a form from a schema
pub async fn create_form(
    State(state): State<Arc<AppState>>,
    AppJson(schema): AppJson<FormSchema>,
) -> Result<Json<Value>, AppError> {
    let title = schema
        .get("title")
        .and_then(|title| title.as_str())
        .unwrap_or("untitled");
    info!("Received request to create form: {}", title);
    let result = state.backend.create_form(&schema).await?;
    Ok(Json(result))
}

// Replace a form's schema
pub async fn update_form(
    State(state): State<Arc<AppState>>,
    Path(form_id): Path<String>,
    AppJson(schema): AppJson<FormSchema>,
) -> Result<Json<Value>, AppError> {
    info!("Received request to update form: {}", form_id);
    let result = state.backend.update_form(&form_id, &schema).await?;
    Ok(Json(result))
}

// Delete a form
pub async fn delete_form(
    State(state): State<Arc<AppState>>,
    Path(form_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    info!("Received request to delete form: {}", form_id);
    state.backend.delete_form(&form_id).await?;
    info!("Deleted form {}", form_id);
    Ok(Json(json!({ "message": "Form deleted successfully" })))
}

// Submit data to a form
pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    Path(form_id): Path<String>,
    AppJson(submission): AppJson<SubmissionData>,
) -> Result<Json<Value>, AppError> {
    info!("Received submission for form: {}", form_id);
    let result = state.backend.create_submission(&form_id, &submission).await?;
    Ok(Json(result))
}

// List submissions for one form
pub async fn list_form_submissions(
    State(state): State<Arc<AppState>>,
    Path(form_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    info!("Received request for submissions of form: {}", form_id);
    let submissions = state.backend.list_form_submissions(&form_id).await?;
    Ok(Json(submissions))
}

// List submissions across all forms
pub async fn list_submissions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    info!("Received request to list all submissions");
    let submissions = state.backend.list_submissions().await?;
    Ok(Json(submissions))
}

// Maintenance report over flagged submissions
pub async fn report(State(state): State<Arc<AppState>>) -> Result<Json<Report>, AppError> {
    info!("Received request to generate report");
    let report = generate_report(state.backend.as_ref()).await?;
    Ok(Json(report))
}
