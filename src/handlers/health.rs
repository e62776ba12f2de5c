use axum::response::Json;
use serde_json::{json, Value};

// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn root() -> Json<Value> {
    Json(json!({"message": "Welcome to Digital Form Builder API"}))
}
