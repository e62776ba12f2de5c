use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tracing::info;

use crate::config::DEFAULT_MAX_UPLOAD_BYTES;
use crate::handlers::ai::{enhance_form, extract_form_text, process_form};
use crate::handlers::forms::{
    create_form, delete_form, get_form, list_form_submissions, list_forms, list_submissions,
    report, submit_form, update_form,
};
use crate::handlers::health::{health_check, root};
use crate::handlers::AppState;

pub fn create_router(app_state: Arc<AppState>) -> Router {
    create_router_with_limit(app_state, DEFAULT_MAX_UPLOAD_BYTES)
}

pub fn create_router_with_limit(app_state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    let mut router = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check));

    // Forms routes: upload, pass-through CRUD and reporting
    let forms_routes = Router::new()
        .route("/api/forms", get(list_forms))
        .route("/api/forms/", get(list_forms))
        .route("/api/forms/upload", post(process_form))
        .route("/api/forms/create", post(create_form))
        .route("/api/forms/submissions", get(list_submissions))
        .route("/api/forms/report", get(report))
        .route("/api/forms/:form_id", get(get_form).put(update_form))
        .route("/api/forms/:form_id/submit", post(submit_form));
    router = router.merge(forms_routes);

    // Direct mirror of the forms backend
    let formio_routes = Router::new()
        .route("/api/formio/forms", get(list_forms).post(create_form))
        .route(
            "/api/formio/forms/:form_id",
            get(get_form).put(update_form).delete(delete_form),
        )
        .route(
            "/api/formio/forms/:form_id/submissions",
            get(list_form_submissions).post(submit_form),
        );
    router = router.merge(formio_routes);

    // AI pipelines
    let ai_routes = Router::new()
        .route("/api/ai/process-form", post(process_form))
        .route("/api/ai/enhance-form", post(enhance_form))
        .route("/api/ai/extract-text", post(extract_form_text));
    router = router.merge(ai_routes);

    info!(
        "Routes registered, uploads limited to {} bytes",
        max_upload_bytes
    );

    router
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(app_state)
}
