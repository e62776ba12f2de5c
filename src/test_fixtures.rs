//! Shared helpers for tests: sample payloads and a throwaway upstream server.

use axum::Router;
use serde_json::{json, Value};

use crate::models::form::FormSchema;

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no local address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test upstream server failed");
    });

    format!("http://{}", addr)
}

/// A form as a vision model might return it, without a submit button.
pub fn schema_without_submit() -> Value {
    json!({
        "title": "Site Inspection",
        "display": "form",
        "components": [
            {"type": "textfield", "key": "inspector", "label": "Inspector", "input": true},
            {"type": "checkbox", "key": "hasIssues", "label": "Issues found?", "input": true}
        ]
    })
}

/// A form that already ends with a submit button.
pub fn schema_with_submit() -> Value {
    json!({
        "title": "Site Inspection",
        "display": "form",
        "components": [
            {"type": "textfield", "key": "inspector", "label": "Inspector", "input": true},
            {"type": "button", "key": "send", "label": "Send", "action": "submit", "input": true}
        ]
    })
}

pub fn as_schema(value: Value) -> FormSchema {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}

/// Submissions as listed by the backend: one flagged, the rest not.
pub fn sample_submissions() -> Value {
    json!([
        {
            "_id": "sub-a",
            "form": "form-1",
            "created": "2025-03-30T01:00:00.000Z",
            "data": {"hasIssues": true, "location": "Roof", "issuePriority": "High"}
        },
        {
            "_id": "sub-b",
            "form": "form-1",
            "created": "2025-03-30T02:00:00.000Z",
            "data": {"hasIssues": "true", "location": "Basement"}
        },
        {
            "_id": "sub-c",
            "form": "form-2",
            "created": "2025-03-31T09:30:00.000Z",
            "data": {"inspector": "Kim"}
        }
    ])
}
