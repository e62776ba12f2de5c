use std::fmt;

use serde_json::{json, Map, Value};

use crate::error::{AppError, Upstream};

/// A form.io form definition. Its shape is decided by the model and by the
/// forms backend, so it stays an untyped JSON object.
pub type FormSchema = Map<String, Value>;

/// Submitted field values plus whatever metadata the backend attaches.
pub type SubmissionData = Map<String, Value>;

/// File kinds accepted by the upload endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    Jpeg,
    Png,
}

impl MediaType {
    pub fn from_content_type(content_type: &str) -> Result<Self, AppError> {
        match content_type {
            "application/pdf" => Ok(MediaType::Pdf),
            "image/jpeg" => Ok(MediaType::Jpeg),
            "image/png" => Ok(MediaType::Png),
            _ => Err(AppError::InvalidMediaType {
                content_type: content_type.to_string(),
            }),
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            MediaType::Pdf => "application/pdf",
            MediaType::Jpeg => "image/jpeg",
            MediaType::Png => "image/png",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            MediaType::Pdf => "pdf",
            MediaType::Jpeg => "jpg",
            MediaType::Png => "png",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

/// Parse a model reply as a form schema. Anything but a JSON object fails.
pub fn parse_schema(reply: &str) -> Result<FormSchema, AppError> {
    serde_json::from_str::<FormSchema>(reply.trim()).map_err(|e| {
        AppError::unparsable(Upstream::Model, format!("reply is not a JSON object: {}", e))
    })
}

/// True when a component is a button whose action is "submit".
pub fn is_submit_button(component: &Value) -> bool {
    component.get("type").and_then(Value::as_str) == Some("button")
        && component.get("action").and_then(Value::as_str) == Some("submit")
}

/// The button appended to extracted forms that came back without one.
pub fn default_submit_button() -> Value {
    json!({
        "input": true,
        "label": "Submit",
        "tableView": false,
        "key": "submit",
        "size": "md",
        "leftIcon": "",
        "rightIcon": "",
        "block": false,
        "action": "submit",
        "disableOnInvalid": false,
        "theme": "primary",
        "type": "button"
    })
}
