use tracing::info;

use crate::config::ModelSettings;
use crate::error::AppError;
use crate::models::chat::{ChatMessage, ChatRequest, ResponseFormat};
use crate::models::form::{parse_schema, FormSchema};
use crate::openai::ChatModel;
use crate::services::prompts::{enhancement_user_prompt, ENHANCEMENT_SYSTEM_PROMPT};

/// Ask the text model to refine an existing schema.
///
/// Unlike extraction, the reply is not checked for a submit button; whatever
/// JSON object the model returns is the enhanced schema.
pub async fn enhance(
    model: &dyn ChatModel,
    settings: &ModelSettings,
    schema: &FormSchema,
) -> Result<FormSchema, AppError> {
    let form_json = serde_json::to_string_pretty(schema)
        .map_err(|e| AppError::Internal(format!("Failed to serialize form: {}", e)))?;

    info!(
        "Enhancing form with {} top-level keys using {}",
        schema.len(),
        settings.text_model
    );

    let request = ChatRequest {
        model: settings.text_model.clone(),
        messages: vec![
            ChatMessage::system(ENHANCEMENT_SYSTEM_PROMPT),
            ChatMessage::user(enhancement_user_prompt(&form_json)),
        ],
        response_format: Some(ResponseFormat::json_object()),
        max_tokens: settings.max_tokens,
    };

    let reply = model.complete(request).await?;
    parse_schema(&reply)
}
