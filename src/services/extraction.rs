use base64::engine::{general_purpose, Engine};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::ModelSettings;
use crate::error::{AppError, Upstream};
use crate::models::chat::{
    ChatMessage, ChatRequest, ContentPart, FileData, ImageUrl, ResponseFormat,
};
use crate::models::form::{
    default_submit_button, is_submit_button, parse_schema, FormSchema, MediaType,
};
use crate::openai::ChatModel;
use crate::services::prompts::{
    extraction_user_prompt, EXTRACTION_SYSTEM_PROMPT, TEXT_EXTRACTION_SYSTEM_PROMPT,
    TEXT_EXTRACTION_USER_PROMPT,
};

/// Infer a form.io schema from a scanned form.
///
/// The content type is checked before anything is sent. The returned schema
/// holds exactly the components the model produced, plus a submit button
/// appended at the end if the model did not include one.
pub async fn extract(
    model: &dyn ChatModel,
    settings: &ModelSettings,
    content: &[u8],
    content_type: &str,
) -> Result<FormSchema, AppError> {
    let media_type = MediaType::from_content_type(content_type)?;
    info!(
        "Extracting form structure from {} ({} bytes)",
        media_type,
        content.len()
    );

    let request = ChatRequest {
        model: settings.vision_model.clone(),
        messages: vec![
            ChatMessage::system(EXTRACTION_SYSTEM_PROMPT),
            ChatMessage::user_with_parts(vec![
                ContentPart::Text {
                    text: extraction_user_prompt(),
                },
                document_part(content, media_type),
            ]),
        ],
        response_format: Some(ResponseFormat::json_object()),
        max_tokens: settings.max_tokens,
    };

    let reply = model.complete(request).await?;
    let mut schema = parse_schema(&reply)?;

    if ensure_submit_button(&mut schema)? {
        info!("Model reply had no submit button, appended the default one");
    }

    Ok(schema)
}

/// Transcribe all text on a scanned form. The reply is returned unparsed.
pub async fn extract_text(
    model: &dyn ChatModel,
    settings: &ModelSettings,
    content: &[u8],
    content_type: &str,
) -> Result<String, AppError> {
    let media_type = MediaType::from_content_type(content_type)?;
    info!("Extracting text from {} ({} bytes)", media_type, content.len());

    let request = ChatRequest {
        model: settings.vision_model.clone(),
        messages: vec![
            ChatMessage::system(TEXT_EXTRACTION_SYSTEM_PROMPT),
            ChatMessage::user_with_parts(vec![
                ContentPart::Text {
                    text: TEXT_EXTRACTION_USER_PROMPT.to_string(),
                },
                document_part(content, media_type),
            ]),
        ],
        response_format: None,
        max_tokens: settings.max_tokens,
    };

    model.complete(request).await
}

/// Encode the uploaded file as a data URL content part.
///
/// Images go in an `image_url` part; PDFs go in a `file` part because the
/// vision endpoint only takes raster formats as images.
fn document_part(content: &[u8], media_type: MediaType) -> ContentPart {
    let encoded = general_purpose::STANDARD.encode(content);
    debug!("Encoded document to {} bytes of base64", encoded.len());

    let data_url = format!("data:{};base64,{}", media_type.mime(), encoded);
    match media_type {
        MediaType::Pdf => ContentPart::File {
            file: FileData {
                filename: format!("form.{}", media_type.extension()),
                file_data: data_url,
            },
        },
        MediaType::Jpeg | MediaType::Png => ContentPart::ImageUrl {
            image_url: ImageUrl { url: data_url },
        },
    }
}

/// Append the default submit button unless one is present.
/// Returns whether a button was added.
fn ensure_submit_button(schema: &mut FormSchema) -> Result<bool, AppError> {
    let components = schema
        .get_mut("components")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| {
            AppError::unparsable(Upstream::Model, "reply has no \"components\" array")
        })?;

    if components.iter().any(is_submit_button) {
        return Ok(false);
    }

    components.push(default_submit_button());
    Ok(true)
}
