//! Chat completions client used by the extraction and enhancement pipelines.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::OpenAiConfig;
use crate::error::{AppError, Upstream};
use crate::models::chat::{ChatCompletionResponse, ChatRequest};

/// A language model that answers one chat request with one text reply.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, request: ChatRequest) -> Result<String, AppError>;
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint
pub struct OpenAiClient {
    client: Client,
    api_base: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(config: &OpenAiConfig) -> Self {
        Self {
            client: Client::new(),
            api_base: config.api_base.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl ChatModel for OpenAiClient {
    async fn complete(&self, request: ChatRequest) -> Result<String, AppError> {
        let url = format!("{}/chat/completions", self.api_base);
        info!(
            "Calling model {} with {} messages",
            request.model,
            request.messages.len()
        );
        debug!("Model API URL: {}", url);

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::transport(Upstream::Model, e))?;

        let status = res.status();
        info!("Model API responded with status: {}", status);

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            warn!("Model API request failed ({}): {}", status, body);
            return Err(AppError::UpstreamRequestFailed {
                service: Upstream::Model,
                status: Some(status.as_u16()),
                body,
            });
        }

        let completion = res
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| AppError::unparsable(Upstream::Model, e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::unparsable(Upstream::Model, "reply contained no message content")
            })
    }
}
