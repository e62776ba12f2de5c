use std::env;
use std::net::SocketAddr;

use dotenv::dotenv;
use thiserror::Error;

pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_VISION_MODEL: &str = "gpt-4o";
pub const DEFAULT_TEXT_MODEL: &str = "gpt-4";
pub const DEFAULT_MAX_TOKENS: u32 = 4000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set in environment")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Connection settings for the form.io server.
#[derive(Debug, Clone)]
pub struct FormioConfig {
    pub base_url: String,
    pub api_key: String,
}

/// Connection settings for the OpenAI-compatible chat completions API.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_base: String,
    pub api_key: String,
}

/// Which models the pipelines ask for and how long their replies may be.
#[derive(Debug, Clone)]
pub struct ModelSettings {
    pub vision_model: String,
    pub text_model: String,
    pub max_tokens: u32,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            vision_model: DEFAULT_VISION_MODEL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub max_upload_bytes: usize,
    pub formio: FormioConfig,
    pub openai: OpenAiConfig,
    pub models: ModelSettings,
}

impl Config {
    /// Load configuration from `.env` and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from any name -> value lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let formio = FormioConfig {
            base_url: trim_base_url(required("FORMIO_SERVER_URL")?),
            api_key: required("FORMIO_API_KEY")?,
        };

        let openai = OpenAiConfig {
            api_base: trim_base_url(
                get("OPENAI_API_BASE").unwrap_or_else(|| DEFAULT_OPENAI_API_BASE.to_string()),
            ),
            api_key: required("OPENAI_API_KEY")?,
        };

        let max_tokens = match get("OPENAI_MAX_TOKENS") {
            Some(value) => value.parse::<u32>().map_err(|_| ConfigError::Invalid {
                name: "OPENAI_MAX_TOKENS",
                value,
            })?,
            None => DEFAULT_MAX_TOKENS,
        };

        let models = ModelSettings {
            vision_model: get("OPENAI_VISION_MODEL")
                .unwrap_or_else(|| DEFAULT_VISION_MODEL.to_string()),
            text_model: get("OPENAI_TEXT_MODEL").unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
            max_tokens,
        };

        let bind_value = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::Invalid {
                name: "BIND_ADDR",
                value: bind_value.clone(),
            })?;

        let max_upload_bytes = match get("MAX_UPLOAD_BYTES") {
            Some(value) => value.parse::<usize>().map_err(|_| ConfigError::Invalid {
                name: "MAX_UPLOAD_BYTES",
                value,
            })?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            bind_addr,
            max_upload_bytes,
            formio,
            openai,
            models,
        })
    }
}

fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
