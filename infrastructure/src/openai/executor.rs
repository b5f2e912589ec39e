//! HTTP role executor against an OpenAI-compatible API
//!
//! One executor invocation is one `chat/completions` call: the persona's
//! instructions go out as the system message, the constructed prompt as
//! the user message. No retries live here; a failed call surfaces as an
//! [`ExecutorError`] and aborts the round upstream.

use crate::openai::protocol::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use roundtable_application::{ExecutorError, RoleExecutor};
use roundtable_domain::log_preview;
use thiserror::Error;
use tracing::debug;

/// Default API endpoint
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Runtime configuration for the executor adapter
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    pub base_url: String,
    pub model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub temperature: Option<f32>,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            temperature: None,
        }
    }
}

/// Errors constructing the adapter
#[derive(Error, Debug)]
pub enum OpenAiSetupError {
    #[error("API key environment variable '{0}' is not set")]
    MissingApiKey(String),
}

/// [`RoleExecutor`] adapter over an OpenAI-compatible HTTP API
pub struct OpenAiExecutor {
    client: reqwest::Client,
    config: ExecutorConfig,
    api_key: String,
}

impl OpenAiExecutor {
    /// Build the adapter, reading the API key from the configured
    /// environment variable
    pub fn from_env(config: ExecutorConfig) -> Result<Self, OpenAiSetupError> {
        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| OpenAiSetupError::MissingApiKey(config.api_key_env.clone()))?;
        Ok(Self {
            client: reqwest::Client::new(),
            config,
            api_key,
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl RoleExecutor for OpenAiExecutor {
    async fn execute(&self, instructions: &str, prompt: &str) -> Result<String, ExecutorError> {
        let request = ChatRequest::single_shot(
            &self.config.model,
            instructions,
            prompt,
            self.config.temperature,
        );

        debug!(
            "Executing against {} ({} prompt bytes)",
            self.config.model,
            prompt.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ExecutorError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExecutorError::RequestFailed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                log_preview(&body, 200)
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ExecutorError::MalformedResponse(e.to_string()))?;

        parsed.into_text().ok_or(ExecutorError::EmptyResponse)
    }
}
