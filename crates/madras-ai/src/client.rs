//! OpenAI chat-completions client.
//!
//! Speaks the `/chat/completions` wire format, so it also works against
//! OpenAI-compatible local deployments through `OPENAI_API_BASE`.

use crate::error::{AiError, Result};
use crate::prompt::AnalysisPrompt;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4-turbo";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the OpenAI client.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key for authentication.
    pub api_key: String,
    /// Base URL for the API.
    pub api_base: String,
    /// Model to request.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Sampling temperature, if set.
    pub temperature: Option<f32>,
}

impl OpenAiConfig {
    /// Create a new config with the given API key and default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            temperature: None,
        }
    }

    /// Create config from environment variables.
    ///
    /// Reads `OPENAI_API_KEY` (required) plus optional `OPENAI_API_BASE` and
    /// `OPENAI_MODEL`. Loads a local `.env` file first if one is present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| AiError::MissingApiKey)?;
        let api_base =
            std::env::var("OPENAI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            api_base,
            model,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            temperature: None,
        })
    }

    /// Set a custom API base URL.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set the model to request.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the sampling temperature.
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// OpenAI chat-completions client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    /// Create a client with custom configuration.
    pub fn with_config(config: OpenAiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(AiError::Network)?;

        Ok(Self { client, config })
    }

    /// Create a client with the given API key and default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(OpenAiConfig::new(api_key))
    }

    /// Create a client from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::with_config(OpenAiConfig::from_env()?)
    }

    /// Get the current configuration.
    pub const fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    /// Send the analyst prompt and return the narrative text.
    pub async fn analyze(&self, prompt: &AnalysisPrompt) -> Result<String> {
        debug!(model = %self.config.model, api_base = %self.config.api_base, "requesting AI analysis");

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompt.system.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.user.clone(),
                },
            ],
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.api_base))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            return Err(match status.as_u16() {
                401 => AiError::AuthenticationFailed,
                429 => AiError::RateLimited(error_text),
                400 => AiError::InvalidRequest(error_text),
                _ => AiError::UnexpectedResponse(format!("HTTP {status}: {error_text}")),
            });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| AiError::UnexpectedResponse(format!("Failed to parse response: {e}")))?;

        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AiError::UnexpectedResponse("No choices in response".to_string()))?;

        Ok(choice.message.content.trim().to_string())
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}
