//! Error types for LLM operations.

use thiserror::Error;

/// Result type for LLM operations.
pub type Result<T> = std::result::Result<T, AiError>;

/// Errors that can occur while producing an AI narrative.
#[derive(Debug, Error)]
pub enum AiError {
    /// Missing API key
    #[error("OPENAI_API_KEY environment variable not set")]
    MissingApiKey,

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API rejected the credentials
    #[error("OpenAI authentication failed")]
    AuthenticationFailed,

    /// API rate limit hit
    #[error("OpenAI rate limit exceeded: {0}")]
    RateLimited(String),

    /// API rejected the request
    #[error("OpenAI rejected the request: {0}")]
    InvalidRequest(String),

    /// Response did not have the expected shape
    #[error("Unexpected OpenAI response: {0}")]
    UnexpectedResponse(String),

    /// Prompt assembly failed
    #[error("Prompt assembly error: {0}")]
    Prompt(String),
}

impl From<csv::Error> for AiError {
    fn from(err: csv::Error) -> Self {
        Self::Prompt(err.to_string())
    }
}
