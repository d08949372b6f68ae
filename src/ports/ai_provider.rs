//! AI Provider Port - Reply generation from an assembled prompt.
//!
//! The chat pipeline sends exactly one prompt per turn and expects either
//! reply text or a typed failure. Vendors plug in behind [`AIProvider`].

use async_trait::async_trait;
use serde::Serialize;

/// Port for text generation.
///
/// One call, one upstream request. Implementations never retry; the caller
/// decides what a failure means for the user.
#[async_trait]
pub trait AIProvider: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError>;

    /// Name and model, for startup logs.
    fn provider_info(&self) -> ProviderInfo;
}

/// A single-prompt generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Full instruction text, sent as the only user turn.
    pub prompt: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    /// Correlation ID shared with the request's log lines.
    pub trace_id: String,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>, trace_id: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: None,
            temperature: None,
            trace_id: trace_id.into(),
        }
    }

    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }
}

/// Generated reply plus what the provider reported about it.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub content: String,
    pub usage: TokenUsage,
    pub model: String,
    pub finish_reason: FinishReason,
}

/// Token counts as reported by the provider; zero when not reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

/// Why the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    /// Hit `max_tokens`; the reply may be cut short.
    Length,
    ContentFilter,
}

impl FinishReason {
    /// Maps the provider's finish reason string, defaulting to `Stop`.
    pub fn from_provider(reason: Option<&str>) -> Self {
        match reason {
            Some("length") => FinishReason::Length,
            Some("content_filter") => FinishReason::ContentFilter,
            _ => FinishReason::Stop,
        }
    }
}

/// Identifies the configured provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    pub name: String,
    pub model: String,
}

impl ProviderInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Generation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AIError {
    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited by provider")]
    RateLimited,

    /// Provider refused the request with a 4xx status.
    #[error("request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// Transport failure or provider-side error.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("no reply within {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Provider answered, but not with a usable completion.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

impl AIError {
    pub fn is_malformed_response(&self) -> bool {
        matches!(self, AIError::MalformedResponse(_))
    }
}
