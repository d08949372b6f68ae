//! GenerationClient - Single-shot reply generation over the AI provider port

use std::sync::Arc;
use std::time::Duration;

use crate::domain::assistant::PromptDocument;
use crate::ports::{AIError, AIProvider, CompletionRequest};

/// Sampling temperature for every reply. Kept low to limit topic drift.
pub const GENERATION_TEMPERATURE: f32 = 0.2;

/// Why a reply could not be generated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// Transport failure, provider error status, or timeout.
    #[error("generation unavailable: {0}")]
    Unavailable(String),
    /// Provider answered with something that is not a usable reply.
    #[error("invalid generation response: {0}")]
    InvalidResponse(String),
}

impl From<AIError> for GenerationError {
    fn from(err: AIError) -> Self {
        if err.is_malformed_response() {
            GenerationError::InvalidResponse(err.to_string())
        } else {
            GenerationError::Unavailable(err.to_string())
        }
    }
}

/// Calls the text-generation capability once per prompt. Never retries.
#[derive(Clone)]
pub struct GenerationClient {
    provider: Arc<dyn AIProvider>,
    timeout: Duration,
    max_tokens: Option<u32>,
}

impl GenerationClient {
    pub fn new(provider: Arc<dyn AIProvider>, timeout: Duration) -> Self {
        Self {
            provider,
            timeout,
            max_tokens: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub async fn generate(
        &self,
        prompt: &PromptDocument,
        trace_id: &str,
    ) -> Result<String, GenerationError> {
        let mut request = CompletionRequest::new(prompt.as_str(), trace_id)
            .with_temperature(GENERATION_TEMPERATURE);
        if let Some(max) = self.max_tokens {
            request = request.with_max_tokens(max);
        }

        let response = tokio::time::timeout(self.timeout, self.provider.complete(request))
            .await
            .map_err(|_| {
                GenerationError::Unavailable(format!(
                    "no reply within {}ms",
                    self.timeout.as_millis()
                ))
            })??;

        tracing::debug!(
            model = %response.model,
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            finish_reason = ?response.finish_reason,
            "Generated reply"
        );

        let reply = response.content.trim();
        if reply.is_empty() {
            return Err(GenerationError::InvalidResponse(
                "empty completion".to_string(),
            ));
        }

        Ok(reply.to_string())
    }
}
