//! HTTP handlers for the chat endpoint
//!
//! These handlers connect Axum routes to the chat pipeline.

use std::any::Any;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::Instrument;
use uuid::Uuid;

use crate::application::{HandleMessageCommand, HandleMessageHandler, PipelineError};

use super::dto::{ChatRequest, ChatResponse, ErrorReply};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct ChatAppState {
    pub handler: Arc<HandleMessageHandler>,
}

impl ChatAppState {
    pub fn new(handler: HandleMessageHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════════

/// Failures surfaced to the widget. Bodies are fixed strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatApiError {
    /// Missing, malformed or empty message
    #[error("invalid chat input")]
    InvalidInput,
    /// Anything else
    #[error("internal error")]
    Internal,
}

impl From<PipelineError> for ChatApiError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::EmptyMessage => ChatApiError::InvalidInput,
        }
    }
}

impl From<BytesRejection> for ChatApiError {
    fn from(rejection: BytesRejection) -> Self {
        tracing::debug!(
            status = %rejection.status(),
            error = %rejection.body_text(),
            "Rejected unreadable chat request body"
        );
        ChatApiError::InvalidInput
    }
}

impl IntoResponse for ChatApiError {
    fn into_response(self) -> Response {
        match self {
            ChatApiError::InvalidInput => {
                (StatusCode::BAD_REQUEST, Json(ErrorReply::enter_message())).into_response()
            }
            ChatApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorReply::internal()),
            )
                .into_response(),
        }
    }
}

/// Converts a handler panic into the generic 500 reply.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = %detail, "Chat handler panicked");

    ChatApiError::Internal.into_response()
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// Answer a chat message
///
/// POST /chat
pub async fn chat(
    State(app_state): State<ChatAppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatResponse>, ChatApiError> {
    let request = parse_request(&body?)?;
    let trace_id = Uuid::new_v4().to_string();
    let span = tracing::info_span!("chat", trace_id = %trace_id);

    let cmd = HandleMessageCommand {
        message: request.into_message(),
        trace_id,
    };

    let envelope = app_state.handler.handle(cmd).instrument(span).await?;

    Ok(Json(envelope.into()))
}

/// Pre-flight or probe request; never runs the pipeline
///
/// OPTIONS /chat
pub async fn preflight() -> Json<serde_json::Value> {
    Json(serde_json::json!({}))
}

/// Liveness probe
///
/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// An empty body is treated as `{}`; anything unparseable is invalid input.
fn parse_request(body: &[u8]) -> Result<ChatRequest, ChatApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ChatRequest::default());
    }

    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected malformed chat request body");
        ChatApiError::InvalidInput
    })
}
