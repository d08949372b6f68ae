//! HTTP DTOs for the chat endpoint
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::ResponseEnvelope;
use crate::domain::assistant::{
    ActionDirective, InboundMessage, Site, DEFAULT_LANGUAGE_CODE,
};

/// Reply shown when the request carries no usable message.
pub const ENTER_MESSAGE_REPLY: &str = "Please enter a message.";

/// Reply shown on unexpected server faults.
pub const INTERNAL_ERROR_REPLY: &str = "Something went wrong. Please try again later.";

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body sent by the chat widget
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub user_message: String,
    pub site: Option<String>,
    pub country: Option<String>,
    pub language: Option<String>,
}

impl ChatRequest {
    pub fn into_message(self) -> InboundMessage {
        InboundMessage {
            text: self.user_message.trim().to_string(),
            site: self.site.as_deref().map(Site::from_code).unwrap_or_default(),
            country: self.country,
            language: self
                .language
                .unwrap_or_else(|| DEFAULT_LANGUAGE_CODE.to_string()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Successful chat response
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub actions: ActionDirective,
}

impl From<ResponseEnvelope> for ChatResponse {
    fn from(envelope: ResponseEnvelope) -> Self {
        Self {
            reply: envelope.reply,
            actions: envelope.actions,
        }
    }
}

/// Error body; the widget renders `reply` as an assistant bubble
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReply {
    pub reply: String,
}

impl ErrorReply {
    pub fn enter_message() -> Self {
        Self {
            reply: ENTER_MESSAGE_REPLY.to_string(),
        }
    }

    pub fn internal() -> Self {
        Self {
            reply: INTERNAL_ERROR_REPLY.to_string(),
        }
    }
}
