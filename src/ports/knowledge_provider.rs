//! Knowledge Provider Port - Grounding text for assistant replies.
//!
//! The pipeline treats the knowledge source as a black box: message text in,
//! a block of domain context out. Failures are never fatal to a chat turn;
//! the caller substitutes an empty context.

use async_trait::async_trait;

/// Port for looking up domain context relevant to a user message.
#[async_trait]
pub trait KnowledgeProvider: Send + Sync {
    /// Returns grounding text for the message, possibly empty.
    async fn fetch(&self, message: &str) -> Result<String, KnowledgeError>;
}

/// Knowledge lookup errors.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    /// Backing source could not be reached or read.
    #[error("knowledge source unavailable: {0}")]
    Unavailable(String),

    /// Backing source returned data that could not be decoded.
    #[error("invalid knowledge data: {0}")]
    InvalidData(String),
}
