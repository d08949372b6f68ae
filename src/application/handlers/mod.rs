//! Application handlers.
//!
//! Command handlers that orchestrate domain operations over the ports.

pub mod chat;

pub use chat::{
    GenerationClient, GenerationError, HandleMessageCommand, HandleMessageHandler, PipelineError,
    ResponseEnvelope, APOLOGY_REPLY,
};
