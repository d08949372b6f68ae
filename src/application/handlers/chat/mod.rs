//! Chat Command Handlers
//!
//! ## Commands
//! - `HandleMessage` - Classify a message, generate a grounded reply and resolve the follow-up action
//!
//! ## Collaborators
//! - `GenerationClient` - One-shot, time-bounded call to the AI provider

mod generation_client;
mod handle_message;

pub use generation_client::{GenerationClient, GenerationError, GENERATION_TEMPERATURE};
pub use handle_message::{
    HandleMessageCommand, HandleMessageHandler, PipelineError, ResponseEnvelope, APOLOGY_REPLY,
};
