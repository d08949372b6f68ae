//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the chat pipeline and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Text generation (OpenAI-compatible chat completions)
//! - `KnowledgeProvider` - Grounding context for a user message

mod ai_provider;
mod knowledge_provider;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};
pub use knowledge_provider::{KnowledgeError, KnowledgeProvider};
