//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `ai` - OpenAI-compatible chat completions and a scripted mock
//! - `knowledge` - Keyword-indexed static knowledge base
//! - `http` - Axum routes for the chat widget

pub mod ai;
pub mod http;
pub mod knowledge;
