//! HTTP adapters for the chat assistant
//!
//! Exposes the endpoint the storefront chat widget calls.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{panic_response, ChatApiError, ChatAppState};
pub use routes::chat_router;
