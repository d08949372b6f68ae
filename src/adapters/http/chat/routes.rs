//! Route definitions for the chat endpoints

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{chat, health, preflight, ChatAppState};

/// Create chat router with all endpoints
///
/// # Endpoints
///
/// - `POST /chat` - Answer a chat message
/// - `OPTIONS /chat` - Pre-flight probe, returns `{}`
/// - `GET /health` - Liveness probe
pub fn chat_router() -> Router<ChatAppState> {
    Router::new()
        .route("/chat", post(chat).options(preflight))
        .route("/health", get(health))
}
