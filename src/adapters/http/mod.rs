//! HTTP adapters - REST API implementations.
//!
//! The chat adapter exposes the assistant endpoint; this module assembles it
//! with the cross-cutting layers every response goes through.

pub mod chat;

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::HeaderValue;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

// Re-export key types for convenience
pub use chat::chat_router;
pub use chat::ChatAppState;

/// Build the complete application router.
///
/// Layers, outermost first: CORS headers, request tracing, panic recovery.
/// The CORS headers are therefore present on every response, including
/// the 500 produced from a recovered panic.
pub fn app(state: ChatAppState) -> Router {
    chat_router()
        .with_state(state)
        .layer(CatchPanicLayer::custom(chat::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST,OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
}
