//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),

    #[error("Invalid generation timeout (must be 1-30 seconds)")]
    InvalidGenerationTimeout,

    #[error("Invalid knowledge timeout (must be 1-10000 milliseconds)")]
    InvalidKnowledgeTimeout,

    #[error("Invalid AI base URL format")]
    InvalidBaseUrl,
}
