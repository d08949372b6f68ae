//! Container Assistant server binary.

use std::sync::Arc;

use secrecy::ExposeSecret;
use tracing_subscriber::EnvFilter;

use container_assistant::adapters::ai::{OpenAIConfig, OpenAIProvider};
use container_assistant::adapters::http::{self, ChatAppState};
use container_assistant::adapters::knowledge::StaticKnowledgeBase;
use container_assistant::application::{GenerationClient, HandleMessageHandler};
use container_assistant::config::{AppConfig, ValidationError};
use container_assistant::domain::assistant::supported_language_count;
use container_assistant::ports::{AIProvider, KnowledgeProvider};

fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).pretty().init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_logging(&config);
    config.validate()?;

    let api_key = config
        .ai
        .openai_api_key
        .as_ref()
        .ok_or(ValidationError::MissingRequired("OPENAI_API_KEY"))?;
    let provider = OpenAIProvider::new(
        OpenAIConfig::new(api_key.expose_secret().clone())
            .with_model(config.ai.model.clone())
            .with_base_url(config.ai.base_url.clone())
            .with_timeout(config.ai.timeout()),
    )?;
    let info = provider.provider_info();
    tracing::info!(provider = %info.name, model = %info.model, "AI provider configured");

    let knowledge = match &config.knowledge.path {
        Some(path) => StaticKnowledgeBase::from_yaml_file(path)?,
        None => StaticKnowledgeBase::default(),
    };
    tracing::info!(
        entries = knowledge.len(),
        languages = supported_language_count(),
        "Knowledge base loaded"
    );

    let provider: Arc<dyn AIProvider> = Arc::new(provider);
    let knowledge: Arc<dyn KnowledgeProvider> = Arc::new(knowledge);

    let generator =
        GenerationClient::new(provider, config.ai.timeout()).with_max_tokens(config.ai.max_tokens);
    let handler = HandleMessageHandler::new(knowledge, generator, config.knowledge.timeout());

    let app = http::app(ChatAppState::new(handler));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Container assistant listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Container assistant stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
