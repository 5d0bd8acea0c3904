//! Naurat Importation Bot HTTP server.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use naurat_bot::adapters::ai::{OpenAIConfig, OpenAIProvider};
use naurat_bot::adapters::export::XlsxExporter;
use naurat_bot::adapters::http::{app, AssistantAppState};
use naurat_bot::adapters::postgres::{
    run_migrations, PostgresConversationRepository, PostgresProductRepository,
    PostgresUserRepository,
};
use naurat_bot::application::{
    AskAgentHandler, ExportProductsHandler, GetConversationHandler, LoginHandler,
};
use naurat_bot::config::{AppConfig, ConfigError};
use secrecy::ExposeSecret;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    init_tracing(&config);
    tracing::info!(environment = ?config.server.environment, "Starting Naurat importation bot");

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .test_before_acquire(config.database.test_before_acquire)
        .connect(&config.database.url)
        .await?;
    tracing::info!("Database connection established");

    if config.database.run_migrations {
        run_migrations(&pool).await?;
        tracing::info!("Migrations applied");
    }

    let api_key = config
        .ai
        .openai_api_key
        .as_ref()
        .map(|k| k.expose_secret().clone())
        .unwrap_or_default();
    let ai = Arc::new(OpenAIProvider::new(
        OpenAIConfig::new(api_key)
            .with_model(&config.ai.chat_model)
            .with_base_url(&config.ai.base_url),
    )?);

    let users = Arc::new(PostgresUserRepository::new(pool.clone()));
    let conversations = Arc::new(PostgresConversationRepository::new(pool.clone()));
    let products = Arc::new(PostgresProductRepository::new(pool));

    let state = AssistantAppState::new(
        AskAgentHandler::new(
            ai,
            users.clone(),
            conversations.clone(),
            products.clone(),
            config.ai.assistant_settings(),
        ),
        LoginHandler::new(users.clone()),
        GetConversationHandler::new(users.clone(), conversations),
        ExportProductsHandler::new(users, products, Arc::new(XlsxExporter::new())),
    );

    let router = app(state, &config.server.cors_origins_list());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
