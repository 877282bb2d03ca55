//! Process startup: storage wiring and the HTTP listener.

use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use crate::api;
use crate::config::{Config, ConfigError, StorageConfig};
use crate::domain::repositories::{CardRepository, UserRepository};
use crate::infrastructure::repositories::{
    InMemoryCardRepository, InMemoryUserRepository, PostgresCardRepository,
    PostgresUserRepository,
};
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Connects the configured storage and builds the application state
pub async fn build_state(config: &Config) -> Result<AppState, StartupError> {
    let (users, cards): (Arc<dyn UserRepository>, Arc<dyn CardRepository>) = match &config.storage
    {
        StorageConfig::Postgres {
            url,
            max_connections,
        } => {
            tracing::info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(*max_connections)
                .connect(url)
                .await?;

            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Database connected and migrated");

            (
                Arc::new(PostgresUserRepository::new(pool.clone())),
                Arc::new(PostgresCardRepository::new(pool)),
            )
        }
        StorageConfig::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on exit");
            (
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryCardRepository::new()),
            )
        }
    };

    Ok(AppState::new(config, users, cards))
}

/// Serves the API until Ctrl+C
pub async fn serve(config: Config) -> Result<(), StartupError> {
    let state = build_state(&config).await?;
    let app = api::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on port {}", config.port);

    // peer addresses feed the rate limiter
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
