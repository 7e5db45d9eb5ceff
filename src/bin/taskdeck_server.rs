//! Taskdeck HTTP server.
//!
//! Boots the in-memory wiring: loads configuration from the environment,
//! initializes structured logging, constructs the task repository and
//! lifecycle service, and serves the JSON API until the process exits.
//! State lives for the process lifetime only; a restart starts empty.

use mockable::DefaultClock;
use std::sync::Arc;
use taskdeck::config::{AppConfig, ConfigError};
use taskdeck::http::{AppState, router};
use taskdeck::task::{adapters::memory::InMemoryTaskRepository, services::TaskLifecycleService};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors that abort server startup.
#[derive(Debug, Error)]
enum BootError {
    /// Configuration could not be read.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The listener could not be bound or the server failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), BootError> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let repository = Arc::new(InMemoryTaskRepository::new());
    let service = Arc::new(TaskLifecycleService::new(repository, Arc::new(DefaultClock)));
    let state = AppState {
        tasks: service,
        config: config.clone(),
    };

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(
        port = config.port,
        env = config.env.as_str(),
        "taskdeck listening"
    );

    axum::serve(listener, router(state)).await?;
    Ok(())
}
