//! GameStore Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: SQLite data access
//! - handlers: axum HTTP handlers under `/api`

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod repository;
pub mod state;

use config::Config;
use repository::init_db;
use state::AppState;

/// Start the HTTP server and block until shutdown
pub async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load();

    info!(path = %config.database_path.display(), "Opening database");
    let db = init_db(&config.database_path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open database: {}", e))?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = handlers::build_router(AppState::new(&db, config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "Starting HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
