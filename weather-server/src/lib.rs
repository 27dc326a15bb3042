//! Proxy endpoint for the weather widget.
//!
//! Serves `GET /api/weather?location=`, forwarding the location to the
//! upstream provider and relaying the forecast JSON, plus the static
//! front-end directory for every other path.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use std::sync::Arc;

use anyhow::Context;
use tokio::{net::TcpListener, signal};
use tracing::info;
use weather_core::{ServerConfig, WeatherProvider};

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;

/// Installs the `tracing` subscriber used by the binaries. `RUST_LOG` wins
/// over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
}

/// Binds `config.host:config.port` and serves until Ctrl+C.
pub async fn serve(config: &ServerConfig, provider: Arc<dyn WeatherProvider>) -> anyhow::Result<()> {
    let state = AppState::new(provider);
    let app = create_router(state, &config.static_dir);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(%addr, static_dir = %config.static_dir.display(), "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
