//! Booklens Server - JSON API for book discovery

use anyhow::Result;
use booklens_core::ConfigError;
use booklens_server::{routes, state};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Address to listen on, from BOOKLENS_BIND_ADDR
fn bind_addr() -> Result<SocketAddr, ConfigError> {
    let raw = std::env::var("BOOKLENS_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    raw.parse().map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
        name: "BOOKLENS_BIND_ADDR".to_string(),
        reason: e.to_string(),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booklens_server=debug,booklens_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create application state
    let state = state::AppState::from_env()?;
    tracing::info!("Using catalog at {}", state.catalog_url);

    // Build router
    let app = routes::create_router(state);

    // Start server
    let addr = bind_addr()?;
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
