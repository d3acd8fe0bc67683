//! UAForge: a bulk Android/Facebook user-agent generator
//!
//! This is the main entry point for the application.

use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uaforge::{
    config,
    web::{create_router, AppState},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    info!("Starting UAForge v{}", uaforge::VERSION);

    // Load configuration
    let settings = config::load()?;
    info!(
        "Loaded configuration for instance: {}",
        settings.general.instance_name
    );

    // Bind address
    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    // Create application state and router
    let state = AppState::new(settings)?;
    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
