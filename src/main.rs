// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;

use crate::application::board_service::BoardService;
use crate::infrastructure::config::load_server_config;
use crate::infrastructure::static_provider::StaticStatusProvider;
use crate::infrastructure::system_clock::SystemClock;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let server_config = load_server_config()?;

    // Wire the board service (application layer)
    let board_service = BoardService::new(Arc::new(StaticStatusProvider), Arc::new(SystemClock));

    // Create application state
    let state = Arc::new(AppState { board_service });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = server_config
        .server
        .bind
        .parse()
        .context("invalid server bind address")?;
    tracing::info!("Starting status-board service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
