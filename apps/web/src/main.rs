mod board;
mod config;
mod errors;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::board::{load_board, loader, Board};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Board v{}", env!("CARGO_PKG_VERSION"));

    // Load job data once. A failed load still serves pages, showing the error block.
    let timeout = Duration::from_secs(config.fetch_timeout_secs);
    let board = match loader::source_for(&config.jobs_source, timeout) {
        Ok(source) => load_board(source.as_ref(), Local::now()).await,
        Err(e) => {
            tracing::error!("Error preparing job source: {e}");
            Board::failed(e)
        }
    };

    let state = AppState::new(board, config.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
