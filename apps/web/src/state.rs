use std::sync::Arc;

use crate::board::Board;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup, read-only afterwards.
    pub board: Arc<Board>,
    pub config: Config,
}

impl AppState {
    pub fn new(board: Board, config: Config) -> Self {
        AppState {
            board: Arc::new(board),
            config,
        }
    }
}
