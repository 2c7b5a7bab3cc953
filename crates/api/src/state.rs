use std::sync::Arc;

use campusnest_ollama::OllamaClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`). The pool is the single process-wide store handle; it is
/// injected here rather than reached through a global.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: campusnest_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Client for the local inference server (chat relay).
    pub ollama: Arc<OllamaClient>,
}
