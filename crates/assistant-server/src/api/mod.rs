//! HTTP API for the assistant.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::logging_middleware;
pub use types::*;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use command_router::CommandRouter;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Command router shared by all requests
    pub router: Arc<CommandRouter>,
    /// Name greeted when a request gives none
    pub user_name: Arc<str>,
}

impl AppState {
    /// Create new application state.
    pub fn new(router: CommandRouter, user_name: impl Into<Arc<str>>) -> Self {
        Self {
            router: Arc::new(router),
            user_name: user_name.into(),
        }
    }
}

/// Create the API router. Paths not matched by the API are served from
/// `static_dir`, so `/` returns its `index.html`.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/voice-command", post(handlers::voice_command))
        .route("/v1/greeting", get(handlers::greeting))
        .fallback_service(ServeDir::new(static_dir))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
