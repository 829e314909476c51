//! Axum app: shared state and router.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use scout::ResearchRunner;

use crate::handlers::{root, search};

/// Shared state for the HTTP server.
///
/// Holds one runner for the process lifetime; each request starts its own run with a fresh
/// conversation, so handlers never share mutable state.
#[derive(Clone)]
pub struct AppState {
    pub(crate) runner: ResearchRunner,
}

impl AppState {
    pub fn new(runner: ResearchRunner) -> Self {
        Self { runner }
    }
}

/// Builds the router: `GET /` and `POST /search`, with permissive CORS for browser frontends.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/search", post(search))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}
