//! HTTP API for company research (axum).
//!
//! `GET /` is a liveness probe; `POST /search` runs one research pass and returns the report.
//! Listens on 127.0.0.1:8000 unless told otherwise.
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`], [`router`].

mod app;
mod handlers;
mod response;

use tokio::net::TcpListener;
use tracing::info;

use scout::ResearchRunner;

pub use app::{router, AppState};
pub use response::{ErrorBody, SearchRequest, SearchResponse};

pub const DEFAULT_SERVE_ADDR: &str = config::DEFAULT_SERVE_ADDR;

/// Runs the HTTP server on an existing listener.
/// Used by tests (bind to 127.0.0.1:0 then pass listener).
pub async fn run_serve_on_listener(
    listener: TcpListener,
    runner: ResearchRunner,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = listener.local_addr()?;
    info!(
        tools = ?runner.tools().names(),
        max_iterations = runner.max_iterations(),
        "Research API listening on http://{}",
        addr
    );
    axum::serve(listener, router(AppState::new(runner))).await?;
    Ok(())
}

/// Runs the HTTP server on `addr` (default 127.0.0.1:8000) until the process is stopped.
pub async fn run_serve(
    addr: Option<&str>,
    runner: ResearchRunner,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = addr.unwrap_or(DEFAULT_SERVE_ADDR);
    let listener = TcpListener::bind(addr).await?;
    run_serve_on_listener(listener, runner).await
}
