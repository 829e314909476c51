//! Route handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::response::{ApiError, CompanyQuery, SearchRequest, SearchResponse};

pub(crate) async fn root() -> Json<Value> {
    Json(json!({"message": "Web Search Agent API is running!"}))
}

/// Picks the company name: a non-blank body field wins over the query parameter.
fn company_name(body: Option<SearchRequest>, query: CompanyQuery) -> Option<String> {
    let non_blank = |s: Option<String>| s.filter(|c| !c.trim().is_empty());
    non_blank(body.and_then(|b| b.company)).or_else(|| non_blank(query.company))
}

/// `POST /search`. The body is optional; a missing or malformed body falls back to `?company=`.
pub(crate) async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CompanyQuery>,
    body: Option<Json<SearchRequest>>,
) -> Result<Json<SearchResponse>, ApiError> {
    let company = company_name(body.map(|Json(b)| b), query).ok_or_else(ApiError::missing_company)?;
    let company = company.trim();
    tracing::info!(company, "Search request");

    let report = state.runner.run_research(company).await.map_err(|e| {
        tracing::error!(company, error = %e, "Search failed");
        ApiError::from(e)
    })?;
    Ok(Json(SearchResponse::new(company, report)))
}
