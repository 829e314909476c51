//! Request and response bodies for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use scout::AgentError;

/// `POST /search` body. `company` is optional so the query parameter can stand in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub company: Option<String>,
}

/// `?company=` on `POST /search`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CompanyQuery {
    #[serde(default)]
    pub company: Option<String>,
}

/// Successful `POST /search` response. The section fields are fixed captions for the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub report: String,
    pub overview: String,
    pub strategy: String,
    pub products: String,
    pub financials: String,
}

impl SearchResponse {
    pub fn new(company: &str, report: String) -> Self {
        Self {
            query: company.to_string(),
            report,
            overview: format!("Comprehensive analysis for {}", company),
            strategy: "Strategic insights extracted from research".to_string(),
            products: "Products and services information".to_string(),
            financials: "Financial data and performance metrics".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

const MISSING_COMPANY: &str =
    "Company name is required either in body as 'company' or as query parameter 'company'";

/// Error half of the search handler: status plus `{"error": ...}` body.
#[derive(Debug)]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub(crate) fn missing_company() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: MISSING_COMPANY.to_string(),
        }
    }
}

impl From<AgentError> for ApiError {
    fn from(e: AgentError) -> Self {
        let status = match e {
            AgentError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AgentError::UnknownTool(_)
            | AgentError::ReasoningFailed(_)
            | AgentError::ExecutionFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}
