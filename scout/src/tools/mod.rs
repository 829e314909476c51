//! Tools the research model can call, and the registry that dispatches them.
//!
//! Every adapter implements [`Tool`]: a name, a [`ToolSpec`] advertised to the model, and
//! an async `call`. [`ToolRegistry`] owns the adapters, applies the per-call timeout, and
//! runs a batch of requests concurrently while keeping results in request order.

mod http;
mod novada;
mod rapidapi;
mod registry;
mod tavily;
mod r#trait;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use http::DEFAULT_TOOL_TIMEOUT;
pub use novada::{NovadaSearchTool, TOOL_NOVADA_GOOGLE_SEARCH};
pub use rapidapi::{
    RapidApiTool, TOOL_FACEBOOK_PAGE_VIDEOS, TOOL_LINKEDIN_LOOKUP, TOOL_TWITTER_LOOKUP,
};
pub use r#trait::Tool;
pub use registry::ToolRegistry;
pub use tavily::{TavilySearchTool, TOOL_TAVILY_SEARCH};

/// Tool description sent to the reasoning service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    /// Human-readable description for the model.
    pub description: Option<String>,
    /// JSON Schema for the arguments object.
    pub input_schema: Value,
}

/// Failure of a single tool call.
///
/// Converted into [`ToolOutcome::Error`](crate::state::ToolOutcome) by the registry, except
/// [`NotFound`](ToolError::NotFound), which aborts the batch before any call is made.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ToolError {
    #[error("tool not found: {0}")]
    NotFound(String),
    #[error("invalid arguments: {0}")]
    InvalidInput(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("upstream returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("tool call timed out after {0:?}")]
    Timeout(std::time::Duration),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// **Scenario**: Status and Timeout errors render the code and the limit.
    #[test]
    fn tool_error_display_carries_details() {
        let e = ToolError::Status {
            status: 429,
            body: "slow down".into(),
        };
        assert!(e.to_string().contains("429"));
        assert!(e.to_string().contains("slow down"));
        let e = ToolError::Timeout(Duration::from_secs(30));
        assert!(e.to_string().contains("30s"), "{}", e);
    }
}
