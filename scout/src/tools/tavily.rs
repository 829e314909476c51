//! Web search through the Tavily search API.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::tools::http::{client_with_timeout, required_str, send_json, DEFAULT_TOOL_TIMEOUT};
use crate::tools::{Tool, ToolError, ToolSpec};

/// Tool name for Tavily search.
pub const TOOL_TAVILY_SEARCH: &str = "tavily_search_results_json";

const TAVILY_API_BASE: &str = "https://api.tavily.com";
const TAVILY_MAX_RESULTS: u32 = 4;

/// Tavily web search; returns up to four ranked results with content snippets.
pub struct TavilySearchTool {
    api_key: Arc<str>,
    base_url: String,
    client: reqwest::Client,
}

impl TavilySearchTool {
    pub fn new(api_key: impl Into<Arc<str>>) -> Self {
        Self::with_timeout(api_key, DEFAULT_TOOL_TIMEOUT)
    }

    pub fn with_timeout(api_key: impl Into<Arc<str>>, timeout: Duration) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: TAVILY_API_BASE.to_string(),
            client: client_with_timeout(timeout),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl Tool for TavilySearchTool {
    fn name(&self) -> &str {
        TOOL_TAVILY_SEARCH
    }

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: TOOL_TAVILY_SEARCH.to_string(),
            description: Some(
                "Search the web and return the top results with title, url and extracted content. \
                 Good for recent news and summaries about a company."
                    .to_string(),
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn call(&self, args: Value) -> Result<Value, ToolError> {
        let query = required_str(&args, "query")?;
        let url = format!("{}/search", self.base_url);
        let body = json!({
            "api_key": self.api_key.as_ref(),
            "query": query,
            "max_results": TAVILY_MAX_RESULTS,
        });
        tracing::debug!(tool = TOOL_TAVILY_SEARCH, query, "Tavily request");
        send_json(self.client.post(&url).json(&body)).await
    }
}
