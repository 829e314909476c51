//! Google web search through the NovaDA scraper API.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::tools::http::{client_with_timeout, required_str, send_json, DEFAULT_TOOL_TIMEOUT};
use crate::tools::{Tool, ToolError, ToolSpec};

/// Tool name for NovaDA Google search.
pub const TOOL_NOVADA_GOOGLE_SEARCH: &str = "novada_google_search";

const NOVADA_API_BASE: &str = "https://scraperapi.novada.com";

/// Searches Google via NovaDA and returns the structured result page as JSON.
///
/// Requires a NovaDA API key (`NOVADA_API_KEY`). Sends `no_cache=false`, so the provider
/// may answer from its cache.
pub struct NovadaSearchTool {
    api_key: Arc<str>,
    base_url: String,
    client: reqwest::Client,
}

impl NovadaSearchTool {
    /// # Examples
    ///
    /// ```
    /// use scout::tools::NovadaSearchTool;
    ///
    /// let tool = NovadaSearchTool::new("your_api_key");
    /// ```
    pub fn new(api_key: impl Into<Arc<str>>) -> Self {
        Self::with_timeout(api_key, DEFAULT_TOOL_TIMEOUT)
    }

    pub fn with_timeout(api_key: impl Into<Arc<str>>, timeout: Duration) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: NOVADA_API_BASE.to_string(),
            client: client_with_timeout(timeout),
        }
    }

    /// Points the tool at another host (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl Tool for NovadaSearchTool {
    fn name(&self) -> &str {
        TOOL_NOVADA_GOOGLE_SEARCH
    }

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: TOOL_NOVADA_GOOGLE_SEARCH.to_string(),
            description: Some(
                "Search Google for a query and return organic results, knowledge panel and \
                 related links as JSON. Use for company websites, news, filings and profiles."
                    .to_string(),
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query, e.g. 'Acme Corp headquarters revenue'"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn call(&self, args: Value) -> Result<Value, ToolError> {
        let query = required_str(&args, "query")?;
        let url = format!("{}/search", self.base_url);
        let params = [
            ("engine", "google"),
            ("q", query),
            ("no_cache", "false"),
            ("api_key", self.api_key.as_ref()),
        ];
        tracing::debug!(tool = TOOL_NOVADA_GOOGLE_SEARCH, query, "NovaDA request");
        send_json(self.client.get(&url).query(&params)).await
    }
}
