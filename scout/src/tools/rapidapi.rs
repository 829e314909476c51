//! Social lookups through RapidAPI (LinkedIn, Twitter/X and Facebook).
//!
//! All three share one shape: a GET against a RapidAPI host with the account key in
//! `x-rapidapi-key`, the host in `x-rapidapi-host`, and a single query parameter taken
//! from the tool arguments. [`RapidApiTool`] is that shape; the constructors pick the
//! endpoint.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::tools::http::{client_with_timeout, required_str, send_json, DEFAULT_TOOL_TIMEOUT};
use crate::tools::{Tool, ToolError, ToolSpec};

pub const TOOL_LINKEDIN_LOOKUP: &str = "linkedin_lookup";
pub const TOOL_TWITTER_LOOKUP: &str = "twitter_lookup";
pub const TOOL_FACEBOOK_PAGE_VIDEOS: &str = "facebook_page_videos";

struct Endpoint {
    tool_name: &'static str,
    description: &'static str,
    host: &'static str,
    path: &'static str,
    /// Argument name the model supplies; also the upstream query parameter.
    argument: &'static str,
    argument_description: &'static str,
}

const LINKEDIN: Endpoint = Endpoint {
    tool_name: TOOL_LINKEDIN_LOOKUP,
    description: "Get company metadata from LinkedIn (headcount, industry, headquarters, \
                  specialities, description) by the company's web domain.",
    host: "linkedin-data-api.p.rapidapi.com",
    path: "/get-company-by-domain",
    argument: "domain",
    argument_description: "Company web domain, e.g. 'google.com'",
};

const TWITTER: Endpoint = Endpoint {
    tool_name: TOOL_TWITTER_LOOKUP,
    description: "Retrieve a single tweet's JSON payload by tweet id.",
    host: "twitter241.p.rapidapi.com",
    path: "/tweet",
    argument: "pid",
    argument_description: "Numeric tweet id",
};

const FACEBOOK: Endpoint = Endpoint {
    tool_name: TOOL_FACEBOOK_PAGE_VIDEOS,
    description: "Search Facebook for details about a page and its posted videos.",
    host: "facebook-scraper3.p.rapidapi.com",
    path: "/page/videos",
    argument: "delegate_page_id",
    argument_description: "Facebook delegate page id",
};

/// A RapidAPI-backed profile lookup.
///
/// # Examples
///
/// ```
/// use scout::tools::{RapidApiTool, Tool, TOOL_LINKEDIN_LOOKUP};
///
/// let tool = RapidApiTool::linkedin_lookup("your_rapidapi_key");
/// assert_eq!(tool.name(), TOOL_LINKEDIN_LOOKUP);
/// ```
pub struct RapidApiTool {
    endpoint: &'static Endpoint,
    api_key: Arc<str>,
    base_url: String,
    client: reqwest::Client,
}

impl RapidApiTool {
    fn new(endpoint: &'static Endpoint, api_key: Arc<str>, timeout: Duration) -> Self {
        Self {
            endpoint,
            api_key,
            base_url: format!("https://{}", endpoint.host),
            client: client_with_timeout(timeout),
        }
    }

    pub fn linkedin_lookup(api_key: impl Into<Arc<str>>) -> Self {
        Self::new(&LINKEDIN, api_key.into(), DEFAULT_TOOL_TIMEOUT)
    }

    pub fn twitter_lookup(api_key: impl Into<Arc<str>>) -> Self {
        Self::new(&TWITTER, api_key.into(), DEFAULT_TOOL_TIMEOUT)
    }

    pub fn facebook_page_videos(api_key: impl Into<Arc<str>>) -> Self {
        Self::new(&FACEBOOK, api_key.into(), DEFAULT_TOOL_TIMEOUT)
    }

    /// All three lookups sharing one key and transport timeout.
    pub fn all(api_key: impl Into<Arc<str>>, timeout: Duration) -> Vec<Self> {
        let key: Arc<str> = api_key.into();
        [&LINKEDIN, &TWITTER, &FACEBOOK]
            .into_iter()
            .map(|endpoint| Self::new(endpoint, key.clone(), timeout))
            .collect()
    }

    /// Overrides the scheme and authority; the `x-rapidapi-host` header still names the real host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn host(&self) -> &str {
        self.endpoint.host
    }
}

#[async_trait]
impl Tool for RapidApiTool {
    fn name(&self) -> &str {
        self.endpoint.tool_name
    }

    fn spec(&self) -> ToolSpec {
        let e = self.endpoint;
        ToolSpec {
            name: e.tool_name.to_string(),
            description: Some(e.description.to_string()),
            input_schema: json!({
                "type": "object",
                "properties": {
                    e.argument: {
                        "type": "string",
                        "description": e.argument_description
                    }
                },
                "required": [e.argument]
            }),
        }
    }

    async fn call(&self, args: Value) -> Result<Value, ToolError> {
        let e = self.endpoint;
        let value = required_str(&args, e.argument)?;
        let url = format!("{}{}", self.base_url, e.path);
        tracing::debug!(tool = e.tool_name, host = e.host, value, "RapidAPI request");
        let request = self
            .client
            .get(&url)
            .header("x-rapidapi-key", self.api_key.as_ref())
            .header("x-rapidapi-host", e.host)
            .query(&[(e.argument, value)]);
        send_json(request).await
    }
}
