//! Typed settings parsed from the merged key-value map.

use std::collections::HashMap;
use std::time::Duration;

use crate::LoadError;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MAX_ITERATIONS: u32 = 50;
pub const DEFAULT_TOOL_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SERVE_ADDR: &str = "127.0.0.1:8000";

/// Keys read from any source. Everything else in `.env` or `[env]` is ignored.
pub const KNOWN_KEYS: &[&str] = &[
    "OPENAI_API_KEY",
    "OPENAI_BASE_URL",
    "OPENAI_API_BASE",
    "SCOUT_MODEL",
    "NOVADA_API_KEY",
    "TAVILY_API_KEY",
    "RAPIDAPI_KEY",
    "SCOUT_MAX_ITERATIONS",
    "SCOUT_TOOL_TIMEOUT_SECS",
    "SCOUT_SERVE_ADDR",
];

/// Resolved configuration. Credentials are `None` when unset or blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub openai_api_key: Option<String>,
    /// `OPENAI_BASE_URL`, falling back to `OPENAI_API_BASE`.
    pub openai_base_url: Option<String>,
    pub model: String,
    pub novada_api_key: Option<String>,
    pub tavily_api_key: Option<String>,
    pub rapidapi_key: Option<String>,
    pub max_iterations: u32,
    pub tool_timeout: Duration,
    pub serve_addr: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: None,
            model: DEFAULT_MODEL.to_string(),
            novada_api_key: None,
            tavily_api_key: None,
            rapidapi_key: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tool_timeout: Duration::from_secs(DEFAULT_TOOL_TIMEOUT_SECS),
            serve_addr: DEFAULT_SERVE_ADDR.to_string(),
        }
    }
}

impl Settings {
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, LoadError> {
        let get = |key: &str| {
            vars.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        let defaults = Self::default();

        let max_iterations = match get("SCOUT_MAX_ITERATIONS") {
            Some(v) => parse_positive("SCOUT_MAX_ITERATIONS", &v)? as u32,
            None => defaults.max_iterations,
        };
        let tool_timeout = match get("SCOUT_TOOL_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(parse_positive("SCOUT_TOOL_TIMEOUT_SECS", &v)?),
            None => defaults.tool_timeout,
        };

        Ok(Self {
            openai_api_key: get("OPENAI_API_KEY"),
            openai_base_url: get("OPENAI_BASE_URL").or_else(|| get("OPENAI_API_BASE")),
            model: get("SCOUT_MODEL").unwrap_or(defaults.model),
            novada_api_key: get("NOVADA_API_KEY"),
            tavily_api_key: get("TAVILY_API_KEY"),
            rapidapi_key: get("RAPIDAPI_KEY"),
            max_iterations,
            tool_timeout,
            serve_addr: get("SCOUT_SERVE_ADDR").unwrap_or(defaults.serve_addr),
        })
    }
}

fn parse_positive(key: &'static str, value: &str) -> Result<u64, LoadError> {
    let invalid = |reason| LoadError::InvalidValue {
        key,
        value: value.to_string(),
        reason,
    };
    let n: u64 = value.parse().map_err(|_| invalid("not a positive integer"))?;
    if n == 0 {
        return Err(invalid("must be greater than zero"));
    }
    if key == "SCOUT_MAX_ITERATIONS" && n > u64::from(u32::MAX) {
        return Err(invalid("too large"));
    }
    Ok(n)
}
