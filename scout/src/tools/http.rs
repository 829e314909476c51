//! Shared HTTP plumbing for the adapters.

use std::time::Duration;

use serde_json::Value;

use crate::tools::ToolError;

/// Default per-call limit applied by [`ToolRegistry`](crate::ToolRegistry).
pub const DEFAULT_TOOL_TIMEOUT: Duration = Duration::from_secs(config::DEFAULT_TOOL_TIMEOUT_SECS);

/// Client with a transport-level timeout matching the registry limit.
///
/// If the builder fails the default client is used; the registry's own timeout still
/// bounds every call.
pub(crate) fn client_with_timeout(timeout: Duration) -> reqwest::Client {
    match reqwest::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(
                error = %e,
                ?timeout,
                "HTTP client build failed; using default client"
            );
            reqwest::Client::default()
        }
    }
}

/// Sends the request and decodes a JSON body, mapping non-2xx to [`ToolError::Status`].
pub(crate) async fn send_json(request: reqwest::RequestBuilder) -> Result<Value, ToolError> {
    let response = request
        .send()
        .await
        .map_err(|e| ToolError::Transport(format!("request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ToolError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| ToolError::Transport(format!("failed to read response: {}", e)))?;
    serde_json::from_str(&body).or(Ok(Value::String(body)))
}

/// Required non-blank string argument.
pub(crate) fn required_str<'a>(args: &'a Value, key: &str) -> Result<&'a str, ToolError> {
    let value = args
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| ToolError::InvalidInput(format!("missing '{}'", key)))?;
    if value.trim().is_empty() {
        return Err(ToolError::InvalidInput(format!("{} cannot be empty", key)));
    }
    Ok(value.trim())
}
