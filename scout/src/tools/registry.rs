use std::collections::BTreeMap;
use std::time::Duration;

use futures::future::join_all;
use serde_json::Value;

use crate::state::{ToolOutcome, ToolRequest, ToolResult};
use crate::tools::http::DEFAULT_TOOL_TIMEOUT;
use crate::tools::r#trait::Tool;
use crate::tools::{ToolError, ToolSpec};

/// Named collection of tools plus the per-call timeout.
///
/// Built once and shared read-only across runs. Tools are kept in name order so
/// [`list`](ToolRegistry::list) is stable between calls.
///
/// # Examples
///
/// ```
/// use scout::tools::{NovadaSearchTool, ToolRegistry};
///
/// let mut registry = ToolRegistry::new();
/// registry.register(Box::new(NovadaSearchTool::new("key")));
/// assert_eq!(registry.list().len(), 1);
/// ```
pub struct ToolRegistry {
    tools: BTreeMap<String, Box<dyn Tool>>,
    timeout: Duration,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
            timeout: DEFAULT_TOOL_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Registers a tool; a tool with the same name is replaced.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        let name = tool.name().to_string();
        if self.tools.insert(name.clone(), tool).is_some() {
            tracing::warn!(tool = %name, "Replaced previously registered tool");
        }
    }

    pub fn list(&self) -> Vec<ToolSpec> {
        self.tools.values().map(|tool| tool.spec()).collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Calls one tool by name under the timeout, returning its raw result.
    pub async fn call(&self, name: &str, args: Value) -> Result<Value, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;
        match tokio::time::timeout(self.timeout, tool.call(args)).await {
            Ok(result) => result,
            Err(_) => Err(ToolError::Timeout(self.timeout)),
        }
    }

    /// Runs a batch of requests concurrently; result `i` answers request `i`.
    ///
    /// Every name is resolved before anything runs, so an unknown tool returns
    /// [`ToolError::NotFound`] with no side effects. Once running, individual failures and
    /// timeouts become [`ToolOutcome::Error`] entries and never fail the batch.
    pub async fn dispatch(&self, requests: &[ToolRequest]) -> Result<Vec<ToolResult>, ToolError> {
        let resolved = requests
            .iter()
            .map(|req| {
                self.tools
                    .get(&req.tool_name)
                    .map(|tool| (tool.as_ref(), req))
                    .ok_or_else(|| ToolError::NotFound(req.tool_name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let calls = resolved
            .into_iter()
            .map(|(tool, req)| self.invoke(tool, req));
        Ok(join_all(calls).await)
    }

    async fn invoke(&self, tool: &dyn Tool, request: &ToolRequest) -> ToolResult {
        let args = Value::Object(request.arguments.clone());
        tracing::debug!(
            tool = %request.tool_name,
            call_id = ?request.id,
            args = %args,
            "Calling tool"
        );

        let outcome = match tokio::time::timeout(self.timeout, tool.call(args)).await {
            Ok(Ok(payload)) => {
                tracing::trace!(tool = %request.tool_name, "Tool returned payload");
                ToolOutcome::Payload(payload)
            }
            Ok(Err(e)) => {
                tracing::warn!(tool = %request.tool_name, error = %e, "Tool call failed");
                ToolOutcome::Error(e.to_string())
            }
            Err(_) => {
                let e = ToolError::Timeout(self.timeout);
                tracing::warn!(tool = %request.tool_name, error = %e, "Tool call timed out");
                ToolOutcome::Error(e.to_string())
            }
        };

        ToolResult {
            tool_name: request.tool_name.clone(),
            call_id: request.id.clone(),
            outcome,
        }
    }
}
