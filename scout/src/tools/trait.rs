use async_trait::async_trait;
use serde_json::Value;

use crate::tools::{ToolError, ToolSpec};

/// A single callable tool.
///
/// Implementations are stateless apart from their credentials and HTTP client, so one
/// instance can serve concurrent calls from the same batch.
///
/// # Interaction
///
/// - **ToolRegistry**: stores `Box<dyn Tool>` by [`name`](Tool::name) and wraps each
///   [`call`](Tool::call) in a timeout.
/// - **Reasoner**: receives [`spec`](Tool::spec) output so the model knows what it can ask for.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool name; requests are matched against it exactly.
    fn name(&self) -> &str;

    fn spec(&self) -> ToolSpec;

    /// Runs the tool with the model-supplied arguments object.
    async fn call(&self, args: Value) -> Result<Value, ToolError>;
}
