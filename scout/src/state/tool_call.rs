//! Tool requests from the model and the results fed back to it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::message::Message;

/// One tool invocation asked for by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRequest {
    pub tool_name: String,
    #[serde(default)]
    pub arguments: Map<String, Value>,
    /// Provider call id, echoed back on the result when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ToolRequest {
    pub fn new(tool_name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments,
            id: None,
        }
    }

    /// Builds a request from a JSON value; non-object values become empty arguments.
    pub fn from_value(tool_name: impl Into<String>, arguments: Value) -> Self {
        let arguments = match arguments {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self::new(tool_name, arguments)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Payload or failure description for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ToolOutcome {
    Payload(Value),
    Error(String),
}

/// Result of one [`ToolRequest`], in the same position as its request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub tool_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_id: Option<String>,
    pub outcome: ToolOutcome,
}

impl ToolResult {
    pub fn is_error(&self) -> bool {
        matches!(self.outcome, ToolOutcome::Error(_))
    }

    /// Tool message appended to the conversation for this result.
    pub fn to_message(&self) -> Message {
        let content = match &self.outcome {
            ToolOutcome::Payload(Value::String(s)) => s.clone(),
            ToolOutcome::Payload(v) => v.to_string(),
            ToolOutcome::Error(e) => format!("Error: {}", e),
        };
        Message::tool(self.tool_name.clone(), content)
    }
}
