//! Reasoning service: given the conversation and the tool catalog, produce the next turn.
//!
//! [`OpenAiReasoner`] talks to any OpenAI-compatible chat-completions endpoint;
//! [`ScriptedReasoner`] replays canned responses for tests and offline runs.

mod openai;
mod scripted;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::state::{ConversationState, ToolRequest};
use crate::tools::ToolSpec;

pub use openai::{OpenAiReasoner, DEFAULT_MODEL};
pub use scripted::ScriptedReasoner;

/// Token usage reported by the service, when available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReasoningUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// One model turn: text plus any tool requests.
///
/// Empty `tool_requests` means the model wants no more lookups this turn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReasoningResponse {
    pub content: String,
    pub tool_requests: Vec<ToolRequest>,
    pub usage: Option<ReasoningUsage>,
}

impl ReasoningResponse {
    /// Text-only turn.
    pub fn terminal(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Turn that asks for tool calls.
    pub fn with_tools(content: impl Into<String>, tool_requests: Vec<ToolRequest>) -> Self {
        Self {
            content: content.into(),
            tool_requests,
            usage: None,
        }
    }

    pub fn has_tool_requests(&self) -> bool {
        !self.tool_requests.is_empty()
    }
}

/// Produces the next model turn from the conversation so far.
///
/// Implementations must not mutate shared state; the loop owns the conversation and
/// appends the returned turn itself.
#[async_trait]
pub trait Reasoner: Send + Sync {
    async fn invoke(
        &self,
        state: &ConversationState,
        tools: &[ToolSpec],
    ) -> Result<ReasoningResponse, AgentError>;
}
