//! Conversation state and the tool-call values that flow through it.

mod conversation;
mod tool_call;

pub use conversation::ConversationState;
pub use tool_call::{ToolOutcome, ToolRequest, ToolResult};
