use async_trait::async_trait;

use crate::error::AgentError;
use crate::reasoning::ReasoningResponse;
use crate::state::ConversationState;
use crate::tools::ToolSpec;

/// One node of the workflow graph: reads the conversation, produces a model turn.
///
/// A step never touches the conversation itself. The loop appends the returned content as
/// an agent message, names it after the step, and dispatches any tool requests.
#[async_trait]
pub trait Step: Send + Sync {
    async fn run(
        &self,
        state: &ConversationState,
        tools: &[ToolSpec],
    ) -> Result<ReasoningResponse, AgentError>;
}
