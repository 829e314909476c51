use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::Step;
use crate::reasoning::{Reasoner, ReasoningResponse};
use crate::state::ConversationState;
use crate::tools::ToolSpec;

/// Name of the research step in the default graph.
pub const RESEARCHER_STEP: &str = "researcher";

/// Graph step that asks a [`Reasoner`] for the next turn.
pub struct ResearchStep {
    reasoner: Arc<dyn Reasoner>,
}

impl ResearchStep {
    pub fn new(reasoner: Arc<dyn Reasoner>) -> Self {
        Self { reasoner }
    }
}

#[async_trait]
impl Step for ResearchStep {
    async fn run(
        &self,
        state: &ConversationState,
        tools: &[ToolSpec],
    ) -> Result<ReasoningResponse, AgentError> {
        self.reasoner.invoke(state, tools).await
    }
}
