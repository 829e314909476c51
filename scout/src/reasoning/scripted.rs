//! Canned reasoner for tests and offline runs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::message::Message;
use crate::reasoning::{Reasoner, ReasoningResponse};
use crate::state::ConversationState;
use crate::tools::ToolSpec;

/// Replays a fixed list of responses, one per invocation.
///
/// In sequence mode the reasoner fails with [`AgentError::ReasoningFailed`] once the script
/// is exhausted. [`repeating`](ScriptedReasoner::repeating) returns the same response
/// forever, which is how iteration-bound behavior is exercised.
///
/// The last message of every conversation it is shown is recorded, so tests can check
/// what the model saw (e.g. a tool error fed back after a timeout).
pub struct ScriptedReasoner {
    script: Vec<ReasoningResponse>,
    repeat: bool,
    cursor: AtomicUsize,
    observed: Mutex<Vec<Option<Message>>>,
}

impl ScriptedReasoner {
    pub fn new(script: Vec<ReasoningResponse>) -> Self {
        Self {
            script,
            repeat: false,
            cursor: AtomicUsize::new(0),
            observed: Mutex::new(Vec::new()),
        }
    }

    pub fn repeating(response: ReasoningResponse) -> Self {
        Self {
            repeat: true,
            ..Self::new(vec![response])
        }
    }

    /// Number of times `invoke` has been called.
    pub fn invocations(&self) -> usize {
        self.cursor.load(Ordering::SeqCst)
    }

    /// Last conversation message seen on each invocation, in call order.
    pub fn observed_last_messages(&self) -> Vec<Option<Message>> {
        self.observed
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Reasoner for ScriptedReasoner {
    async fn invoke(
        &self,
        state: &ConversationState,
        _tools: &[ToolSpec],
    ) -> Result<ReasoningResponse, AgentError> {
        if let Ok(mut seen) = self.observed.lock() {
            seen.push(state.last().cloned());
        }
        let n = self.cursor.fetch_add(1, Ordering::SeqCst);
        let next = if self.repeat {
            self.script.first()
        } else {
            self.script.get(n)
        };
        next.cloned().ok_or_else(|| {
            AgentError::ReasoningFailed(format!(
                "script exhausted after {} responses",
                self.script.len()
            ))
        })
    }
}
