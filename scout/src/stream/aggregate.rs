use serde::Serialize;
use tokio_stream::{Stream, StreamExt};

use crate::error::AgentError;
use crate::stream::{StreamEvent, Termination};

/// Separator between step outputs in the final report.
const ENTRY_SEPARATOR: &str = "\n\n";

/// Aggregated outcome of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    entries: Vec<String>,
    termination: Termination,
    iterations: u32,
}

impl RunResult {
    /// Content of each named step message, in emission order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn termination(&self) -> &Termination {
        &self.termination
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// True when the run stopped on the iteration bound rather than finishing.
    pub fn is_partial(&self) -> bool {
        !self.termination.is_complete()
    }

    /// Non-blank entries joined with a blank line. Tool-only turns have empty content and
    /// stay in [`entries`](Self::entries) but not in the report.
    pub fn report(&self) -> String {
        self.entries
            .iter()
            .filter(|e| !e.trim().is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(ENTRY_SEPARATOR)
    }
}

/// Drains a research stream into a [`RunResult`].
///
/// Every `StepOutput` whose message carries a step name contributes one entry. The first
/// `Err` item is returned as-is; a stream that ends without a `Terminated` event (the
/// run task died) is an [`AgentError::ExecutionFailed`].
pub async fn aggregate<St>(mut stream: St) -> Result<RunResult, AgentError>
where
    St: Stream<Item = Result<StreamEvent, AgentError>> + Unpin,
{
    let mut entries = Vec::new();
    while let Some(item) = stream.next().await {
        match item? {
            StreamEvent::StepOutput { message, .. } => {
                if message.name.is_some() {
                    entries.push(message.content);
                }
            }
            StreamEvent::ToolResults { .. } => {}
            StreamEvent::Terminated {
                termination,
                iterations,
            } => {
                return Ok(RunResult {
                    entries,
                    termination,
                    iterations,
                })
            }
        }
    }
    Err(AgentError::ExecutionFailed(
        "research stream ended without a termination event".to_string(),
    ))
}
