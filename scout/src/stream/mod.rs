//! Streaming output of a research run.
//!
//! A run yields one [`StreamEvent::StepOutput`] per reasoning invocation, one
//! [`StreamEvent::ToolResults`] per dispatched batch, and ends with a single
//! [`StreamEvent::Terminated`] (or an `Err` item when the run aborts). The stream is lazy,
//! finite, and consumed once.
//!
//! [`aggregate`] folds a stream into the final report.

mod aggregate;

use std::fmt;

use serde::Serialize;
use tokio_stream::wrappers::ReceiverStream;

use crate::error::AgentError;
use crate::message::Message;
use crate::state::ToolResult;

pub use aggregate::{aggregate, RunResult};

/// Capacity of the channel between the run task and the consumer.
pub(crate) const STREAM_CHANNEL_CAPACITY: usize = 128;

/// Stream returned by [`ResearchRunner::stream`](crate::ResearchRunner::stream).
pub type ResearchStream = ReceiverStream<Result<StreamEvent, AgentError>>;

/// Why a run stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Termination {
    /// A step's message contained the termination sentinel, or a route reached END.
    Completed { step: String },
    /// The iteration bound was reached before the model finished.
    IterationBound { limit: u32 },
}

impl Termination {
    pub fn is_complete(&self) -> bool {
        matches!(self, Termination::Completed { .. })
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Completed { step } => write!(f, "completed at step '{}'", step),
            Termination::IterationBound { limit } => {
                write!(f, "stopped after reaching the {}-iteration bound", limit)
            }
        }
    }
}

/// One observable update from a running research loop.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StreamEvent {
    /// A step finished; `message` is its relabeled agent message.
    StepOutput {
        step: String,
        iteration: u32,
        message: Message,
    },
    /// Results of the tool batch requested by `step`, in request order.
    ToolResults {
        step: String,
        results: Vec<ToolResult>,
    },
    /// Final event of a run that did not abort.
    Terminated {
        termination: Termination,
        iterations: u32,
    },
}
