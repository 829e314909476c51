//! Run-level error types.
//!
//! Tool failures never show up here: they are captured per request as
//! [`ToolOutcome::Error`](crate::state::ToolOutcome) and fed back to the model.

use thiserror::Error;

/// Error that ends a research run.
///
/// Returned by [`ResearchRunner`](crate::ResearchRunner) entry points and yielded as the
/// last item of a [`ResearchStream`](crate::ResearchStream) when a run aborts.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The caller supplied unusable input (e.g. a blank company name).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The model requested a tool that is not registered. Fatal; no tool in the batch runs.
    #[error("unknown tool requested: {0}")]
    UnknownTool(String),

    /// The reasoning service failed or returned an unusable response.
    #[error("reasoning failed: {0}")]
    ReasoningFailed(String),

    /// The loop itself could not proceed (bad route target, lost state).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}
