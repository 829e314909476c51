//! Per-run state machine: Reasoning → (ToolDispatch →) Reasoning … → Terminated.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::error::AgentError;
use crate::graph::{
    log_route, log_run_complete, log_step_complete, log_step_start, CompiledWorkflow, StepOutcome,
};
use crate::message::Message;
use crate::state::{ConversationState, ToolRequest};
use crate::stream::{StreamEvent, Termination};
use crate::tools::{ToolError, ToolRegistry, ToolSpec};

enum LoopState {
    Reasoning {
        step: String,
    },
    ToolDispatch {
        step: String,
        next: String,
        requests: Vec<ToolRequest>,
    },
    Terminated(Termination),
}

/// Drives one run over a shared [`CompiledWorkflow`] and [`ToolRegistry`].
///
/// Each Reasoning state is one step invocation and counts toward `max_iterations`. Tool
/// batches run after routing, so the router always sees the step's own message. Events
/// go to `events`; if the receiver is dropped the run stops at the next emit.
pub struct ResearchLoop {
    graph: Arc<CompiledWorkflow>,
    tools: Arc<ToolRegistry>,
    tool_specs: Vec<ToolSpec>,
    max_iterations: u32,
}

impl ResearchLoop {
    pub fn new(
        graph: Arc<CompiledWorkflow>,
        tools: Arc<ToolRegistry>,
        max_iterations: u32,
    ) -> Self {
        let tool_specs = tools.list();
        Self {
            graph,
            tools,
            tool_specs,
            max_iterations: max_iterations.max(1),
        }
    }

    /// Runs to termination, appending to `state` and emitting events as it goes.
    ///
    /// Returns the termination reason, or the error that aborted the run. Errors are not
    /// emitted here; the caller decides how to surface them.
    pub async fn run(
        &self,
        state: &mut ConversationState,
        events: &mpsc::Sender<Result<StreamEvent, AgentError>>,
    ) -> Result<Termination, AgentError> {
        let mut iterations: u32 = 0;
        let mut current = LoopState::Reasoning {
            step: self.graph.start().to_string(),
        };

        loop {
            current = match current {
                LoopState::Reasoning { step } => {
                    if iterations >= self.max_iterations {
                        tracing::warn!(limit = self.max_iterations, "Iteration bound reached");
                        LoopState::Terminated(Termination::IterationBound {
                            limit: self.max_iterations,
                        })
                    } else {
                        iterations += 1;
                        self.reason(&step, iterations, state, events).await?
                    }
                }
                LoopState::ToolDispatch {
                    step,
                    next,
                    requests,
                } => {
                    let results = self.tools.dispatch(&requests).await.map_err(|e| match e {
                        ToolError::NotFound(name) => AgentError::UnknownTool(name),
                        other => AgentError::ExecutionFailed(other.to_string()),
                    })?;
                    state.extend(results.iter().map(|r| r.to_message()));
                    emit(events, StreamEvent::ToolResults { step, results }).await?;
                    LoopState::Reasoning { step: next }
                }
                LoopState::Terminated(termination) => {
                    log_run_complete(iterations, &termination.to_string());
                    emit(
                        events,
                        StreamEvent::Terminated {
                            termination: termination.clone(),
                            iterations,
                        },
                    )
                    .await?;
                    return Ok(termination);
                }
            };
        }
    }

    async fn reason(
        &self,
        step: &str,
        iteration: u32,
        state: &mut ConversationState,
        events: &mpsc::Sender<Result<StreamEvent, AgentError>>,
    ) -> Result<LoopState, AgentError> {
        let runner = self.graph.step(step).ok_or_else(|| {
            AgentError::ExecutionFailed(format!("step '{}' is not in the graph", step))
        })?;

        log_step_start(step, iteration);
        let response = runner.run(state, &self.tool_specs).await?;
        log_step_complete(step, iteration, response.tool_requests.len());
        // Every requested name must be registered, whether or not this turn terminates.
        if let Some(unknown) = response
            .tool_requests
            .iter()
            .find(|r| !self.tools.contains(&r.tool_name))
        {
            return Err(AgentError::UnknownTool(unknown.tool_name.clone()));
        }

        state.push(Message::agent(response.content));
        let message = state.relabel_last(step).cloned().ok_or_else(|| {
            AgentError::ExecutionFailed("conversation is empty after append".to_string())
        })?;

        let outcome = self.graph.route(step, &message)?;
        log_route(step, &outcome);
        emit(
            events,
            StreamEvent::StepOutput {
                step: step.to_string(),
                iteration,
                message,
            },
        )
        .await?;

        Ok(match outcome {
            StepOutcome::Terminate => LoopState::Terminated(Termination::Completed {
                step: step.to_string(),
            }),
            StepOutcome::Continue(next) if response.tool_requests.is_empty() => {
                LoopState::Reasoning { step: next }
            }
            StepOutcome::Continue(next) => LoopState::ToolDispatch {
                step: step.to_string(),
                next,
                requests: response.tool_requests,
            },
        })
    }
}

async fn emit(
    events: &mpsc::Sender<Result<StreamEvent, AgentError>>,
    event: StreamEvent,
) -> Result<(), AgentError> {
    events
        .send(Ok(event))
        .await
        .map_err(|_| AgentError::ExecutionFailed("stream consumer dropped".to_string()))
}
