use std::collections::HashMap;
use std::sync::Arc;

use crate::error::AgentError;
use crate::graph::router::{StepOutcome, Transition};
use crate::graph::step::Step;
use crate::message::Message;

/// Validated, immutable workflow produced by
/// [`WorkflowGraph::compile`](crate::graph::WorkflowGraph::compile).
///
/// Holds no run state, so one instance is shared (behind `Arc`) by every run.
#[derive(Clone)]
pub struct CompiledWorkflow {
    steps: HashMap<String, Arc<dyn Step>>,
    start: String,
    transitions: HashMap<String, Transition>,
}

impl CompiledWorkflow {
    pub(crate) fn new(
        steps: HashMap<String, Arc<dyn Step>>,
        start: String,
        transitions: HashMap<String, Transition>,
    ) -> Self {
        Self {
            steps,
            start,
            transitions,
        }
    }

    /// Name of the first step.
    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn step(&self, name: &str) -> Option<&Arc<dyn Step>> {
        self.steps.get(name)
    }

    /// Registered step names, sorted.
    pub fn step_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.steps.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Decides what follows `step_name` given its relabeled message.
    ///
    /// A message containing the termination sentinel always terminates, whatever the step.
    pub fn route(&self, step_name: &str, last: &Message) -> Result<StepOutcome, AgentError> {
        let transition = match self.transitions.get(step_name) {
            Some(t) => t,
            None if crate::graph::has_termination_sentinel(&last.content) => {
                return Ok(StepOutcome::Terminate)
            }
            None => {
                return Err(AgentError::ExecutionFailed(format!(
                    "no route from step '{}'",
                    step_name
                )))
            }
        };
        transition.resolve(step_name, last, |name| self.steps.contains_key(name))
    }

    pub(crate) fn transitions(&self) -> &HashMap<String, Transition> {
        &self.transitions
    }
}
