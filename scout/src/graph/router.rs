use std::collections::HashMap;
use std::sync::Arc;

use crate::error::AgentError;
use crate::graph::END;
use crate::message::Message;

/// Marker a model emits when its report is complete.
///
/// Matched as a plain substring anywhere in the message, so a model that quotes the
/// phrase mid-report also ends the run.
pub const TERMINATION_SENTINEL: &str = "FINAL ANSWER";

pub fn has_termination_sentinel(content: &str) -> bool {
    content.contains(TERMINATION_SENTINEL)
}

/// Router decision after a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Run the named step next.
    Continue(String),
    Terminate,
}

/// Conditional router: `(step_name, last_message) -> key`.
///
/// The key is looked up in the path map when one is given, otherwise used directly as
/// the next step name. [`END`] means terminate.
pub type RouterFn = Arc<dyn Fn(&str, &Message) -> String + Send + Sync>;

/// Outgoing route of one step, fixed at compile time.
#[derive(Clone)]
pub(crate) enum Transition {
    Edge(String),
    Conditional {
        router: RouterFn,
        path_map: Option<HashMap<String, String>>,
    },
}

impl Transition {
    /// Targets known at compile time; `None` when a conditional router has no path map.
    pub(crate) fn static_targets(&self) -> Option<Vec<&str>> {
        match self {
            Transition::Edge(to) => Some(vec![to.as_str()]),
            Transition::Conditional {
                path_map: Some(map),
                ..
            } => Some(map.values().map(String::as_str).collect()),
            Transition::Conditional { path_map: None, .. } => None,
        }
    }

    /// Applies the sentinel rule, then the edge. `is_step` validates dynamic targets.
    pub(crate) fn resolve(
        &self,
        step_name: &str,
        last: &Message,
        is_step: impl Fn(&str) -> bool,
    ) -> Result<StepOutcome, AgentError> {
        if has_termination_sentinel(&last.content) {
            return Ok(StepOutcome::Terminate);
        }
        let target = match self {
            Transition::Edge(to) => to.clone(),
            Transition::Conditional { router, path_map } => {
                let key = router(step_name, last);
                path_map
                    .as_ref()
                    .and_then(|m| m.get(&key))
                    .cloned()
                    .unwrap_or(key)
            }
        };
        if target == END {
            Ok(StepOutcome::Terminate)
        } else if is_step(&target) {
            Ok(StepOutcome::Continue(target))
        } else {
            Err(AgentError::ExecutionFailed(format!(
                "route from '{}' names unknown step '{}'",
                step_name, target
            )))
        }
    }
}
