//! Workflow graph: named reasoning steps, their routes, and the termination rules.
//!
//! Build with [`WorkflowGraph`]: `add_step`, `add_edge(from, to)` using [`START`] and
//! [`END`], and optionally `add_conditional_edges`. `compile` validates the topology and
//! yields a [`CompiledWorkflow`], which the research loop drives one step at a time.
//!
//! # Routing
//!
//! After a step's message is relabeled with the step name, the router decides:
//!
//! 1. If the message contains [`TERMINATION_SENTINEL`], the run terminates. This check
//!    precedes every edge, so any step can end the run.
//! 2. `add_edge(step, END)`: terminate.
//! 3. `add_edge(step, next)`: continue at `next`.
//! 4. Conditional edges: the router function picks a key, mapped through the optional
//!    path map to a step name or END.

mod compile_error;
mod compiled;
mod logging;
mod router;
mod step;
mod visualization;
mod workflow_graph;

pub use compile_error::CompilationError;
pub use compiled::CompiledWorkflow;
pub use logging::{log_route, log_run_complete, log_run_start, log_step_complete, log_step_start};
pub use router::{has_termination_sentinel, RouterFn, StepOutcome, TERMINATION_SENTINEL};
pub use step::Step;
pub use visualization::{generate_dot, generate_text};
pub use workflow_graph::{WorkflowGraph, END, START};
