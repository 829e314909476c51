//! Company research agent.
//!
//! One `researcher` step loops on itself: each iteration asks the model for the next turn,
//! dispatches any requested lookups concurrently, and appends the results. The run ends
//! when the model's message contains the termination sentinel or the iteration bound
//! is reached.
//!
//! - [`ResearchStep`]: the graph step wrapping a [`Reasoner`](crate::Reasoner).
//! - [`ResearchLoop`]: the per-run state machine that drives steps, routing, and tools.
//! - [`ResearchRunner`]: shared entry point; validates input, seeds state, streams events.
//! - [`ResearchBuildConfig`] / [`build_research_runner`]: wiring from [`config::Settings`].

mod build;
mod prompt;
mod research_loop;
mod runner;
mod step;

pub use build::{
    build_research_graph, build_research_runner, build_tool_registry, BuildRunnerError,
    ResearchBuildConfig,
};
pub use prompt::{research_request, system_prompt, RESEARCH_FOCUS};
pub use research_loop::ResearchLoop;
pub use runner::{ResearchRunner, DEFAULT_MAX_ITERATIONS};
pub use step::{ResearchStep, RESEARCHER_STEP};
