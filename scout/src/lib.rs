//! # Scout
//!
//! A tool-using research agent that compiles corporate-intelligence reports about a
//! named company. One reasoning step repeatedly consults a language model, the model
//! requests lookups from external search and social-profile services, and the results
//! are folded back into an append-only conversation until the model signals completion
//! or the iteration bound is hit.
//!
//! ## Layout
//!
//! - [`message`] and [`state`]: the append-only [`ConversationState`] and the values it holds.
//! - [`tools`]: the [`Tool`] trait, the [`ToolRegistry`] with timeouts and ordered
//!   concurrent dispatch, and the five HTTP adapters.
//! - [`reasoning`]: the [`Reasoner`] trait with [`OpenAiReasoner`] and [`ScriptedReasoner`].
//! - [`graph`]: [`WorkflowGraph`] builder, validation, and termination routing.
//! - [`agent::research`]: the research loop state machine and [`ResearchRunner`].
//! - [`stream`]: per-step [`StreamEvent`]s and the [`aggregate`] report builder.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use scout::{
//!     build_research_graph, ReasoningResponse, ResearchRunner, ScriptedReasoner, ToolRegistry,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let reasoner = Arc::new(ScriptedReasoner::new(vec![ReasoningResponse::terminal(
//!     "FINAL ANSWER: Acme Corp builds anvils.",
//! )]));
//! let graph = build_research_graph(reasoner)?;
//! let runner = ResearchRunner::new(graph, ToolRegistry::new());
//! let report = runner.run_research("Acme Corp").await?;
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod error;
pub mod graph;
pub mod message;
pub mod reasoning;
pub mod state;
pub mod stream;
pub mod tools;

pub use agent::research::{
    build_research_graph, build_research_runner, build_tool_registry, BuildRunnerError,
    ResearchBuildConfig, ResearchLoop, ResearchRunner, ResearchStep, RESEARCHER_STEP,
};
pub use error::AgentError;
pub use graph::{
    CompilationError, CompiledWorkflow, RouterFn, Step, StepOutcome, WorkflowGraph, END, START,
    TERMINATION_SENTINEL,
};
pub use message::{Message, Role};
pub use reasoning::{OpenAiReasoner, Reasoner, ReasoningResponse, ScriptedReasoner};
pub use state::{ConversationState, ToolOutcome, ToolRequest, ToolResult};
pub use stream::{aggregate, ResearchStream, RunResult, StreamEvent, Termination};
pub use tools::{Tool, ToolError, ToolRegistry, ToolSpec};
