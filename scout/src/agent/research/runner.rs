//! Shared research entry point.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::Instrument;
use uuid::Uuid;

use crate::agent::research::prompt::research_request;
use crate::agent::research::research_loop::ResearchLoop;
use crate::error::AgentError;
use crate::graph::{log_run_start, CompiledWorkflow};
use crate::state::ConversationState;
use crate::stream::{aggregate, ResearchStream, RunResult, STREAM_CHANNEL_CAPACITY};
use crate::tools::ToolRegistry;

/// Default bound on reasoning invocations per run.
pub const DEFAULT_MAX_ITERATIONS: u32 = config::DEFAULT_MAX_ITERATIONS;

/// Runs company research over a compiled workflow and a tool registry.
///
/// Cheap to clone: the graph and registry are shared immutably, and every run gets its
/// own [`ConversationState`], so concurrent runs never see each other's messages.
///
/// **Interaction**: the serve handler and the CLI hold one runner built by
/// [`build_research_runner`](crate::build_research_runner); tests build one directly.
#[derive(Clone)]
pub struct ResearchRunner {
    graph: Arc<CompiledWorkflow>,
    tools: Arc<ToolRegistry>,
    max_iterations: u32,
}

impl ResearchRunner {
    pub fn new(graph: CompiledWorkflow, tools: ToolRegistry) -> Self {
        Self {
            graph: Arc::new(graph),
            tools: Arc::new(tools),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Sets the iteration bound; zero is treated as one.
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn graph(&self) -> &CompiledWorkflow {
        &self.graph
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Starts a run for `company` and returns its event stream.
    ///
    /// A blank name is rejected here, before any reasoning call. Must be called within a
    /// Tokio runtime; the run executes on a spawned task and stops early if the stream is
    /// dropped.
    pub fn stream(&self, company: &str) -> Result<ResearchStream, AgentError> {
        let company = company.trim();
        if company.is_empty() {
            return Err(AgentError::InvalidInput(
                "company name must not be empty".to_string(),
            ));
        }
        let span = tracing::info_span!("research", run_id = %Uuid::new_v4(), company = %company);
        span.in_scope(|| log_run_start(company));
        Ok(self.stream_state(ConversationState::seeded(research_request(company)), span))
    }

    fn stream_state(&self, mut state: ConversationState, span: tracing::Span) -> ResearchStream {
        let (tx, rx) = mpsc::channel(STREAM_CHANNEL_CAPACITY);
        let research_loop =
            ResearchLoop::new(self.graph.clone(), self.tools.clone(), self.max_iterations);

        tokio::spawn(
            async move {
                if let Err(e) = research_loop.run(&mut state, &tx).await {
                    tracing::error!(error = %e, messages = state.len(), "Research run failed");
                    let _ = tx.send(Err(e)).await;
                }
            }
            .instrument(span),
        );

        ReceiverStream::new(rx)
    }

    /// Runs to completion and returns the aggregated result.
    pub async fn research(&self, company: &str) -> Result<RunResult, AgentError> {
        aggregate(self.stream(company)?).await
    }

    /// Runs to completion and returns the report text.
    ///
    /// A run that hits the iteration bound still returns whatever was gathered.
    pub async fn run_research(&self, company: &str) -> Result<String, AgentError> {
        let result = self.research(company).await?;
        if result.is_partial() {
            tracing::warn!(
                company,
                iterations = result.iterations(),
                "Returning partial report"
            );
        }
        Ok(result.report())
    }
}
