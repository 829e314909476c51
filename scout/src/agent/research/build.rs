//! Builds a [`ResearchRunner`] from settings: reasoner, tool registry, and graph.

use std::sync::Arc;
use std::time::Duration;

use config::Settings;

use crate::agent::research::prompt::{system_prompt, RESEARCH_FOCUS};
use crate::agent::research::runner::{ResearchRunner, DEFAULT_MAX_ITERATIONS};
use crate::agent::research::step::{ResearchStep, RESEARCHER_STEP};
use crate::graph::{CompilationError, CompiledWorkflow, WorkflowGraph, START};
use crate::reasoning::{OpenAiReasoner, Reasoner, DEFAULT_MODEL};
use crate::tools::{
    NovadaSearchTool, RapidApiTool, TavilySearchTool, ToolRegistry, DEFAULT_TOOL_TIMEOUT,
};

/// Error building a runner from configuration.
#[derive(Debug, thiserror::Error)]
pub enum BuildRunnerError {
    #[error("missing credential: {0} is not set")]
    MissingCredential(&'static str),
    #[error("compilation failed: {0}")]
    Compilation(#[from] CompilationError),
}

/// Everything needed to assemble a runner. Credentials are explicit values; nothing here
/// reads the process environment.
#[derive(Debug, Clone)]
pub struct ResearchBuildConfig {
    pub openai_api_key: Option<String>,
    pub openai_base_url: Option<String>,
    pub model: String,
    pub novada_api_key: Option<String>,
    pub tavily_api_key: Option<String>,
    pub rapidapi_key: Option<String>,
    pub max_iterations: u32,
    pub tool_timeout: Duration,
}

impl Default for ResearchBuildConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: None,
            model: DEFAULT_MODEL.to_string(),
            novada_api_key: None,
            tavily_api_key: None,
            rapidapi_key: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tool_timeout: DEFAULT_TOOL_TIMEOUT,
        }
    }
}

impl ResearchBuildConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            openai_api_key: settings.openai_api_key.clone(),
            openai_base_url: settings.openai_base_url.clone(),
            model: settings.model.clone(),
            novada_api_key: settings.novada_api_key.clone(),
            tavily_api_key: settings.tavily_api_key.clone(),
            rapidapi_key: settings.rapidapi_key.clone(),
            max_iterations: settings.max_iterations,
            tool_timeout: settings.tool_timeout,
        }
    }
}

/// Registers each adapter whose credential is present; missing ones are skipped with a warning.
pub fn build_tool_registry(config: &ResearchBuildConfig) -> ToolRegistry {
    let timeout = config.tool_timeout;
    let mut registry = ToolRegistry::new().with_timeout(timeout);

    match config.novada_api_key.as_deref() {
        Some(key) => registry.register(Box::new(NovadaSearchTool::with_timeout(key, timeout))),
        None => tracing::warn!("NOVADA_API_KEY not set; novada_google_search disabled"),
    }
    match config.tavily_api_key.as_deref() {
        Some(key) => registry.register(Box::new(TavilySearchTool::with_timeout(key, timeout))),
        None => tracing::warn!("TAVILY_API_KEY not set; tavily_search_results_json disabled"),
    }
    match config.rapidapi_key.as_deref() {
        Some(key) => {
            for tool in RapidApiTool::all(key, timeout) {
                registry.register(Box::new(tool));
            }
        }
        None => tracing::warn!("RAPIDAPI_KEY not set; RapidAPI lookups disabled"),
    }

    tracing::info!(tools = ?registry.names(), "Tool registry ready");
    registry
}

/// Single researcher step that loops on itself until the sentinel appears.
pub fn build_research_graph(
    reasoner: Arc<dyn Reasoner>,
) -> Result<CompiledWorkflow, CompilationError> {
    let mut graph = WorkflowGraph::new();
    graph
        .add_step(RESEARCHER_STEP, Arc::new(ResearchStep::new(reasoner)))
        .add_edge(START, RESEARCHER_STEP)
        .add_edge(RESEARCHER_STEP, RESEARCHER_STEP);
    graph.compile()
}

/// Builds the production runner: OpenAI reasoner, credentialed tools, default graph.
pub fn build_research_runner(
    config: &ResearchBuildConfig,
) -> Result<ResearchRunner, BuildRunnerError> {
    let api_key = config
        .openai_api_key
        .as_deref()
        .ok_or(BuildRunnerError::MissingCredential("OPENAI_API_KEY"))?;
    let reasoner = OpenAiReasoner::from_credentials(
        api_key,
        config.openai_base_url.as_deref(),
        config.model.clone(),
    )
    .with_system_prompt(system_prompt(RESEARCH_FOCUS));

    let graph = build_research_graph(Arc::new(reasoner))?;
    let tools = build_tool_registry(config);
    Ok(ResearchRunner::new(graph, tools).with_max_iterations(config.max_iterations))
}
