use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use crate::graph::compile_error::CompilationError;
use crate::graph::compiled::CompiledWorkflow;
use crate::graph::router::{RouterFn, Transition};
use crate::graph::step::Step;

/// Sentinel for graph entry: use as `from` in `add_edge(START, first_step)`.
pub const START: &str = "__start__";

/// Sentinel for graph exit: use as `to` in `add_edge(step, END)`.
pub const END: &str = "__end__";

/// Builder for a workflow of named steps.
///
/// A step has either one outgoing `add_edge` or `add_conditional_edges`, not both.
/// Self-edges are allowed and are how the single-researcher loop is expressed.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use scout::{ResearchStep, ScriptedReasoner, WorkflowGraph, START};
///
/// let step = ResearchStep::new(Arc::new(ScriptedReasoner::new(vec![])));
/// let mut graph = WorkflowGraph::new();
/// graph
///     .add_step("researcher", Arc::new(step))
///     .add_edge(START, "researcher")
///     .add_edge("researcher", "researcher");
/// let compiled = graph.compile().unwrap();
/// assert_eq!(compiled.start(), "researcher");
/// ```
#[derive(Default)]
pub struct WorkflowGraph {
    steps: HashMap<String, Arc<dyn Step>>,
    /// Edges (from, to) in insertion order.
    edges: Vec<(String, String)>,
    conditional_edges: HashMap<String, (RouterFn, Option<HashMap<String, String>>)>,
}

impl WorkflowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a step under `name`; a later registration with the same name replaces it.
    pub fn add_step(&mut self, name: impl Into<String>, step: Arc<dyn Step>) -> &mut Self {
        self.steps.insert(name.into(), step);
        self
    }

    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.edges.push((from.into(), to.into()));
        self
    }

    /// Routes `source` through `router`; `path_map` maps router keys to step names or END.
    pub fn add_conditional_edges(
        &mut self,
        source: impl Into<String>,
        router: RouterFn,
        path_map: Option<HashMap<String, String>>,
    ) -> &mut Self {
        self.conditional_edges
            .insert(source.into(), (router, path_map));
        self
    }

    /// Validates the topology and produces the runnable workflow.
    pub fn compile(self) -> Result<CompiledWorkflow, CompilationError> {
        for (from, to) in &self.edges {
            if from == END || (from != START && !self.steps.contains_key(from)) {
                return Err(CompilationError::NodeNotFound(from.clone()));
            }
            if to == START || (to != END && !self.steps.contains_key(to)) {
                return Err(CompilationError::NodeNotFound(to.clone()));
            }
        }
        for (source, (_, path_map)) in &self.conditional_edges {
            if !self.steps.contains_key(source) {
                return Err(CompilationError::NodeNotFound(source.clone()));
            }
            if let Some(map) = path_map {
                for target in map.values() {
                    if target != END && !self.steps.contains_key(target) {
                        return Err(CompilationError::InvalidConditionalPathMap(target.clone()));
                    }
                }
            }
        }

        let mut start_edges = self.edges.iter().filter(|(f, _)| f == START);
        let start = match (start_edges.next(), start_edges.next()) {
            (None, _) => return Err(CompilationError::MissingStart),
            (Some((_, to)), None) if to == END => {
                return Err(CompilationError::InvalidChain(
                    "START must lead to a step, not END".into(),
                ))
            }
            (Some((_, to)), None) => to.clone(),
            (Some(_), Some(_)) => {
                return Err(CompilationError::InvalidChain(
                    "multiple edges from START".into(),
                ))
            }
        };

        let mut transitions: HashMap<String, Transition> = HashMap::new();
        for (from, to) in self.edges.iter().filter(|(f, _)| f != START) {
            if transitions.contains_key(from) {
                return Err(CompilationError::InvalidChain(format!(
                    "step '{}' has more than one outgoing edge",
                    from
                )));
            }
            if self.conditional_edges.contains_key(from) {
                return Err(CompilationError::NodeHasBothEdgeAndConditional(from.clone()));
            }
            transitions.insert(from.clone(), Transition::Edge(to.clone()));
        }
        for (source, (router, path_map)) in self.conditional_edges {
            transitions.insert(source, Transition::Conditional { router, path_map });
        }

        let reachable = reachable_steps(&start, &transitions)?;
        for name in self.steps.keys().filter(|n| !reachable.contains(n.as_str())) {
            tracing::warn!(step = %name, "Step is unreachable from START");
        }

        Ok(CompiledWorkflow::new(self.steps, start, transitions))
    }
}

/// Breadth-first walk from `start`; every reached step must own a transition.
fn reachable_steps(
    start: &str,
    transitions: &HashMap<String, Transition>,
) -> Result<HashSet<String>, CompilationError> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([start.to_string()]);
    while let Some(name) = queue.pop_front() {
        if name == END || !seen.insert(name.clone()) {
            continue;
        }
        let transition = transitions
            .get(&name)
            .ok_or_else(|| CompilationError::MissingRoute(name.clone()))?;
        if let Some(targets) = transition.static_targets() {
            queue.extend(targets.into_iter().map(str::to_string));
        }
    }
    Ok(seen)
}
