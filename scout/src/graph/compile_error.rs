//! Graph compilation errors.
//!
//! Returned by [`WorkflowGraph::compile`](crate::graph::WorkflowGraph::compile) when the
//! topology cannot be run.

use thiserror::Error;

/// Compilation error for a workflow graph.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompilationError {
    /// A step name in an edge was not registered via `add_step` (and is not START/END).
    #[error("step not found: {0}")]
    NodeNotFound(String),

    /// No edge has from == START.
    #[error("graph must have exactly one edge from START")]
    MissingStart,

    /// Edges branch: more than one START edge or more than one outgoing edge per step.
    #[error("invalid edge layout: {0}")]
    InvalidChain(String),

    /// A step has both an outgoing edge and conditional edges; it must have exactly one.
    #[error("step has both edge and conditional edges: {0}")]
    NodeHasBothEdgeAndConditional(String),

    /// A value in a conditional path map is not a registered step or END.
    #[error("conditional path_map invalid target: {0}")]
    InvalidConditionalPathMap(String),

    /// A reachable step has no outgoing route, so the run could stall there.
    #[error("step has no outgoing route: {0}")]
    MissingRoute(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: Display of NodeNotFound contains "step not found" and the name.
    #[test]
    fn compilation_error_display_node_not_found() {
        let s = CompilationError::NodeNotFound("x".to_string()).to_string();
        assert!(s.contains("step not found"), "{}", s);
        assert!(s.contains('x'), "{}", s);
    }

    /// **Scenario**: Display of MissingRoute names the stalled step.
    #[test]
    fn compilation_error_display_missing_route() {
        let s = CompilationError::MissingRoute("verifier".into()).to_string();
        assert!(s.contains("no outgoing route"), "{}", s);
        assert!(s.contains("verifier"), "{}", s);
    }
}
