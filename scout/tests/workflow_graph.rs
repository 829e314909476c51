//! WorkflowGraph: compile validation and routing on compiled workflows.


use std::collections::HashMap;
use std::sync::Arc;

use scout::graph::{generate_dot, generate_text};
use scout::{
    CompilationError, Message, ReasoningResponse, ResearchStep, RouterFn, ScriptedReasoner,
    StepOutcome, WorkflowGraph, END, START,
};

fn step() -> Arc<ResearchStep> {
    Arc::new(ResearchStep::new(Arc::new(ScriptedReasoner::repeating(
        ReasoningResponse::terminal("ok"),
    ))))
}

/// **Scenario**: An edge to an unregistered step fails with NodeNotFound.
#[test]
fn compile_fails_when_edge_refers_to_unknown_step() {
    let mut graph = WorkflowGraph::new();
    graph
        .add_step("researcher", step())
        .add_edge(START, "researcher")
        .add_edge("researcher", "verifier");
    match graph.compile() {
        Err(CompilationError::NodeNotFound(name)) => assert_eq!(name, "verifier"),
        other => panic!("expected NodeNotFound, got {:?}", other.err()),
    }
}

/// **Scenario**: Without a START edge there is nothing to run.
#[test]
fn compile_fails_without_start_edge() {
    let mut graph = WorkflowGraph::new();
    graph.add_step("researcher", step()).add_edge("researcher", END);
    assert_eq!(graph.compile().err(), Some(CompilationError::MissingStart));
}

/// **Scenario**: Two START edges are a branch, not a chain.
#[test]
fn compile_fails_with_two_start_edges() {
    let mut graph = WorkflowGraph::new();
    graph
        .add_step("a", step())
        .add_step("b", step())
        .add_edge(START, "a")
        .add_edge(START, "b")
        .add_edge("a", END)
        .add_edge("b", END);
    assert!(matches!(graph.compile(), Err(CompilationError::InvalidChain(_))));
}

/// **Scenario**: START wired straight to END has no step to run and is rejected.
#[test]
fn compile_fails_when_start_leads_to_end() {
    let mut graph = WorkflowGraph::new();
    graph
        .add_step("a", step())
        .add_edge(START, END)
        .add_edge("a", END);
    assert!(matches!(graph.compile(), Err(CompilationError::InvalidChain(_))));
}

/// **Scenario**: A step with two outgoing edges is rejected.
#[test]
fn compile_fails_with_duplicate_outgoing_edge() {
    let mut graph = WorkflowGraph::new();
    graph
        .add_step("a", step())
        .add_edge(START, "a")
        .add_edge("a", "a")
        .add_edge("a", END);
    assert!(matches!(graph.compile(), Err(CompilationError::InvalidChain(_))));
}

/// **Scenario**: A reachable step with no route is a compile error.
#[test]
fn compile_fails_when_reachable_step_has_no_route() {
    let mut graph = WorkflowGraph::new();
    graph
        .add_step("researcher", step())
        .add_step("verifier", step())
        .add_edge(START, "researcher")
        .add_edge("researcher", "verifier");
    assert_eq!(
        graph.compile().err(),
        Some(CompilationError::MissingRoute("verifier".into()))
    );
}

/// **Scenario**: Edge plus conditional edges on one step is rejected.
#[test]
fn compile_fails_with_edge_and_conditional() {
    let router: RouterFn = Arc::new(|_: &str, _: &Message| END.to_string());
    let mut graph = WorkflowGraph::new();
    graph
        .add_step("a", step())
        .add_edge(START, "a")
        .add_edge("a", END)
        .add_conditional_edges("a", router, None);
    assert_eq!(
        graph.compile().err(),
        Some(CompilationError::NodeHasBothEdgeAndConditional("a".into()))
    );
}

/// **Scenario**: A path-map target that is not a step is rejected.
#[test]
fn compile_fails_with_bad_path_map_target() {
    let router: RouterFn = Arc::new(|_: &str, _: &Message| "go".to_string());
    let mut graph = WorkflowGraph::new();
    graph
        .add_step("a", step())
        .add_edge(START, "a")
        .add_conditional_edges(
            "a",
            router,
            Some(HashMap::from([("go".to_string(), "nowhere".to_string())])),
        );
    assert_eq!(
        graph.compile().err(),
        Some(CompilationError::InvalidConditionalPathMap("nowhere".into()))
    );
}

/// **Scenario**: Self-loop compiles; sentinel terminates from any step, otherwise continue.
#[test]
fn self_loop_routes_until_sentinel() {
    let mut graph = WorkflowGraph::new();
    graph
        .add_step("researcher", step())
        .add_edge(START, "researcher")
        .add_edge("researcher", "researcher");
    let compiled = graph.compile().unwrap();
    assert_eq!(compiled.start(), "researcher");

    let working = Message::agent("gathering").with_name("researcher");
    assert_eq!(
        compiled.route("researcher", &working).unwrap(),
        StepOutcome::Continue("researcher".into())
    );
    let done = Message::agent("FINAL ANSWER: report").with_name("researcher");
    assert_eq!(
        compiled.route("researcher", &done).unwrap(),
        StepOutcome::Terminate
    );
    assert_eq!(
        compiled.route("anything-else", &done).unwrap(),
        StepOutcome::Terminate
    );
    assert!(compiled.route("anything-else", &working).is_err());
}

/// **Scenario**: Edge to END always terminates.
#[test]
fn edge_to_end_terminates() {
    let mut graph = WorkflowGraph::new();
    graph
        .add_step("once", step())
        .add_edge(START, "once")
        .add_edge("once", END);
    let compiled = graph.compile().unwrap();
    assert_eq!(
        compiled.route("once", &Message::agent("no marker")).unwrap(),
        StepOutcome::Terminate
    );
}

/// **Scenario**: Researcher → verifier via conditional edges; unreachable steps only warn.
#[test]
fn conditional_two_step_graph_compiles_and_routes() {
    let router: RouterFn = Arc::new(|_: &str, m: &Message| {
        if m.content.contains("needs check") {
            "verify".to_string()
        } else {
            "again".to_string()
        }
    });
    let mut graph = WorkflowGraph::new();
    graph
        .add_step("researcher", step())
        .add_step("verifier", step())
        .add_step("orphan", step())
        .add_edge(START, "researcher")
        .add_conditional_edges(
            "researcher",
            router,
            Some(HashMap::from([
                ("verify".to_string(), "verifier".to_string()),
                ("again".to_string(), "researcher".to_string()),
            ])),
        )
        .add_edge("verifier", "researcher");
    let compiled = graph.compile().unwrap();
    assert_eq!(compiled.step_names(), vec!["orphan", "researcher", "verifier"]);

    assert_eq!(
        compiled
            .route("researcher", &Message::agent("needs check"))
            .unwrap(),
        StepOutcome::Continue("verifier".into())
    );
    assert_eq!(
        compiled.route("verifier", &Message::agent("looks fine")).unwrap(),
        StepOutcome::Continue("researcher".into())
    );

    let text = generate_text(&compiled);
    assert!(text.contains("researcher -> ? (researcher | verifier)"), "{}", text);
    assert!(text.contains("verifier -> researcher"), "{}", text);

    let dot = generate_dot(&compiled);
    assert!(dot.starts_with("digraph {"), "{}", dot);
    assert!(dot.contains("\"__start__\" -> \"researcher\";"), "{}", dot);
    assert!(
        dot.contains("\"researcher\" -> \"verifier\" [style=dashed, label=\"verify\"];"),
        "{}",
        dot
    );
    assert!(dot.contains("\"verifier\" -> \"researcher\";"), "{}", dot);
}
