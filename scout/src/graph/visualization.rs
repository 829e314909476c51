//! Text and Graphviz renderings of a compiled workflow, for `--verbose` output and debugging.

use std::fmt::Write;

use crate::graph::compiled::CompiledWorkflow;
use crate::graph::router::Transition;
use crate::graph::{END, START};

/// Graphviz DOT rendering. Conditional edges are dashed and labeled with their key.
pub fn generate_dot(graph: &CompiledWorkflow) -> String {
    let mut dot = String::from("digraph {\n  rankdir=LR;\n  node [shape=box];\n\n");
    let _ = writeln!(dot, "  \"{}\" [label=\"START\", style=bold];", START);
    let _ = writeln!(dot, "  \"{}\" [label=\"END\", style=bold];", END);
    for name in graph.step_names() {
        let _ = writeln!(dot, "  \"{}\";", name);
    }
    dot.push('\n');
    let _ = writeln!(dot, "  \"{}\" -> \"{}\";", START, graph.start());

    for (from, transition) in sorted(graph) {
        match transition {
            Transition::Edge(to) => {
                let _ = writeln!(dot, "  \"{}\" -> \"{}\";", from, to);
            }
            Transition::Conditional {
                path_map: Some(map),
                ..
            } => {
                let mut keys: Vec<_> = map.iter().collect();
                keys.sort();
                for (key, to) in keys {
                    let _ = writeln!(
                        dot,
                        "  \"{}\" -> \"{}\" [style=dashed, label=\"{}\"];",
                        from, to, key
                    );
                }
            }
            Transition::Conditional { path_map: None, .. } => {
                let _ = writeln!(dot, "  \"{}\" -> \"*\" [style=dashed];", from);
            }
        }
    }
    dot.push_str("}\n");
    dot
}

/// Plain-text listing of steps and routes.
pub fn generate_text(graph: &CompiledWorkflow) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "Workflow:");
    let _ = writeln!(text, "Steps: {}", graph.step_names().join(", "));
    let _ = writeln!(text, "  {} -> {}", START, graph.start());
    for (from, transition) in sorted(graph) {
        match transition {
            Transition::Edge(to) => {
                let _ = writeln!(text, "  {} -> {}", from, to);
            }
            Transition::Conditional { .. } => {
                let targets = transition
                    .static_targets()
                    .map(|mut t| {
                        t.sort_unstable();
                        t.join(" | ")
                    })
                    .unwrap_or_else(|| "*".to_string());
                let _ = writeln!(text, "  {} -> ? ({})", from, targets);
            }
        }
    }
    let _ = writeln!(text, "  any step -> {} on \"FINAL ANSWER\"", END);
    text
}

fn sorted(graph: &CompiledWorkflow) -> Vec<(&String, &Transition)> {
    let mut entries: Vec<_> = graph.transitions().iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}
