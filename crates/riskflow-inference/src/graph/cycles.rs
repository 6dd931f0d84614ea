//! Feedback-loop detection: three-color depth-first search over parent links.
//!
//! Iterative, with an explicit frame stack and a flat color table indexed by
//! arena slot, so deep chains cannot exhaust the call stack.

use petgraph::graph::NodeIndex;
use riskflow_core::models::{CycleReport, RiskNode};

use super::indexed::IndexedGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    InProgress,
    Done,
}

/// Find every cycle reachable by walking from each node to its parents.
///
/// Every node is tried as a DFS root (in arena order), so disconnected
/// components are all covered. When the walk meets an in-progress ancestor,
/// the stack slice from that ancestor to the current node is one cycle:
/// `cycle[i + 1]` is a parent of `cycle[i]`, and the closing step is
/// "`cycle[0]` is a parent of the last element".
pub fn find_cycles(graph: &IndexedGraph) -> Vec<Vec<NodeIndex>> {
    let mut color = vec![Color::Unvisited; graph.node_count()];
    let mut cycles = Vec::new();
    // (node, cursor into its parent list)
    let mut stack: Vec<(NodeIndex, usize)> = Vec::new();

    for root in graph.indices() {
        if color[root.index()] != Color::Unvisited {
            continue;
        }
        color[root.index()] = Color::InProgress;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (node, cursor) = *frame;
            let Some(&parent) = graph.parents(node).get(cursor) else {
                color[node.index()] = Color::Done;
                stack.pop();
                continue;
            };
            frame.1 += 1;

            match color[parent.index()] {
                Color::InProgress => {
                    // In-progress nodes are exactly the ones on the stack.
                    if let Some(start) = stack.iter().position(|&(n, _)| n == parent) {
                        cycles.push(stack[start..].iter().map(|&(n, _)| n).collect());
                    }
                }
                Color::Unvisited => {
                    color[parent.index()] = Color::InProgress;
                    stack.push((parent, 0));
                }
                Color::Done => {}
            }
        }
    }

    cycles
}

/// Detect feedback loops in a node snapshot.
pub fn detect_cycles(nodes: &[RiskNode]) -> CycleReport {
    let graph = IndexedGraph::from_nodes(nodes);
    let cycles: Vec<Vec<String>> = find_cycles(&graph)
        .into_iter()
        .map(|cycle| cycle.into_iter().map(|idx| graph.id(idx).to_string()).collect())
        .collect();

    CycleReport {
        has_cycles: !cycles.is_empty(),
        cycles,
    }
}
