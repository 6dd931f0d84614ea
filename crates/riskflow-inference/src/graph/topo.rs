//! Approximate topological ordering: Kahn's algorithm over a cycle-broken view.

use std::collections::{HashSet, VecDeque};

use petgraph::graph::NodeIndex;
use riskflow_core::models::RiskNode;

use super::cycles::find_cycles;
use super::indexed::IndexedGraph;

/// The closing dependency of each cycle as `(parent, child)`.
///
/// For a cycle `[c0, .., ck]` this is "ck depends on c0": one edge per cycle,
/// chosen deterministically rather than as a minimum feedback arc set.
pub fn back_edges(cycles: &[Vec<NodeIndex>]) -> HashSet<(NodeIndex, NodeIndex)> {
    cycles
        .iter()
        .filter_map(|cycle| Some((*cycle.first()?, *cycle.last()?)))
        .collect()
}

/// Order nodes so each comes after all of its parents, back-edges excluded.
///
/// Nodes still blocked by residual cyclic structure (overlapping loops whose
/// back-edges were not enough to free them) are appended in arena order.
pub fn order(graph: &IndexedGraph) -> Vec<NodeIndex> {
    let excluded = back_edges(&find_cycles(graph));
    order_excluding(graph, &excluded)
}

pub(crate) fn order_excluding(
    graph: &IndexedGraph,
    excluded: &HashSet<(NodeIndex, NodeIndex)>,
) -> Vec<NodeIndex> {
    let n = graph.node_count();
    let mut in_degree = vec![0_usize; n];
    let mut children: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];

    // Children are pushed in arena order, which keeps dequeue order stable.
    for child in graph.indices() {
        for &parent in graph.parents(child) {
            if excluded.contains(&(parent, child)) {
                continue;
            }
            in_degree[child.index()] += 1;
            children[parent.index()].push(child);
        }
    }

    let mut queue: VecDeque<NodeIndex> = graph
        .indices()
        .filter(|idx| in_degree[idx.index()] == 0)
        .collect();
    let mut placed = vec![false; n];
    let mut sorted = Vec::with_capacity(n);

    while let Some(idx) = queue.pop_front() {
        placed[idx.index()] = true;
        sorted.push(idx);
        for &child in &children[idx.index()] {
            in_degree[child.index()] -= 1;
            if in_degree[child.index()] == 0 {
                queue.push_back(child);
            }
        }
    }

    sorted.extend(graph.indices().filter(|idx| !placed[idx.index()]));
    sorted
}

/// Best-effort ancestor-before-descendant ordering of node ids.
pub fn topological_order(nodes: &[RiskNode]) -> Vec<String> {
    let graph = IndexedGraph::from_nodes(nodes);
    order(&graph)
        .into_iter()
        .map(|idx| graph.id(idx).to_string())
        .collect()
}
