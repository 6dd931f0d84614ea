//! Everything about a network that stays fixed across passes: index, order,
//! and resolved edge strengths.

use petgraph::graph::NodeIndex;
use riskflow_core::config::ConvergenceConfig;
use riskflow_core::models::{NetworkUpdateResult, PropagationOptions, RiskNode};
use riskflow_core::traits::StrengthSource;
use tracing::debug;

use super::convergence;
use crate::graph::cycles::find_cycles;
use crate::graph::topo;
use crate::graph::IndexedGraph;
use crate::noisy_or::resolve_strength;

/// Precomputed propagation structure for one network shape.
///
/// Building it runs cycle detection and ordering once; the plan can then
/// propagate any number of snapshots that share the same nodes and parents
/// (sensitivity analysis relies on this).
pub struct PropagationPlan {
    pub graph: IndexedGraph,
    /// Approximate topological order.
    pub order: Vec<NodeIndex>,
    /// Number of feedback loops approximated.
    pub cycle_count: usize,
    /// Per node: (parent slot, clamped strength) for every declared parent
    /// that exists, in declaration order. Repeated declarations repeat here.
    inputs: Vec<Vec<(NodeIndex, f64)>>,
    /// Per node: whether it declares any parents at all.
    has_parents: Vec<bool>,
}

impl PropagationPlan {
    pub fn build<S: StrengthSource + ?Sized>(
        nodes: &[RiskNode],
        edges: &S,
        default_strength: f64,
    ) -> Self {
        let graph = IndexedGraph::from_nodes(nodes);
        let cycles = find_cycles(&graph);
        if !cycles.is_empty() {
            debug!(
                cycles = cycles.len(),
                "approximating feedback loops by excluding back-edges"
            );
        }
        let order = topo::order_excluding(&graph, &topo::back_edges(&cycles));

        let mut inputs = Vec::with_capacity(graph.node_count());
        let mut has_parents = Vec::with_capacity(graph.node_count());
        for idx in graph.indices() {
            let node = &nodes[graph.position(idx)];
            let resolved: Vec<(NodeIndex, f64)> = node
                .parents
                .iter()
                .filter_map(|parent_id| {
                    graph.get_node(parent_id).map(|parent| {
                        (
                            parent,
                            resolve_strength(node, parent_id, edges, default_strength),
                        )
                    })
                })
                .collect();
            inputs.push(resolved);
            has_parents.push(!node.is_source());
        }

        Self {
            graph,
            order,
            cycle_count: cycles.len(),
            inputs,
            has_parents,
        }
    }

    /// Clone the indexed nodes out of `nodes` into arena order.
    /// `nodes` must be the slice the plan was built from (or one with the same ids in the same order).
    pub fn snapshot(&self, nodes: &[RiskNode]) -> Vec<RiskNode> {
        self.graph
            .indices()
            .map(|idx| nodes[self.graph.position(idx)].clone())
            .collect()
    }

    /// Resolved `(parent, strength)` inputs of a node.
    pub fn inputs(&self, idx: NodeIndex) -> &[(NodeIndex, f64)] {
        &self.inputs[idx.index()]
    }

    /// Whether the node declares parents (and is therefore recomputed).
    pub fn has_parents(&self, idx: NodeIndex) -> bool {
        self.has_parents[idx.index()]
    }

    /// Propagate an arena-ordered snapshot.
    pub fn run(
        &self,
        snapshot: Vec<RiskNode>,
        options: &PropagationOptions,
        limits: &ConvergenceConfig,
    ) -> NetworkUpdateResult {
        let outcome = convergence::converge(self, snapshot, options, limits);
        NetworkUpdateResult {
            nodes: outcome.nodes,
            iterations: outcome.iterations,
            converged: outcome.converged,
            final_delta: outcome.final_delta,
        }
    }
}
