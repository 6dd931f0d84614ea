//! petgraph wrapper giving every node id a dense arena index.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use riskflow_core::models::RiskNode;

/// Dependency structure of a node snapshot.
///
/// Node indices are dense and follow the input order of first occurrences,
/// so `NodeIndex::index()` doubles as an arena slot. Edges point in the causal
/// direction, parent → child. Parent ids that name no node are left out.
pub struct IndexedGraph {
    /// The petgraph directed graph. Node weight is the node id.
    pub graph: DiGraph<String, ()>,
    /// Map from node id → NodeIndex for O(1) lookup.
    pub node_index: HashMap<String, NodeIndex>,
    /// Arena slot → position in the input slice.
    positions: Vec<usize>,
    /// Distinct known parents per node, in declaration order.
    parents: Vec<Vec<NodeIndex>>,
}

impl IndexedGraph {
    /// Index a node snapshot. A repeated id keeps its first occurrence.
    pub fn from_nodes(nodes: &[RiskNode]) -> Self {
        let mut graph = DiGraph::with_capacity(nodes.len(), nodes.len() * 2);
        let mut node_index = HashMap::with_capacity(nodes.len());
        let mut positions = Vec::with_capacity(nodes.len());

        for (pos, node) in nodes.iter().enumerate() {
            if node_index.contains_key(&node.id) {
                continue;
            }
            let idx = graph.add_node(node.id.clone());
            node_index.insert(node.id.clone(), idx);
            positions.push(pos);
        }

        let mut parents = Vec::with_capacity(positions.len());
        for &pos in &positions {
            let node = &nodes[pos];
            let child = node_index[&node.id];
            let mut known: Vec<NodeIndex> = Vec::with_capacity(node.parents.len());
            for parent_id in &node.parents {
                if let Some(&parent) = node_index.get(parent_id) {
                    if !known.contains(&parent) {
                        known.push(parent);
                        graph.add_edge(parent, child, ());
                    }
                }
            }
            parents.push(known);
        }

        Self {
            graph,
            node_index,
            positions,
            parents,
        }
    }

    /// Look up a node index by id.
    pub fn get_node(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    /// Id of the node at `idx`.
    pub fn id(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    /// Position of the node at `idx` in the slice it was built from.
    pub fn position(&self, idx: NodeIndex) -> usize {
        self.positions[idx.index()]
    }

    /// Distinct known parents of `idx`, in declaration order.
    pub fn parents(&self, idx: NodeIndex) -> &[NodeIndex] {
        &self.parents[idx.index()]
    }

    /// All node indices in arena order.
    pub fn indices(&self) -> impl Iterator<Item = NodeIndex> {
        (0..self.node_count()).map(NodeIndex::new)
    }

    /// Whether a directed causal path leads from `from` to `to`.
    pub fn has_path(&self, from: NodeIndex, to: NodeIndex) -> bool {
        petgraph::algo::has_path_connecting(&self.graph, from, to, None)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
