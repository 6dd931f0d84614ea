//! Noisy-OR combination of parent influence into a single node posterior.
//!
//! Each parent independently "fires" the child with probability
//! `p_parent * strength`; the child stays inactive only if no parent fires:
//!
//! ```text
//! activation = 1 - Π (1 - p_i * s_i)
//! leak       = prior * (1 - dampening)
//! combined   = activation + leak * (1 - activation)
//! posterior  = clamp(prior * dampening + combined * (1 - dampening), 0, 1)
//! ```
//!
//! Reference: Pearl, J. (1988). Probabilistic Reasoning in Intelligent Systems.

use std::collections::HashMap;

use riskflow_core::config::PropagationConfig;
use riskflow_core::models::RiskNode;
use riskflow_core::traits::StrengthSource;

/// Clamp into [0, 1], mapping NaN to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Strength of the edge `parent_id -> node`, clamped to [0, 1].
///
/// Lookup order: the node's own `weights[parent_id]`, then `edges`, then
/// `default_strength`. A NaN at any level counts as absent.
pub fn resolve_strength<S: StrengthSource + ?Sized>(
    node: &RiskNode,
    parent_id: &str,
    edges: &S,
    default_strength: f64,
) -> f64 {
    let raw = node
        .weights
        .get(parent_id)
        .copied()
        .filter(|s| !s.is_nan())
        .or_else(|| edges.strength(parent_id, &node.id).filter(|s| !s.is_nan()))
        .unwrap_or(default_strength);
    clamp_unit(raw)
}

/// Combine `(parent probability, strength)` pairs with the node's prior.
///
/// Parent probabilities are used as given; only the result is clamped.
pub fn combine<I>(prior: f64, inputs: I, dampening: f64) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let inhibition: f64 = inputs
        .into_iter()
        .map(|(probability, strength)| 1.0 - probability * strength)
        .product();
    let activation = 1.0 - inhibition;
    let leak = prior * (1.0 - dampening);
    let combined = activation + leak * (1.0 - activation);
    clamp_unit(prior * dampening + combined * (1.0 - dampening))
}

/// Posterior probability of `node` given current parent values.
///
/// `probability_of` reports a parent's current probability; parents it does
/// not know are skipped. A node without parents keeps its value.
pub fn posterior<F, S>(
    node: &RiskNode,
    probability_of: F,
    edges: &S,
    dampening: f64,
    default_strength: f64,
) -> f64
where
    F: Fn(&str) -> Option<f64>,
    S: StrengthSource + ?Sized,
{
    if node.is_source() {
        return node.probability;
    }
    let inputs = node.parents.iter().filter_map(|parent_id| {
        probability_of(parent_id)
            .map(|p| (p, resolve_strength(node, parent_id, edges, default_strength)))
    });
    combine(node.probability, inputs, clamp_unit(dampening))
}

/// Recompute one node against a snapshot, without propagating anywhere else.
///
/// For targeted what-if reads; ordering across the network is the caller's
/// problem. Use [`crate::update`] for a consistent network-wide result.
pub fn recompute_node<S: StrengthSource + ?Sized>(
    node: &RiskNode,
    nodes: &[RiskNode],
    edges: &S,
    dampening: f64,
    config: &PropagationConfig,
) -> f64 {
    if node.is_source() {
        return node.probability;
    }
    let mut current: HashMap<&str, f64> = HashMap::with_capacity(nodes.len());
    for n in nodes {
        current.entry(n.id.as_str()).or_insert(n.probability);
    }
    posterior(
        node,
        |id| current.get(id).copied(),
        edges,
        dampening,
        config.default_edge_strength,
    )
}
