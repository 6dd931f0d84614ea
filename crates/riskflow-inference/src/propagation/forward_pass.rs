//! One sweep over the network in topological order.

use riskflow_core::models::{PropagationOptions, RiskNode};

use super::plan::PropagationPlan;
use crate::classify::classify;
use crate::noisy_or::{clamp_unit, combine};

/// Output of one forward pass.
pub struct PassOutcome {
    pub nodes: Vec<RiskNode>,
    /// Max absolute probability change over recomputed nodes.
    pub max_delta: f64,
}

/// Recompute every non-evidence node once, in plan order.
///
/// `priors` holds each node's probability as it entered the current
/// `update` call (arena order) and anchors the leak and dampening terms, so
/// repeated passes only move a node when its parents move. Updates land in
/// the working copy immediately: a node sees the values its parents received
/// earlier in the same pass. Evidence nodes keep both probability and state.
pub fn forward_pass(
    plan: &PropagationPlan,
    priors: &[f64],
    snapshot: &[RiskNode],
    options: &PropagationOptions,
) -> PassOutcome {
    let dampening = clamp_unit(options.dampening);
    let mut nodes = snapshot.to_vec();
    let mut max_delta = 0.0_f64;

    for &idx in &plan.order {
        let slot = idx.index();
        if options.evidence_nodes.contains(&nodes[slot].id) {
            continue;
        }

        let updated = if plan.has_parents(idx) {
            let inputs = plan
                .inputs(idx)
                .iter()
                .map(|&(parent, strength)| (nodes[parent.index()].probability, strength));
            combine(priors[slot], inputs, dampening)
        } else {
            nodes[slot].probability
        };

        let node = &mut nodes[slot];
        let delta = (updated - node.probability).abs();
        if delta > max_delta {
            max_delta = delta;
        }
        node.probability = updated;
        node.state = classify(updated, &options.thresholds);
    }

    PassOutcome { nodes, max_delta }
}
