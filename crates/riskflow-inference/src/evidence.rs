//! Hard-evidence injection: pin observed probabilities and propagate.

use riskflow_core::config::RiskflowConfig;
use riskflow_core::models::{EvidenceMap, NetworkUpdateResult, PropagationOptions, RiskNode};
use riskflow_core::traits::StrengthSource;
use tracing::info;

use crate::classify::classify;
use crate::noisy_or::clamp_unit;
use crate::propagation::PropagationPlan;

/// Pin each id in `evidence` to its (clamped) value and iterate to convergence.
///
/// Pinned nodes are excluded from recomputation regardless of position or
/// parent count, and their state is classified from the pinned value.
/// Ids already listed in `options.evidence_nodes` stay pinned as well.
/// Iteration is always on: downstream effects of deep evidence need more than
/// one pass to settle when the network has feedback.
pub fn inject_evidence<S: StrengthSource + ?Sized>(
    evidence: &EvidenceMap,
    nodes: &[RiskNode],
    edges: &S,
    options: &PropagationOptions,
    config: &RiskflowConfig,
) -> NetworkUpdateResult {
    let plan = PropagationPlan::build(nodes, edges, config.propagation.default_edge_strength);
    let mut snapshot = plan.snapshot(nodes);
    for node in &mut snapshot {
        if let Some(&value) = evidence.get(&node.id) {
            node.probability = clamp_unit(value);
            node.state = classify(node.probability, &options.thresholds);
        }
    }

    let mut pinned = options.clone();
    pinned.evidence_nodes.extend(evidence.keys().cloned());
    pinned.iterate_to_convergence = true;

    let result = plan.run(snapshot, &pinned, &config.convergence);
    info!(
        pinned = evidence.len(),
        iterations = result.iterations,
        converged = result.converged,
        final_delta = result.final_delta,
        "evidence injected"
    );
    result
}
