//! Finite-difference sensitivity of one target node to every other node.

use riskflow_core::config::RiskflowConfig;
use riskflow_core::models::{RiskNode, SensitivityMap};
use riskflow_core::traits::StrengthSource;
use tracing::{debug, info};

use crate::noisy_or::clamp_unit;
use crate::propagation::PropagationPlan;

/// Estimate `|∂ target / ∂ node|` for every node by perturbing its probability
/// by `delta` and re-running full convergence.
///
/// Nodes with no directed path to the target cannot move it and are skipped
/// without a re-run; coefficients at or below `config.sensitivity.epsilon`
/// are omitted. A negative `delta` gives a backward difference. A zero or
/// non-finite `delta` measures nothing and, like an unknown target, yields
/// an empty map. Cost is one convergence run per upstream node, meant for
/// networks of tens of nodes.
pub fn sensitivity<S: StrengthSource + ?Sized>(
    target_id: &str,
    nodes: &[RiskNode],
    edges: &S,
    delta: f64,
    config: &RiskflowConfig,
) -> SensitivityMap {
    let mut coefficients = SensitivityMap::new();
    if delta == 0.0 || !delta.is_finite() {
        debug!(target = target_id, delta, "degenerate perturbation, nothing to measure");
        return coefficients;
    }

    let plan = PropagationPlan::build(nodes, edges, config.propagation.default_edge_strength);
    let Some(target) = plan.graph.get_node(target_id) else {
        debug!(target = target_id, "sensitivity target not in network");
        return coefficients;
    };

    let options = config.propagation_options().iterating(true);
    let base = plan.snapshot(nodes);
    let baseline = plan.run(base.clone(), &options, &config.convergence);
    let baseline = baseline.nodes[target.index()].probability;

    let mut reruns = 0_usize;
    for candidate in plan.graph.indices() {
        if candidate == target || !plan.graph.has_path(candidate, target) {
            continue;
        }

        let mut perturbed = base.clone();
        let slot = &mut perturbed[candidate.index()];
        slot.probability = clamp_unit(slot.probability + delta);

        let result = plan.run(perturbed, &options, &config.convergence);
        reruns += 1;
        let shifted = result.nodes[target.index()].probability;
        let coefficient = ((shifted - baseline) / delta).abs();
        if coefficient > config.sensitivity.epsilon {
            coefficients.insert(plan.graph.id(candidate).to_string(), coefficient);
        }
    }

    info!(
        target = target_id,
        reruns,
        influential = coefficients.len(),
        "sensitivity analysis complete"
    );
    coefficients
}
