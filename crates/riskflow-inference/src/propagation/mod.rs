//! Network-wide propagation: a precomputed plan, single forward passes, and
//! the convergence loop that repeats them.

pub mod convergence;
pub mod forward_pass;
pub mod plan;

pub use convergence::Convergence;
pub use plan::PropagationPlan;

use riskflow_core::config::RiskflowConfig;
use riskflow_core::models::{NetworkUpdateResult, PropagationOptions, RiskNode};
use riskflow_core::traits::StrengthSource;
use tracing::info;

/// Propagate a snapshot and return a new one.
///
/// Runs one forward pass, or repeats passes to a fixed point when
/// `options.iterate_to_convergence` is set. The input is never mutated.
/// Structural problems (dangling parents, out-of-range priors) do not stop
/// propagation; see [`crate::validate`] for diagnostics.
///
/// Each node's incoming probability is its prior for this call, and the leak
/// and dampening terms stay anchored to it across every pass. Feeding the
/// output back in as the next input turns the posteriors into new priors and
/// moves them again, so repeated calls advance a scenario rather than settle
/// it. Check stability with `iterate_to_convergence` on a single call.
pub fn update<S: StrengthSource + ?Sized>(
    nodes: &[RiskNode],
    edges: &S,
    options: &PropagationOptions,
    config: &RiskflowConfig,
) -> NetworkUpdateResult {
    let plan = PropagationPlan::build(nodes, edges, config.propagation.default_edge_strength);
    let result = plan.run(plan.snapshot(nodes), options, &config.convergence);
    info!(
        nodes = result.nodes.len(),
        iterations = result.iterations,
        converged = result.converged,
        final_delta = result.final_delta,
        "update complete"
    );
    result
}
