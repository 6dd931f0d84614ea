//! Fixed-point iteration over forward passes.

use riskflow_core::config::ConvergenceConfig;
use riskflow_core::models::{PropagationOptions, RiskNode};
use tracing::{debug, warn};

use super::forward_pass::forward_pass;
use super::plan::PropagationPlan;

/// Final state of a convergence run.
#[derive(Debug, Clone)]
pub struct Convergence {
    pub nodes: Vec<RiskNode>,
    pub iterations: usize,
    pub converged: bool,
    pub final_delta: f64,
}

/// Run forward passes until the max delta drops below `limits.threshold`
/// or `limits.max_iterations` passes have run.
///
/// Without `iterate_to_convergence` exactly one pass runs and the result is
/// reported as converged. Priors stay anchored to the incoming snapshot, so on
/// an acyclic network one pass already reaches the fixed point (the second
/// pass measures a zero delta); only approximated back-edges leave drift for
/// later passes to resolve.
pub fn converge(
    plan: &PropagationPlan,
    snapshot: Vec<RiskNode>,
    options: &PropagationOptions,
    limits: &ConvergenceConfig,
) -> Convergence {
    let max_iterations = limits.max_iterations.max(1);
    let priors: Vec<f64> = snapshot.iter().map(|n| n.probability).collect();
    let mut current = snapshot;
    let mut iterations = 0;

    let (reached, final_delta) = loop {
        let pass = forward_pass(plan, &priors, &current, options);
        current = pass.nodes;
        iterations += 1;
        debug!(iteration = iterations, max_delta = pass.max_delta, "forward pass");

        if pass.max_delta < limits.threshold {
            break (true, pass.max_delta);
        }
        if !options.iterate_to_convergence || iterations >= max_iterations {
            break (false, pass.max_delta);
        }
    };

    let converged = reached || !options.iterate_to_convergence;
    if !converged {
        warn!(
            iterations,
            final_delta,
            threshold = limits.threshold,
            "iteration ceiling reached before convergence"
        );
    }

    Convergence {
        nodes: current,
        iterations,
        converged,
        final_delta,
    }
}
