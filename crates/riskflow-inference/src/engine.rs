//! RiskEngine: the configured entry point over the free inference functions.

use riskflow_core::config::RiskflowConfig;
use riskflow_core::errors::{InferenceError, RiskflowResult};
use riskflow_core::models::{
    CycleReport, EvidenceMap, NetworkUpdateResult, PropagationOptions, RiskNetwork, RiskState,
    SensitivityMap, StateThresholds, ValidationResult,
};
use tracing::{info, warn};

use crate::{classify, evidence, graph, propagation, sensitivity, validation};

/// Binds the inference operations to one [`RiskflowConfig`].
///
/// Holds no network state: every call borrows a snapshot and returns a new
/// one, so one engine can serve any number of networks and threads.
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    config: RiskflowConfig,
}

impl RiskEngine {
    /// Engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom configuration, validated up front.
    pub fn with_config(config: RiskflowConfig) -> RiskflowResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RiskflowConfig {
        &self.config
    }

    /// Default propagation options for this engine's configuration.
    pub fn options(&self) -> PropagationOptions {
        self.config.propagation_options()
    }

    pub fn validate(&self, network: &RiskNetwork) -> ValidationResult {
        validation::validate(&network.nodes, &network.edges)
    }

    pub fn detect_cycles(&self, network: &RiskNetwork) -> CycleReport {
        graph::detect_cycles(&network.nodes)
    }

    pub fn topological_order(&self, network: &RiskNetwork) -> Vec<String> {
        graph::topological_order(&network.nodes)
    }

    /// Propagate `network`. `None` options fall back to [`Self::options`].
    pub fn update(
        &self,
        network: &RiskNetwork,
        options: Option<&PropagationOptions>,
    ) -> RiskflowResult<NetworkUpdateResult> {
        self.enforce(network)?;
        let options = options.cloned().unwrap_or_else(|| self.options());
        Ok(propagation::update(
            &network.nodes,
            &network.edges,
            &options,
            &self.config,
        ))
    }

    /// Pin `evidence` and propagate to convergence.
    pub fn inject_evidence(
        &self,
        evidence: &EvidenceMap,
        network: &RiskNetwork,
        options: Option<&PropagationOptions>,
    ) -> RiskflowResult<NetworkUpdateResult> {
        self.enforce(network)?;
        let options = options.cloned().unwrap_or_else(|| self.options());
        Ok(evidence::inject_evidence(
            evidence,
            &network.nodes,
            &network.edges,
            &options,
            &self.config,
        ))
    }

    /// Sensitivity of `target_id` to every upstream node. `None` delta uses
    /// the configured perturbation. Fails only when strict validation refuses
    /// the network.
    pub fn sensitivity(
        &self,
        target_id: &str,
        network: &RiskNetwork,
        delta: Option<f64>,
    ) -> RiskflowResult<SensitivityMap> {
        self.enforce(network)?;
        let delta = delta.unwrap_or(self.config.sensitivity.delta);
        Ok(sensitivity::sensitivity(
            target_id,
            &network.nodes,
            &network.edges,
            delta,
            &self.config,
        ))
    }

    /// Classify against `thresholds`, or the configured ones when `None`.
    pub fn classify(&self, probability: f64, thresholds: Option<&StateThresholds>) -> RiskState {
        match thresholds {
            Some(thresholds) => classify::classify(probability, thresholds),
            None => classify::classify(probability, &self.config.classification.thresholds()),
        }
    }

    /// Refuse a structurally invalid network when strict validation is on.
    fn enforce(&self, network: &RiskNetwork) -> RiskflowResult<()> {
        if !self.config.validation.strict {
            return Ok(());
        }
        let report = self.validate(network);
        for warning in &report.warnings {
            info!(warning = %warning, "validation warning");
        }
        if report.valid {
            return Ok(());
        }
        warn!(errors = report.errors.len(), "network rejected by strict validation");
        Err(InferenceError::InvalidNetwork {
            errors: report.errors,
        }
        .into())
    }
}
