//! Top-level riskflow configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    ClassificationConfig, ConvergenceConfig, ObservabilityConfig, PropagationConfig,
    SensitivityConfig, ValidationConfig,
};
use crate::errors::ConfigError;
use crate::models::PropagationOptions;

/// Top-level configuration aggregating all sub-configs.
///
/// Passed explicitly into every engine entry point; nothing in the engine
/// reads a module-level constant directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RiskflowConfig {
    pub propagation: PropagationConfig,
    pub convergence: ConvergenceConfig,
    pub sensitivity: SensitivityConfig,
    pub classification: ClassificationConfig,
    pub validation: ValidationConfig,
    pub observability: ObservabilityConfig,
}

impl RiskflowConfig {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: RiskflowConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        debug!(path = %path.display(), "loaded riskflow config");
        Ok(config)
    }

    /// Load configuration from a TOML string and validate it. Missing sections
    /// keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: RiskflowConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit("propagation.dampening", self.propagation.dampening)?;
        check_unit(
            "propagation.default_edge_strength",
            self.propagation.default_edge_strength,
        )?;
        check_unit("classification.safe_below", self.classification.safe_below)?;
        check_unit(
            "classification.warning_below",
            self.classification.warning_below,
        )?;
        if self.classification.safe_below > self.classification.warning_below {
            return Err(ConfigError::ValidationFailed {
                field: "classification.safe_below".to_string(),
                message: "must not exceed classification.warning_below".to_string(),
            });
        }
        if !(self.convergence.threshold.is_finite() && self.convergence.threshold > 0.0) {
            return Err(ConfigError::ValidationFailed {
                field: "convergence.threshold".to_string(),
                message: "must be finite and greater than 0".to_string(),
            });
        }
        if self.convergence.max_iterations == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "convergence.max_iterations".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !self.sensitivity.delta.is_finite() || self.sensitivity.delta == 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "sensitivity.delta".to_string(),
                message: "must be finite and non-zero".to_string(),
            });
        }
        if !(self.sensitivity.epsilon.is_finite() && self.sensitivity.epsilon >= 0.0) {
            return Err(ConfigError::ValidationFailed {
                field: "sensitivity.epsilon".to_string(),
                message: "must be finite and non-negative".to_string(),
            });
        }
        Ok(())
    }

    /// Propagation options seeded from this config: configured dampening and
    /// thresholds, single pass, no evidence.
    pub fn propagation_options(&self) -> PropagationOptions {
        PropagationOptions {
            dampening: self.propagation.dampening,
            iterate_to_convergence: false,
            evidence_nodes: Default::default(),
            thresholds: self.classification.thresholds(),
        }
    }
}

fn check_unit(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("must be between 0.0 and 1.0, got {value}"),
        })
    }
}
