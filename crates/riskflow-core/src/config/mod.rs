//! Configuration system for riskflow.
//! TOML-based; every section falls back to the compiled defaults in [`defaults`].

pub mod classification_config;
pub mod convergence_config;
pub mod defaults;
pub mod observability_config;
pub mod propagation_config;
pub mod riskflow_config;
pub mod sensitivity_config;
pub mod validation_config;

pub use classification_config::ClassificationConfig;
pub use convergence_config::ConvergenceConfig;
pub use observability_config::ObservabilityConfig;
pub use propagation_config::PropagationConfig;
pub use riskflow_config::RiskflowConfig;
pub use sensitivity_config::SensitivityConfig;
pub use validation_config::ValidationConfig;
