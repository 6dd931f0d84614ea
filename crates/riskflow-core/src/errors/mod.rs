//! Error handling for riskflow.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod inference_error;
pub mod riskflow_error;

pub use config_error::ConfigError;
pub use error_code::RiskflowErrorCode;
pub use inference_error::InferenceError;
pub use riskflow_error::{RiskflowError, RiskflowResult};
