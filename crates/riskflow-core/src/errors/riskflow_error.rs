use super::error_code::{self, RiskflowErrorCode};
use super::{ConfigError, InferenceError};

/// Top-level error for riskflow operations.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum RiskflowError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("inference error: {0}")]
    Inference(#[from] InferenceError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RiskflowErrorCode for RiskflowError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Inference(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

pub type RiskflowResult<T> = Result<T, RiskflowError>;
