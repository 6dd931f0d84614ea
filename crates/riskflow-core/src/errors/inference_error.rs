/// Inference errors. Propagation and sensitivity never fail; this is raised
/// only by entry points that were asked to refuse their input.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("network failed strict validation: {}", errors.join("; "))]
    InvalidNetwork { errors: Vec<String> },
}

impl super::RiskflowErrorCode for InferenceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidNetwork { .. } => super::error_code::INVALID_NETWORK,
        }
    }
}
