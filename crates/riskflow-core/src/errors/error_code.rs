//! RiskflowErrorCode trait for callers outside the process boundary.

/// Stable, machine-readable error codes.
/// Every error enum implements this so a presentation layer can branch on
/// the code instead of parsing messages.
pub trait RiskflowErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_NETWORK: &str = "INVALID_NETWORK";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
