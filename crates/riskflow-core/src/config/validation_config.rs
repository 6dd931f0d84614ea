use serde::{Deserialize, Serialize};

use super::defaults;

/// Validation enforcement configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// When true, engine entry points refuse networks with validation errors.
    /// When false (default), inference runs on any snapshot and dangling
    /// parents are skipped.
    pub strict: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict: defaults::DEFAULT_STRICT_VALIDATION,
        }
    }
}
