// Single source of truth for all default values.

// --- Propagation ---
pub const DEFAULT_DAMPENING: f64 = 0.3;
pub const DEFAULT_EDGE_STRENGTH: f64 = 0.5;

// --- Convergence ---
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 1e-6;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

// --- Sensitivity ---
pub const DEFAULT_PERTURBATION_DELTA: f64 = 0.01;
pub const DEFAULT_PROBABILITY_EPSILON: f64 = 1e-9;

// --- Classification ---
pub const DEFAULT_SAFE_BELOW: f64 = 0.3;
pub const DEFAULT_WARNING_BELOW: f64 = 0.7;

// --- Validation ---
pub const DEFAULT_STRICT_VALIDATION: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
