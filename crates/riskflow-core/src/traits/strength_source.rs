//! StrengthSource trait: the network-level half of edge-strength lookup.
//!
//! Resolution order for an edge `parent -> child` is the child's own
//! `weights[parent]`, then a `StrengthSource`, then the configured default.
//! The edge table is the standard source; callers can supply their own.

use crate::models::EdgeTable;

/// Provider of network-level causal strengths.
pub trait StrengthSource {
    /// Raw strength for the ordered pair, if known. Not clamped.
    fn strength(&self, source: &str, target: &str) -> Option<f64>;
}

impl StrengthSource for EdgeTable {
    fn strength(&self, source: &str, target: &str) -> Option<f64> {
        self.get(source, target)
    }
}

impl<T: StrengthSource + ?Sized> StrengthSource for &T {
    fn strength(&self, source: &str, target: &str) -> Option<f64> {
        (**self).strength(source, target)
    }
}

/// Source that knows no edges; every lookup falls through to the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStrengths;

impl StrengthSource for NoStrengths {
    fn strength(&self, _source: &str, _target: &str) -> Option<f64> {
        None
    }
}
