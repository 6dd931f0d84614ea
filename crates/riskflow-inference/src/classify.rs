//! Severity tiers and display colors.

use riskflow_core::models::{RiskState, StateThresholds};

/// Display color of each tier.
pub const SAFE_COLOR: &str = "#00ff88";
pub const WARNING_COLOR: &str = "#ffa500";
pub const CRITICAL_COLOR: &str = "#ff4444";

/// Map a probability to its severity tier.
///
/// Below `safe_below` is safe, below `warning_below` is warning, anything
/// else (including NaN) is critical.
pub fn classify(probability: f64, thresholds: &StateThresholds) -> RiskState {
    if probability < thresholds.safe_below {
        RiskState::Safe
    } else if probability < thresholds.warning_below {
        RiskState::Warning
    } else {
        RiskState::Critical
    }
}

/// Canonical color for a tier.
pub fn state_color(state: RiskState) -> &'static str {
    match state {
        RiskState::Safe => SAFE_COLOR,
        RiskState::Warning => WARNING_COLOR,
        RiskState::Critical => CRITICAL_COLOR,
    }
}

/// Continuous color along the safe → warning → critical gradient.
///
/// The first leg covers `[0, 0.3)`, the second `[0.3, 1]`. Input is clamped
/// and NaN is read as 0. Output is lowercase `#rrggbb`.
pub fn probability_color(probability: f64) -> String {
    let p = if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    };
    let color = if p < 0.3 {
        Rgb::SAFE.lerp(Rgb::WARNING, p / 0.3)
    } else {
        Rgb::WARNING.lerp(Rgb::CRITICAL, (p - 0.3) / 0.7)
    };
    color.to_hex()
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Rgb(f64, f64, f64);

impl Rgb {
    const SAFE: Rgb = Rgb(0.0, 255.0, 136.0);
    const WARNING: Rgb = Rgb(255.0, 165.0, 0.0);
    const CRITICAL: Rgb = Rgb(255.0, 68.0, 68.0);

    fn lerp(self, to: Rgb, t: f64) -> Rgb {
        Rgb(
            self.0 + (to.0 - self.0) * t,
            self.1 + (to.1 - self.1) * t,
            self.2 + (to.2 - self.2) * t,
        )
    }

    fn to_hex(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.0),
            channel(self.1),
            channel(self.2)
        )
    }
}

fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
