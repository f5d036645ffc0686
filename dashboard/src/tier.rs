//! Percentage-to-visual-tier classification.
//!
//! Two classifiers share the same clamping policy:
//!
//! - [`Tier`] - five tiers used for tiles, bars and the legend
//! - [`GaugeTone`] - coarser three-tier stroke color for circular gauges
//!
//! Input is clamped to `0..=100` before any comparison. `NaN` is treated
//! as `0`, so it always lands in the lowest tier.

use serde::{Deserialize, Serialize};

/// Clamp a percentage into `0..=100`, mapping `NaN` to `0`.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Fraction of the gauge circumference to draw, `0.0..=1.0`.
pub fn sweep_fraction(value: f64) -> f64 {
    clamp_percent(value) / 100.0
}

/// Visual tier for an uptime percentage.
///
/// Variants are declared from best to worst; thresholds are checked in that
/// order and the first match wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// >= 99.9
    Sky,
    /// >= 99.5
    Emerald,
    /// >= 98.0
    Green,
    /// >= 95.0
    Amber,
    /// everything below 95.0
    Red,
}

impl Tier {
    /// All tiers, best first.
    pub const ALL: [Tier; 5] = [Tier::Sky, Tier::Emerald, Tier::Green, Tier::Amber, Tier::Red];

    /// Classify a percentage.
    pub fn classify(value: f64) -> Self {
        let p = clamp_percent(value);
        if p >= 99.9 {
            Tier::Sky
        } else if p >= 99.5 {
            Tier::Emerald
        } else if p >= 98.0 {
            Tier::Green
        } else if p >= 95.0 {
            Tier::Amber
        } else {
            Tier::Red
        }
    }

    /// Lower bound of the tier, `None` for the catch-all tier.
    pub fn threshold(self) -> Option<f64> {
        match self {
            Tier::Sky => Some(99.9),
            Tier::Emerald => Some(99.5),
            Tier::Green => Some(98.0),
            Tier::Amber => Some(95.0),
            Tier::Red => None,
        }
    }

    /// Lowercase name, also used as CSS modifier (`tier-sky`).
    pub fn as_label(self) -> &'static str {
        match self {
            Tier::Sky => "sky",
            Tier::Emerald => "emerald",
            Tier::Green => "green",
            Tier::Amber => "amber",
            Tier::Red => "red",
        }
    }

    /// Gradient stops as `(start, end)` hex colors.
    pub fn gradient_stops(self) -> (&'static str, &'static str) {
        match self {
            Tier::Sky => ("#0ea5e9", "#2563eb"),
            Tier::Emerald => ("#10b981", "#059669"),
            Tier::Green => ("#22c55e", "#16a34a"),
            Tier::Amber => ("#f59e0b", "#ef4444"),
            Tier::Red => ("#f97316", "#dc2626"),
        }
    }

    /// CSS background value for tiles and bar fills.
    pub fn gradient(self) -> String {
        let (start, end) = self.gradient_stops();
        format!("linear-gradient(135deg,{},{})", start, end)
    }

    /// Near-white, tier-tinted text color for large readouts.
    pub fn text_tone(self) -> &'static str {
        match self {
            Tier::Sky => "#f0f9ff",
            Tier::Emerald => "#ecfdf5",
            Tier::Green => "#f7fee7",
            Tier::Amber => "#fffbeb",
            Tier::Red => "#fef2f2",
        }
    }

    /// Solid swatch color used by the legend.
    pub fn swatch(self) -> &'static str {
        match self {
            Tier::Sky => "#0ea5e9",
            Tier::Emerald => "#10b981",
            Tier::Green => "#16a34a",
            Tier::Amber => "#f59e0b",
            Tier::Red => "#e11d48",
        }
    }

    /// Legend caption, e.g. `"≥ 99.9%"` or `"< 95%"`.
    pub fn legend_label(self) -> &'static str {
        match self {
            Tier::Sky => "\u{2265} 99.9%",
            Tier::Emerald => "\u{2265} 99.5%",
            Tier::Green => "\u{2265} 98%",
            Tier::Amber => "\u{2265} 95%",
            Tier::Red => "< 95%",
        }
    }
}

/// Stroke color for circular gauges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GaugeTone {
    /// >= 99.5
    Emerald,
    /// >= 98.0
    Amber,
    /// below 98.0
    Rose,
}

impl GaugeTone {
    /// Classify a percentage for gauge stroke coloring.
    pub fn classify(value: f64) -> Self {
        let p = clamp_percent(value);
        if p >= 99.5 {
            GaugeTone::Emerald
        } else if p >= 98.0 {
            GaugeTone::Amber
        } else {
            GaugeTone::Rose
        }
    }

    /// Stroke color.
    pub fn stroke(self) -> &'static str {
        match self {
            GaugeTone::Emerald => "#10b981",
            GaugeTone::Amber => "#f59e0b",
            GaugeTone::Rose => "#f43f5e",
        }
    }

    /// Lowercase name.
    pub fn as_label(self) -> &'static str {
        match self {
            GaugeTone::Emerald => "emerald",
            GaugeTone::Amber => "amber",
            GaugeTone::Rose => "rose",
        }
    }
}
