//! Circular gauge - SVG ring with label and two-decimal readout

use crate::format::{Precision, format_percent};
use crate::tier::{GaugeTone, sweep_fraction};
use leptos::prelude::*;

/// Outer size of the gauge in pixels.
pub const GAUGE_SIZE: f64 = 74.0;
/// Ring thickness in pixels.
pub const GAUGE_STROKE: f64 = 9.0;

/// Ring measurements for one value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeGeometry {
    /// Circle radius
    pub radius: f64,
    /// Full circumference
    pub circumference: f64,
    /// Length of the drawn arc
    pub dash: f64,
}

impl GaugeGeometry {
    /// Geometry for `value` percent on the standard ring.
    pub fn for_value(value: f64) -> Self {
        let radius = (GAUGE_SIZE - GAUGE_STROKE) / 2.0;
        let circumference = 2.0 * std::f64::consts::PI * radius;
        Self {
            radius,
            circumference,
            dash: sweep_fraction(value) * circumference,
        }
    }

    /// `stroke-dasharray` value: drawn arc, then the gap.
    pub fn dasharray(&self) -> String {
        format!("{:.3} {:.3}", self.dash, self.circumference - self.dash)
    }
}

/// Ring gauge for one service.
///
/// The arc is clamped to a full circle; the readout shows the raw value.
#[component]
pub fn Gauge(label: String, value: f64) -> impl IntoView {
    let geometry = GaugeGeometry::for_value(value);
    let tone = GaugeTone::classify(value);
    let size = GAUGE_SIZE.to_string();
    let center = (GAUGE_SIZE / 2.0).to_string();
    let radius = geometry.radius.to_string();
    let stroke = GAUGE_STROKE.to_string();

    view! {
        <div class="gauge" data-tone=tone.as_label()>
            <svg
                width=size.clone()
                height=size.clone()
                viewBox=format!("0 0 {} {}", size, size)
            >
                // Track
                <circle
                    cx=center.clone()
                    cy=center.clone()
                    r=radius.clone()
                    stroke="#3f3f46"
                    stroke-width=stroke.clone()
                    fill="none"
                    opacity="0.4"
                />
                // Progress arc
                <circle
                    cx=center.clone()
                    cy=center
                    r=radius
                    stroke=tone.stroke()
                    stroke-width=stroke
                    fill="none"
                    stroke-linecap="round"
                    stroke-dasharray=geometry.dasharray()
                />
            </svg>
            <div class="gauge-text">
                <div class="gauge-label">{label}</div>
                <div class="gauge-value">{format_percent(value, Precision::Gauge)}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn geometry_matches_ring() {
        let g = GaugeGeometry::for_value(100.0);
        assert_eq!(g.radius, 32.5);
        assert!((g.circumference - 204.2035).abs() < 1e-3);
        assert!((g.dash - g.circumference).abs() < 1e-9);

        let empty = GaugeGeometry::for_value(0.0);
        assert_eq!(empty.dash, 0.0);
        assert_eq!(empty.dasharray(), "0.000 204.204");
    }

    #[test]
    fn geometry_clamps_overflow() {
        assert_eq!(GaugeGeometry::for_value(180.0), GaugeGeometry::for_value(100.0));
        assert_eq!(GaugeGeometry::for_value(-4.0), GaugeGeometry::for_value(0.0));
    }

    #[test]
    fn renders_label_readout_and_tone() {
        let html = view! { <Gauge label="CDN-edge".to_string() value=99.96 /> }.to_html();
        assert!(html.contains("CDN-edge"));
        assert!(html.contains("99.96%"));
        assert!(html.contains("#10b981"));
        assert!(html.contains("data-tone=\"emerald\""));
    }

    #[test]
    fn low_value_uses_rose() {
        let html = view! { <Gauge label="Frontend-web-01".to_string() value=92.05 /> }.to_html();
        assert!(html.contains("#f43f5e"));
        assert!(html.contains("92.05%"));
    }
}
