//! # uptime-dashboard
//!
//! Leptos SSR renderer for static uptime and coverage dashboards.
//!
//! Every page is a single self-contained HTML file: inline CSS, inline SVG,
//! no client-side runtime. Metrics come in through [`types::DashboardData`]
//! (built-in demo data by default) and go out as a `String`.
//!
//! ## Variants
//!
//! - **Uptime wall** - gauge rail plus a tiled wall of gradient tiles
//! - **Uptime bars** - KPI cards and one progress bar per service
//! - **Coverage** - test-coverage KPIs with a category breakdown
//!
//! ## Quick Start
//!
//! ```rust
//! use uptime_dashboard::{render_dashboard, types::{DashboardData, FilterSelection}, Variant};
//!
//! let data = DashboardData::default();
//! let html = render_dashboard(Variant::UptimeWall, &data, &FilterSelection::default());
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Frontend-web-03"));
//! ```
//!
//! ## Architecture
//!
//! - [`tier`] - percentage to visual tier classification
//! - [`format`] - percentage and thousands formatting
//! - [`layout`] - tile span lookups
//! - [`types`] - data model
//! - [`source`] - data providers
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! Pages are rendered with Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is needed - pure static HTML generation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod demo;
pub mod error;
pub mod format;
pub mod layout;
pub mod source;
pub mod styles;
pub mod tier;
pub mod types;
pub mod variant;

pub use error::DataError;
pub use source::{DemoSource, JsonSource, MetricsSource};
pub use tier::{GaugeTone, Tier};
pub use variant::Variant;

use components::DashboardDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::{DashboardData, FilterSelection};

/// Render one dashboard variant as a complete HTML document.
///
/// `selection` only decides which dropdown options are marked selected;
/// the metrics shown are the same for every selection.
///
/// # Example
///
/// ```rust
/// use uptime_dashboard::{render_dashboard, types::{DashboardData, FilterSelection}, Variant};
///
/// let html = render_dashboard(Variant::Coverage, &DashboardData::default(), &FilterSelection::default());
/// assert!(html.contains("3,697"));
/// ```
pub fn render_dashboard(variant: Variant, data: &DashboardData, selection: &FilterSelection) -> String {
    let doc = view! {
        <DashboardDocument variant=variant data=data.clone() selection=selection.clone() />
    };

    let html = doc.to_html();
    tracing::debug!(%variant, bytes = html.len(), "rendered dashboard");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render every variant, in [`Variant::ALL`] order.
pub fn render_all(data: &DashboardData, selection: &FilterSelection) -> Vec<(Variant, String)> {
    Variant::ALL
        .into_iter()
        .map(|variant| (variant, render_dashboard(variant, data, selection)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Span;
    use crate::types::{GaugeRecord, MetricRecord};

    fn render(variant: Variant) -> String {
        render_dashboard(variant, &DashboardData::default(), &FilterSelection::default())
    }

    #[test]
    fn renders_uptime_wall() {
        let html = render(Variant::UptimeWall);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("SRE Uptime Dashboard"));
        assert!(html.contains("Services"));
        // gauge readouts use two decimals, tiles one
        assert!(html.contains("98.14%"));
        assert!(html.contains("99.1%"));
        assert!(html.contains("col-span-2 row-span-2"));
        assert!(html.contains("\u{2265} 99.9%"));
        assert!(html.contains("&lt; 95%"));
    }

    #[test]
    fn renders_uptime_bars() {
        let html = render(Variant::UptimeBars);

        assert!(html.contains("Uptime by service"));
        assert!(html.contains("Fleet average"));
        assert!(html.contains("Backend-ops-03"));
        assert!(html.contains("97.78%"));
    }

    #[test]
    fn renders_coverage() {
        let html = render(Variant::Coverage);

        assert!(html.contains("Coverage breakdown"));
        assert!(html.contains("3,697"));
        assert!(html.contains("44.1%"));
        assert!(html.contains("6.7%"));
        assert!(!html.contains("class=\"tile-grid\""));
    }

    #[test]
    fn selection_does_not_change_metrics() {
        let data = DashboardData::default();
        let default = render_dashboard(Variant::UptimeWall, &data, &FilterSelection::default());
        let other = render_dashboard(
            Variant::UptimeWall,
            &data,
            &FilterSelection {
                window: Some("7 days".into()),
                region: Some("eu-west-1".into()),
            },
        );

        assert_ne!(default, other);
        for tile in &data.tiles {
            let readout = format::format_percent(tile.value, format::Precision::Tile);
            assert_eq!(default.matches(&readout).count(), other.matches(&readout).count());
        }
        for gauge in &data.gauges {
            let readout = format::format_percent(gauge.value, format::Precision::Gauge);
            assert!(default.contains(&readout) && other.contains(&readout));
        }
    }

    #[test]
    fn renders_custom_data() {
        let data = DashboardData {
            title: "Edge Fleet".into(),
            tiles: vec![MetricRecord::new("edge-ams", 94.5).with_span(Span::Three, Span::One)],
            gauges: vec![GaugeRecord::new("edge-fra", 101.0)],
            ..Default::default()
        };
        let html = render_dashboard(Variant::UptimeWall, &data, &FilterSelection::default());

        assert!(html.contains("Edge Fleet"));
        assert!(html.contains("col-span-3 row-span-1"));
        assert!(html.contains("linear-gradient(135deg,#f97316,#dc2626)"));
        assert!(html.contains("101.00%"));
        assert!(!html.contains("Backend-ops-01"));
    }

    #[test]
    fn renders_all_variants() {
        let pages = render_all(&DashboardData::default(), &FilterSelection::default());
        let variants: Vec<Variant> = pages.iter().map(|(v, _)| *v).collect();
        assert_eq!(variants, Variant::ALL.to_vec());
        assert!(pages.iter().all(|(_, html)| html.starts_with("<!DOCTYPE html>")));
    }
}
