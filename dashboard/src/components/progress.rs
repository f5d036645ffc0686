//! Horizontal progress bars
//!
//! [`ProgressBar`] draws one service's uptime as a tier-colored fill;
//! [`SegmentedBar`] splits a single track into category shares.

use crate::format::{Precision, format_percent};
use crate::tier::{Tier, clamp_percent, sweep_fraction};
use crate::types::CategoryShare;
use leptos::prelude::*;

/// Number of distinct segment colors in the stylesheet.
pub const SEGMENT_PALETTE: usize = 5;

/// CSS class for the `index`-th segment; colors repeat past the palette.
pub fn segment_class(index: usize) -> String {
    format!("segment-{}", index % SEGMENT_PALETTE)
}

/// Labelled bar whose fill width is the clamped percentage.
#[component]
pub fn ProgressBar(label: String, value: f64) -> impl IntoView {
    let tier = Tier::classify(value);
    let width = format!("{:.2}%", sweep_fraction(value) * 100.0);

    view! {
        <div class="bar-row" data-tier=tier.as_label()>
            <span class="bar-label">{label}</span>
            <div class="bar-track">
                <div
                    class="bar-fill"
                    style=format!("width: {}; background: {}", width, tier.gradient())
                ></div>
            </div>
            <span class="bar-value">{format_percent(value, Precision::Gauge)}</span>
        </div>
    }
}

/// One track split into category shares, in input order.
#[component]
pub fn SegmentedBar(categories: Vec<CategoryShare>) -> impl IntoView {
    view! {
        <div class="bar-track segment-track" role="img" aria-label="Category breakdown">
            {categories.into_iter().enumerate().map(|(idx, category)| {
                let style = format!("width: {:.1}%", clamp_percent(category.percent));
                let title = format!("{}: {}", category.label, format_percent(category.percent, Precision::Tile));
                view! {
                    <div class=format!("bar-fill {}", segment_class(idx)) style=style title=title></div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn segment_classes_cycle() {
        assert_eq!(segment_class(0), "segment-0");
        assert_eq!(segment_class(4), "segment-4");
        assert_eq!(segment_class(5), "segment-0");
    }

    #[test]
    fn bar_width_is_clamped() {
        let html = view! { <ProgressBar label="overflow".to_string() value=120.0 /> }.to_html();
        assert!(html.contains("width: 100.00%"));
        assert!(html.contains("120.00%"));
    }

    #[test]
    fn bar_uses_tier_gradient() {
        let html = view! { <ProgressBar label="Backend-ops-04".to_string() value=96.61 /> }.to_html();
        assert!(html.contains("width: 96.61%"));
        assert!(html.contains("linear-gradient(135deg,#f59e0b,#ef4444)"));
    }

    #[test]
    fn segments_follow_shares() {
        let categories = vec![
            CategoryShare { label: "Fully covered".into(), count: 1630, percent: 44.1 },
            CategoryShare { label: "Not covered".into(), count: 249, percent: 6.7 },
        ];
        let html = view! { <SegmentedBar categories=categories /> }.to_html();
        assert!(html.contains("width: 44.1%"));
        assert!(html.contains("width: 6.7%"));
        assert!(html.contains("segment-1"));
        assert!(html.contains("Fully covered: 44.1%"));
    }
}
