//! Uptime tiles and the tiled wall

use crate::format::{Precision, format_percent};
use crate::layout::span_classes;
use crate::tier::Tier;
use crate::types::MetricRecord;
use leptos::prelude::*;

/// Gradient tile with name and one-decimal readout.
#[component]
pub fn Tile(name: String, value: f64) -> impl IntoView {
    let tier = Tier::classify(value);

    view! {
        <div
            class="tile"
            data-tier=tier.as_label()
            style=format!("background: {}", tier.gradient())
        >
            <div class="tile-name">{name}</div>
            <div class="tile-value" style=format!("color: {}", tier.text_tone())>
                {format_percent(value, Precision::Tile)}
            </div>
        </div>
    }
}

/// Responsive grid of tiles honoring each record's span.
#[component]
pub fn TileWall(tiles: Vec<MetricRecord>) -> impl IntoView {
    view! {
        <div class="tile-grid">
            {tiles.into_iter().map(|t| {
                let cell_class = span_classes(t.span_cols, t.span_rows);
                view! {
                    <div class=cell_class>
                        <Tile name=t.name value=t.value />
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
