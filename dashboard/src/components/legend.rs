//! Tier legend

use crate::tier::Tier;
use leptos::prelude::*;

/// Swatch and threshold caption for every tier, best first.
#[component]
pub fn TierLegend() -> impl IntoView {
    view! {
        <div class="legend">
            {Tier::ALL.into_iter().map(|tier| view! {
                <span class="legend-item" data-tier=tier.as_label()>
                    <span class="swatch" style=format!("background: {}", tier.swatch())></span>
                    {tier.legend_label()}
                </span>
            }).collect::<Vec<_>>()}
        </div>
    }
}
