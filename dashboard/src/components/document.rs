//! Root document component - the complete HTML page
//!
//! Shared shell for every variant: head with inline CSS, sticky top bar,
//! then the variant's body.

use super::{CoveragePage, TopBar, UptimeBarsPage, UptimeWallPage};
use crate::styles::{CSP, DASHBOARD_CSS};
use crate::types::{DashboardData, FilterSelection};
use crate::variant::Variant;
use leptos::prelude::*;

/// The complete HTML document for one variant
#[component]
pub fn DashboardDocument(
    variant: Variant,
    data: DashboardData,
    /// Dropdown values shown as selected (cosmetic)
    #[prop(optional)]
    selection: FilterSelection,
) -> impl IntoView {
    let page_title = format!("{} \u{00b7} {}", data.title, variant.display_name());

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{page_title}</title>
                <style>{DASHBOARD_CSS}</style>
            </head>
            <body data-variant=variant.slug()>
                <TopBar
                    title=data.title.clone()
                    active=variant
                    filters=data.filters.clone()
                    selection=selection
                />
                <VariantBody variant=variant data=data />
            </body>
        </html>
    }
}

/// Picks the page body for `variant`.
#[component]
pub fn VariantBody(variant: Variant, data: DashboardData) -> impl IntoView {
    match variant {
        Variant::UptimeWall => view! {
            <UptimeWallPage tiles=data.tiles gauges=data.gauges />
        }
        .into_any(),
        Variant::UptimeBars => view! { <UptimeBarsPage tiles=data.tiles /> }.into_any(),
        Variant::Coverage => view! { <CoveragePage coverage=data.coverage /> }.into_any(),
    }
}
