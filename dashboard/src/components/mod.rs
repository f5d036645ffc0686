//! Leptos UI components for rendering dashboard pages.
//!
//! Each component is a Leptos `#[component]` function rendered once on the
//! server; nothing is hydrated.
//!
//! # Component Hierarchy
//!
//! ```text
//! DashboardDocument
//! ├── TopBar (title, variant links, filter selects)
//! └── VariantBody
//!     ├── UptimeWallPage
//!     │   ├── Card > Gauge*
//!     │   ├── TileWall > Tile*
//!     │   └── TierLegend
//!     ├── UptimeBarsPage
//!     │   ├── KpiCard*
//!     │   ├── Card > ProgressBar*
//!     │   └── TierLegend
//!     └── CoveragePage
//!         ├── KpiCard*
//!         └── Card > SegmentedBar + breakdown table
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_dashboard`], but
//! can be used directly for custom layouts:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use uptime_dashboard::components::{Card, Gauge};
//!
//! view! {
//!     <Card class="rail">
//!         <Gauge label="CDN-edge".to_string() value=99.96 />
//!     </Card>
//! }
//! ```

mod card;
mod document;
mod gauge;
mod icons;
mod legend;
mod pages;
mod progress;
mod tile;
mod top_bar;

pub use card::{Card, KpiCard};
pub use document::{DashboardDocument, VariantBody};
pub use gauge::{GAUGE_SIZE, GAUGE_STROKE, Gauge, GaugeGeometry};
pub use icons::*;
pub use legend::TierLegend;
pub use pages::{CoveragePage, FleetSummary, UptimeBarsPage, UptimeWallPage};
pub use progress::{ProgressBar, SegmentedBar, segment_class};
pub use tile::{Tile, TileWall};
pub use top_bar::TopBar;
