//! Render every demo dashboard variant.
//!
//! Run with: `cargo run --example render_demo`

use uptime_dashboard::{render_all, types::{DashboardData, FilterSelection}};

fn main() {
    let data = DashboardData::default();

    for (variant, html) in render_all(&data, &FilterSelection::default()) {
        let output_path = variant.file_name();
        std::fs::write(&output_path, &html).expect("Failed to write dashboard");

        println!("{} written to: {} ({} bytes)", variant.display_name(), output_path, html.len());
    }
}
