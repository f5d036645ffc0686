//! Built-in demo data.

use crate::layout::Span;
use crate::types::{CategoryShare, CoverageSummary, DashboardData, FilterOptions, GaugeRecord, MetricRecord};

/// Time window dropdown options.
pub const WINDOWS: [&str; 3] = ["Last 30 days", "Last 90 days", "7 days"];

/// Region dropdown options.
pub const REGIONS: [&str; 3] = ["All Regions", "us-east-1", "eu-west-1"];

/// Default page heading.
pub const TITLE: &str = "SRE Uptime Dashboard";

/// Uptime tiles.
pub fn tiles() -> Vec<MetricRecord> {
    vec![
        MetricRecord::new("Backend-ops-01", 99.11),
        MetricRecord::new("Backend-ops-02", 98.58),
        MetricRecord::new("Backend-ops-03", 97.78),
        MetricRecord::new("Backend-ops-04", 96.61),
        MetricRecord::new("Frontend-web-01", 92.63),
        MetricRecord::new("Frontend-web-02", 99.18),
        MetricRecord::new("Frontend-web-03", 99.96).with_span(Span::Two, Span::Two),
        MetricRecord::new("Payments", 99.72),
        MetricRecord::new("Search", 99.31),
    ]
}

/// Services rail gauges.
pub fn gauges() -> Vec<GaugeRecord> {
    vec![
        GaugeRecord::new("Backend-ops-01", 99.11),
        GaugeRecord::new("Backend-ops-02", 98.14),
        GaugeRecord::new("Backend-ops-03", 99.63),
        GaugeRecord::new("Backend-ops-04", 97.8),
        GaugeRecord::new("Frontend-web-01", 92.05),
        GaugeRecord::new("Frontend-web-02", 99.4),
        GaugeRecord::new("CDN-edge", 99.96),
    ]
}

/// Test-coverage KPIs.
pub fn coverage() -> CoverageSummary {
    CoverageSummary {
        teams: 14,
        features: 3697,
        services: 86,
        average_coverage: 71.38,
        categories: vec![
            CategoryShare {
                label: "Fully covered".into(),
                count: 1630,
                percent: 44.1,
            },
            CategoryShare {
                label: "Partially covered".into(),
                count: 1818,
                percent: 49.2,
            },
            CategoryShare {
                label: "Not covered".into(),
                count: 249,
                percent: 6.7,
            },
        ],
    }
}

/// Complete demo data set.
pub fn demo_data() -> DashboardData {
    DashboardData {
        title: TITLE.to_string(),
        tiles: tiles(),
        gauges: gauges(),
        coverage: coverage(),
        filters: FilterOptions::default(),
    }
}
