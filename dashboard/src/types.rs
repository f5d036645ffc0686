//! Dashboard data types.
//!
//! These types define the data model for every dashboard variant. They're
//! designed to be:
//!
//! - **Serializable** - JSON import/export via serde
//! - **Clone-friendly** - components take owned props
//! - **Default-able** - `Default` yields the built-in demo data
//!
//! # Example
//!
//! ```rust
//! use uptime_dashboard::types::{DashboardData, MetricRecord};
//! use uptime_dashboard::layout::Span;
//!
//! let data = DashboardData {
//!     tiles: vec![
//!         MetricRecord::new("Payments", 99.72),
//!         MetricRecord::new("Search", 99.31).with_span(Span::Two, Span::One),
//!     ],
//!     ..Default::default()
//! };
//! assert!(data.validate().is_ok());
//! ```

use crate::demo;
use crate::error::DataError;
use crate::layout::Span;
use serde::{Deserialize, Serialize};

/// Allowed distance of the category percentage sum from 100.
pub const PERCENT_TOLERANCE: f64 = 0.1;

/// A single uptime tile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Display name, not required to be unique
    pub name: String,
    /// Percentage, nominally `0..=100`
    pub value: f64,
    /// Columns covered in the tile grid
    #[serde(default, skip_serializing_if = "Span::is_one")]
    pub span_cols: Span,
    /// Rows covered in the tile grid
    #[serde(default, skip_serializing_if = "Span::is_one")]
    pub span_rows: Span,
}

impl MetricRecord {
    /// A 1×1 tile.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            span_cols: Span::One,
            span_rows: Span::One,
        }
    }

    /// Same record with a different grid span.
    pub fn with_span(mut self, cols: Span, rows: Span) -> Self {
        self.span_cols = cols;
        self.span_rows = rows;
        self
    }
}

/// A single circular gauge.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GaugeRecord {
    /// Caption next to the ring
    pub label: String,
    /// Percentage, nominally `0..=100`
    pub value: f64,
}

impl GaugeRecord {
    /// Build a gauge record.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// One slice of the coverage breakdown.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Category caption
    pub label: String,
    /// Number of features in this category
    pub count: u64,
    /// Share of all features, percent
    pub percent: f64,
}

/// Aggregate test-coverage KPIs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageSummary {
    /// Teams reporting coverage
    pub teams: u64,
    /// Features tracked; the total the breakdown adds up to
    pub features: u64,
    /// Services tracked
    pub services: u64,
    /// Mean coverage across services, percent
    pub average_coverage: f64,
    /// Category breakdown of `features`
    pub categories: Vec<CategoryShare>,
}

impl CoverageSummary {
    /// Sum of category counts, `None` if it does not fit in a `u64`.
    pub fn category_count_total(&self) -> Option<u64> {
        self.categories
            .iter()
            .try_fold(0u64, |acc, c| acc.checked_add(c.count))
    }

    /// Sum of category percentages.
    pub fn category_percent_total(&self) -> f64 {
        self.categories.iter().map(|c| c.percent).sum()
    }

    /// Check that the breakdown is consistent with the totals.
    ///
    /// An empty breakdown is accepted.
    pub fn validate(&self) -> Result<(), DataError> {
        if self.categories.is_empty() {
            return Ok(());
        }

        let actual = self
            .category_count_total()
            .ok_or(DataError::CategoryCountOverflow {
                expected: self.features,
            })?;
        if actual != self.features {
            return Err(DataError::CategoryCountMismatch {
                expected: self.features,
                actual,
            });
        }

        let sum = self.category_percent_total();
        // Small epsilon so 44.1 + 49.2 + 6.7 style float noise never trips it
        if (sum - 100.0).abs() > PERCENT_TOLERANCE + 1e-9 {
            return Err(DataError::CategoryPercentDrift { sum });
        }

        Ok(())
    }
}

/// Options offered by the two header dropdowns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Time window choices
    pub windows: Vec<String>,
    /// Region choices
    pub regions: Vec<String>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            windows: demo::WINDOWS.iter().map(|s| s.to_string()).collect(),
            regions: demo::REGIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The dropdown values to show as selected.
///
/// Purely cosmetic: the rendered metrics are the same for every selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Selected time window; `None` picks the first option
    pub window: Option<String>,
    /// Selected region; `None` picks the first option
    pub region: Option<String>,
}

impl FilterSelection {
    /// Resolve the selected window against the available options.
    pub fn window_in<'a>(&'a self, options: &'a FilterOptions) -> Option<&'a str> {
        resolve(self.window.as_deref(), &options.windows)
    }

    /// Resolve the selected region against the available options.
    pub fn region_in<'a>(&'a self, options: &'a FilterOptions) -> Option<&'a str> {
        resolve(self.region.as_deref(), &options.regions)
    }
}

fn resolve<'a>(wanted: Option<&'a str>, options: &'a [String]) -> Option<&'a str> {
    match wanted {
        Some(w) => options.iter().map(String::as_str).find(|o| *o == w),
        None => options.first().map(String::as_str),
    }
}

/// Everything a dashboard variant renders from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardData {
    /// Page heading
    pub title: String,
    /// Tiles for the uptime wall and uptime bars
    pub tiles: Vec<MetricRecord>,
    /// Gauges for the services rail
    pub gauges: Vec<GaugeRecord>,
    /// Coverage KPIs
    pub coverage: CoverageSummary,
    /// Header dropdown options
    pub filters: FilterOptions,
}

impl Default for DashboardData {
    fn default() -> Self {
        demo::demo_data()
    }
}

impl DashboardData {
    /// Parse from a JSON document. Missing sections fall back to demo data.
    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate invariants and log values outside `0..=100`.
    ///
    /// Out-of-range percentages are not an error: they render clamped.
    pub fn validate(&self) -> Result<(), DataError> {
        for tile in &self.tiles {
            warn_out_of_range("tile", &tile.name, tile.value);
        }
        for gauge in &self.gauges {
            warn_out_of_range("gauge", &gauge.label, gauge.value);
        }
        warn_out_of_range("coverage", "average", self.coverage.average_coverage);
        for category in &self.coverage.categories {
            warn_out_of_range("category", &category.label, category.percent);
        }

        self.coverage.validate()
    }
}

fn warn_out_of_range(kind: &str, name: &str, value: f64) {
    if !(0.0..=100.0).contains(&value) {
        tracing::warn!(kind, name, value, "percentage outside 0..=100, rendering clamped");
    }
}
