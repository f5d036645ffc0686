//! Subcommand handlers.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};
use uptime_dashboard::format::{Precision, format_percent, group_thousands};
use uptime_dashboard::types::{DashboardData, FilterSelection};
use uptime_dashboard::{DemoSource, JsonSource, MetricsSource, Variant, render_dashboard};

use crate::config::{DEFAULT_OUT_DIR, DashConfig};

/// Keyword selecting every variant.
pub const ALL_VARIANTS: &str = "all";

/// Resolved inputs for `render`.
#[derive(Debug)]
pub struct RenderPlan {
    pub variants: Vec<Variant>,
    pub data: Option<PathBuf>,
    pub out_dir: PathBuf,
    pub selection: FilterSelection,
}

impl RenderPlan {
    /// Merge command line values over the config file.
    pub fn resolve(
        variant_args: &[String],
        data: Option<PathBuf>,
        out: Option<PathBuf>,
        window: Option<String>,
        region: Option<String>,
        config: &DashConfig,
    ) -> Result<Self> {
        let variants = if variant_args.is_empty() {
            if config.variants.is_empty() {
                Variant::ALL.to_vec()
            } else {
                config.variants.clone()
            }
        } else {
            parse_variants(variant_args)?
        };

        let defaults = config.filters.to_selection();
        Ok(Self {
            variants,
            data: data.or_else(|| config.data.clone()),
            out_dir: out
                .or_else(|| config.output.dir.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR)),
            selection: FilterSelection {
                window: window.or(defaults.window),
                region: region.or(defaults.region),
            },
        })
    }
}

/// Parse `--variant` values; `all` expands to every variant, duplicates are dropped.
pub fn parse_variants(values: &[String]) -> Result<Vec<Variant>> {
    let mut variants = Vec::new();
    for value in values {
        let expanded = if value.trim().eq_ignore_ascii_case(ALL_VARIANTS) {
            Variant::ALL.to_vec()
        } else {
            vec![value.parse::<Variant>()?]
        };
        for variant in expanded {
            if !variants.contains(&variant) {
                variants.push(variant);
            }
        }
    }
    Ok(variants)
}

/// Load data from a JSON file, or the demo set when no file is given.
pub fn load_data(path: Option<&Path>) -> Result<DashboardData> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading dashboard data");
            JsonSource::new(path)
                .load()
                .with_context(|| format!("Failed to load dashboard data from {}", path.display()))
        }
        None => {
            debug!("using built-in demo data");
            Ok(DemoSource.load()?)
        }
    }
}

/// Render the planned variants into the output directory.
pub fn render(plan: &RenderPlan) -> Result<Vec<PathBuf>> {
    if plan.variants.is_empty() {
        bail!("No variants selected");
    }

    let data = load_data(plan.data.as_deref())?;
    std::fs::create_dir_all(&plan.out_dir)
        .with_context(|| format!("Failed to create output directory {}", plan.out_dir.display()))?;

    let mut written = Vec::with_capacity(plan.variants.len());
    for variant in &plan.variants {
        let html = render_dashboard(*variant, &data, &plan.selection);
        let path = plan.out_dir.join(variant.file_name());
        std::fs::write(&path, &html)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(%variant, path = %path.display(), bytes = html.len(), "wrote dashboard");
        written.push(path);
    }

    Ok(written)
}

/// Human-readable summary of a validated data set.
pub fn summarize(data: &DashboardData) -> String {
    let coverage = &data.coverage;
    format!(
        "title: {}\ntiles: {}\ngauges: {}\ncoverage: {} teams, {} features, {} services, {} average, {} categories\nok",
        data.title,
        data.tiles.len(),
        data.gauges.len(),
        group_thousands(coverage.teams),
        group_thousands(coverage.features),
        group_thousands(coverage.services),
        format_percent(coverage.average_coverage, Precision::Tile),
        coverage.categories.len(),
    )
}

/// Pretty JSON of the built-in demo data.
pub fn demo_json() -> Result<String> {
    serde_json::to_string_pretty(&DashboardData::default()).context("Failed to serialize demo data")
}
