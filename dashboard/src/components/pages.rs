//! Page bodies for the three dashboard variants

use super::{
    Card, Gauge, ICON_DIAMOND, ICON_PERCENT, ICON_PULSE, ICON_STACK, ICON_USERS,
    ICON_WARNING_CIRCLE, KpiCard, ProgressBar, SegmentedBar, TierLegend, TileWall, segment_class,
};
use crate::format::{Precision, format_percent, group_thousands};
use crate::types::{CoverageSummary, GaugeRecord, MetricRecord};
use leptos::prelude::*;

/// Headline numbers for the uptime bars page.
#[derive(Clone, Debug, PartialEq)]
pub struct FleetSummary {
    /// Number of services
    pub count: usize,
    /// Mean uptime, `None` without services
    pub average: Option<f64>,
    /// Service with the lowest uptime
    pub lowest: Option<(String, f64)>,
}

impl FleetSummary {
    /// Summarise a set of tiles. `NaN` values are skipped for the lowest pick.
    pub fn from_tiles(tiles: &[MetricRecord]) -> Self {
        let count = tiles.len();
        let average = (count > 0).then(|| tiles.iter().map(|t| t.value).sum::<f64>() / count as f64);
        let lowest = tiles
            .iter()
            .filter(|t| !t.value.is_nan())
            .min_by(|a, b| a.value.total_cmp(&b.value))
            .map(|t| (t.name.clone(), t.value));

        Self {
            count,
            average,
            lowest,
        }
    }
}

/// Gauge rail on the left, tile wall on the right, legend below.
#[component]
pub fn UptimeWallPage(tiles: Vec<MetricRecord>, gauges: Vec<GaugeRecord>) -> impl IntoView {
    view! {
        <main class="container main-grid">
            <Card class="rail card-solid">
                <div class="card-heading">"Services"</div>
                <div class="stack">
                    {gauges.into_iter().map(|g| view! {
                        <Gauge label=g.label value=g.value />
                    }).collect::<Vec<_>>()}
                </div>
            </Card>
            <div class="wall">
                <TileWall tiles=tiles />
            </div>
        </main>
        <footer class="container">
            <TierLegend />
        </footer>
    }
}

/// KPI row and one bar per service.
#[component]
pub fn UptimeBarsPage(tiles: Vec<MetricRecord>) -> impl IntoView {
    let summary = FleetSummary::from_tiles(&tiles);
    let average = summary
        .average
        .map(|avg| format_percent(avg, Precision::Gauge))
        .unwrap_or_else(|| "n/a".to_string());
    let (lowest_value, lowest_hint) = match summary.lowest {
        Some((name, value)) => (format_percent(value, Precision::Gauge), Some(name)),
        None => ("n/a".to_string(), None),
    };

    view! {
        <main class="container stack" style="padding-top: 1.5rem; padding-bottom: 1.5rem;">
            <div class="kpi-row">
                <KpiCard
                    label="Services tracked".to_string()
                    value=group_thousands(summary.count as u64)
                    icon=ICON_STACK
                />
                <KpiCard label="Fleet average".to_string() value=average icon=ICON_PULSE />
                {match lowest_hint {
                    Some(name) => view! {
                        <KpiCard
                            label="Lowest service".to_string()
                            value=lowest_value
                            icon=ICON_WARNING_CIRCLE
                            hint=name
                        />
                    }.into_any(),
                    None => view! {
                        <KpiCard
                            label="Lowest service".to_string()
                            value=lowest_value
                            icon=ICON_WARNING_CIRCLE
                        />
                    }.into_any(),
                }}
            </div>
            <Card class="card-solid">
                <div class="card-heading">"Uptime by service"</div>
                <div class="stack">
                    {tiles.into_iter().map(|t| view! {
                        <ProgressBar label=t.name value=t.value />
                    }).collect::<Vec<_>>()}
                </div>
            </Card>
        </main>
        <footer class="container">
            <TierLegend />
        </footer>
    }
}

/// Coverage KPIs, segmented share bar and breakdown table.
#[component]
pub fn CoveragePage(coverage: CoverageSummary) -> impl IntoView {
    let percent_total = coverage.category_percent_total();
    let count_total = coverage
        .category_count_total()
        .map_or_else(|| "n/a".to_string(), group_thousands);
    let has_breakdown = !coverage.categories.is_empty();
    let rows = coverage.categories.clone();

    view! {
        <main class="container stack" style="padding-top: 1.5rem; padding-bottom: 1.5rem;">
            <div class="kpi-row">
                <KpiCard label="Teams".to_string() value=group_thousands(coverage.teams) icon=ICON_USERS />
                <KpiCard label="Features".to_string() value=group_thousands(coverage.features) icon=ICON_DIAMOND />
                <KpiCard label="Services".to_string() value=group_thousands(coverage.services) icon=ICON_STACK />
                <KpiCard
                    label="Average coverage".to_string()
                    value=format_percent(coverage.average_coverage, Precision::Tile)
                    icon=ICON_PERCENT
                />
            </div>
            <Card class="card-solid">
                <div class="card-heading">"Coverage breakdown"</div>
                {if has_breakdown {
                    view! {
                        <SegmentedBar categories=coverage.categories />
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Category"</th>
                                    <th class="num">"Features"</th>
                                    <th class="num">"Share"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().enumerate().map(|(idx, row)| view! {
                                    <tr>
                                        <td>
                                            <span class=format!("swatch {}", segment_class(idx))></span>
                                            " "
                                            {row.label}
                                        </td>
                                        <td class="num">{group_thousands(row.count)}</td>
                                        <td class="num">{format_percent(row.percent, Precision::Tile)}</td>
                                    </tr>
                                }).collect::<Vec<_>>()}
                            </tbody>
                            <tfoot>
                                <tr>
                                    <th>"Total"</th>
                                    <th class="num">{count_total}</th>
                                    <th class="num">{format_percent(percent_total, Precision::Tile)}</th>
                                </tr>
                            </tfoot>
                        </table>
                    }.into_any()
                } else {
                    view! { <p class="muted">"No coverage breakdown reported"</p> }.into_any()
                }}
            </Card>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn fleet_summary_of_demo_tiles() {
        let summary = FleetSummary::from_tiles(&demo::tiles());
        assert_eq!(summary.count, 9);
        assert_eq!(summary.lowest, Some(("Frontend-web-01".to_string(), 92.63)));
        let avg = summary.average.unwrap_or_default();
        assert!((avg - 98.097_777).abs() < 1e-4, "avg = {avg}");
    }

    #[test]
    fn fleet_summary_empty() {
        let summary = FleetSummary::from_tiles(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average, None);
        assert_eq!(summary.lowest, None);
    }

    #[test]
    fn coverage_page_groups_counts() {
        let html = view! { <CoveragePage coverage=demo::coverage() /> }.to_html();
        assert!(html.contains("3,697"));
        assert!(html.contains("1,630"));
        assert!(html.contains("1,818"));
        assert!(html.contains("49.2%"));
        assert!(html.contains("100.0%"));
        assert!(html.contains("71.4%"));
    }

    #[test]
    fn coverage_page_without_breakdown() {
        let coverage = CoverageSummary {
            teams: 2,
            ..Default::default()
        };
        let html = view! { <CoveragePage coverage=coverage /> }.to_html();
        assert!(html.contains("No coverage breakdown reported"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn bars_page_shows_lowest_service() {
        let html = view! { <UptimeBarsPage tiles=demo::tiles() /> }.to_html();
        assert!(html.contains("Lowest service"));
        assert!(html.contains("92.63%"));
        assert!(html.contains("98.10%"));
    }
}
