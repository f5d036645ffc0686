//! CSS styles for the dashboard pages.
//!
//! All variants share one stylesheet, inlined into the `<head>` so a
//! rendered page is a single self-contained file.
//!
//! # Customization
//!
//! ```rust
//! use uptime_dashboard::styles::DASHBOARD_CSS;
//!
//! let my_css = ".tile { border-radius: 0; }";
//! let combined = format!("{}\n{}", DASHBOARD_CSS, my_css);
//! ```

/// Complete CSS for every dashboard variant - zinc dark theme.
///
/// Provides:
/// - Page shell, sticky top bar and filter selects
/// - 12-column main grid with the services rail
/// - Tile wall grid with `col-span-*` / `row-span-*` helpers
/// - Gauge, KPI card, progress bar and legend styling
pub const DASHBOARD_CSS: &str = r#"
:root {
    --zinc-950: #09090b;
    --zinc-900: #18181b;
    --zinc-800: #27272a;
    --zinc-700: #3f3f46;
    --zinc-400: #a1a1aa;
    --zinc-300: #d4d4d8;
    --zinc-50: #fafafa;
    --emerald-500: #10b981;
    --border-subtle: rgba(255, 255, 255, 0.1);
    --font-sans: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
    --container-max: 80rem;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html, body {
    margin: 0;
    min-height: 100%;
}

body {
    font-family: var(--font-sans);
    background: var(--zinc-950);
    color: var(--zinc-50);
    line-height: 1.5;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 1rem;
}

/* Top bar */
.top-bar {
    position: sticky;
    top: 0;
    z-index: 10;
    border-bottom: 1px solid var(--border-subtle);
    background: rgba(24, 24, 27, 0.7);
    backdrop-filter: blur(8px);
}

.top-bar-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding-top: 0.75rem;
    padding-bottom: 0.75rem;
}

.brand {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.brand h1 {
    margin: 0;
    font-size: 1.125rem;
    font-weight: 600;
    letter-spacing: -0.01em;
}

.status-dot {
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 9999px;
    background: var(--emerald-500);
    animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

@keyframes pulse {
    50% { opacity: 0.5; }
}

.filters {
    display: flex;
    gap: 0.5rem;
}

.filters select {
    background: var(--zinc-800);
    color: var(--zinc-50);
    border: 1px solid var(--border-subtle);
    border-radius: 0.5rem;
    padding: 0.5rem 0.75rem;
    font-size: 0.875rem;
}

.variant-nav a {
    color: var(--zinc-400);
    text-decoration: none;
    font-size: 0.875rem;
    padding: 0.5rem 0.75rem;
    border-radius: 0.5rem;
}

.variant-nav a.active {
    color: var(--zinc-50);
    background: var(--zinc-800);
}

/* Main grid */
.main-grid {
    display: grid;
    grid-template-columns: repeat(12, minmax(0, 1fr));
    gap: 1rem;
    padding-top: 1.5rem;
    padding-bottom: 1.5rem;
}

.rail, .wall, .full-width {
    grid-column: span 12 / span 12;
}

@media (min-width: 768px) {
    .rail { grid-column: span 3 / span 3; }
    .wall { grid-column: span 9 / span 9; }
}

@media (min-width: 1024px) {
    .rail { grid-column: span 2 / span 2; }
    .wall { grid-column: span 10 / span 10; }
}

/* Cards */
.card {
    border-radius: 1rem;
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid var(--border-subtle);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    backdrop-filter: blur(8px);
    padding: 1rem;
}

.card-solid {
    background: rgba(24, 24, 27, 0.7);
}

.card-heading {
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: var(--zinc-400);
    margin-bottom: 1rem;
}

.stack > * + * {
    margin-top: 1rem;
}

/* Gauges */
.gauge {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.gauge svg {
    transform: rotate(-90deg);
    flex-shrink: 0;
}

.gauge-text {
    line-height: 1.25;
}

.gauge-label {
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--zinc-300);
}

.gauge-value {
    font-size: 1.125rem;
    font-weight: 600;
    color: var(--zinc-50);
}

/* Tile wall */
.tile-grid {
    display: grid;
    grid-template-columns: repeat(2, minmax(0, 1fr));
    grid-auto-rows: 140px;
    gap: 1rem;
}

@media (min-width: 768px) {
    .tile-grid {
        grid-template-columns: repeat(3, minmax(0, 1fr));
        grid-auto-rows: 180px;
    }
}

.col-span-1 { grid-column: span 1 / span 1; }
.col-span-2 { grid-column: span 2 / span 2; }
.col-span-3 { grid-column: span 3 / span 3; }
.row-span-1 { grid-row: span 1 / span 1; }
.row-span-2 { grid-row: span 2 / span 2; }
.row-span-3 { grid-row: span 3 / span 3; }

.tile {
    position: relative;
    height: 100%;
    border-radius: 0.75rem;
    padding: 1rem;
    border: 1px solid rgba(0, 0, 0, 0.1);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    user-select: none;
    overflow: hidden;
}

.tile-name {
    font-size: 0.75rem;
    font-weight: 500;
    color: rgba(255, 255, 255, 0.9);
    text-shadow: 0 1px 1px rgba(0, 0, 0, 0.05);
}

.tile-value {
    font-size: 2.25rem;
    font-weight: 800;
    line-height: 1;
}

@media (min-width: 768px) {
    .tile { padding: 1.5rem; }
    .tile-name { font-size: 0.875rem; }
    .tile-value { font-size: 3rem; }
}

@media (min-width: 1024px) {
    .tile { padding: 2rem; }
    .tile-value { font-size: 4.5rem; }
}

/* KPI cards */
.kpi-row {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
    gap: 1rem;
}

.kpi-head {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    color: var(--zinc-400);
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
}

.kpi-value {
    font-size: 1.875rem;
    font-weight: 700;
    margin-top: 0.5rem;
}

.kpi-hint {
    font-size: 0.75rem;
    color: var(--zinc-400);
}

/* Progress bars */
.bar-row {
    display: grid;
    grid-template-columns: 10rem 1fr 5rem;
    align-items: center;
    gap: 0.75rem;
    font-size: 0.875rem;
}

.bar-track {
    height: 0.75rem;
    border-radius: 9999px;
    background: rgba(63, 63, 70, 0.4);
    overflow: hidden;
    display: flex;
}

.bar-fill {
    height: 100%;
}

.bar-value {
    text-align: right;
    font-variant-numeric: tabular-nums;
    color: var(--zinc-300);
}

.segment-track {
    height: 1rem;
}

.segment-0 { background: #10b981; }
.segment-1 { background: #f59e0b; }
.segment-2 { background: #f43f5e; }
.segment-3 { background: #0ea5e9; }
.segment-4 { background: #a855f7; }

/* Tables */
.data-table {
    width: 100%;
    border-collapse: collapse;
    font-size: 0.875rem;
    margin-top: 1rem;
}

.data-table th, .data-table td {
    text-align: left;
    padding: 0.5rem 0.75rem;
    border-bottom: 1px solid var(--border-subtle);
}

.data-table th {
    color: var(--zinc-400);
    font-weight: 500;
}

.data-table td.num, .data-table th.num {
    text-align: right;
    font-variant-numeric: tabular-nums;
}

.swatch {
    display: inline-block;
    width: 0.75rem;
    height: 0.75rem;
    border-radius: 0.125rem;
}

/* Legend */
.legend {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    padding-bottom: 2rem;
    font-size: 0.875rem;
    color: var(--zinc-400);
}

.legend-item {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
}

.muted {
    color: var(--zinc-400);
}

.icon-sm {
    width: 16px;
    height: 16px;
}
"#;

/// Content Security Policy for rendered pages. No scripts are emitted.
pub const CSP: &str = "default-src 'none'; img-src 'self' data:; style-src 'unsafe-inline'; script-src 'none'; font-src 'self' data:;";
