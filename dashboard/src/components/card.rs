//! Card primitives - translucent panel and KPI card

use super::Icon;
use leptos::prelude::*;

/// Rounded translucent panel.
#[component]
pub fn Card(
    /// Extra class names appended to `card`
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "card".to_string()
    } else {
        format!("card {}", class)
    };

    view! {
        <div class=class>
            {children()}
        </div>
    }
}

/// Single headline number with caption and optional hint line.
#[component]
pub fn KpiCard(
    /// Caption above the value
    label: String,
    /// Pre-formatted value
    value: String,
    /// Icon path data
    icon: &'static str,
    /// Small print under the value
    #[prop(optional)]
    hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="card kpi-card">
            <div class="kpi-head">
                <Icon path=icon size="16" class="icon-sm" />
                <span>{label}</span>
            </div>
            <div class="kpi-value">{value}</div>
            {hint.map(|hint| view! { <div class="kpi-hint">{hint}</div> })}
        </div>
    }
}
