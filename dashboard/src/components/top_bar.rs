//! Sticky top bar - title, variant links and the cosmetic filter selects
//!
//! The selects render the options and mark the current selection; nothing
//! is wired to them.

use crate::types::{FilterOptions, FilterSelection};
use crate::variant::Variant;
use leptos::prelude::*;

/// Header shared by every variant.
#[component]
pub fn TopBar(
    title: String,
    active: Variant,
    filters: FilterOptions,
    selection: FilterSelection,
) -> impl IntoView {
    let window = selection.window_in(&filters).map(str::to_string);
    let region = selection.region_in(&filters).map(str::to_string);

    view! {
        <header class="top-bar">
            <div class="container top-bar-inner">
                <div class="brand">
                    <div class="status-dot"></div>
                    <h1>{title}</h1>
                </div>
                <nav class="filters variant-nav">
                    {Variant::ALL.into_iter().map(|variant| {
                        let class = if variant == active { "nav-item active" } else { "nav-item" };
                        view! {
                            <a class=class href=variant.file_name()>{variant.display_name()}</a>
                        }
                    }).collect::<Vec<_>>()}
                </nav>
                <div class="filters">
                    <FilterSelect name="window" options=filters.windows selected=window />
                    <FilterSelect name="region" options=filters.regions selected=region />
                </div>
            </div>
        </header>
    }
}

/// A `<select>` with one option marked selected.
#[component]
fn FilterSelect(
    name: &'static str,
    options: Vec<String>,
    selected: Option<String>,
) -> impl IntoView {
    view! {
        <select name=name>
            {options.into_iter().map(|option| {
                let is_selected = selected.as_deref() == Some(option.as_str());
                view! { <option selected=is_selected>{option}</option> }
            }).collect::<Vec<_>>()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_options_and_marks_default() {
        let html = view! {
            <TopBar
                title="SRE Uptime Dashboard".to_string()
                active=Variant::UptimeWall
                filters=FilterOptions::default()
                selection=FilterSelection::default()
            />
        }
        .to_html();

        assert!(html.contains("SRE Uptime Dashboard"));
        for option in ["Last 30 days", "Last 90 days", "7 days", "All Regions", "us-east-1", "eu-west-1"] {
            assert!(html.contains(option), "missing option {option}");
        }
        assert_eq!(html.matches("selected").count(), 2);
        assert!(html.contains("href=\"coverage.html\""));
    }

    #[test]
    fn unknown_selection_marks_nothing() {
        let selection = FilterSelection {
            window: Some("Last 365 days".into()),
            region: Some("ap-south-1".into()),
        };
        let html = view! {
            <TopBar
                title="t".to_string()
                active=Variant::Coverage
                filters=FilterOptions::default()
                selection=selection
            />
        }
        .to_html();

        assert!(!html.contains("selected"));
    }
}
