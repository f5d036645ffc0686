//! Inline SVG icons for the dashboard UI.
//!
//! Paths are drawn on a 256×256 grid. The warning glyph is from Phosphor
//! Icons (Regular weight); the rest are plain geometric shapes.

use leptos::prelude::*;

/// Renders an inline SVG icon from a path data string.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_USERS size="24" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    #[prop(into)]
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Fill color (CSS color value)
    #[prop(default = "currentColor")]
    color: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill=color
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

// =============================================================================
// Phosphor Icons (Regular weight) - https://phosphoricons.com/
// =============================================================================

/// Warning/alert circle icon
pub const ICON_WARNING_CIRCLE: &str = "M128,24A104,104,0,1,0,232,128,104.11,104.11,0,0,0,128,24Zm0,192a88,88,0,1,1,88-88A88.1,88.1,0,0,1,128,216Zm-8-80V80a8,8,0,0,1,16,0v56a8,8,0,0,1-16,0Zm8,40a12,12,0,1,1,12-12A12,12,0,0,1,128,176Z";

// =============================================================================
// Geometric glyphs
// =============================================================================

/// Two heads and shoulders (teams)
pub const ICON_USERS: &str = "M96,40a40,40,0,1,1-40,40A40,40,0,0,1,96,40ZM16,208a80,80,0,0,1,160,0ZM176,56a32,32,0,1,1-32,32A32,32,0,0,1,176,56Zm-24,88a72,72,0,0,1,88,64H192A96,96,0,0,0,152,144Z";

/// Three stacked slabs (services)
pub const ICON_STACK: &str = "M40,40H216V88H40ZM40,104H216V152H40ZM40,168H216V216H40Z";

/// Diamond (features)
pub const ICON_DIAMOND: &str = "M128,24,232,128,128,232,24,128Z";

/// Percent sign (coverage averages)
pub const ICON_PERCENT: &str = "M72,48a24,24,0,1,1-24,24A24,24,0,0,1,72,48ZM184,160a24,24,0,1,1-24,24A24,24,0,0,1,184,160ZM196,44l16,16L60,212,44,196Z";

/// Pulse line (uptime)
pub const ICON_PULSE: &str = "M16,120H80l24-56,48,128,24-72h64v16H188l-36,104L104,112,92,136H16Z";
