//! Dashboard page variants.

use crate::error::DataError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three dashboard layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Gauge rail plus tiled uptime wall
    UptimeWall,
    /// KPI cards plus one progress bar per service
    UptimeBars,
    /// Test-coverage KPIs and category breakdown
    Coverage,
}

impl Variant {
    /// Every variant, in navigation order.
    pub const ALL: [Variant; 3] = [Variant::UptimeWall, Variant::UptimeBars, Variant::Coverage];

    /// Slug used on the command line and in file names.
    pub fn slug(self) -> &'static str {
        match self {
            Variant::UptimeWall => "uptime-wall",
            Variant::UptimeBars => "uptime-bars",
            Variant::Coverage => "coverage",
        }
    }

    /// Navigation caption.
    pub fn display_name(self) -> &'static str {
        match self {
            Variant::UptimeWall => "Uptime wall",
            Variant::UptimeBars => "Uptime bars",
            Variant::Coverage => "Coverage",
        }
    }

    /// Output file name, e.g. `uptime-wall.html`.
    pub fn file_name(self) -> String {
        format!("{}.html", self.slug())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Variant {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Variant::ALL
            .into_iter()
            .find(|v| v.slug() == wanted)
            .ok_or_else(|| DataError::UnknownVariant(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(variant.slug().parse::<Variant>().ok(), Some(variant));
            assert_eq!(variant.to_string(), variant.slug());
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Uptime-Wall".parse::<Variant>().ok(), Some(Variant::UptimeWall));
        assert_eq!(" coverage ".parse::<Variant>().ok(), Some(Variant::Coverage));
    }

    #[test]
    fn unknown_slug() {
        let err = "heatmap".parse::<Variant>().unwrap_err();
        assert!(err.to_string().contains("heatmap"));
    }

    #[test]
    fn file_names() {
        assert_eq!(Variant::UptimeBars.file_name(), "uptime-bars.html");
    }
}
