//! Configuration file support for uptime-dash.
//!
//! Loads an optional `dashboard.toml`. Command line flags win over values
//! from the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use uptime_dashboard::Variant;
use uptime_dashboard::types::FilterSelection;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";

/// Output directory used when neither flag nor config sets one.
pub const DEFAULT_OUT_DIR: &str = "dashboard-out";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    /// JSON data file; relative paths resolve against the config file
    pub data: Option<PathBuf>,
    /// Variants rendered when `--variant` is not given
    pub variants: Vec<Variant>,
    pub output: OutputConfig,
    pub filters: FilterConfig,
}

/// Where rendered pages go
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: Option<PathBuf>,
}

/// Dropdown values to mark selected
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub window: Option<String>,
    pub region: Option<String>,
}

impl FilterConfig {
    pub fn to_selection(&self) -> FilterSelection {
        FilterSelection {
            window: self.window.clone(),
            region: self.region.clone(),
        }
    }
}

impl DashConfig {
    /// Load config from `dashboard.toml` in the given directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(dir: &Path) -> Self {
        Self::load_from_path(&dir.join(DEFAULT_CONFIG_FILE))
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<DashConfig>(&content) {
                Ok(config) => config.resolved_against(path),
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load a config file named on the command line.
    /// Unlike [`DashConfig::load_from_path`], a missing or invalid file is an error.
    pub fn load_explicit(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str::<DashConfig>(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config.resolved_against(path))
    }

    fn resolved_against(mut self, config_path: &Path) -> Self {
        let base = config_path.parent().unwrap_or_else(|| Path::new(""));
        if let Some(data) = self.data.take() {
            self.data = Some(if data.is_relative() { base.join(data) } else { data });
        }
        if let Some(dir) = self.output.dir.take() {
            self.output.dir = Some(if dir.is_relative() { base.join(dir) } else { dir });
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = DashConfig::default();
        assert!(config.data.is_none());
        assert!(config.variants.is_empty());
        assert!(config.output.dir.is_none());
        assert_eq!(config.filters.to_selection(), FilterSelection::default());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = DashConfig::load(temp.path());
        assert!(config.variants.is_empty());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join(DEFAULT_CONFIG_FILE);
        let mut file = std::fs::File::create(&config_path).expect("create config");
        writeln!(
            file,
            r#"
data = "metrics.json"
variants = ["uptime-wall", "coverage"]

[output]
dir = "/srv/dashboards"

[filters]
window = "7 days"
region = "eu-west-1"
"#
        )
        .expect("write config");

        let config = DashConfig::load(temp.path());
        assert_eq!(config.data, Some(temp.path().join("metrics.json")));
        assert_eq!(config.variants, vec![Variant::UptimeWall, Variant::Coverage]);
        assert_eq!(config.output.dir, Some(PathBuf::from("/srv/dashboards")));

        let selection = config.filters.to_selection();
        assert_eq!(selection.window.as_deref(), Some("7 days"));
        assert_eq!(selection.region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&config_path, "variants = [\"heatmap\"]").expect("write config");

        let config = DashConfig::load(temp.path());
        assert!(config.variants.is_empty());
    }

    #[test]
    fn test_load_explicit_valid() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("custom.toml");
        std::fs::write(&config_path, "[output]\ndir = \"site\"\n").expect("write config");

        let config = DashConfig::load_explicit(&config_path).expect("valid config");
        assert_eq!(config.output.dir, Some(temp.path().join("site")));
    }

    #[test]
    fn test_load_explicit_invalid_is_error() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("custom.toml");
        std::fs::write(&config_path, "variants = [\"heatmap\"]").expect("write config");

        let err = DashConfig::load_explicit(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_explicit_missing_is_error() {
        let temp = TempDir::new().expect("temp dir");
        assert!(DashConfig::load_explicit(&temp.path().join("nope.toml")).is_err());
    }

    #[test]
    fn test_load_empty_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join(DEFAULT_CONFIG_FILE);
        std::fs::File::create(&config_path).expect("create empty config");

        let config = DashConfig::load(temp.path());
        assert!(config.data.is_none());
    }
}
