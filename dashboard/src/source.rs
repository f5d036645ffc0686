//! Data providers.
//!
//! Components never reach for literals themselves; a [`MetricsSource`]
//! hands them a [`DashboardData`] so live data can replace the demo set.

use crate::demo;
use crate::error::DataError;
use crate::types::DashboardData;
use std::path::{Path, PathBuf};

/// Something that can produce dashboard data.
pub trait MetricsSource {
    /// Load and validate a data set.
    fn load(&self) -> Result<DashboardData, DataError>;
}

/// The built-in demo literals.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoSource;

impl MetricsSource for DemoSource {
    fn load(&self) -> Result<DashboardData, DataError> {
        let data = demo::demo_data();
        data.validate()?;
        Ok(data)
    }
}

/// A JSON document on disk.
#[derive(Clone, Debug)]
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    /// Source backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path the data is read from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MetricsSource for JsonSource {
    fn load(&self) -> Result<DashboardData, DataError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| DataError::Io {
            path: self.path.clone(),
            source,
        })?;
        let data = DashboardData::from_json_str(&raw)?;
        data.validate()?;
        tracing::debug!(
            path = %self.path.display(),
            tiles = data.tiles.len(),
            gauges = data.gauges.len(),
            "loaded dashboard data"
        );
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn demo_source_loads() {
        let data = DemoSource.load().unwrap();
        assert_eq!(data.title, "SRE Uptime Dashboard");
        assert_eq!(data.tiles.len(), 9);
        assert_eq!(data.gauges.len(), 7);
    }

    #[test]
    fn json_source_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "title": "Edge fleet", "tiles": [{{ "name": "edge-1", "value": 99.99, "span_cols": 3 }}] }}"#
        )
        .unwrap();

        let data = JsonSource::new(file.path()).load().unwrap();
        assert_eq!(data.title, "Edge fleet");
        assert_eq!(data.tiles.len(), 1);
        assert_eq!(data.tiles[0].span_cols.get(), 3);
    }

    #[test]
    fn json_source_missing_file() {
        let err = JsonSource::new("/definitely/not/here.json").load().unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn json_source_rejects_bad_breakdown() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "coverage": {{ "features": 10, "categories": [{{ "label": "a", "count": 4, "percent": 100.0 }}] }} }}"#
        )
        .unwrap();

        let err = JsonSource::new(file.path()).load().unwrap_err();
        assert!(matches!(err, DataError::CategoryCountMismatch { expected: 10, actual: 4 }));
    }
}
