//! Viewer settings loaded from a TOML file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Which camera implementation to open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// The physical device, available with the `hardware` feature.
    #[default]
    K4a,
    /// The synthetic camera, always available.
    Sim,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub backend: Backend,
    /// Near bound of the depth display range in mm.
    pub min_depth_mm: u16,
    /// Far bound of the depth display range in mm.
    pub max_depth_mm: u16,
    /// Scale factor applied to window sizes.
    pub window_scale: f32,
    /// Sleep between loop iterations in ms.
    pub poll_wait_ms: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            min_depth_mm: 600,
            max_depth_mm: 3000,
            window_scale: 0.5,
            poll_wait_ms: 10,
        }
    }
}

impl ViewerConfig {
    /// Reads the config from `path`. A missing file is not an error and
    /// yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(Error::ConfigRead {
                    path: path.to_owned(),
                    source,
                });
            }
        };
        toml::from_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_owned(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.backend, Backend::K4a);
        assert_eq!(config.min_depth_mm, 600);
        assert_eq!(config.max_depth_mm, 3000);
        assert_eq!(config.window_scale, 0.5);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ViewerConfig::load(dir.path().join("viewer.toml")).unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn partial_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "backend = \"sim\"\nmax_depth_mm = 1500").unwrap();
        let config = ViewerConfig::load(file.path()).unwrap();
        assert_eq!(config.backend, Backend::Sim);
        assert_eq!(config.max_depth_mm, 1500);
        // untouched fields keep their defaults
        assert_eq!(config.min_depth_mm, 600);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "backend = \"betamax\"").unwrap();
        assert!(ViewerConfig::load(file.path()).is_err());
    }
}
