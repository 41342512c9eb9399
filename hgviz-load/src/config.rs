//! Viewer configuration (YAML).
//!
//! Every field has a default, so an empty file or no file at all is valid.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{LoadError, LoadResult};

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "hgviz.yaml";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Hypergraph source document. None starts an empty session.
    pub source: Option<PathBuf>,
    pub log_file: PathBuf,
    /// One of trace, debug, info, warn, error.
    pub log_level: String,
    /// UI redraw interval.
    pub tick_rate_ms: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            source: None,
            log_file: PathBuf::from("hgviz.log"),
            log_level: "info".to_string(),
            tick_rate_ms: 250,
        }
    }
}

impl ViewerConfig {
    pub fn from_yaml(text: &str, path: &Path) -> LoadResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|source| LoadError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read an explicitly requested config file; it must exist.
    pub fn load(path: &Path) -> LoadResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| LoadError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&text, path)?;
        debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    /// Like [`ViewerConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> LoadResult<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_yaml(&text, path),
            Err(source) if source.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(LoadError::ConfigRead { path: path.to_path_buf(), source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_text_gives_defaults() {
        let config = ViewerConfig::from_yaml("", Path::new("x.yaml")).unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config =
            ViewerConfig::from_yaml("source: data/simple.json\nlog_level: debug\n", Path::new("x.yaml"))
                .unwrap();
        assert_eq!(config.source, Some(PathBuf::from("data/simple.json")));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.log_file, PathBuf::from("hgviz.log"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = ViewerConfig::from_yaml("db_path: /tmp/db\n", Path::new("x.yaml")).unwrap_err();
        assert!(matches!(err, LoadError::ConfigParse { .. }));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ViewerConfig::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, LoadError::ConfigRead { .. }));
    }

    #[test]
    fn default_missing_file_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let config = ViewerConfig::load_or_default(&dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tick_rate_ms: 100").unwrap();
        let config = ViewerConfig::load(file.path()).unwrap();
        assert_eq!(config.tick_rate_ms, 100);
    }
}
