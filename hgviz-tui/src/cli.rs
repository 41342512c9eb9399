// Command-line arguments and their merge with the YAML config.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use hgviz_load::{ViewerConfig, DEFAULT_CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(name = "hgviz", version, about = "Interactive hypergraph viewer and editor")]
pub struct Cli {
    /// Hypergraph source document (JSON)
    #[arg(env = "HGVIZ_SOURCE")]
    pub source: Option<PathBuf>,

    /// Config file (YAML); defaults to ./hgviz.yaml when present
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log file path (the terminal is taken by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Resolve the effective config; flags win over file values.
    pub fn resolve(&self) -> Result<ViewerConfig> {
        let mut config = match &self.config {
            Some(path) => ViewerConfig::load(path)?,
            None => ViewerConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
        };
        if let Some(source) = &self.source {
            config.source = Some(source.clone());
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = log_file.clone();
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        Ok(config)
    }
}
