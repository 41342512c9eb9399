//! hgviz-load: everything that crosses the process boundary before the viewer starts
//!
//! - source: JSON hypergraph document -> hgviz-core store shape
//! - config: YAML viewer configuration with defaults
//! - error: load/config failure taxonomy

pub mod config;
pub mod error;
pub mod source;

// Re-exports
pub use config::{ViewerConfig, DEFAULT_CONFIG_FILE};
pub use error::{LoadError, LoadResult};
pub use source::{
    hyperedges_from_document, load_hyperedges, load_store_or_empty, parse_document, EdgeRecord,
    SourceDocument,
};
