use std::path::PathBuf;

use thiserror::Error;

/// Failures reading the hypergraph source document or the viewer config.
///
/// Source failures are never fatal: the session falls back to an empty store
/// and shows the message. Config failures abort start-up.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("source document not found at {}", path.display())]
    MissingSource { path: PathBuf },

    #[error("failed to read source document {}: {source}", path.display())]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed source document ({origin}): {source}")]
    MalformedSource {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type LoadResult<T, E = LoadError> = core::result::Result<T, E>;
