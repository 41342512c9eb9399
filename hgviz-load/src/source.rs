//! JSON source document -> store shape.
//!
//! Document layout: `{ "<group>": [ { "name": .., "head_hyper_nodes": [..], "tail_hyper_nodes": [..] }, .. ] }`.
//! Each record's node set is the union of its head and tail lists. Records
//! that end up with no nodes, or with a blank name, are dropped.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use hgviz_core::{Hyperedges, HypergraphStore};
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{LoadError, LoadResult};

/// One stored edge as it appears in the source. Extra fields are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EdgeRecord {
    pub name: String,
    #[serde(default)]
    pub head_hyper_nodes: Option<Vec<String>>,
    #[serde(default)]
    pub tail_hyper_nodes: Option<Vec<String>>,
}

impl EdgeRecord {
    /// Union of head and tail nodes.
    pub fn node_set(&self) -> BTreeSet<String> {
        self.head_hyper_nodes
            .iter()
            .chain(self.tail_hyper_nodes.iter())
            .flatten()
            .cloned()
            .collect()
    }
}

/// Grouping key -> records, in document order.
pub type SourceDocument = IndexMap<String, Vec<EdgeRecord>>;

/// Flatten a parsed document into edge name -> node set.
///
/// Groups and records are visited in document order; a repeated name keeps
/// the last record seen.
pub fn hyperedges_from_document(doc: SourceDocument) -> Hyperedges {
    let mut edges = Hyperedges::new();
    for (group, records) in doc {
        for record in records {
            if record.name.trim().is_empty() {
                warn!(group = %group, "skipping record with blank name");
                continue;
            }
            let nodes = record.node_set();
            if nodes.is_empty() {
                debug!(group = %group, edge = %record.name, "skipping edge without nodes");
                continue;
            }
            if edges.insert(record.name.clone(), nodes).is_some() {
                warn!(group = %group, edge = %record.name, "duplicate edge name, keeping the later record");
            }
        }
    }
    edges
}

/// Parse document text. `origin` names the input in error messages.
pub fn parse_document(text: &str, origin: &str) -> LoadResult<Hyperedges> {
    let doc: SourceDocument =
        serde_json::from_str(text).map_err(|source| LoadError::MalformedSource {
            origin: origin.to_string(),
            source,
        })?;
    Ok(hyperedges_from_document(doc))
}

pub fn load_hyperedges(path: &Path) -> LoadResult<Hyperedges> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::MissingSource { path: path.to_path_buf() },
        _ => LoadError::UnreadableSource { path: path.to_path_buf(), source },
    })?;
    let edges = parse_document(&text, &path.display().to_string())?;
    info!(path = %path.display(), edges = edges.len(), "loaded hypergraph source");
    Ok(edges)
}

/// Load a store for a new session, falling back to an empty store.
///
/// The failure, if any, is handed back so the caller can show it.
pub fn load_store_or_empty(path: &Path) -> (HypergraphStore, Option<LoadError>) {
    match load_hyperedges(path) {
        Ok(edges) => (HypergraphStore::from_hyperedges(edges), None),
        Err(err) => {
            warn!(error = %err, "starting with an empty hypergraph");
            (HypergraphStore::new(), Some(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    const SAMPLE: &str = r#"{
        "simple": [
            { "id": "test_edge_1", "name": "e1", "traversable": true,
              "head_hyper_nodes": ["v1", "v2"], "tail_hyper_nodes": ["v3"] },
            { "name": "e2", "head_hyper_nodes": ["v4", "v5"], "tail_hyper_nodes": null },
            { "name": "e3", "head_hyper_nodes": [], "tail_hyper_nodes": [] }
        ],
        "extra": [
            { "name": "e4", "tail_hyper_nodes": ["v5", "v6", "v5"] },
            { "name": "e5" }
        ]
    }"#;

    #[test]
    fn merges_head_and_tail() {
        let edges = parse_document(SAMPLE, "sample").unwrap();
        assert_eq!(edges["e1"], set(&["v1", "v2", "v3"]));
        assert_eq!(edges["e2"], set(&["v4", "v5"]));
        assert_eq!(edges["e4"], set(&["v5", "v6"]));
    }

    #[test]
    fn drops_edges_without_nodes() {
        let edges = parse_document(SAMPLE, "sample").unwrap();
        assert!(!edges.contains_key("e3"));
        assert!(!edges.contains_key("e5"));
        assert_eq!(edges.len(), 3);
    }

    #[test]
    fn drops_blank_names() {
        let edges = parse_document(r#"{"g": [{"name": " ", "head_hyper_nodes": ["a"]}]}"#, "t").unwrap();
        assert!(edges.is_empty());
    }

    #[test]
    fn later_record_wins_on_duplicate_name() {
        let text = r#"{
            "b": [{"name": "e1", "head_hyper_nodes": ["first"]}],
            "a": [{"name": "e1", "head_hyper_nodes": ["second"]}]
        }"#;
        let edges = parse_document(text, "dup").unwrap();
        assert_eq!(edges["e1"], set(&["second"]));
    }

    #[test]
    fn bundled_sample_loads() {
        let edges = parse_document(include_str!("../../data/simple.json"), "data/simple.json").unwrap();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges["e4"], set(&["v1", "v5", "v8"]));
    }

    #[test]
    fn empty_document_is_empty() {
        assert!(parse_document("{}", "empty").unwrap().is_empty());
    }

    #[test]
    fn malformed_document_is_reported() {
        for text in ["{", "[]", r#"{"g": {"name": "e1"}}"#, r#"{"g": [{"head_hyper_nodes": ["a"]}]}"#] {
            let err = parse_document(text, "bad").unwrap_err();
            assert!(matches!(err, LoadError::MalformedSource { .. }), "{text}");
        }
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let (store, err) = load_store_or_empty(file.path());
        assert!(err.is_none());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn missing_file_falls_back_to_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let (store, err) = load_store_or_empty(&dir.path().join("absent.json"));
        assert!(store.is_empty());
        assert!(matches!(err, Some(LoadError::MissingSource { .. })));
    }

    #[test]
    fn malformed_file_falls_back_to_empty_store() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        let (store, err) = load_store_or_empty(file.path());
        assert!(store.is_empty());
        assert!(matches!(err, Some(LoadError::MalformedSource { .. })));
    }
}
