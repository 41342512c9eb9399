// Session state for one viewer run: the store it owns and how it was loaded.

use std::path::{Path, PathBuf};

use hgviz_core::{DualHypergraph, HypergraphStore, StoreResult};
use hgviz_load::load_store_or_empty;
use tracing::info;

use crate::input::EditRequest;

pub struct Session {
    store: HypergraphStore,
    source: Option<PathBuf>,
    load_error: Option<String>,
}

impl Session {
    pub fn new(store: HypergraphStore) -> Self {
        Self { store, source: None, load_error: None }
    }

    /// Open a session from a source document; failures leave an empty store
    /// and are kept for display.
    pub fn open(source: Option<&Path>) -> Self {
        match source {
            Some(path) => {
                let (store, err) = load_store_or_empty(path);
                Self {
                    store,
                    source: Some(path.to_path_buf()),
                    load_error: err.map(|e| e.to_string()),
                }
            }
            None => Self::new(HypergraphStore::new()),
        }
    }

    pub fn store(&self) -> &HypergraphStore {
        &self.store
    }

    /// Recomputed from the current store on every call.
    pub fn dual(&self) -> DualHypergraph {
        DualHypergraph::of(&self.store)
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Edge names in display order.
    pub fn edge_names(&self) -> Vec<String> {
        self.store.edge_names().cloned().collect()
    }

    /// Apply a mutation and describe the outcome for the status line.
    pub fn apply(&mut self, request: EditRequest) -> StoreResult<String> {
        let message = match request {
            EditRequest::Add { edge, nodes } => {
                let listed = join(&nodes);
                self.store.add(edge.clone(), nodes)?;
                format!("Hyperedge '{}' added with nodes {{{}}}", edge, listed)
            }
            EditRequest::Edit { edge, nodes } => {
                let listed = join(&nodes);
                self.store.edit(&edge, nodes)?;
                format!("Hyperedge '{}' updated with nodes {{{}}}", edge, listed)
            }
            EditRequest::Delete { edge } => {
                self.store.delete(&edge)?;
                format!("Hyperedge '{}' deleted", edge)
            }
        };
        info!("{}", message);
        Ok(message)
    }
}

fn join<'a>(nodes: impl IntoIterator<Item = &'a String>) -> String {
    nodes.into_iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hgviz_core::StoreError;
    use std::collections::BTreeSet;
    use std::io::Write;

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn open_without_source_is_empty() {
        let session = Session::open(None);
        assert!(session.store().is_empty());
        assert!(session.load_error().is_none());
        assert!(session.source().is_none());
    }

    #[test]
    fn open_missing_source_keeps_error() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::open(Some(&dir.path().join("missing.json")));
        assert!(session.store().is_empty());
        assert!(session.load_error().unwrap().contains("not found"));
    }

    #[test]
    fn open_reads_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"g": [{"name": "e1", "head_hyper_nodes": ["a"], "tail_hyper_nodes": ["b"]}]}"#)
            .unwrap();
        let session = Session::open(Some(file.path()));
        assert_eq!(session.edge_names(), vec!["e1"]);
        assert_eq!(session.dual().mapping()["b"], set(&["e1"]));
    }

    #[test]
    fn apply_reports_outcome() {
        let mut session = Session::new(HypergraphStore::new());
        let msg = session
            .apply(EditRequest::Add { edge: "e1".into(), nodes: set(&["b", "a"]) })
            .unwrap();
        assert_eq!(msg, "Hyperedge 'e1' added with nodes {a, b}");

        let err = session
            .apply(EditRequest::Add { edge: "e1".into(), nodes: set(&["c"]) })
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateEdge("e1".into()));

        session.apply(EditRequest::Edit { edge: "e1".into(), nodes: set(&["c"]) }).unwrap();
        assert_eq!(session.dual().mapping().keys().collect::<Vec<_>>(), vec!["c"]);

        session.apply(EditRequest::Delete { edge: "e1".into() }).unwrap();
        assert!(session.dual().is_empty());
        assert!(session.apply(EditRequest::Delete { edge: "e1".into() }).is_err());
    }
}
