//! Session-owned hypergraph: edge name -> node set, mutated by the viewer.
//!
//! Semantics:
//! - a failed mutation leaves the store exactly as it was
//! - snapshot() hands out a copy; derived views never alias the live map

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::hypergraph::{EdgeName, Hyperedges, NodeId, SetSystem};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HypergraphStore {
    edges: Hyperedges,
}

impl HypergraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt an already-validated mapping (loader output).
    pub fn from_hyperedges(edges: Hyperedges) -> Self {
        debug!(edges = edges.len(), "store initialised");
        Self { edges }
    }

    /// Insert a new edge. Fails if the name is blank or already taken.
    pub fn add(&mut self, name: impl Into<EdgeName>, nodes: BTreeSet<NodeId>) -> StoreResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StoreError::EmptyEdgeName);
        }
        if self.edges.contains_key(&name) {
            return Err(StoreError::DuplicateEdge(name));
        }
        debug!(edge = %name, nodes = nodes.len(), "add edge");
        self.edges.insert(name, nodes);
        Ok(())
    }

    /// Replace the node set of an existing edge.
    ///
    /// An empty `nodes` is accepted; keeping edges non-vacuous is up to the caller.
    pub fn edit(&mut self, name: &str, nodes: BTreeSet<NodeId>) -> StoreResult<()> {
        let slot = self
            .edges
            .get_mut(name)
            .ok_or_else(|| StoreError::UnknownEdge(name.to_string()))?;
        debug!(edge = %name, nodes = nodes.len(), "edit edge");
        *slot = nodes;
        Ok(())
    }

    /// Remove an edge, returning the nodes it used to connect.
    pub fn delete(&mut self, name: &str) -> StoreResult<BTreeSet<NodeId>> {
        let removed = self
            .edges
            .remove(name)
            .ok_or_else(|| StoreError::UnknownEdge(name.to_string()))?;
        debug!(edge = %name, "delete edge");
        Ok(removed)
    }

    pub fn snapshot(&self) -> Hyperedges {
        self.edges.clone()
    }

    pub fn get(&self, name: &str) -> Option<&BTreeSet<NodeId>> {
        self.edges.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.edges.contains_key(name)
    }

    pub fn edge_names(&self) -> impl Iterator<Item = &EdgeName> {
        self.edges.keys()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl SetSystem for HypergraphStore {
    fn snapshot(&self) -> Hyperedges {
        HypergraphStore::snapshot(self)
    }
}
