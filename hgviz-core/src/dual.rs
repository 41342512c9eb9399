//! Dual hypergraph: nodes and edges swap roles.
//!
//! The dual is always derived from a snapshot and never cached, so it cannot
//! go stale against the store it came from.

use crate::hypergraph::{DualMapping, Hyperedges, SetSystem};

/// Invert an edge -> nodes mapping into node -> edges.
///
/// Runs in O(total incidences). A node appears as a key only if at least one
/// edge contains it, so edges with empty node sets contribute nothing.
pub fn compute_dual(hyperedges: &Hyperedges) -> DualMapping {
    let mut dual = DualMapping::new();
    for (edge, nodes) in hyperedges {
        for node in nodes {
            dual.entry(node.clone()).or_default().insert(edge.clone());
        }
    }
    dual
}

/// A computed dual, usable wherever a [`SetSystem`] is expected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DualHypergraph {
    incidences: DualMapping,
}

impl DualHypergraph {
    /// Build the dual of `source` from a fresh snapshot.
    pub fn of<S: SetSystem + ?Sized>(source: &S) -> Self {
        Self {
            incidences: compute_dual(&source.snapshot()),
        }
    }

    /// Node -> incident edges.
    pub fn mapping(&self) -> &DualMapping {
        &self.incidences
    }

    pub fn is_empty(&self) -> bool {
        self.incidences.is_empty()
    }
}

impl SetSystem for DualHypergraph {
    fn snapshot(&self) -> DualMapping {
        self.incidences.clone()
    }
}
