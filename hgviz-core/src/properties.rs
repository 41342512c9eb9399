//! Summary projections for display: node/edge listings and table rows.

use crate::hypergraph::SetSystem;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphProperties {
    pub nodes: Vec<String>,
    pub edges: Vec<String>,
}

impl GraphProperties {
    pub fn of<S: SetSystem + ?Sized>(system: &S) -> Self {
        Self {
            nodes: system.members().into_iter().collect(),
            edges: system.keys(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// One display row: a set name and its members joined by ", ".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub key: String,
    pub members: String,
}

pub fn table_rows<S: SetSystem + ?Sized>(system: &S) -> Vec<TableRow> {
    system
        .snapshot()
        .into_iter()
        .map(|(key, set)| TableRow {
            key,
            members: set.into_iter().collect::<Vec<_>>().join(", "),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DualHypergraph, HypergraphStore};
    use std::collections::BTreeSet;

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn store() -> HypergraphStore {
        let mut s = HypergraphStore::new();
        s.add("e2", set(&["c", "b"])).unwrap();
        s.add("e1", set(&["b", "a"])).unwrap();
        s
    }

    #[test]
    fn properties_of_hypergraph() {
        let p = GraphProperties::of(&store());
        assert_eq!(p.nodes, vec!["a", "b", "c"]);
        assert_eq!(p.edges, vec!["e1", "e2"]);
        assert_eq!((p.node_count(), p.edge_count()), (3, 2));
    }

    #[test]
    fn properties_of_dual_swap_counts() {
        let p = GraphProperties::of(&DualHypergraph::of(&store()));
        assert_eq!(p.edges, vec!["a", "b", "c"]);
        assert_eq!(p.nodes, vec!["e1", "e2"]);
    }

    #[test]
    fn rows_are_sorted_and_joined() {
        let rows = table_rows(&DualHypergraph::of(&store()));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], TableRow { key: "b".into(), members: "e1, e2".into() });
    }

    #[test]
    fn empty_store_projects_to_nothing() {
        let s = HypergraphStore::new();
        assert_eq!(GraphProperties::of(&s), GraphProperties::default());
        assert!(table_rows(&s).is_empty());
    }
}
