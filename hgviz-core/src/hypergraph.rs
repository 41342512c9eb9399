//! Hypergraph data shape: a keyed family of string sets.

use std::collections::{BTreeMap, BTreeSet};

pub type EdgeName = String;
pub type NodeId = String;

/// Edge name -> nodes it connects.
pub type Hyperedges = BTreeMap<EdgeName, BTreeSet<NodeId>>;

/// Node -> edges that contain it.
pub type DualMapping = BTreeMap<NodeId, BTreeSet<EdgeName>>;

/// Read-only view over any keyed family of sets.
///
/// A hypergraph exposes edge -> nodes; its dual exposes node -> edges. The
/// viewer renders both through this one interface.
pub trait SetSystem {
    /// Copy of the family, keyed by set name.
    fn snapshot(&self) -> BTreeMap<String, BTreeSet<String>>;

    /// Set names, sorted.
    fn keys(&self) -> Vec<String> {
        self.snapshot().into_keys().collect()
    }

    /// Union of all sets, sorted.
    fn members(&self) -> BTreeSet<String> {
        self.snapshot().into_values().flatten().collect()
    }
}

impl SetSystem for BTreeMap<String, BTreeSet<String>> {
    fn snapshot(&self) -> BTreeMap<String, BTreeSet<String>> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Hyperedges {
        let mut h = Hyperedges::new();
        h.insert("e2".into(), ["c", "b"].iter().map(|s| s.to_string()).collect());
        h.insert("e1".into(), ["a", "b"].iter().map(|s| s.to_string()).collect());
        h
    }

    #[test]
    fn keys_are_sorted() {
        assert_eq!(SetSystem::keys(&sample()), vec!["e1".to_string(), "e2".to_string()]);
    }

    #[test]
    fn members_are_deduplicated() {
        let members: Vec<String> = SetSystem::members(&sample()).into_iter().collect();
        assert_eq!(members, vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_family_has_no_members() {
        let h = Hyperedges::new();
        assert!(SetSystem::keys(&h).is_empty());
        assert!(SetSystem::members(&h).is_empty());
    }
}
