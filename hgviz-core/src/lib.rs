//! hgviz-core: in-memory hypergraph store and its dual transform
//!
//! Contents:
//! - HypergraphStore: edge name -> node set, with add/edit/delete
//! - compute_dual / DualHypergraph: node -> set of edges containing it
//! - SetSystem: one read-only view shared by a hypergraph and its dual
//! - Projections used by the viewer (properties, table rows, incidence matrix)
//!
//! Nothing here performs I/O; loading lives in hgviz-load.

pub mod error;
pub mod hypergraph;
pub mod store;
pub mod dual;
pub mod incidence;
pub mod properties;

// Re-exports
pub use error::{StoreError, StoreResult};
pub use hypergraph::{DualMapping, EdgeName, Hyperedges, NodeId, SetSystem};
pub use store::HypergraphStore;
pub use dual::{compute_dual, DualHypergraph};
pub use incidence::IncidenceMatrix;
pub use properties::{table_rows, GraphProperties, TableRow};
