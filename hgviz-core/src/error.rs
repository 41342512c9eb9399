use thiserror::Error;

/// Contract violations raised by [`crate::HypergraphStore`] mutations.
///
/// All of them are recoverable: the store is left untouched and the caller
/// decides how to surface the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("edge '{0}' already exists")]
    DuplicateEdge(String),

    #[error("edge '{0}' does not exist")]
    UnknownEdge(String),

    #[error("edge name must not be empty")]
    EmptyEdgeName,
}

pub type StoreResult<T, E = StoreError> = core::result::Result<T, E>;
