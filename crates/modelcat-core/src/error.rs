//! Core error types.

use thiserror::Error;

/// Catalog and navigator errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A forest must contain at least one root.
    #[error("catalog forest has no root nodes")]
    EmptyForest,

    /// A node was constructed with a blank id.
    #[error("node '{0}' has an empty id")]
    EmptyId(String),

    /// Two nodes share an id.
    #[error("duplicate node id: {0}")]
    DuplicateId(String),

    /// A checked-out model does not name its owner.
    #[error("model {0} is checked out but has no checkout owner")]
    MissingCheckoutOwner(String),

    /// Lookup by id failed.
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// JSON encoding or decoding error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error while reading a catalog file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
