//! Engine error type.
//!
//! Sub-crates may define their own error enums and convert them into `RgError`
//! via `From` impls, or keep them separate and wrap `RgError` as one variant.
//! Both patterns are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::NodeId;

/// The top-level error type for `rg-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RgError {
    /// A way (or an adjacency entry derived from one) references a node id
    /// absent from the coordinate store.  Always fatal: skipping the node
    /// would silently corrupt degree counts and road lengths downstream.
    #[error("node {0} not found in coordinate store")]
    NodeNotFound(NodeId),

    #[error("district {0:?} not found")]
    DistrictNotFound(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `rg-*` crates.
pub type RgResult<T> = Result<T, RgError>;
