//! Graph-subsystem error type.

use thiserror::Error;

use rg_core::RgError;

/// Errors produced by `rg-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Core(#[from] RgError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
