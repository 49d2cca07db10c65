//! Benchmark setup error type.

use pathknn_core::{GraphError, KnnError};

use crate::source::SyntheticError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation was misconfigured.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Graph construction rejected the generated rows.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// Search configuration was rejected.
    #[error("search configuration failed: {0}")]
    Knn(#[from] KnnError),
}
