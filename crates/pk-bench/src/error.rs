//! Error types for pk-bench.

use thiserror::Error;

use pk_graph::GraphError;

/// Errors from running or exporting benchmarks.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Alias for `Result<T, BenchError>`.
pub type BenchResult<T> = Result<T, BenchError>;
