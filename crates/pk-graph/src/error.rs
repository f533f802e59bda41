//! Graph error type.

use thiserror::Error;

use pk_core::SpotId;

/// Errors produced by `pk-graph`.
///
/// An unreachable destination is not an error: searches report it as an
/// empty [`Route`](crate::Route).
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("spot {0} not found in lot graph")]
    UnknownSpot(SpotId),

    #[error("malformed lot graph: {0}")]
    MalformedGraph(String),

    #[error("unknown search strategy {0:?}")]
    UnknownStrategy(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
