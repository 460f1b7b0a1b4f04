use thiserror::Error;

use crate::topology::VertexId;

/// Top-level error type for the meshtag crate.
#[derive(Debug, Error)]
pub enum MeshTagError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to mesh connectivity and boundary walks.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("boundary walk consumed {walked} edges but left {remaining} unreachable")]
    IncompleteLoop { walked: usize, remaining: usize },

    #[error("boundary walk from vertex {start} ended at vertex {end} without closing")]
    OpenLoop { start: VertexId, end: VertexId },
}

/// Errors raised when an operation's preconditions are not met.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    #[error("duplicate entry: {0}")]
    Duplicate(String),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("tessellation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`MeshTagError`].
pub type Result<T> = std::result::Result<T, MeshTagError>;
