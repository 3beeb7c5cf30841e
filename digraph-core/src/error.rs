//! Error types for digraph-core.

use thiserror::Error;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Failure conditions raised by the graph operations.
///
/// Endpoint checks always run before edge checks, so an operation naming an
/// absent vertex reports [`GraphError::VertexDoesNotExist`] even when no edge
/// exists either.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The named vertex is not a member of the graph.
    #[error("Vertex does not exist: {name:?}")]
    VertexDoesNotExist {
        /// Name that was looked up.
        name: String,
    },

    /// Both endpoints exist but no edge connects them in this direction.
    #[error("Edge does not exist: {from:?} -> {to:?}")]
    EdgeDoesNotExist {
        /// Source vertex name.
        from: String,
        /// Destination vertex name.
        to: String,
    },

    /// Both endpoints exist but no directed route connects them.
    #[error("Path does not exist: {from:?} -> {to:?}")]
    PathDoesNotExist {
        /// Source vertex name.
        from: String,
        /// Destination vertex name.
        to: String,
    },
}

/// Category of a [`GraphError`], without the offending names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    VertexDoesNotExist,
    EdgeDoesNotExist,
    PathDoesNotExist,
}

impl GraphError {
    pub(crate) fn vertex(name: &str) -> Self {
        GraphError::VertexDoesNotExist {
            name: name.to_string(),
        }
    }

    pub(crate) fn edge(from: &str, to: &str) -> Self {
        GraphError::EdgeDoesNotExist {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub(crate) fn path(from: &str, to: &str) -> Self {
        GraphError::PathDoesNotExist {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::VertexDoesNotExist { .. } => ErrorKind::VertexDoesNotExist,
            GraphError::EdgeDoesNotExist { .. } => ErrorKind::EdgeDoesNotExist,
            GraphError::PathDoesNotExist { .. } => ErrorKind::PathDoesNotExist,
        }
    }
}
