//! Storage backends implementing [`Graph`].
//!
//! - [`MatrixGraph`]: dense adjacency matrix, O(1) edge lookup, O(V²) memory
//! - [`SparseGraph`]: ordered map of adjacency lists, O(V + E) memory
//! - [`HashGraph`]: hash indexes over an ordered edge log, O(1) average lookup
//!
//! All three are observably identical; [`Backend`] selects one at runtime.

pub mod hash;
pub mod matrix;
pub mod sparse;

pub use hash::HashGraph;
pub use matrix::MatrixGraph;
pub use sparse::SparseGraph;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::config::ConfigError;
use crate::graph::Graph;

/// Identifies a storage backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// [`MatrixGraph`].
    #[serde(alias = "dense")]
    Matrix,
    /// [`SparseGraph`].
    Sparse,
    /// [`HashGraph`].
    #[default]
    Hash,
}

impl Backend {
    /// Every backend, for running the same workload against each.
    pub const ALL: [Backend; 3] = [Backend::Matrix, Backend::Sparse, Backend::Hash];

    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Matrix => "matrix",
            Backend::Sparse => "sparse",
            Backend::Hash => "hash",
        }
    }

    /// Create an empty graph of this kind.
    pub fn build(self) -> Box<dyn Graph> {
        self.build_with_capacity(0)
    }

    /// Create an empty graph of this kind, pre-sized for `capacity` vertices.
    pub fn build_with_capacity(self, capacity: usize) -> Box<dyn Graph> {
        match self {
            Backend::Matrix => Box::new(MatrixGraph::with_capacity(capacity)),
            Backend::Sparse => Box::new(SparseGraph::with_capacity(capacity)),
            Backend::Hash => Box::new(HashGraph::with_capacity(capacity)),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "matrix" | "dense" => Ok(Backend::Matrix),
            "sparse" => Ok(Backend::Sparse),
            "hash" => Ok(Backend::Hash),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}
