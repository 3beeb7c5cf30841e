//! Graph construction settings.
//!
//! The core never reads files or the environment. Callers that keep settings
//! in TOML hand the text to [`GraphConfig::from_toml_str`]; everyone else
//! builds a [`GraphConfig`] directly. Every field is optional.
//!
//! # Example Configuration
//!
//! ```toml
//! [graph]
//! backend = "sparse"   # matrix (alias: dense), sparse, hash
//! capacity = 1024      # expected number of vertices
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::backends::Backend;
use crate::graph::Graph;

/// Errors raised while reading graph settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The settings text is not valid TOML or has the wrong shape.
    #[error("Invalid graph configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The backend name matches none of the known backends.
    #[error("Unknown backend: {0:?} (expected matrix, sparse or hash)")]
    UnknownBackend(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphConfig {
    #[serde(default)]
    pub graph: GraphSection,
}

/// The `[graph]` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphSection {
    /// Storage backend. Default: `hash`.
    #[serde(default)]
    pub backend: Backend,

    /// Expected number of vertices, used to pre-size storage.
    ///
    /// Default: no hint.
    #[serde(default)]
    pub capacity: Option<usize>,
}

impl GraphConfig {
    /// Configuration selecting `backend` with no capacity hint.
    pub fn with_backend(backend: Backend) -> Self {
        GraphConfig {
            graph: GraphSection {
                backend,
                capacity: None,
            },
        }
    }

    /// Parse settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn backend(&self) -> Backend {
        self.graph.backend
    }

    pub fn capacity(&self) -> Option<usize> {
        self.graph.capacity
    }

    /// Create an empty graph as configured.
    pub fn build(&self) -> Box<dyn Graph> {
        let backend = self.backend();
        tracing::debug!(%backend, capacity = ?self.capacity(), "building graph");
        backend.build_with_capacity(self.capacity().unwrap_or(0))
    }
}
