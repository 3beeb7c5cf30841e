//! digraph core - directed, weighted graphs with interchangeable storage.
//!
//! This crate provides a single graph contract, [`Graph`], with three storage
//! backends that behave identically and differ only in cost profile, plus a
//! Dijkstra shortest-path search written once against the contract.
//!
//! # Features
//!
//! - **Dense matrix**: [`MatrixGraph`], constant-time edge lookup
//! - **Sparse adjacency lists**: [`SparseGraph`], memory proportional to edges
//! - **Hash index**: [`HashGraph`], hashed lookup over an ordered edge log
//! - **Shortest paths**: [`shortest_path`] / [`dijkstra`] on any backend
//! - **Insertion order**: neighbor and edge listings follow the order edges
//!   were added, on every backend
//!
//! # Usage
//!
//! ```rust
//! use digraph_core::{Graph, HashGraph};
//!
//! let mut graph = HashGraph::new();
//! for city in ["Dnepr", "Kiev", "Kremenchug"] {
//!     graph.add_vertex(city);
//! }
//! graph.add_edge("Dnepr", "Kiev", 453)?;
//! graph.add_edge("Dnepr", "Kremenchug", 161)?;
//! graph.add_edge("Kremenchug", "Kiev", 291)?;
//!
//! let path = graph.shortest_path("Dnepr", "Kiev")?;
//! assert_eq!(path, ["Dnepr", "Kremenchug", "Kiev"]);
//! # Ok::<(), digraph_core::GraphError>(())
//! ```
//!
//! The backend can also be picked at runtime through [`Backend`] or
//! [`GraphConfig`], both of which hand back a `Box<dyn Graph>`.

#![warn(clippy::all)]

pub mod backends;
pub mod config;
pub mod error;
pub mod graph;
pub mod path;

pub use backends::{Backend, HashGraph, MatrixGraph, SparseGraph};
pub use config::{ConfigError, GraphConfig};
pub use error::{ErrorKind, GraphError, Result};
pub use graph::{Distance, Edge, Graph, Weight};
pub use path::{dijkstra, shortest_path, ShortestPath};
