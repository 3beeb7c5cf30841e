//! The graph capability contract shared by every storage backend.
//!
//! Every backend in [`crate::backends`] implements [`Graph`] with identical
//! observable behavior. Callers, and the shortest-path routine in
//! [`crate::path`], depend only on this trait, so any backend can be swapped
//! for another without changing results.
//!
//! # Ordering
//!
//! Operations returning sequences report them in insertion order:
//! vertex listings in the order vertices were added, neighbor and edge
//! listings in the order edges were added. Backends that store data in hashed
//! or positional structures keep a separate insertion sequence to honor this.

use crate::error::Result;
use crate::path::{self, ShortestPath};

/// Edge weight. Weights are non-negative by construction.
pub type Weight = u32;

/// Accumulated path cost. Wider than [`Weight`] so long paths don't overflow.
pub type Distance = u64;

/// A directed, weighted edge as reported by [`Graph::edge_list`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: Weight) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// A directed, weighted graph keyed by vertex name.
///
/// Vertex names are opaque strings (the empty string included). At most one
/// edge exists per ordered pair of vertices; self-loops are allowed.
///
/// Fallible operations check every named endpoint before looking at edges
/// and fail without mutating anything.
pub trait Graph {
    /// Insert a vertex. Adding an existing name is a no-op.
    fn add_vertex(&mut self, name: &str);

    /// Remove a vertex together with every edge entering or leaving it.
    fn del_vertex(&mut self, name: &str) -> Result<()>;

    /// Insert the edge `from -> to`.
    ///
    /// If the edge already exists this is a no-op: the stored weight is kept
    /// and the edge count does not change. Use [`Graph::set_edge`] to change
    /// the weight of an existing edge.
    fn add_edge(&mut self, from: &str, to: &str, weight: Weight) -> Result<()>;

    /// Weight of the edge `from -> to`.
    fn get_edge(&self, from: &str, to: &str) -> Result<Weight>;

    /// Overwrite the weight of the existing edge `from -> to`.
    fn set_edge(&mut self, from: &str, to: &str, weight: Weight) -> Result<()>;

    /// Remove the edge `from -> to`, returning the weight it held.
    fn del_edge(&mut self, from: &str, to: &str) -> Result<Weight>;

    /// Number of edges terminating at `name`.
    fn input_edge_count(&self, name: &str) -> Result<usize>;

    /// Number of edges originating from `name`.
    fn output_edge_count(&self, name: &str) -> Result<usize>;

    /// Sources of the edges entering `name`, in edge insertion order.
    fn input_vertex_names(&self, name: &str) -> Result<Vec<String>>;

    /// Destinations of the edges leaving `name`, in edge insertion order.
    fn output_vertex_names(&self, name: &str) -> Result<Vec<String>>;

    /// Destinations and weights of the edges leaving `name`, in edge
    /// insertion order.
    fn output_edges(&self, name: &str) -> Result<Vec<(String, Weight)>>;

    /// Number of vertices currently in the graph.
    fn vertex_count(&self) -> usize;

    /// Number of edges currently in the graph.
    fn edge_count(&self) -> usize;

    /// Check if a vertex exists in the graph.
    fn contains_vertex(&self, name: &str) -> bool;

    /// All vertex names, in vertex insertion order.
    fn vertex_names(&self) -> Vec<String>;

    /// All edges, in edge insertion order.
    fn edge_list(&self) -> Vec<Edge>;

    /// Check if the edge `from -> to` exists. Absent endpoints yield `false`.
    fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.get_edge(from, to).is_ok()
    }

    /// Minimum-weight directed path from `from` to `to`, both inclusive.
    ///
    /// Returns an empty path when `from == to`. See [`path::shortest_path`].
    fn shortest_path(&self, from: &str, to: &str) -> Result<Vec<String>> {
        path::shortest_path(self, from, to)
    }

    /// Like [`Graph::shortest_path`], also reporting the total cost.
    fn shortest_path_with_cost(&self, from: &str, to: &str) -> Result<ShortestPath> {
        path::dijkstra(self, from, to)
    }
}
