//! Single-source, single-destination shortest paths.
//!
//! Implemented once against [`Graph`], so it runs unmodified on every
//! backend (and on `dyn Graph`).
//!
//! # Algorithm
//!
//! Dijkstra with a lazy-deletion binary heap: relaxed vertices are pushed
//! again with their improved distance and stale heap entries are skipped
//! when popped. The search stops as soon as the destination is settled.
//!
//! # Tie-breaking
//!
//! Equal tentative distances are extracted in discovery order (the entry
//! pushed first wins), and out-edges are relaxed in edge insertion order.
//! A vertex's predecessor only changes on a strictly shorter route, so among
//! several equal-cost routes the first one discovered is reported.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::error::{GraphError, Result};
use crate::graph::{Distance, Graph};

/// A minimum-weight path and its total cost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortestPath {
    /// Vertex names from source to destination, both inclusive. Empty when
    /// source and destination coincide.
    pub vertices: Vec<String>,
    /// Sum of the edge weights along `vertices`.
    pub cost: Distance,
}

impl ShortestPath {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Heap entry. Field order gives the frontier ordering: distance first, then
/// discovery sequence.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    distance: Distance,
    discovered: u64,
    vertex: String,
}

/// Find the minimum-weight directed path from `from` to `to`.
///
/// # Errors
///
/// - [`GraphError::VertexDoesNotExist`] if either endpoint is absent.
/// - [`GraphError::PathDoesNotExist`] if both exist but `to` is unreachable.
///
/// `from == to` yields an empty path, never an error.
pub fn shortest_path<G: Graph + ?Sized>(graph: &G, from: &str, to: &str) -> Result<Vec<String>> {
    dijkstra(graph, from, to).map(|path| path.vertices)
}

/// Find the minimum-weight directed path from `from` to `to` and its cost.
///
/// Same contract as [`shortest_path`]; the trivial `from == to` case has
/// cost 0.
pub fn dijkstra<G: Graph + ?Sized>(graph: &G, from: &str, to: &str) -> Result<ShortestPath> {
    if !graph.contains_vertex(from) {
        return Err(GraphError::vertex(from));
    }
    if !graph.contains_vertex(to) {
        return Err(GraphError::vertex(to));
    }
    if from == to {
        return Ok(ShortestPath::default());
    }

    tracing::debug!(from, to, vertices = graph.vertex_count(), "shortest path search");

    // Absent from `dist` means infinite distance.
    let mut dist: HashMap<String, Distance> = HashMap::with_capacity(graph.vertex_count());
    let mut prev: HashMap<String, String> = HashMap::new();
    let mut settled: HashSet<String> = HashSet::new();
    let mut frontier = BinaryHeap::new();
    let mut discovered: u64 = 0;

    dist.insert(from.to_string(), 0);
    frontier.push(Reverse(FrontierEntry {
        distance: 0,
        discovered,
        vertex: from.to_string(),
    }));

    while let Some(Reverse(entry)) = frontier.pop() {
        // Skip stale entries left behind by later relaxations.
        if !settled.insert(entry.vertex.clone()) {
            continue;
        }

        if entry.vertex == to {
            break;
        }

        for (neighbor, weight) in graph.output_edges(&entry.vertex)? {
            if settled.contains(&neighbor) {
                continue;
            }

            let candidate = entry.distance.saturating_add(Distance::from(weight));
            let improves = dist.get(&neighbor).map_or(true, |&known| candidate < known);
            if !improves {
                continue;
            }

            tracing::trace!(
                vertex = %neighbor,
                via = %entry.vertex,
                distance = candidate,
                "relaxed"
            );

            discovered += 1;
            dist.insert(neighbor.clone(), candidate);
            prev.insert(neighbor.clone(), entry.vertex.clone());
            frontier.push(Reverse(FrontierEntry {
                distance: candidate,
                discovered,
                vertex: neighbor,
            }));
        }
    }

    let Some(&cost) = dist.get(to) else {
        tracing::debug!(from, to, settled = settled.len(), "no path");
        return Err(GraphError::path(from, to));
    };

    let vertices = reconstruct_path(&prev, to);
    tracing::debug!(from, to, cost, hops = vertices.len() - 1, "shortest path found");

    Ok(ShortestPath { vertices, cost })
}

/// Walk the predecessor chain from `to` back to the source.
fn reconstruct_path(prev: &HashMap<String, String>, to: &str) -> Vec<String> {
    let mut path = vec![to.to_string()];
    let mut current = to;

    while let Some(parent) = prev.get(current) {
        path.push(parent.clone());
        current = parent;
    }

    path.reverse();
    path
}
