//! Sparse adjacency-list backend.
//!
//! An ordered map from vertex name to that vertex's adjacency: outgoing arcs
//! and incoming sources, each kept in the order the edges were added.
//! Memory is O(V + E); edge lookups scan the source's out-list.

use std::collections::BTreeMap;

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph, Weight};

#[derive(Debug, Clone)]
struct Link {
    to: String,
    weight: Weight,
    seq: u64,
}

#[derive(Debug, Clone, Default)]
struct Adjacency {
    seq: u64,
    outgoing: Vec<Link>,
    incoming: Vec<String>,
}

impl Adjacency {
    fn arc_position(&self, to: &str) -> Option<usize> {
        self.outgoing.iter().position(|arc| arc.to == to)
    }

    fn detach_incoming(&mut self, from: &str) {
        if let Some(pos) = self.incoming.iter().position(|src| src == from) {
            self.incoming.remove(pos);
        }
    }
}

/// Graph stored as a map of per-vertex adjacency lists.
#[derive(Debug, Default)]
pub struct SparseGraph {
    vertices: BTreeMap<String, Adjacency>,
    edge_count: usize,
    next_vertex_seq: u64,
    next_edge_seq: u64,
}

impl SparseGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// `BTreeMap` has no preallocation; the hint is accepted for parity with
    /// the other backends.
    pub fn with_capacity(_capacity: usize) -> Self {
        Self::default()
    }

    fn adjacency(&self, name: &str) -> Result<&Adjacency> {
        self.vertices.get(name).ok_or_else(|| GraphError::vertex(name))
    }

    fn adjacency_mut(&mut self, name: &str) -> Result<&mut Adjacency> {
        self.vertices
            .get_mut(name)
            .ok_or_else(|| GraphError::vertex(name))
    }

    /// Check both endpoints, then locate the arc `from -> to`.
    fn arc_position(&self, from: &str, to: &str) -> Result<usize> {
        let source = self.adjacency(from)?;
        self.adjacency(to)?;
        source.arc_position(to).ok_or_else(|| GraphError::edge(from, to))
    }
}

impl Graph for SparseGraph {
    fn add_vertex(&mut self, name: &str) {
        if self.vertices.contains_key(name) {
            return;
        }
        self.vertices.insert(
            name.to_string(),
            Adjacency {
                seq: self.next_vertex_seq,
                ..Adjacency::default()
            },
        );
        self.next_vertex_seq += 1;
    }

    fn del_vertex(&mut self, name: &str) -> Result<()> {
        let adjacency = self
            .vertices
            .remove(name)
            .ok_or_else(|| GraphError::vertex(name))?;

        let mut removed = adjacency.outgoing.len();
        for arc in &adjacency.outgoing {
            if let Some(target) = self.vertices.get_mut(&arc.to) {
                target.detach_incoming(name);
            }
        }
        for source in &adjacency.incoming {
            // The self-loop went away with the vertex's own out-list.
            if source == name {
                continue;
            }
            removed += 1;
            if let Some(adj) = self.vertices.get_mut(source) {
                if let Some(pos) = adj.arc_position(name) {
                    adj.outgoing.remove(pos);
                }
            }
        }

        self.edge_count -= removed;
        tracing::debug!(vertex = name, removed_edges = removed, "vertex removed");
        Ok(())
    }

    fn add_edge(&mut self, from: &str, to: &str, weight: Weight) -> Result<()> {
        let source = self.adjacency(from)?;
        self.adjacency(to)?;
        if source.arc_position(to).is_some() {
            tracing::trace!(from, to, "edge already present, keeping weight");
            return Ok(());
        }

        let seq = self.next_edge_seq;
        self.adjacency_mut(from)?.outgoing.push(Link {
            to: to.to_string(),
            weight,
            seq,
        });
        self.adjacency_mut(to)?.incoming.push(from.to_string());
        self.next_edge_seq += 1;
        self.edge_count += 1;
        Ok(())
    }

    fn get_edge(&self, from: &str, to: &str) -> Result<Weight> {
        let pos = self.arc_position(from, to)?;
        Ok(self.adjacency(from)?.outgoing[pos].weight)
    }

    fn set_edge(&mut self, from: &str, to: &str, weight: Weight) -> Result<()> {
        let pos = self.arc_position(from, to)?;
        self.adjacency_mut(from)?.outgoing[pos].weight = weight;
        Ok(())
    }

    fn del_edge(&mut self, from: &str, to: &str) -> Result<Weight> {
        let pos = self.arc_position(from, to)?;
        let arc = self.adjacency_mut(from)?.outgoing.remove(pos);
        self.adjacency_mut(to)?.detach_incoming(from);
        self.edge_count -= 1;
        Ok(arc.weight)
    }

    fn input_edge_count(&self, name: &str) -> Result<usize> {
        Ok(self.adjacency(name)?.incoming.len())
    }

    fn output_edge_count(&self, name: &str) -> Result<usize> {
        Ok(self.adjacency(name)?.outgoing.len())
    }

    fn input_vertex_names(&self, name: &str) -> Result<Vec<String>> {
        Ok(self.adjacency(name)?.incoming.clone())
    }

    fn output_vertex_names(&self, name: &str) -> Result<Vec<String>> {
        Ok(self
            .adjacency(name)?
            .outgoing
            .iter()
            .map(|arc| arc.to.clone())
            .collect())
    }

    fn output_edges(&self, name: &str) -> Result<Vec<(String, Weight)>> {
        Ok(self
            .adjacency(name)?
            .outgoing
            .iter()
            .map(|arc| (arc.to.clone(), arc.weight))
            .collect())
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn contains_vertex(&self, name: &str) -> bool {
        self.vertices.contains_key(name)
    }

    fn vertex_names(&self) -> Vec<String> {
        let mut names: Vec<(&String, u64)> = self
            .vertices
            .iter()
            .map(|(name, adj)| (name, adj.seq))
            .collect();
        names.sort_unstable_by_key(|&(_, seq)| seq);
        names.into_iter().map(|(name, _)| name.clone()).collect()
    }

    fn edge_list(&self) -> Vec<Edge> {
        let mut edges: Vec<(u64, Edge)> = self
            .vertices
            .iter()
            .flat_map(|(from, adj)| {
                adj.outgoing
                    .iter()
                    .map(move |arc| (arc.seq, Edge::new(from.as_str(), arc.to.as_str(), arc.weight)))
            })
            .collect();
        edges.sort_unstable_by_key(|(seq, _)| *seq);
        edges.into_iter().map(|(_, edge)| edge).collect()
    }
}
