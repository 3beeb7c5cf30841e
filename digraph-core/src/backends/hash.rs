//! Hash-indexed backend.
//!
//! Vertices live in a `HashMap`, and each vertex indexes its out-edges by
//! destination name, so every lookup is O(1) on average. Hash iteration
//! order is arbitrary, so edges themselves are kept in an append-only record
//! log indexed by [`EdgeId`]; vertices only hold back-references (ids) into
//! it. Ids grow monotonically, which makes id order the insertion order.
//!
//! Removed edges leave tombstones in the log. Once tombstones outnumber live
//! records the log is compacted and ids are renumbered, preserving order.

use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph, Weight};

/// Index into the edge record log.
type EdgeId = usize;

/// Logs shorter than this are never compacted.
const COMPACT_MIN_RECORDS: usize = 64;

#[derive(Debug, Clone)]
struct EdgeRecord {
    from: String,
    to: String,
    weight: Weight,
}

#[derive(Debug, Clone, Default)]
struct Incidence {
    seq: u64,
    by_target: HashMap<String, EdgeId>,
    outgoing: Vec<EdgeId>,
    incoming: Vec<EdgeId>,
}

/// Graph stored as hash indexes over an ordered edge record log.
#[derive(Debug, Default)]
pub struct HashGraph {
    vertices: HashMap<String, Incidence>,
    records: Vec<Option<EdgeRecord>>,
    edge_count: usize,
    next_vertex_seq: u64,
}

impl HashGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        HashGraph {
            vertices: HashMap::with_capacity(capacity),
            ..Self::default()
        }
    }

    fn incidence(&self, name: &str) -> Result<&Incidence> {
        self.vertices.get(name).ok_or_else(|| GraphError::vertex(name))
    }

    /// Check both endpoints, then look up the edge `from -> to`.
    fn edge_id(&self, from: &str, to: &str) -> Result<EdgeId> {
        let source = self.incidence(from)?;
        self.incidence(to)?;
        source
            .by_target
            .get(to)
            .copied()
            .ok_or_else(|| GraphError::edge(from, to))
    }

    fn record(&self, id: EdgeId) -> Option<&EdgeRecord> {
        self.records.get(id).and_then(Option::as_ref)
    }

    /// Tombstone a record and drop every back-reference to it.
    fn unlink(&mut self, id: EdgeId) -> Option<EdgeRecord> {
        let record = self.records.get_mut(id)?.take()?;

        if let Some(source) = self.vertices.get_mut(&record.from) {
            source.by_target.remove(&record.to);
            source.outgoing.retain(|&e| e != id);
        }
        if let Some(target) = self.vertices.get_mut(&record.to) {
            target.incoming.retain(|&e| e != id);
        }

        self.edge_count -= 1;
        Some(record)
    }

    fn maybe_compact(&mut self) {
        let tombstones = self.records.len() - self.edge_count;
        if self.records.len() < COMPACT_MIN_RECORDS || tombstones <= self.edge_count {
            return;
        }

        let mut remap: Vec<Option<EdgeId>> = vec![None; self.records.len()];
        let mut records = Vec::with_capacity(self.edge_count);
        for (old, record) in self.records.drain(..).enumerate() {
            if let Some(record) = record {
                remap[old] = Some(records.len());
                records.push(Some(record));
            }
        }
        self.records = records;

        let relabel = |ids: &mut Vec<EdgeId>| {
            *ids = ids.iter().filter_map(|&id| remap[id]).collect();
        };
        for incidence in self.vertices.values_mut() {
            relabel(&mut incidence.outgoing);
            relabel(&mut incidence.incoming);
            for id in incidence.by_target.values_mut() {
                if let Some(new_id) = remap[*id] {
                    *id = new_id;
                }
            }
        }

        tracing::debug!(
            live = self.edge_count,
            dropped = tombstones,
            "compacted edge log"
        );
    }

    fn names_of(&self, ids: &[EdgeId], endpoint: impl Fn(&EdgeRecord) -> &str) -> Vec<String> {
        ids.iter()
            .filter_map(|&id| self.record(id))
            .map(|record| endpoint(record).to_string())
            .collect()
    }
}

impl Graph for HashGraph {
    fn add_vertex(&mut self, name: &str) {
        if self.vertices.contains_key(name) {
            return;
        }
        self.vertices.insert(
            name.to_string(),
            Incidence {
                seq: self.next_vertex_seq,
                ..Incidence::default()
            },
        );
        self.next_vertex_seq += 1;
    }

    fn del_vertex(&mut self, name: &str) -> Result<()> {
        let incidence = self
            .vertices
            .remove(name)
            .ok_or_else(|| GraphError::vertex(name))?;

        // A self-loop id appears in both lists; the second unlink finds a
        // tombstone and is skipped.
        let mut removed = 0;
        for &id in incidence.outgoing.iter().chain(&incidence.incoming) {
            if self.unlink(id).is_some() {
                removed += 1;
            }
        }

        tracing::debug!(vertex = name, removed_edges = removed, "vertex removed");
        self.maybe_compact();
        Ok(())
    }

    fn add_edge(&mut self, from: &str, to: &str, weight: Weight) -> Result<()> {
        match self.edge_id(from, to) {
            Ok(_) => {
                tracing::trace!(from, to, "edge already present, keeping weight");
                return Ok(());
            }
            Err(GraphError::EdgeDoesNotExist { .. }) => {}
            Err(err) => return Err(err),
        }

        let id = self.records.len();
        self.records.push(Some(EdgeRecord {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        }));
        if let Some(source) = self.vertices.get_mut(from) {
            source.by_target.insert(to.to_string(), id);
            source.outgoing.push(id);
        }
        if let Some(target) = self.vertices.get_mut(to) {
            target.incoming.push(id);
        }
        self.edge_count += 1;
        Ok(())
    }

    fn get_edge(&self, from: &str, to: &str) -> Result<Weight> {
        let id = self.edge_id(from, to)?;
        self.record(id)
            .map(|record| record.weight)
            .ok_or_else(|| GraphError::edge(from, to))
    }

    fn set_edge(&mut self, from: &str, to: &str, weight: Weight) -> Result<()> {
        let id = self.edge_id(from, to)?;
        match self.records.get_mut(id).and_then(Option::as_mut) {
            Some(record) => {
                record.weight = weight;
                Ok(())
            }
            None => Err(GraphError::edge(from, to)),
        }
    }

    fn del_edge(&mut self, from: &str, to: &str) -> Result<Weight> {
        let id = self.edge_id(from, to)?;
        let record = self.unlink(id).ok_or_else(|| GraphError::edge(from, to))?;
        self.maybe_compact();
        Ok(record.weight)
    }

    fn input_edge_count(&self, name: &str) -> Result<usize> {
        Ok(self.incidence(name)?.incoming.len())
    }

    fn output_edge_count(&self, name: &str) -> Result<usize> {
        Ok(self.incidence(name)?.outgoing.len())
    }

    fn input_vertex_names(&self, name: &str) -> Result<Vec<String>> {
        let incidence = self.incidence(name)?;
        Ok(self.names_of(&incidence.incoming, |record| record.from.as_str()))
    }

    fn output_vertex_names(&self, name: &str) -> Result<Vec<String>> {
        let incidence = self.incidence(name)?;
        Ok(self.names_of(&incidence.outgoing, |record| record.to.as_str()))
    }

    fn output_edges(&self, name: &str) -> Result<Vec<(String, Weight)>> {
        let incidence = self.incidence(name)?;
        Ok(incidence
            .outgoing
            .iter()
            .filter_map(|&id| self.record(id))
            .map(|record| (record.to.clone(), record.weight))
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

    fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.vertices
            .get(from)
            .is_some_and(|source| source.by_target.contains_key(to))
    }

    fn vertex_names(&self) -> Vec<String> {
        let mut names: Vec<(&String, u64)> = self
            .vertices
            .iter()
            .map(|(name, incidence)| (name, incidence.seq))
            .collect();
        names.sort_unstable_by_key(|&(_, seq)| seq);
        names.into_iter().map(|(name, _)| name.clone()).collect()
    }

    fn edge_list(&self) -> Vec<Edge> {
        self.records
            .iter()
            .flatten()
            .map(|record| Edge::new(record.from.as_str(), record.to.as_str(), record.weight))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_order_not_hash_order() {
        let mut g = HashGraph::new();
        g.add_vertex("T");
        let names: Vec<String> = (0..32).map(|i| format!("n{}", 31 - i)).collect();
        for name in &names {
            g.add_vertex(name);
            g.add_edge(name, "T", 1).unwrap();
            g.add_edge("T", name, 1).unwrap();
        }
        assert_eq!(g.input_vertex_names("T").unwrap(), names);
        assert_eq!(g.output_vertex_names("T").unwrap(), names);
    }

    #[test]
    fn test_self_loop_removed_once() {
        let mut g = HashGraph::new();
        g.add_vertex("a");
        g.add_vertex("b");
        g.add_edge("a", "a", 1).unwrap();
        g.add_edge("a", "b", 1).unwrap();

        g.del_vertex("a").unwrap();
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.input_edge_count("b").unwrap(), 0);
    }

    #[test]
    fn test_compaction_preserves_order_and_weights() {
        let mut g = HashGraph::new();
        g.add_vertex("hub");
        for i in 0..100 {
            let name = format!("v{}", i);
            g.add_vertex(&name);
            g.add_edge("hub", &name, i).unwrap();
        }
        // Drop the even-numbered edges plus a few more to trigger compaction.
        for i in (0..100).step_by(2).chain([1, 3, 5]) {
            g.del_edge("hub", &format!("v{}", i)).unwrap();
        }

        // Compacted at the 51st tombstone; two more since.
        assert_eq!(g.records.len(), 49);
        assert_eq!(g.edge_count(), 47);

        let expected: Vec<(String, u32)> = (7..100)
            .step_by(2)
            .map(|i| (format!("v{}", i), i))
            .collect();
        assert_eq!(g.output_edges("hub").unwrap(), expected);
        assert_eq!(g.get_edge("hub", "v99").unwrap(), 99);
        assert_eq!(g.input_vertex_names("v51").unwrap(), vec!["hub"]);

        // New edges still land after the survivors.
        g.add_edge("hub", "v0", 500).unwrap();
        assert_eq!(
            g.output_vertex_names("hub").unwrap().last().map(String::as_str),
            Some("v0")
        );
    }

    #[test]
    fn test_contains_edge_absent_endpoints() {
        let mut g = HashGraph::new();
        g.add_vertex("a");
        assert!(!g.contains_edge("a", "missing"));
        assert!(!g.contains_edge("missing", "a"));
    }
}
