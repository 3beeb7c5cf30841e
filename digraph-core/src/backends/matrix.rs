//! Dense adjacency-matrix backend.
//!
//! Vertices occupy slots in a square matrix; `cells[from][to]` holds the edge
//! between two slots, if any. Edge lookups are O(1), neighbor listings are
//! O(V) and memory is O(V²).
//!
//! Freed slots are recycled by later insertions. Since slot positions say
//! nothing about insertion order, every vertex and cell carries a sequence
//! number and listings are sorted by it.

use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph, Weight};

#[derive(Debug, Clone)]
struct VertexSlot {
    name: String,
    seq: u64,
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    weight: Weight,
    seq: u64,
}

/// Graph stored as a dense adjacency matrix.
#[derive(Debug, Default)]
pub struct MatrixGraph {
    slots: Vec<Option<VertexSlot>>,
    index: HashMap<String, usize>,
    cells: Vec<Vec<Option<Cell>>>,
    free: Vec<usize>,
    edge_count: usize,
    next_vertex_seq: u64,
    next_edge_seq: u64,
}

impl MatrixGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `capacity` vertices.
    ///
    /// Rows are still allocated as vertices arrive.
    pub fn with_capacity(capacity: usize) -> Self {
        MatrixGraph {
            slots: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            cells: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    fn slot(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::vertex(name))
    }

    fn endpoints(&self, from: &str, to: &str) -> Result<(usize, usize)> {
        Ok((self.slot(from)?, self.slot(to)?))
    }

    fn existing_cell(&self, from: &str, to: &str) -> Result<(usize, usize, Cell)> {
        let (f, t) = self.endpoints(from, to)?;
        match self.cells[f][t] {
            Some(cell) => Ok((f, t, cell)),
            None => Err(GraphError::edge(from, to)),
        }
    }

    fn slot_name(&self, slot: usize) -> Option<&str> {
        self.slots
            .get(slot)
            .and_then(|s| s.as_ref())
            .map(|s| s.name.as_str())
    }

    /// Append a fresh slot, widening every row by one column.
    fn grow(&mut self) -> usize {
        let slot = self.slots.len();
        for row in &mut self.cells {
            row.push(None);
        }
        self.cells.push(vec![None; slot + 1]);
        self.slots.push(None);
        slot
    }

    /// Slots of `(seq, slot)` hits, sorted by seq, resolved to names.
    fn ordered_names(&self, mut hits: Vec<(u64, usize)>) -> Vec<String> {
        hits.sort_unstable_by_key(|&(seq, _)| seq);
        hits.into_iter()
            .filter_map(|(_, slot)| self.slot_name(slot).map(str::to_string))
            .collect()
    }

    fn column_hits(&self, column: usize) -> Vec<(u64, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(row, cells)| cells[column].map(|cell| (cell.seq, row)))
            .collect()
    }

    fn row_hits(&self, row: usize) -> Vec<(u64, usize)> {
        self.cells[row]
            .iter()
            .enumerate()
            .filter_map(|(column, cell)| cell.map(|cell| (cell.seq, column)))
            .collect()
    }
}

impl Graph for MatrixGraph {
    fn add_vertex(&mut self, name: &str) {
        if self.index.contains_key(name) {
            return;
        }

        let slot = match self.free.pop() {
            Some(slot) => slot,
            None => self.grow(),
        };
        self.slots[slot] = Some(VertexSlot {
            name: name.to_string(),
            seq: self.next_vertex_seq,
        });
        self.next_vertex_seq += 1;
        self.index.insert(name.to_string(), slot);

        tracing::trace!(vertex = name, slot, "vertex added");
    }

    fn del_vertex(&mut self, name: &str) -> Result<()> {
        let slot = self.index.remove(name).ok_or_else(|| GraphError::vertex(name))?;

        let mut removed = 0;
        for cell in &mut self.cells[slot] {
            if cell.take().is_some() {
                removed += 1;
            }
        }
        // A self-loop was already cleared with the row.
        for row in &mut self.cells {
            if row[slot].take().is_some() {
                removed += 1;
            }
        }

        self.slots[slot] = None;
        self.free.push(slot);
        self.edge_count -= removed;

        tracing::debug!(vertex = name, removed_edges = removed, "vertex removed");
        Ok(())
    }

    fn add_edge(&mut self, from: &str, to: &str, weight: Weight) -> Result<()> {
        let (f, t) = self.endpoints(from, to)?;
        if self.cells[f][t].is_some() {
            tracing::trace!(from, to, "edge already present, keeping weight");
            return Ok(());
        }

        self.cells[f][t] = Some(Cell {
            weight,
            seq: self.next_edge_seq,
        });
        self.next_edge_seq += 1;
        self.edge_count += 1;
        Ok(())
    }

    fn get_edge(&self, from: &str, to: &str) -> Result<Weight> {
        self.existing_cell(from, to).map(|(_, _, cell)| cell.weight)
    }

    fn set_edge(&mut self, from: &str, to: &str, weight: Weight) -> Result<()> {
        let (f, t, cell) = self.existing_cell(from, to)?;
        self.cells[f][t] = Some(Cell { weight, ..cell });
        Ok(())
    }

    fn del_edge(&mut self, from: &str, to: &str) -> Result<Weight> {
        let (f, t, cell) = self.existing_cell(from, to)?;
        self.cells[f][t] = None;
        self.edge_count -= 1;
        Ok(cell.weight)
    }

    fn input_edge_count(&self, name: &str) -> Result<usize> {
        let slot = self.slot(name)?;
        Ok(self.cells.iter().filter(|row| row[slot].is_some()).count())
    }

    fn output_edge_count(&self, name: &str) -> Result<usize> {
        let slot = self.slot(name)?;
        Ok(self.cells[slot].iter().filter(|cell| cell.is_some()).count())
    }

    fn input_vertex_names(&self, name: &str) -> Result<Vec<String>> {
        let slot = self.slot(name)?;
        Ok(self.ordered_names(self.column_hits(slot)))
    }

    fn output_vertex_names(&self, name: &str) -> Result<Vec<String>> {
        let slot = self.slot(name)?;
        Ok(self.ordered_names(self.row_hits(slot)))
    }

    fn output_edges(&self, name: &str) -> Result<Vec<(String, Weight)>> {
        let slot = self.slot(name)?;
        let mut hits: Vec<(u64, usize, Weight)> = self.cells[slot]
            .iter()
            .enumerate()
            .filter_map(|(column, cell)| cell.map(|cell| (cell.seq, column, cell.weight)))
            .collect();
        hits.sort_unstable_by_key(|&(seq, _, _)| seq);

        Ok(hits
            .into_iter()
            .filter_map(|(_, column, weight)| {
                self.slot_name(column).map(|name| (name.to_string(), weight))
            })
            .collect())
    }

    fn vertex_count(&self) -> usize {
        self.index.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn contains_vertex(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    fn vertex_names(&self) -> Vec<String> {
        let mut live: Vec<&VertexSlot> = self.slots.iter().flatten().collect();
        live.sort_unstable_by_key(|slot| slot.seq);
        live.into_iter().map(|slot| slot.name.clone()).collect()
    }

    fn edge_list(&self) -> Vec<Edge> {
        let mut edges: Vec<(u64, Edge)> = Vec::with_capacity(self.edge_count);
        for (row, cells) in self.cells.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                let Some(cell) = cell else { continue };
                if let (Some(from), Some(to)) = (self.slot_name(row), self.slot_name(column)) {
                    edges.push((cell.seq, Edge::new(from, to, cell.weight)));
                }
            }
        }
        edges.sort_unstable_by_key(|(seq, _)| *seq);
        edges.into_iter().map(|(_, edge)| edge).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_stays_square() {
        let mut g = MatrixGraph::new();
        for name in ["a", "b", "c"] {
            g.add_vertex(name);
        }
        assert_eq!(g.cells.len(), 3);
        assert!(g.cells.iter().all(|row| row.len() == 3));
    }

    #[test]
    fn test_slot_reuse_clears_old_edges() {
        let mut g = MatrixGraph::new();
        g.add_vertex("a");
        g.add_vertex("b");
        g.add_edge("a", "b", 1).unwrap();
        g.add_edge("b", "a", 2).unwrap();

        g.del_vertex("b").unwrap();
        g.add_vertex("c");

        // "c" took over b's slot but none of its edges.
        assert_eq!(g.cells.len(), 2);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.input_edge_count("c").unwrap(), 0);
        assert_eq!(g.output_edge_count("a").unwrap(), 0);
        assert_eq!(
            g.get_edge("a", "c").unwrap_err(),
            GraphError::edge("a", "c")
        );
    }

    #[test]
    fn test_vertex_order_survives_slot_reuse() {
        let mut g = MatrixGraph::new();
        g.add_vertex("a");
        g.add_vertex("b");
        g.add_vertex("c");
        g.del_vertex("a").unwrap();
        g.add_vertex("d");

        // "d" sits in slot 0 but was added last.
        assert_eq!(g.vertex_names(), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_neighbor_order_is_insertion_not_slot() {
        let mut g = MatrixGraph::new();
        for name in ["hub", "x", "y", "z"] {
            g.add_vertex(name);
        }
        g.add_edge("hub", "z", 1).unwrap();
        g.add_edge("hub", "x", 1).unwrap();
        g.add_edge("hub", "y", 1).unwrap();
        g.add_edge("y", "hub", 1).unwrap();
        g.add_edge("x", "hub", 1).unwrap();

        assert_eq!(g.output_vertex_names("hub").unwrap(), vec!["z", "x", "y"]);
        assert_eq!(g.input_vertex_names("hub").unwrap(), vec!["y", "x"]);
    }

    #[test]
    fn test_set_edge_keeps_position() {
        let mut g = MatrixGraph::new();
        for name in ["a", "b", "c"] {
            g.add_vertex(name);
        }
        g.add_edge("a", "b", 1).unwrap();
        g.add_edge("a", "c", 2).unwrap();
        g.set_edge("a", "b", 9).unwrap();

        assert_eq!(
            g.output_edges("a").unwrap(),
            vec![("b".to_string(), 9), ("c".to_string(), 2)]
        );
    }
}
