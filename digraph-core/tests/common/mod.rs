//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use digraph_core::{Edge, Graph, Weight};

/// Route `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Four cities with asymmetric road lengths in both directions.
pub const CITY_ROADS: &[(&str, &str, u32)] = &[
    ("Dnepr", "Kiev", 453),
    ("Dnepr", "Kremenchug", 161),
    ("Dnepr", "Poltava", 202),
    ("Kiev", "Dnepr", 491),
    ("Kiev", "Kremenchug", 292),
    ("Kiev", "Poltava", 343),
    ("Poltava", "Kiev", 341),
    ("Poltava", "Kremenchug", 113),
    ("Poltava", "Dnepr", 182),
    ("Kremenchug", "Kiev", 291),
    ("Kremenchug", "Dnepr", 161),
    ("Kremenchug", "Poltava", 113),
];

pub const CITIES: &[&str] = &["Dnepr", "Kiev", "Kremenchug", "Poltava"];

/// Six vertices, nine edges; 1 -> 5 costs 26 via 3 and 4.
pub const SIX_EDGES: &[(&str, &str, u32)] = &[
    ("1", "2", 7),
    ("2", "4", 15),
    ("2", "3", 10),
    ("1", "3", 9),
    ("1", "6", 14),
    ("3", "6", 2),
    ("3", "4", 11),
    ("4", "5", 6),
    ("5", "6", 9),
];

pub const SIX_VERTICES: &[&str] = &["1", "2", "3", "4", "5", "6"];

pub fn populate<G: Graph + ?Sized>(graph: &mut G, vertices: &[&str], edges: &[(&str, &str, u32)]) {
    for vertex in vertices {
        graph.add_vertex(vertex);
    }
    for &(from, to, weight) in edges {
        graph
            .add_edge(from, to, weight)
            .unwrap_or_else(|e| panic!("failed to add {} -> {}: {}", from, to, e));
    }
}

/// Everything a caller can observe about a graph.
#[derive(Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub vertices: Vec<String>,
    pub edges: Vec<Edge>,
    pub inputs: Vec<Vec<String>>,
    pub outputs: Vec<Vec<(String, u32)>>,
}

pub fn snapshot<G: Graph + ?Sized>(graph: &G) -> Snapshot {
    let vertices = graph.vertex_names();
    let inputs = vertices
        .iter()
        .map(|v| graph.input_vertex_names(v).expect("listed vertex must exist"))
        .collect();
    let outputs = vertices
        .iter()
        .map(|v| graph.output_edges(v).expect("listed vertex must exist"))
        .collect();

    Snapshot {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        vertices,
        edges: graph.edge_list(),
        inputs,
        outputs,
    }
}

/// Small deterministic generator (64-bit LCG); no need for real randomness.
pub struct Lcg(pub u64);

impl Lcg {
    pub fn step(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    pub fn below(&mut self, bound: u64) -> u64 {
        self.step() % bound
    }

    pub fn name(&mut self, pool: u64) -> String {
        format!("v{}", self.below(pool))
    }

    pub fn weight(&mut self) -> Weight {
        self.below(50) as Weight
    }
}
