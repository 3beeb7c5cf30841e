//! Benchmarks comparing backends on construction and shortest-path queries.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use digraph_core::{Backend, Graph};

/// `side` x `side` grid with right and down edges, weighted by position.
fn build_grid(backend: Backend, side: usize) -> Box<dyn Graph> {
    let mut g = backend.build_with_capacity(side * side);
    let name = |r: usize, c: usize| format!("{}:{}", r, c);

    for r in 0..side {
        for c in 0..side {
            g.add_vertex(&name(r, c));
        }
    }
    for r in 0..side {
        for c in 0..side {
            let weight = ((r * 7 + c * 3) % 10 + 1) as u32;
            if c + 1 < side {
                let _ = g.add_edge(&name(r, c), &name(r, c + 1), weight);
            }
            if r + 1 < side {
                let _ = g.add_edge(&name(r, c), &name(r + 1, c), weight);
            }
        }
    }
    g
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_grid_30");
    for backend in Backend::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(backend), &backend, |b, &backend| {
            b.iter(|| black_box(build_grid(backend, 30)))
        });
    }
    group.finish();
}

fn bench_shortest_path(c: &mut Criterion) {
    let side = 30;
    let target = format!("{}:{}", side - 1, side - 1);

    let mut group = c.benchmark_group("shortest_path_grid_30");
    for backend in Backend::ALL {
        let g = build_grid(backend, side);
        group.bench_with_input(BenchmarkId::from_parameter(backend), &g, |b, g| {
            b.iter(|| black_box(g.shortest_path_with_cost("0:0", &target)))
        });
    }
    group.finish();
}

fn bench_neighbor_listing(c: &mut Criterion) {
    let mut group = c.benchmark_group("output_vertex_names_hub_500");
    for backend in Backend::ALL {
        let mut g = backend.build();
        g.add_vertex("hub");
        for i in 0..500 {
            let spoke = format!("s{}", i);
            g.add_vertex(&spoke);
            let _ = g.add_edge("hub", &spoke, 1);
        }
        group.bench_with_input(BenchmarkId::from_parameter(backend), &g, |b, g| {
            b.iter(|| black_box(g.output_vertex_names("hub")))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_shortest_path, bench_neighbor_listing);
criterion_main!(benches);
