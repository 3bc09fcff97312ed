//! Criterion micro-benchmarks for graph queries on a grown lattice.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use trilat_core::VertexId;
use trilat_engine::generate_with;
use trilat_graph::{Graph, GraphSummary};
use trilat_space::{Cell, LatticeGrid};

fn reference_graph() -> Graph {
    generate_with(trilat_bench::reference_profile())
        .unwrap()
        .graph
}

/// Benchmark: oracle query for the vertex with the highest id (an outer-ring vertex).
fn bench_oracle_outer_vertex(c: &mut Criterion) {
    let graph = reference_graph();
    let outer = VertexId(graph.vertex_count() as u32 - 1);
    c.bench_function("shortest_path_to_root_outer_d32", |b| {
        b.iter(|| black_box(graph.shortest_path_to_root(black_box(outer))));
    });
}

/// Benchmark: full summary pass.
fn bench_summary(c: &mut Criterion) {
    let graph = reference_graph();
    c.bench_function("graph_summary_d32", |b| {
        b.iter(|| black_box(GraphSummary::of(&graph)));
    });
}

/// Benchmark: render the padded adjacency matrix.
fn bench_render_matrix(c: &mut Criterion) {
    let graph = reference_graph();
    c.bench_function("render_matrix_d32", |b| {
        b.iter(|| black_box(graph.render_matrix().len()));
    });
}

/// Benchmark: expand the root of a freshly seeded grid.
fn bench_expand_root(c: &mut Criterion) {
    c.bench_function("expand_root", |b| {
        b.iter(|| {
            let mut graph = Graph::new();
            let (mut grid, root) = LatticeGrid::seeded(&mut graph).unwrap();
            black_box(grid.expand(&mut graph, root).unwrap());
            black_box(grid.vertex_at(Cell::new(-1, 0)));
        });
    });
}

criterion_group!(
    benches,
    bench_oracle_outer_vertex,
    bench_summary,
    bench_render_matrix,
    bench_expand_root
);
criterion_main!(benches);
