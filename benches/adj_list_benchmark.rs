use adjgraph::AdjList;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn pseudo_random_edges(vertices: usize, edges_per_vertex: usize) -> Vec<(usize, usize)> {
    let mut edges = Vec::with_capacity(vertices * edges_per_vertex);
    for i in 0..vertices {
        for j in 0..edges_per_vertex {
            edges.push((i, (i + j * 17 + 1) % vertices));
        }
    }
    edges
}

fn bench_add_edge(c: &mut Criterion) {
    let mut group = c.benchmark_group("adj_list_add_edge");
    for &size in &[1_000usize, 10_000] {
        let edges = pseudo_random_edges(size, 8);
        for directed in [true, false] {
            let label = if directed { "directed" } else { "undirected" };
            group.bench_with_input(BenchmarkId::new(label, size), &edges, |b, edges| {
                b.iter(|| {
                    let mut graph = AdjList::new(directed);
                    for &(x, y) in edges {
                        graph.add_edge(x, y);
                    }
                    black_box(graph.edge_count())
                });
            });
        }
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let graph = AdjList::from_edges(true, pseudo_random_edges(5_000, 4));
    c.bench_function("adj_list_render", |b| {
        b.iter(|| black_box(graph.render()));
    });
}

criterion_group!(benches, bench_add_edge, bench_render);
criterion_main!(benches);
