use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use walrus::graphlib::{Edge, UnGraph};
use walrus::mst::{kruskal_minimum_spanning_tree, prim_minimum_spanning_tree, spanning_tree_weight};

#[derive(Debug, Clone)]
struct GraphSpec {
    vertex_count: usize,
    edges: Vec<(usize, usize, i64)>,
}

impl GraphSpec {
    fn build(&self) -> UnGraph {
        let mut g: UnGraph = UnGraph::with_vertices(0..self.vertex_count);
        for &(v, w, weight) in &self.edges {
            g.add_edge(Edge::new(v, w, weight));
        }
        g
    }
}

fn build_dense_spec(vertex_count: usize, fanout: usize) -> GraphSpec {
    let mut edges: Vec<(usize, usize, i64)> = Vec::new();

    // A spine to guarantee connectivity.
    for v in 0..vertex_count.saturating_sub(1) {
        edges.push((v, v + 1, 50));
    }

    for v in 0..vertex_count {
        for k in 2..=(fanout + 1) {
            let w = v.saturating_add(k * 3);
            if w >= vertex_count {
                break;
            }
            edges.push((v, w, ((v * 31 + k * 17) % 40) as i64));
        }
    }

    GraphSpec {
        vertex_count,
        edges,
    }
}

fn bench_spanning_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning_tree");
    group.measurement_time(Duration::from_secs(5));

    let cases = [
        ("v200_f4", 200usize, 4usize),
        ("v1000_f6", 1000usize, 6usize),
        ("v4000_f8", 4000usize, 8usize),
    ];

    for (name, vertices, fanout) in cases {
        let g = build_dense_spec(vertices, fanout).build();
        group.bench_with_input(BenchmarkId::new("kruskal", name), &g, |b, g| {
            b.iter(|| {
                let tree = kruskal_minimum_spanning_tree(black_box(g));
                black_box(tree.map(|t| spanning_tree_weight(&t)))
            })
        });
        group.bench_with_input(BenchmarkId::new("prim", name), &g, |b, g| {
            b.iter(|| {
                let tree = prim_minimum_spanning_tree(black_box(g));
                black_box(tree.map(|t| t.edge_count()))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_spanning_tree);
criterion_main!(benches);
