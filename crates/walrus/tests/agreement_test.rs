//! Cross-checks between independent algorithms on pseudo-random graphs.

use walrus::components::{dfs_connected_components, union_find_connected_components};
use walrus::cycle::directed;
use walrus::graphlib::{DiGraph, Edge, UnGraph};
use walrus::mst::{kruskal_minimum_spanning_tree, prim_minimum_spanning_tree, spanning_tree_weight};
use walrus::shortest_path::{bellman_ford, dijkstra, floyd_warshall};
use walrus::topo::{dfs_topological_sort, is_topological_order, kahn_topological_sort};

/// xorshift64: varied but reproducible shapes.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

fn random_edges(seed: u64, n: usize, m: usize) -> Vec<(usize, usize, i64)> {
    let mut rng = XorShift(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1);
    (0..m)
        .map(|_| {
            let v = rng.below(n as u64) as usize;
            let w = rng.below(n as u64) as usize;
            let weight = 1 + rng.below(20) as i64;
            (v, w, weight)
        })
        .collect()
}

fn normalize(mut groups: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    for g in &mut groups {
        g.sort();
    }
    groups.sort();
    groups
}

#[test]
fn component_constructions_agree() {
    for seed in 0..30 {
        let mut g: UnGraph = UnGraph::with_vertices(0..12);
        for (v, w, weight) in random_edges(seed, 12, 9) {
            g.add_edge(Edge::new(v, w, weight));
        }
        let by_dfs = normalize(dfs_connected_components(&g));
        let by_uf = normalize(union_find_connected_components(&g).into_values().collect());
        assert_eq!(by_dfs, by_uf, "seed {seed}");
    }
}

#[test]
fn cycle_detection_and_topological_sorting_agree() {
    for seed in 0..40 {
        let mut g: DiGraph = DiGraph::with_vertices(0..10);
        for (v, w, weight) in random_edges(seed, 10, 12) {
            g.add_edge(Edge::new(v, w, weight));
        }
        let kahn = kahn_topological_sort(&g);
        let dfs = dfs_topological_sort(&g);
        if directed::has_cycle(&g) {
            assert!(kahn.is_empty(), "seed {seed}");
            assert!(dfs.is_empty(), "seed {seed}");
        } else {
            assert!(is_topological_order(&g, &kahn), "seed {seed}");
            assert!(is_topological_order(&g, &dfs), "seed {seed}");
        }
    }
}

#[test]
fn spanning_tree_weights_agree_on_connected_graphs() {
    for seed in 0..30 {
        let n = 10;
        let mut g: UnGraph = UnGraph::new();
        // A spine keeps the graph connected.
        for v in 1..n {
            g.add_edge(Edge::new(v - 1, v, 25));
        }
        // Simple graph only: Kruskal keeps the first of parallel edges, Prim sees them all.
        for (v, w, weight) in random_edges(seed, n, 20) {
            if v == w || g.contains_edge(&v, &w) {
                continue;
            }
            g.add_edge(Edge::new(v, w, weight));
        }
        let k = kruskal_minimum_spanning_tree(&g).expect("non-empty graph");
        let p = prim_minimum_spanning_tree(&g).expect("non-empty graph");
        assert_eq!(spanning_tree_weight(&k), spanning_tree_weight(&p), "seed {seed}");
        assert_eq!(k.edge_count(), 2 * (n - 1), "seed {seed}");
        assert_eq!(p.edge_count(), 2 * (n - 1), "seed {seed}");
    }
}

#[test]
fn weighted_searches_agree_on_non_negative_graphs() {
    for seed in 0..15 {
        let mut g: DiGraph = DiGraph::with_vertices(0..8);
        for (v, w, weight) in random_edges(seed, 8, 18) {
            g.add_edge(Edge::new(v, w, weight));
        }
        let apsp = floyd_warshall(&g).reached().expect("weights are positive");
        for src in 0..8 {
            for dst in 0..8 {
                let d = dijkstra(&g, &src, &dst).expect("known").reached().map(|p| p.distance());
                let b = bellman_ford(&g, &src, &dst).expect("known").reached().map(|p| p.distance());
                assert_eq!(d, b, "seed {seed}: {src} -> {dst}");
                assert_eq!(d, apsp.distance(&src, &dst), "seed {seed}: {src} -> {dst}");
            }
        }
    }
}
