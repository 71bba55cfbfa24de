use walrus_graphlib::{DiGraph, Edge, Graph, UnGraph};

fn targets(g: &DiGraph, v: usize) -> Vec<usize> {
    g.edges(&v).map(|e| e.w).collect()
}

fn sorted_edges<D: walrus_graphlib::Direction>(g: &Graph<usize, i64, D>) -> Vec<(usize, usize, i64)> {
    let mut out: Vec<(usize, usize, i64)> = g.all_edges().map(|e| (e.v, e.w, e.weight)).collect();
    out.sort();
    out
}

#[test]
fn add_vertex_is_idempotent_and_keeps_first_seen_order() {
    let mut g: DiGraph = DiGraph::new();
    g.add_vertex(3).add_vertex(1).add_vertex(3).add_vertex(2);
    assert_eq!(g.vertex_ids(), vec![3, 1, 2]);
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn add_edge_registers_endpoints_in_first_seen_order() {
    let mut g: DiGraph = DiGraph::new();
    g.add_vertex(7);
    g.add_edge(Edge::new(4, 5, 1));
    g.add_edge(Edge::new(5, 7, 1));
    g.add_edge(Edge::new(6, 4, 1));
    assert_eq!(g.vertex_ids(), vec![7, 4, 5, 6]);
    assert!(g.has_vertex(&6));
    assert!(!g.has_vertex(&8));
}

#[test]
fn repeated_add_edge_stores_parallel_edges() {
    let mut g: DiGraph = DiGraph::new();
    g.add_edge(Edge::new(0, 1, 3));
    g.add_edge(Edge::new(0, 1, 5));
    assert_eq!(g.edge_count(), 2);
    let weights: Vec<i64> = g.edges(&0).map(|e| e.weight).collect();
    assert_eq!(weights, vec![3, 5]);
}

#[test]
fn edges_preserve_insertion_order_and_unknown_vertices_are_empty() {
    let mut g: DiGraph = DiGraph::new();
    g.add_edge(Edge::new(0, 3, 1));
    g.add_edge(Edge::new(0, 1, 1));
    g.add_edge(Edge::new(0, 2, 1));
    assert_eq!(targets(&g, 0), vec![3, 1, 2]);
    assert_eq!(targets(&g, 1), Vec::<usize>::new());
    assert_eq!(targets(&g, 42), Vec::<usize>::new());
    assert_eq!(g.out_degree(&42), 0);
}

#[test]
fn all_edges_concatenates_in_vertex_order() {
    let mut g: DiGraph = DiGraph::new();
    g.add_edge(Edge::new(2, 0, 1));
    g.add_edge(Edge::new(0, 1, 1));
    g.add_edge(Edge::new(2, 1, 1));
    let all: Vec<(usize, usize)> = g.all_edges().map(|e| (e.v, e.w)).collect();
    assert_eq!(all, vec![(2, 0), (2, 1), (0, 1)]);
}

#[test]
fn transpose_reverses_every_edge_and_keeps_isolated_vertices() {
    let mut g: DiGraph = DiGraph::new();
    g.add_edge(Edge::new(0, 1, 2));
    g.add_edge(Edge::new(1, 2, 3));
    g.add_vertex(9);

    let t = g.transpose();
    assert_eq!(t.vertex_ids(), vec![0, 1, 2, 9]);
    assert!(t.contains_edge(&1, &0));
    assert!(t.contains_edge(&2, &1));
    assert!(!t.contains_edge(&0, &1));
    assert_eq!(g.edge_count(), 2, "input graph is left untouched");
}

#[test]
fn transposing_twice_restores_the_edge_multiset() {
    let mut g: DiGraph = DiGraph::new();
    g.add_path(&[0, 1, 2, 0], 4);
    g.add_edge(Edge::new(0, 1, 4));
    g.add_edge(Edge::new(3, 3, -1));
    assert_eq!(sorted_edges(&g.transpose().transpose()), sorted_edges(&g));

    let mut u: UnGraph = UnGraph::new();
    u.add_path(&[0, 1, 2], 1);
    assert_eq!(sorted_edges(&u.transpose()), sorted_edges(&u));
}

#[test]
fn vertex_indices_round_trip() {
    let mut g: Graph<&str, f64> = Graph::new();
    g.add_edge(Edge::new("a", "b", 0.5));
    let b = g.vertex_ix(&"b").expect("b is registered");
    assert_eq!(g.vertex_by_ix(b), Some(&"b"));
    assert_eq!(g.vertex_ix(&"c"), None);
    let a = g.vertex_ix(&"a").expect("a is registered");
    let out: Vec<usize> = g.out_edges_ix(a).iter().map(|e| e.target_ix()).collect();
    assert_eq!(out, vec![b]);
    assert!(g.out_edges_ix(99).is_empty());
}
