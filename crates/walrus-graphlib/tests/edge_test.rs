use walrus_graphlib::{Edge, UnGraph, dedup_edges};

#[test]
fn undirected_eq_ignores_orientation_and_weight() {
    let a: Edge<usize, i64> = Edge::new(0, 1, 3);
    assert!(a.undirected_eq(&Edge::new(1, 0, 9)));
    assert!(a.undirected_eq(&a.reversed()));
    assert!(!a.undirected_eq(&Edge::new(0, 2, 3)));
    assert_ne!(a, a.reversed());
}

#[test]
fn unit_edges_weigh_one() {
    let e: Edge<usize, f64> = Edge::unit(0, 1);
    assert_eq!(e.weight, 1.0);
}

#[test]
fn dedup_keeps_the_first_edge_per_unordered_pair() {
    let edges: Vec<Edge<usize, i64>> = vec![
        Edge::new(0, 1, 5),
        Edge::new(1, 0, 5),
        Edge::new(1, 2, 1),
        Edge::new(0, 1, 2),
        Edge::new(2, 1, 8),
    ];
    assert_eq!(
        dedup_edges(&edges),
        vec![Edge::new(0, 1, 5), Edge::new(1, 2, 1)]
    );
}

#[test]
fn dedup_is_idempotent() {
    let mut g: UnGraph = UnGraph::new();
    g.add_path(&[0, 1, 2, 3, 0], 1);
    g.add_edge(Edge::new(0, 2, 4));
    let once = dedup_edges(&g.edge_list());
    assert_eq!(once.len(), 5);
    assert_eq!(dedup_edges(&once), once);
}
