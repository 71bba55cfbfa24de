use walrus::components::{component_count, dfs_connected_components, union_find_connected_components};
use walrus::graphlib::{Edge, UnGraph};

fn ungraph(edges: &[(usize, usize)]) -> UnGraph {
    let mut g: UnGraph = UnGraph::new();
    for &(v, w) in edges {
        g.add_edge(Edge::unit(v, w));
    }
    g
}

fn normalize(mut groups: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    for g in &mut groups {
        g.sort();
    }
    groups.sort();
    groups
}

#[test]
fn dfs_components_follow_launch_order() {
    let mut g = ungraph(&[(0, 1), (1, 2), (3, 4)]);
    g.add_vertex(5);

    assert_eq!(
        dfs_connected_components(&g),
        vec![vec![0, 1, 2], vec![3, 4], vec![5]]
    );
}

#[test]
fn union_find_components_are_keyed_by_root() {
    let mut g = ungraph(&[(0, 1), (1, 2), (3, 4)]);
    g.add_vertex(5);

    let cc = union_find_connected_components(&g);
    assert_eq!(cc.keys().copied().collect::<Vec<_>>(), vec![1, 4, 5]);
    assert_eq!(cc.get(&1), Some(&vec![0, 1, 2]));
    assert_eq!(cc.get(&4), Some(&vec![3, 4]));
    assert_eq!(cc.get(&5), Some(&vec![5]));
    assert_eq!(component_count(&g), 3);
}

#[test]
fn both_constructions_agree_on_the_partition() {
    let g = ungraph(&[(7, 3), (3, 9), (1, 2), (2, 8), (8, 1), (4, 4), (5, 6), (6, 9)]);
    let by_dfs = normalize(dfs_connected_components(&g));
    let by_uf = normalize(union_find_connected_components(&g).into_values().collect());
    assert_eq!(by_dfs, by_uf);
    assert_eq!(by_dfs, vec![vec![1, 2, 8], vec![3, 5, 6, 7, 9], vec![4]]);
}

#[test]
fn empty_graph_has_no_components() {
    let g: UnGraph = UnGraph::new();
    assert!(dfs_connected_components(&g).is_empty());
    assert!(union_find_connected_components(&g).is_empty());
    assert_eq!(component_count(&g), 0);
}
