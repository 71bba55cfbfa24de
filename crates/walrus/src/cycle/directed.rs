use super::find_back_edge;
use crate::graphlib::{DiGraph, DisjointSet, Vertex, Weight};

/// The first cycle found, as `w, ..., v, w` where `v -> w` is the back edge.
pub fn find_cycle<V, W>(g: &DiGraph<V, W>) -> Option<Vec<V>>
where
    V: Vertex,
    W: Weight,
{
    let cycle = find_back_edge(g, false)?;
    let ids = g.vertex_ids();
    Some(cycle.into_iter().map(|ix| ids[ix].clone()).collect())
}

pub fn has_cycle<V, W>(g: &DiGraph<V, W>) -> bool
where
    V: Vertex,
    W: Weight,
{
    find_back_edge(g, false).is_some()
}

/// Single pass over the stored edges with a disjoint set, ignoring edge direction.
///
/// This flags any cycle of the underlying undirected graph, so `true` does not prove a
/// directed cycle exists (`0 -> 1, 0 -> 2, 1 -> 2` is reported). A `false` answer does
/// prove the graph is acyclic.
pub fn has_cycle_union_find<V, W>(g: &DiGraph<V, W>) -> bool
where
    V: Vertex,
    W: Weight,
{
    let mut ds: DisjointSet<V> = g.vertices().cloned().collect();
    for e in g.all_edges() {
        match ds.connected(&e.v, &e.w) {
            Ok(true) => return true,
            Ok(false) => {
                if ds.union(&e.v, &e.w).is_err() {
                    debug_assert!(false, "edge endpoint missing from disjoint set");
                }
            }
            Err(_) => debug_assert!(false, "edge endpoint missing from disjoint set"),
        }
    }
    false
}
