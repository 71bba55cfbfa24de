use super::find_back_edge;
use crate::graphlib::{DisjointSet, UnGraph, Vertex, Weight, dedup_edges};

/// The first cycle found by DFS, as `w, ..., v, w`.
///
/// Every edge back to a vertex's tree parent is skipped, so parallel edges between two
/// vertices are not reported as a cycle (matching the deduplicated view used by
/// [`has_cycle_union_find`]). Self loops are cycles.
pub fn find_cycle<V, W>(g: &UnGraph<V, W>) -> Option<Vec<V>>
where
    V: Vertex,
    W: Weight,
{
    let cycle = find_back_edge(g, true)?;
    let ids = g.vertex_ids();
    Some(cycle.into_iter().map(|ix| ids[ix].clone()).collect())
}

pub fn has_cycle<V, W>(g: &UnGraph<V, W>) -> bool
where
    V: Vertex,
    W: Weight,
{
    find_back_edge(g, true).is_some()
}

/// Deduplicates the edges, then reports a cycle as soon as an edge joins two vertices that
/// are already connected. Edges are processed in stored order.
pub fn has_cycle_union_find<V, W>(g: &UnGraph<V, W>) -> bool
where
    V: Vertex,
    W: Weight,
{
    let mut ds: DisjointSet<V> = g.vertices().cloned().collect();
    for e in dedup_edges(&g.edge_list()) {
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
