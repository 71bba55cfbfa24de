//! Connected components of an undirected graph.
//!
//! Two constructions yield the same partition: one DFS launch per component, or a
//! disjoint set unioned along every edge and grouped by root.

use crate::graphlib::{DisjointSet, UnGraph, Vertex, Weight};
use crate::traversal::{IndexMap, dfs_ix};

/// Components indexed by launch order; members appear in DFS discovery order.
pub fn dfs_connected_components<V, W>(g: &UnGraph<V, W>) -> Vec<Vec<V>>
where
    V: Vertex,
    W: Weight,
{
    let ids = g.vertex_ids();
    let mut visited = vec![false; ids.len()];
    let mut out: Vec<Vec<V>> = Vec::new();

    for start in 0..ids.len() {
        if visited[start] {
            continue;
        }
        let mut comp: Vec<V> = Vec::new();
        dfs_ix(
            g,
            start,
            &mut visited,
            |v, _| comp.push(ids[v].clone()),
            |_| {},
        );
        out.push(comp);
    }

    tracing::trace!(components = out.len(), "dfs connected components");
    out
}

/// Components keyed by their disjoint-set root, in order of first member.
pub fn union_find_connected_components<V, W>(g: &UnGraph<V, W>) -> IndexMap<V, Vec<V>>
where
    V: Vertex,
    W: Weight,
{
    let mut ds: DisjointSet<V> = g.vertices().cloned().collect();
    for e in g.all_edges() {
        if ds.union(&e.v, &e.w).is_err() {
            debug_assert!(false, "edge endpoint missing from disjoint set");
        }
    }

    let mut out: IndexMap<V, Vec<V>> = IndexMap::default();
    for v in g.vertices() {
        let Ok(root) = ds.find(v) else {
            debug_assert!(false, "vertex missing from disjoint set");
            continue;
        };
        out.entry(root).or_default().push(v.clone());
    }

    tracing::trace!(components = out.len(), "union-find connected components");
    out
}

pub fn component_count<V, W>(g: &UnGraph<V, W>) -> usize
where
    V: Vertex,
    W: Weight,
{
    let mut ds: DisjointSet<V> = g.vertices().cloned().collect();
    for e in g.all_edges() {
        if ds.union(&e.v, &e.w).is_err() {
            debug_assert!(false, "edge endpoint missing from disjoint set");
        }
    }
    ds.component_count()
}
