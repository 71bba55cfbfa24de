//! Strongly connected components (Kosaraju).
//!
//! The first pass takes a DFS postorder over the whole graph. The second pass walks the
//! transposed graph, launching from vertices in reverse postorder; every launch stays
//! inside exactly one component.

use crate::graphlib::{DiGraph, Vertex, Weight};
use crate::traversal::{dfs_ix, postorder_ix};

/// Components in discovery order; the position in the returned list is the component id.
pub fn kosaraju_scc<V, W>(g: &DiGraph<V, W>) -> Vec<Vec<V>>
where
    V: Vertex,
    W: Weight,
{
    let postorder = postorder_ix(g);
    // `transpose` keeps the vertex order, so indices agree between the two graphs.
    let transposed = g.transpose();
    let ids = g.vertex_ids();

    let mut visited = vec![false; ids.len()];
    let mut components: Vec<Vec<V>> = Vec::new();
    for &start in postorder.iter().rev() {
        if visited[start] {
            continue;
        }
        let mut comp: Vec<V> = Vec::new();
        dfs_ix(
            &transposed,
            start,
            &mut visited,
            |v, _| comp.push(ids[v].clone()),
            |_| {},
        );
        components.push(comp);
    }

    tracing::trace!(components = components.len(), "kosaraju");
    components
}

/// Component id of every vertex, in vertex order.
pub fn component_ids<V, W>(g: &DiGraph<V, W>) -> Vec<(V, usize)>
where
    V: Vertex,
    W: Weight,
{
    let mut id_of: Vec<usize> = vec![0; g.vertex_count()];
    for (id, comp) in kosaraju_scc(g).iter().enumerate() {
        for v in comp {
            if let Some(ix) = g.vertex_ix(v) {
                id_of[ix] = id;
            }
        }
    }
    g.vertices().cloned().zip(id_of).collect()
}
