//! Topological sorting of directed acyclic graphs.
//!
//! Both variants return an empty order for a cyclic graph. They may disagree on the order
//! itself; each result is a valid topological order.

use crate::cycle;
use crate::graphlib::{DiGraph, Error, Result, Vertex, Weight};
use crate::traversal::postorder_ix;
use std::collections::VecDeque;

/// Reverse of the DFS postorder taken over every vertex.
pub fn dfs_topological_sort<V, W>(g: &DiGraph<V, W>) -> Vec<V>
where
    V: Vertex,
    W: Weight,
{
    if cycle::directed::has_cycle(g) {
        tracing::debug!(vertices = g.vertex_count(), "dfs topological sort: graph has a cycle");
        return Vec::new();
    }
    reverse_postorder(g)
}

fn reverse_postorder<V, W>(g: &DiGraph<V, W>) -> Vec<V>
where
    V: Vertex,
    W: Weight,
{
    let ids = g.vertex_ids();
    postorder_ix(g)
        .into_iter()
        .rev()
        .map(|ix| ids[ix].clone())
        .collect()
}

/// Kahn's algorithm. Zero-indegree vertices are queued in vertex order.
///
/// A cycle leaves some vertices with positive indegree forever; when fewer than all
/// vertices are emitted the result is empty.
pub fn kahn_topological_sort<V, W>(g: &DiGraph<V, W>) -> Vec<V>
where
    V: Vertex,
    W: Weight,
{
    let ids = g.vertex_ids();
    let n = ids.len();
    let mut indegree: Vec<usize> = vec![0; n];
    for v in 0..n {
        for e in g.out_edges_ix(v) {
            indegree[e.target_ix()] += 1;
        }
    }

    let mut queue: VecDeque<usize> = (0..n).filter(|&v| indegree[v] == 0).collect();
    let mut order: Vec<usize> = Vec::with_capacity(n);
    while let Some(v) = queue.pop_front() {
        order.push(v);
        for e in g.out_edges_ix(v) {
            let w = e.target_ix();
            indegree[w] -= 1;
            if indegree[w] == 0 {
                queue.push_back(w);
            }
        }
    }

    if order.len() < n {
        tracing::debug!(
            emitted = order.len(),
            vertices = n,
            "kahn topological sort: graph has a cycle"
        );
        return Vec::new();
    }
    order.into_iter().map(|ix| ids[ix].clone()).collect()
}

/// Like [`dfs_topological_sort`], but a cyclic graph is an [`Error::Undefined`].
pub fn try_topological_sort<V, W>(g: &DiGraph<V, W>) -> Result<Vec<V>>
where
    V: Vertex,
    W: Weight,
{
    if cycle::directed::has_cycle(g) {
        return Err(Error::Undefined {
            reason: "topological order of a cyclic graph",
        });
    }
    Ok(reverse_postorder(g))
}

/// True when `order` lists every vertex exactly once and every edge points forward.
pub fn is_topological_order<V, W>(g: &DiGraph<V, W>, order: &[V]) -> bool
where
    V: Vertex,
    W: Weight,
{
    if order.len() != g.vertex_count() {
        return false;
    }
    let mut position: Vec<Option<usize>> = vec![None; g.vertex_count()];
    for (i, v) in order.iter().enumerate() {
        let Some(ix) = g.vertex_ix(v) else {
            return false;
        };
        if position[ix].replace(i).is_some() {
            return false;
        }
    }
    g.all_edges().all(|e| {
        let from = g.vertex_ix(&e.v).and_then(|ix| position[ix]);
        let to = g.vertex_ix(&e.w).and_then(|ix| position[ix]);
        matches!((from, to), (Some(a), Some(b)) if a < b)
    })
}
