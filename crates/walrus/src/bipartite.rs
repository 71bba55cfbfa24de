//! Two-coloring check for undirected graphs.

use crate::graphlib::{UnGraph, Vertex, Weight};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bipartition<V> {
    pub left: Vec<V>,
    pub right: Vec<V>,
}

/// Splits the vertices into two sides so that every edge crosses sides.
///
/// Each uncolored vertex (in vertex order) starts a DFS on the left side; neighbours take
/// the opposite side. Returns `None` as soon as an edge joins two vertices of the same
/// side, which includes any self loop.
pub fn bipartition<V, W>(g: &UnGraph<V, W>) -> Option<Bipartition<V>>
where
    V: Vertex,
    W: Weight,
{
    let ids = g.vertex_ids();
    let mut side: Vec<Option<bool>> = vec![None; ids.len()];

    for root in 0..ids.len() {
        if side[root].is_some() {
            continue;
        }
        side[root] = Some(true);
        let mut stack: Vec<usize> = vec![root];
        while let Some(v) = stack.pop() {
            let Some(color) = side[v] else {
                debug_assert!(false, "stacked vertex has no side");
                continue;
            };
            for e in g.out_edges_ix(v) {
                let w = e.target_ix();
                match side[w] {
                    None => {
                        side[w] = Some(!color);
                        stack.push(w);
                    }
                    Some(c) if c == color => {
                        tracing::trace!(v = ?ids[v], w = ?ids[w], "edge joins two vertices of one side");
                        return None;
                    }
                    Some(_) => {}
                }
            }
        }
    }

    let mut out = Bipartition {
        left: Vec::new(),
        right: Vec::new(),
    };
    for (v, s) in ids.into_iter().zip(side) {
        if s == Some(true) {
            out.left.push(v);
        } else {
            out.right.push(v);
        }
    }
    Some(out)
}

pub fn is_bipartite<V, W>(g: &UnGraph<V, W>) -> bool
where
    V: Vertex,
    W: Weight,
{
    bipartition(g).is_some()
}
