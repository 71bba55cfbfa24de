//! Weighted edges.
//!
//! An edge is an ordered `(v, w)` pair plus a weight. Undirected graphs store both
//! orientations, so [`Edge::undirected_eq`] treats `(v, w)` and `(w, v)` as the same edge.

use crate::graph::Vertex;
use crate::weight::Weight;
use rustc_hash::FxBuildHasher;

type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<V, W> {
    pub v: V,
    pub w: V,
    pub weight: W,
}

impl<V, W> Edge<V, W> {
    pub fn new(v: V, w: V, weight: W) -> Self {
        Self { v, w, weight }
    }
}

impl<V, W: Weight> Edge<V, W> {
    pub fn unit(v: V, w: V) -> Self {
        Self::new(v, w, W::ONE)
    }
}

impl<V: Clone, W: Copy> Edge<V, W> {
    /// The same edge with source and destination swapped.
    pub fn reversed(&self) -> Self {
        Self {
            v: self.w.clone(),
            w: self.v.clone(),
            weight: self.weight,
        }
    }
}

impl<V: PartialEq, W> Edge<V, W> {
    /// Endpoint equality ignoring orientation and weight.
    pub fn undirected_eq(&self, other: &Self) -> bool {
        (self.v == other.v && self.w == other.w) || (self.v == other.w && self.w == other.v)
    }

    pub fn is_self_loop(&self) -> bool {
        self.v == self.w
    }
}

/// Keeps the first edge seen between each unordered endpoint pair.
///
/// Later duplicates are dropped regardless of their weight.
pub fn dedup_edges<V, W>(edges: &[Edge<V, W>]) -> Vec<Edge<V, W>>
where
    V: Vertex,
    W: Copy,
{
    let mut seen: HashSet<(V, V)> = HashSet::default();
    let mut out: Vec<Edge<V, W>> = Vec::with_capacity(edges.len());
    for e in edges {
        let key = if e.v <= e.w {
            (e.v.clone(), e.w.clone())
        } else {
            (e.w.clone(), e.v.clone())
        };
        if seen.insert(key) {
            out.push(e.clone());
        }
    }
    out
}
