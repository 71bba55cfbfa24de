//! Shortest paths.
//!
//! - [`bfs_shortest_path`]: unweighted, distance is the number of edges.
//! - [`dijkstra`]: non-negative weights. Negative weights give unspecified results.
//! - [`bellman_ford`]: arbitrary weights, reports negative cycles reachable from the source.
//! - [`floyd_warshall`]: all pairs, arbitrary weights, reports negative cycles.
//!
//! "No path" and "negative cycle" are ordinary outcomes and come back as [`PathOutcome`]
//! variants. Only an unknown source or destination vertex is an error.

mod bellman_ford;
mod bfs;
mod dijkstra;
mod floyd_warshall;

pub use bellman_ford::bellman_ford;
pub use bfs::bfs_shortest_path;
pub use dijkstra::dijkstra;
pub use floyd_warshall::{AllPairsShortestPaths, floyd_warshall};

use crate::graphlib::{Error, Result, Vertex, Weight};
use crate::traversal::IndexMap;

#[derive(Debug, Clone, PartialEq)]
pub enum PathOutcome<T> {
    Reached(T),
    Unreachable,
    NegativeCycle,
}

impl<T> PathOutcome<T> {
    pub fn reached(self) -> Option<T> {
        match self {
            Self::Reached(t) => Some(t),
            Self::Unreachable | Self::NegativeCycle => None,
        }
    }

    pub fn is_reached(&self) -> bool {
        matches!(self, Self::Reached(_))
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable)
    }

    pub fn has_negative_cycle(&self) -> bool {
        matches!(self, Self::NegativeCycle)
    }

    /// `Ok(None)` when unreachable; a negative cycle becomes [`Error::Undefined`].
    pub fn into_result(self) -> Result<Option<T>> {
        match self {
            Self::Reached(t) => Ok(Some(t)),
            Self::Unreachable => Ok(None),
            Self::NegativeCycle => Err(Error::Undefined {
                reason: "shortest path through a negative-weight cycle",
            }),
        }
    }
}

/// A source-to-target shortest path plus the parent links it was read from.
#[derive(Debug, Clone)]
pub struct ShortestPath<V, W> {
    source: V,
    target: V,
    distance: W,
    path: Vec<V>,
    parents: IndexMap<V, V>,
}

impl<V, W: Copy> ShortestPath<V, W> {
    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn target(&self) -> &V {
        &self.target
    }

    pub fn distance(&self) -> W {
        self.distance
    }

    /// Vertices from source to target, both included.
    pub fn path(&self) -> &[V] {
        &self.path
    }

    pub fn into_path(self) -> Vec<V> {
        self.path
    }

    /// Parent of every vertex settled or relaxed during the search, keyed in vertex order.
    pub fn parents(&self) -> &IndexMap<V, V> {
        &self.parents
    }
}

/// Walks parent links from `dst` back to `src`. `None` if the chain breaks or loops.
fn trace_back(parent: &[Option<usize>], src: usize, dst: usize) -> Option<Vec<usize>> {
    let mut path: Vec<usize> = vec![dst];
    let mut x = dst;
    while x != src {
        if path.len() > parent.len() {
            return None;
        }
        x = parent[x]?;
        path.push(x);
    }
    path.reverse();
    Some(path)
}

fn build_path<V, W>(
    ids: &[V],
    parent: &[Option<usize>],
    src: usize,
    dst: usize,
    distance: W,
) -> Option<ShortestPath<V, W>>
where
    V: Vertex,
    W: Weight,
{
    let path = trace_back(parent, src, dst)?;
    let parents: IndexMap<V, V> = parent
        .iter()
        .enumerate()
        .filter_map(|(v, p)| p.map(|p| (ids[v].clone(), ids[p].clone())))
        .collect();
    Some(ShortestPath {
        source: ids[src].clone(),
        target: ids[dst].clone(),
        distance,
        path: path.into_iter().map(|ix| ids[ix].clone()).collect(),
        parents,
    })
}
