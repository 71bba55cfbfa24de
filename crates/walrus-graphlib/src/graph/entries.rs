//! Adjacency storage entries for [`Graph`](super::Graph).

use crate::edge::Edge;

/// A stored outgoing edge with its target resolved to a vertex index.
#[derive(Debug, Clone)]
pub struct EdgeEntry<V, W> {
    pub(in crate::graph) edge: Edge<V, W>,
    pub(in crate::graph) w_ix: usize,
}

impl<V, W> EdgeEntry<V, W> {
    pub fn edge(&self) -> &Edge<V, W> {
        &self.edge
    }

    pub fn target_ix(&self) -> usize {
        self.w_ix
    }
}
