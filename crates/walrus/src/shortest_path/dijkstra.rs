use super::{PathOutcome, ShortestPath, build_path};
use crate::graphlib::{Direction, Graph, Result, Vertex, Weight};
use crate::traversal::require_ix;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A queued `(vertex, distance)` pair. Entries go stale when a shorter distance is pushed
/// later; they are skipped on pop.
#[derive(Debug, Clone)]
struct State<V, W> {
    dist: W,
    vertex: V,
    ix: usize,
}

impl<V: Ord, W: Weight> PartialEq for State<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: Ord, W: Weight> Eq for State<V, W> {}

impl<V: Ord, W: Weight> PartialOrd for State<V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord, W: Weight> Ord for State<V, W> {
    // Reversed for a min-heap: smallest distance first, then smallest vertex.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .compare(&self.dist)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Dijkstra with lazy deletion. Stops as soon as `dst` is popped.
///
/// Weights must be non-negative; negative edges are not detected or corrected.
pub fn dijkstra<V, W, D>(
    g: &Graph<V, W, D>,
    src: &V,
    dst: &V,
) -> Result<PathOutcome<ShortestPath<V, W>>>
where
    V: Vertex,
    W: Weight,
    D: Direction,
{
    let s = require_ix(g, src)?;
    let t = require_ix(g, dst)?;

    let ids = g.vertex_ids();
    let n = ids.len();
    let mut dist: Vec<W> = vec![W::INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap: BinaryHeap<State<V, W>> = BinaryHeap::new();

    dist[s] = W::ZERO;
    heap.push(State {
        dist: W::ZERO,
        vertex: ids[s].clone(),
        ix: s,
    });

    while let Some(State { dist: d, ix: v, .. }) = heap.pop() {
        if settled[v] || dist[v].less_than(d) {
            continue;
        }
        settled[v] = true;

        if v == t {
            tracing::trace!(target_vertex = ?ids[t], distance = ?d, "dijkstra reached destination");
            return Ok(match build_path(&ids, &parent, s, t, d) {
                Some(path) => PathOutcome::Reached(path),
                None => PathOutcome::Unreachable,
            });
        }

        for e in g.out_edges_ix(v) {
            let w = e.target_ix();
            let candidate = d.relax_add(e.edge().weight);
            if candidate.less_than(dist[w]) {
                dist[w] = candidate;
                parent[w] = Some(v);
                heap.push(State {
                    dist: candidate,
                    vertex: ids[w].clone(),
                    ix: w,
                });
            }
        }
    }

    Ok(PathOutcome::Unreachable)
}
