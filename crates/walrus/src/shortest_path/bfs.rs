use super::{PathOutcome, ShortestPath, build_path};
use crate::graphlib::{Direction, Graph, Result, Vertex, Weight};
use crate::traversal::{bfs_ix, require_ix};

/// Fewest-edges path from `src` to `dst`, ignoring weights.
///
/// The search stops the moment `dst` is dequeued.
pub fn bfs_shortest_path<V, W, D>(
    g: &Graph<V, W, D>,
    src: &V,
    dst: &V,
) -> Result<PathOutcome<ShortestPath<V, usize>>>
where
    V: Vertex,
    W: Weight,
    D: Direction,
{
    let s = require_ix(g, src)?;
    let t = require_ix(g, dst)?;

    let trace = bfs_ix(g, s, Some(t));
    if !trace.reached_stop {
        return Ok(PathOutcome::Unreachable);
    }
    let Some(hops) = trace.depth[t] else {
        debug_assert!(false, "dequeued vertex has no depth");
        return Ok(PathOutcome::Unreachable);
    };

    let ids = g.vertex_ids();
    Ok(match build_path(&ids, &trace.parent, s, t, hops) {
        Some(path) => PathOutcome::Reached(path),
        None => PathOutcome::Unreachable,
    })
}
