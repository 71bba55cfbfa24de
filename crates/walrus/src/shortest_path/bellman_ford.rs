use super::{PathOutcome, ShortestPath, build_path};
use crate::graphlib::{Direction, Graph, Result, Vertex, Weight};
use crate::traversal::require_ix;

/// One relaxation pass over every stored edge. Returns whether any distance improved.
fn relax_all<V, W, D>(g: &Graph<V, W, D>, dist: &mut [W], parent: &mut [Option<usize>]) -> bool
where
    V: Vertex,
    W: Weight,
    D: Direction,
{
    let mut changed = false;
    for v in 0..dist.len() {
        let d = dist[v];
        if d.is_infinite() {
            continue;
        }
        for e in g.out_edges_ix(v) {
            let w = e.target_ix();
            let candidate = d.relax_add(e.edge().weight);
            if candidate.less_than(dist[w]) {
                dist[w] = candidate;
                parent[w] = Some(v);
                changed = true;
            }
        }
    }
    changed
}

/// Bellman-Ford: `|V| - 1` relaxation passes, then one more to look for a negative cycle
/// reachable from `src`. When one exists no distance is reported, for any destination.
pub fn bellman_ford<V, W, D>(
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
    dist[s] = W::ZERO;

    for _ in 1..n {
        relax_all(g, &mut dist, &mut parent);
    }

    if dist[t].is_infinite() {
        return Ok(PathOutcome::Unreachable);
    }
    if relax_all(g, &mut dist, &mut parent) {
        tracing::debug!(source = ?ids[s], "bellman-ford: negative-weight cycle reachable from source");
        return Ok(PathOutcome::NegativeCycle);
    }

    Ok(match build_path(&ids, &parent, s, t, dist[t]) {
        Some(path) => PathOutcome::Reached(path),
        None => PathOutcome::Unreachable,
    })
}
