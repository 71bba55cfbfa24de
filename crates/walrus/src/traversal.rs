//! Depth-first and breadth-first walks.
//!
//! Both walks follow each vertex's edge list in insertion order. DFS runs on an explicit
//! stack of `(vertex, next edge position)` frames, so traversal depth is bounded by heap
//! memory rather than the call stack.

use crate::graphlib::{Direction, Error, Graph, Result, Vertex, Weight};
use rustc_hash::FxBuildHasher;
use std::collections::VecDeque;

pub type IndexMap<K, V> = indexmap::IndexMap<K, V, FxBuildHasher>;

/// Output of a depth-first walk.
#[derive(Debug, Clone)]
pub struct DepthFirst<V> {
    /// Vertices in discovery order.
    pub preorder: Vec<V>,
    /// Vertices in the order their adjacency scan finished.
    pub postorder: Vec<V>,
    /// Tree parent of every non-root vertex; the first discoverer wins.
    pub parent: IndexMap<V, V>,
}

/// Output of a breadth-first walk.
#[derive(Debug, Clone)]
pub struct BreadthFirst<V> {
    /// Vertices in dequeue order.
    pub order: Vec<V>,
    pub parent: IndexMap<V, V>,
    /// Number of edges from the source.
    pub depth: IndexMap<V, usize>,
}

pub(crate) fn dfs_ix<V, W, D>(
    g: &Graph<V, W, D>,
    start: usize,
    visited: &mut [bool],
    mut discover: impl FnMut(usize, Option<usize>),
    mut finish: impl FnMut(usize),
) where
    V: Vertex,
    W: Weight,
    D: Direction,
{
    if visited[start] {
        return;
    }
    visited[start] = true;
    discover(start, None);

    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    while let Some(frame) = stack.last_mut() {
        let (v, pos) = *frame;
        let edges = g.out_edges_ix(v);
        if pos < edges.len() {
            frame.1 += 1;
            let w = edges[pos].target_ix();
            if !visited[w] {
                visited[w] = true;
                discover(w, Some(v));
                stack.push((w, 0));
            }
        } else {
            stack.pop();
            finish(v);
        }
    }
}

/// Postorder of a DFS launched from every unvisited vertex, in vertex order.
pub(crate) fn postorder_ix<V, W, D>(g: &Graph<V, W, D>) -> Vec<usize>
where
    V: Vertex,
    W: Weight,
    D: Direction,
{
    let n = g.vertex_count();
    let mut visited = vec![false; n];
    let mut postorder: Vec<usize> = Vec::with_capacity(n);
    for v in 0..n {
        dfs_ix(g, v, &mut visited, |_, _| {}, |u| postorder.push(u));
    }
    postorder
}

pub(crate) struct BfsTrace {
    pub(crate) order: Vec<usize>,
    pub(crate) parent: Vec<Option<usize>>,
    pub(crate) depth: Vec<Option<usize>>,
    pub(crate) reached_stop: bool,
}

/// Level-order walk from `source`. Vertices are marked when enqueued, so each is queued
/// at most once. Stops as soon as `stop_at` is dequeued.
pub(crate) fn bfs_ix<V, W, D>(g: &Graph<V, W, D>, source: usize, stop_at: Option<usize>) -> BfsTrace
where
    V: Vertex,
    W: Weight,
    D: Direction,
{
    let n = g.vertex_count();
    let mut trace = BfsTrace {
        order: Vec::new(),
        parent: vec![None; n],
        depth: vec![None; n],
        reached_stop: false,
    };
    let mut visited = vec![false; n];
    let mut queue: VecDeque<usize> = VecDeque::new();
    visited[source] = true;
    trace.depth[source] = Some(0);
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        trace.order.push(v);
        if stop_at == Some(v) {
            trace.reached_stop = true;
            break;
        }
        let next_depth = trace.depth[v].map(|d| d + 1);
        g.for_each_out_edge_ix(v, |w, _| {
            if visited[w] {
                return;
            }
            visited[w] = true;
            trace.parent[w] = Some(v);
            trace.depth[w] = next_depth;
            queue.push_back(w);
        });
    }
    trace
}

/// Index of a caller-supplied vertex; unknown vertices are [`Error::NotFound`].
pub(crate) fn require_ix<V, W, D>(g: &Graph<V, W, D>, v: &V) -> Result<usize>
where
    V: Vertex,
    W: Weight,
    D: Direction,
{
    g.vertex_ix(v).ok_or_else(|| Error::not_found(v))
}

/// Depth-first walk from each of `roots` in turn, skipping roots already reached.
pub fn depth_first<V, W, D>(g: &Graph<V, W, D>, roots: &[V]) -> Result<DepthFirst<V>>
where
    V: Vertex,
    W: Weight,
    D: Direction,
{
    let root_ixs = roots
        .iter()
        .map(|r| require_ix(g, r))
        .collect::<Result<Vec<usize>>>()?;
    Ok(depth_first_from(g, root_ixs))
}

/// Depth-first walk covering every vertex, launching from each unvisited vertex in order.
pub fn depth_first_all<V, W, D>(g: &Graph<V, W, D>) -> DepthFirst<V>
where
    V: Vertex,
    W: Weight,
    D: Direction,
{
    depth_first_from(g, 0..g.vertex_count())
}

fn depth_first_from<V, W, D>(
    g: &Graph<V, W, D>,
    roots: impl IntoIterator<Item = usize>,
) -> DepthFirst<V>
where
    V: Vertex,
    W: Weight,
    D: Direction,
{
    let ids = g.vertex_ids();
    let mut visited = vec![false; ids.len()];
    let mut out = DepthFirst {
        preorder: Vec::new(),
        postorder: Vec::new(),
        parent: IndexMap::default(),
    };
    for root in roots {
        dfs_ix(
            g,
            root,
            &mut visited,
            |v, p| {
                out.preorder.push(ids[v].clone());
                if let Some(p) = p {
                    out.parent.insert(ids[v].clone(), ids[p].clone());
                }
            },
            |v| out.postorder.push(ids[v].clone()),
        );
    }
    out
}

pub fn breadth_first<V, W, D>(g: &Graph<V, W, D>, source: &V) -> Result<BreadthFirst<V>>
where
    V: Vertex,
    W: Weight,
    D: Direction,
{
    let src = require_ix(g, source)?;
    let ids = g.vertex_ids();
    let trace = bfs_ix(g, src, None);

    let mut out = BreadthFirst {
        order: Vec::with_capacity(trace.order.len()),
        parent: IndexMap::default(),
        depth: IndexMap::default(),
    };
    for &v in &trace.order {
        out.order.push(ids[v].clone());
        if let Some(p) = trace.parent[v] {
            out.parent.insert(ids[v].clone(), ids[p].clone());
        }
        if let Some(d) = trace.depth[v] {
            out.depth.insert(ids[v].clone(), d);
        }
    }
    Ok(out)
}
