use super::{PathOutcome, trace_back};
use crate::graphlib::{Direction, Graph, Vertex, Weight};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Distance matrix plus, for each pair `(i, j)`, the vertex right before `j` on the best
/// known `i -> j` path. Rows and columns follow the graph's vertex order.
#[derive(Debug, Clone)]
pub struct AllPairsShortestPaths<V, W> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    dist: Vec<Vec<W>>,
    last: Vec<Vec<Option<usize>>>,
}

impl<V, W> AllPairsShortestPaths<V, W>
where
    V: Vertex,
    W: Weight,
{
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn distance_matrix(&self) -> &[Vec<W>] {
        &self.dist
    }

    /// `None` when either vertex is unknown or `to` is unreachable from `from`.
    pub fn distance(&self, from: &V, to: &V) -> Option<W> {
        let i = *self.index.get(from)?;
        let j = *self.index.get(to)?;
        let d = self.dist[i][j];
        (!d.is_infinite()).then_some(d)
    }

    /// The vertex preceding `to` on the shortest `from -> to` path (`from` itself for a
    /// direct edge or the trivial path).
    pub fn last_intermediate(&self, from: &V, to: &V) -> Option<&V> {
        let i = *self.index.get(from)?;
        let j = *self.index.get(to)?;
        self.last[i][j].map(|k| &self.vertices[k])
    }

    /// Reconstructs the path by unwinding the last-vertex table from `to` back to `from`.
    pub fn path(&self, from: &V, to: &V) -> Option<Vec<V>> {
        let i = *self.index.get(from)?;
        let j = *self.index.get(to)?;
        if self.dist[i][j].is_infinite() {
            return None;
        }
        let path = trace_back(&self.last[i], i, j)?;
        Some(path.into_iter().map(|ix| self.vertices[ix].clone()).collect())
    }
}

/// Floyd-Warshall over every intermediate vertex in vertex order.
///
/// Parallel edges keep their minimum weight. The negative-cycle check (a negative diagonal
/// entry) runs after the full triple loop.
pub fn floyd_warshall<V, W, D>(g: &Graph<V, W, D>) -> PathOutcome<AllPairsShortestPaths<V, W>>
where
    V: Vertex,
    W: Weight,
    D: Direction,
{
    let vertices = g.vertex_ids();
    let n = vertices.len();
    let mut dist: Vec<Vec<W>> = vec![vec![W::INFINITY; n]; n];
    let mut last: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];

    for v in 0..n {
        dist[v][v] = W::ZERO;
        last[v][v] = Some(v);
    }
    for v in 0..n {
        for e in g.out_edges_ix(v) {
            let w = e.target_ix();
            let weight = e.edge().weight;
            if weight.less_than(dist[v][w]) {
                dist[v][w] = weight;
                last[v][w] = Some(v);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let d_ik = dist[i][k];
            if d_ik.is_infinite() {
                continue;
            }
            for j in 0..n {
                let candidate = d_ik.relax_add(dist[k][j]);
                if candidate.less_than(dist[i][j]) {
                    dist[i][j] = candidate;
                    last[i][j] = last[k][j];
                }
            }
        }
    }

    if (0..n).any(|i| dist[i][i].less_than(W::ZERO)) {
        tracing::debug!(vertices = n, "floyd-warshall: negative-weight cycle");
        return PathOutcome::NegativeCycle;
    }

    let index: HashMap<V, usize> = vertices
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, v)| (v, i))
        .collect();
    PathOutcome::Reached(AllPairsShortestPaths {
        vertices,
        index,
        dist,
        last,
    })
}
