//! Adjacency-list weighted graph.
//!
//! Vertices are kept in first-seen order and each vertex owns its outgoing edges in
//! insertion order, so every traversal over a given graph is deterministic. Algorithms
//! address vertices by dense index (`vertex_ix` / `vertex_by_ix`) and only convert back to
//! `V` when producing results.

mod direction;
mod entries;

pub use direction::{Directed, Direction, Undirected};
pub use entries::EdgeEntry;

use crate::edge::Edge;
use crate::weight::Weight;
use rustc_hash::FxBuildHasher;
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Vertex identity. Any small, hashable, ordered key qualifies (`usize`, `&str`, `String`).
pub trait Vertex: Clone + Eq + Hash + Ord + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Ord + Debug {}

pub type DiGraph<V = usize, W = i64> = Graph<V, W, Directed>;
pub type UnGraph<V = usize, W = i64> = Graph<V, W, Undirected>;

#[derive(Debug, Clone)]
pub struct Graph<V, W, D = Directed> {
    vertices: Vec<V>,
    vertex_index: HashMap<V, usize>,
    adjacency: Vec<Vec<EdgeEntry<V, W>>>,
    edge_count: usize,
    _direction: PhantomData<D>,
}

impl<V, W, D> Default for Graph<V, W, D>
where
    V: Vertex,
    W: Weight,
    D: Direction,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W, D> Graph<V, W, D>
where
    V: Vertex,
    W: Weight,
    D: Direction,
{
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            vertex_index: HashMap::default(),
            adjacency: Vec::new(),
            edge_count: 0,
            _direction: PhantomData,
        }
    }

    /// Builds a graph whose vertex list starts with `vertices` (isolated ones included).
    pub fn with_vertices(vertices: impl IntoIterator<Item = V>) -> Self {
        let mut g = Self::new();
        for v in vertices {
            g.add_vertex(v);
        }
        g
    }

    pub fn is_directed(&self) -> bool {
        D::DIRECTED
    }

    fn ensure_vertex(&mut self, v: &V) -> usize {
        if let Some(&ix) = self.vertex_index.get(v) {
            return ix;
        }
        let ix = self.vertices.len();
        self.vertices.push(v.clone());
        self.vertex_index.insert(v.clone(), ix);
        self.adjacency.push(Vec::new());
        ix
    }

    fn push_entry(&mut self, edge: Edge<V, W>) {
        let v_ix = self.ensure_vertex(&edge.v);
        let w_ix = self.ensure_vertex(&edge.w);
        self.adjacency[v_ix].push(EdgeEntry { edge, w_ix });
        self.edge_count += 1;
    }

    pub fn add_vertex(&mut self, v: V) -> &mut Self {
        self.ensure_vertex(&v);
        self
    }

    /// Appends `e` to its source's edge list, registering unknown endpoints.
    ///
    /// Repeated calls store parallel edges. Undirected graphs also store `e.reversed()`
    /// at the destination, except for self loops which are stored once.
    pub fn add_edge(&mut self, e: Edge<V, W>) -> &mut Self {
        let reverse = if D::DIRECTED || e.is_self_loop() {
            None
        } else {
            Some(e.reversed())
        };
        self.push_entry(e);
        if let Some(r) = reverse {
            self.push_entry(r);
        }
        self
    }

    pub fn add_path(&mut self, vertices: &[V], weight: W) -> &mut Self {
        for pair in vertices.windows(2) {
            self.add_edge(Edge::new(pair[0].clone(), pair[1].clone(), weight));
        }
        self
    }

    pub fn has_vertex(&self, v: &V) -> bool {
        self.vertex_index.contains_key(v)
    }

    pub fn contains_edge(&self, v: &V, w: &V) -> bool {
        self.edges(v).any(|e| &e.w == w)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored edge entries; an undirected edge between distinct vertices counts twice.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    pub fn vertex_ids(&self) -> Vec<V> {
        self.vertices.clone()
    }

    /// Outgoing edges of `v` in insertion order; empty when `v` is unknown.
    pub fn edges(&self, v: &V) -> impl Iterator<Item = &Edge<V, W>> {
        let entries: &[EdgeEntry<V, W>] = match self.vertex_index.get(v) {
            Some(&ix) => &self.adjacency[ix],
            None => &[],
        };
        entries.iter().map(|e| &e.edge)
    }

    pub fn out_degree(&self, v: &V) -> usize {
        self.vertex_index
            .get(v)
            .map_or(0, |&ix| self.adjacency[ix].len())
    }

    /// Every stored edge, grouped by source in vertex order. Not deduplicated.
    pub fn all_edges(&self) -> impl Iterator<Item = &Edge<V, W>> {
        self.adjacency.iter().flatten().map(|e| &e.edge)
    }

    pub fn edge_list(&self) -> Vec<Edge<V, W>> {
        self.all_edges().cloned().collect()
    }

    /// A new graph with every stored edge reversed and the vertex order preserved.
    pub fn transpose(&self) -> Self {
        let mut t = Self::with_vertices(self.vertices.iter().cloned());
        for e in self.all_edges() {
            t.push_entry(e.reversed());
        }
        t
    }

    pub fn vertex_ix(&self, v: &V) -> Option<usize> {
        self.vertex_index.get(v).copied()
    }

    pub fn vertex_by_ix(&self, ix: usize) -> Option<&V> {
        self.vertices.get(ix)
    }

    pub fn out_edges_ix(&self, v_ix: usize) -> &[EdgeEntry<V, W>] {
        match self.adjacency.get(v_ix) {
            Some(entries) => entries,
            None => &[],
        }
    }

    pub fn for_each_out_edge_ix<F>(&self, v_ix: usize, mut f: F)
    where
        F: FnMut(usize, &Edge<V, W>),
    {
        for e in self.out_edges_ix(v_ix) {
            f(e.w_ix, &e.edge);
        }
    }
}
