//! Minimum and maximum spanning trees.
//!
//! Both constructions return a new undirected graph holding every input vertex and the
//! chosen edges. Kruskal covers all components and so yields a spanning forest on a
//! disconnected input. Prim only spans the component of the first vertex.

use crate::graphlib::{DisjointSet, Edge, Error, Result, UnGraph, Vertex, Weight, dedup_edges};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpanningTreeOrder {
    #[default]
    Minimum,
    Maximum,
}

fn require_vertices<V, W>(g: &UnGraph<V, W>) -> Result<()>
where
    V: Vertex,
    W: Weight,
{
    if g.is_empty() {
        return Err(Error::invalid_state("spanning tree of an empty graph"));
    }
    Ok(())
}

/// Kruskal: deduplicated edges sorted by weight (stable, so equal weights keep their stored
/// order), each accepted iff its endpoints are not yet connected.
///
/// Deduplication keeps the first stored edge between two vertices, which may be heavier
/// than a later parallel edge. Prim sees every parallel edge, so on a multigraph the two
/// trees can differ in weight.
pub fn kruskal<V, W>(g: &UnGraph<V, W>, order: SpanningTreeOrder) -> Result<UnGraph<V, W>>
where
    V: Vertex,
    W: Weight,
{
    require_vertices(g)?;

    let mut edges = dedup_edges(&g.edge_list());
    match order {
        SpanningTreeOrder::Minimum => edges.sort_by(|a, b| a.weight.compare(&b.weight)),
        SpanningTreeOrder::Maximum => edges.sort_by(|a, b| b.weight.compare(&a.weight)),
    }

    let mut ds: DisjointSet<V> = g.vertices().cloned().collect();
    let mut tree: UnGraph<V, W> = UnGraph::with_vertices(g.vertices().cloned());
    for e in edges {
        if ds.connected(&e.v, &e.w)? {
            continue;
        }
        ds.union(&e.v, &e.w)?;
        tree.add_edge(e);
    }

    if ds.component_count() > 1 {
        tracing::debug!(
            components = ds.component_count(),
            "kruskal: input is disconnected, returning a spanning forest"
        );
    }
    Ok(tree)
}

pub fn kruskal_minimum_spanning_tree<V, W>(g: &UnGraph<V, W>) -> Result<UnGraph<V, W>>
where
    V: Vertex,
    W: Weight,
{
    kruskal(g, SpanningTreeOrder::Minimum)
}

pub fn kruskal_maximum_spanning_tree<V, W>(g: &UnGraph<V, W>) -> Result<UnGraph<V, W>>
where
    V: Vertex,
    W: Weight,
{
    kruskal(g, SpanningTreeOrder::Maximum)
}

/// A candidate edge in Prim's queue: the `pos`-th outgoing edge of vertex `v`.
#[derive(Debug, Clone, Copy)]
struct Candidate<W> {
    weight: W,
    seq: usize,
    v: usize,
    pos: usize,
}

impl<W: Weight> PartialEq for Candidate<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for Candidate<W> {}

impl<W: Weight> PartialOrd for Candidate<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Ord for Candidate<W> {
    // Reversed for a min-heap: lightest first, then earliest pushed.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .compare(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Prim, starting from the first vertex. Ties between equal weights go to the edge that
/// entered the queue first.
pub fn prim_minimum_spanning_tree<V, W>(g: &UnGraph<V, W>) -> Result<UnGraph<V, W>>
where
    V: Vertex,
    W: Weight,
{
    require_vertices(g)?;

    let n = g.vertex_count();
    let mut tree: UnGraph<V, W> = UnGraph::with_vertices(g.vertices().cloned());
    let mut visited = vec![false; n];
    let mut heap: BinaryHeap<Candidate<W>> = BinaryHeap::new();
    let mut seq = 0usize;

    let mut push_edges = |heap: &mut BinaryHeap<Candidate<W>>, v: usize| {
        for (pos, e) in g.out_edges_ix(v).iter().enumerate() {
            heap.push(Candidate {
                weight: e.edge().weight,
                seq,
                v,
                pos,
            });
            seq += 1;
        }
    };

    visited[0] = true;
    let mut spanned = 1usize;
    push_edges(&mut heap, 0);

    while let Some(c) = heap.pop() {
        let Some(entry) = g.out_edges_ix(c.v).get(c.pos) else {
            debug_assert!(false, "prim candidate points past the edge list");
            continue;
        };
        let w = entry.target_ix();
        if visited[w] {
            continue;
        }
        visited[w] = true;
        spanned += 1;
        tree.add_edge(entry.edge().clone());
        push_edges(&mut heap, w);
    }

    if spanned < n {
        tracing::debug!(
            spanned,
            vertices = n,
            "prim: only the first vertex's component is spanned"
        );
    }
    Ok(tree)
}

/// Total weight of a spanning graph, counting each undirected edge once.
pub fn spanning_tree_weight<V, W>(g: &UnGraph<V, W>) -> W
where
    V: Vertex,
    W: Weight,
{
    dedup_edges(&g.edge_list())
        .iter()
        .fold(W::ZERO, |acc, e: &Edge<V, W>| acc.relax_add(e.weight))
}
