#![forbid(unsafe_code)]

//! Classical graph algorithms over `walrus-graphlib` containers.
//!
//! Every algorithm reads its input graph and owns its own working state (visited flags,
//! distance tables, queues). Inputs are never mutated; spanning trees and transposes come
//! back as new graphs.

pub use walrus_graphlib as graphlib;
pub use walrus_graphlib::{
    DiGraph, DisjointSet, Edge, Error, Graph, Result, UnGraph, Vertex, Weight, dedup_edges,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod bipartite;
pub mod components;
pub mod cycle;
pub mod mst;
pub mod scc;
pub mod shortest_path;
pub mod topo;
pub mod traversal;

pub use bipartite::{Bipartition, bipartition, is_bipartite};
pub use components::{dfs_connected_components, union_find_connected_components};
pub use mst::{
    SpanningTreeOrder, kruskal, kruskal_maximum_spanning_tree, kruskal_minimum_spanning_tree,
    prim_minimum_spanning_tree, spanning_tree_weight,
};
pub use scc::kosaraju_scc;
pub use shortest_path::{
    AllPairsShortestPaths, PathOutcome, ShortestPath, bellman_ford, bfs_shortest_path, dijkstra,
    floyd_warshall,
};
pub use topo::{dfs_topological_sort, kahn_topological_sort, try_topological_sort};
pub use traversal::{BreadthFirst, DepthFirst, breadth_first, depth_first, depth_first_all};
