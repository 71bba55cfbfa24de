#![forbid(unsafe_code)]

//! Graph container APIs used by `walrus`.
//!
//! Two leaf structures live here: an adjacency-list [`Graph`] typed by direction, and a
//! [`DisjointSet`] with path compression and union by rank. Neither depends on the other;
//! the algorithms in `walrus` compose them.

pub mod disjoint_set;
pub mod edge;
pub mod error;
pub mod graph;
pub mod weight;

pub use disjoint_set::DisjointSet;
pub use edge::{Edge, dedup_edges};
pub use error::{Error, Result};
pub use graph::{DiGraph, Directed, Direction, EdgeEntry, Graph, UnGraph, Undirected, Vertex};
pub use weight::Weight;
