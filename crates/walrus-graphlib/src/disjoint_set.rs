//! Union-find over arbitrary vertex keys.
//!
//! Path compression relinks every node visited by `find` directly to its root, and union by
//! rank hangs the shorter tree under the taller one. On equal ranks the first argument's
//! root goes under the second argument's root, whose rank then grows by one.

use crate::error::{Error, Result};
use crate::graph::Vertex;
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone)]
pub struct DisjointSet<V> {
    elements: Vec<V>,
    index: HashMap<V, usize>,
    parent: Vec<usize>,
    rank: Vec<u32>,
    components: usize,
}

impl<V: Vertex> Default for DisjointSet<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> DisjointSet<V> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            index: HashMap::default(),
            parent: Vec::new(),
            rank: Vec::new(),
            components: 0,
        }
    }

    /// Adds `v` as a singleton component of rank 1.
    ///
    /// Re-adding a known vertex is rejected with [`Error::InvalidState`] and leaves the
    /// structure untouched.
    pub fn add_vertex(&mut self, v: V) -> Result<()> {
        if self.index.contains_key(&v) {
            return Err(Error::invalid_state(format!(
                "vertex {v:?} is already in the disjoint set"
            )));
        }
        self.push_singleton(v);
        Ok(())
    }

    fn push_singleton(&mut self, v: V) {
        let ix = self.elements.len();
        self.index.insert(v.clone(), ix);
        self.elements.push(v);
        self.parent.push(ix);
        self.rank.push(1);
        self.components += 1;
    }

    pub fn contains(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn component_count(&self) -> usize {
        self.components
    }

    pub fn rank(&self, v: &V) -> Option<u32> {
        self.index.get(v).map(|&ix| self.rank[ix])
    }

    /// The stored parent link of `v`, without compressing anything.
    pub fn parent(&self, v: &V) -> Option<&V> {
        self.index
            .get(v)
            .map(|&ix| &self.elements[self.parent[ix]])
    }

    fn ix_of(&self, v: &V) -> Result<usize> {
        self.index.get(v).copied().ok_or_else(|| Error::not_found(v))
    }

    fn root_ix(&mut self, ix: usize) -> usize {
        let mut root = ix;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = ix;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    pub fn find(&mut self, v: &V) -> Result<V> {
        let ix = self.ix_of(v)?;
        let root = self.root_ix(ix);
        Ok(self.elements[root].clone())
    }

    /// Merges the components of `v` and `w`. A no-op when they are already connected.
    pub fn union(&mut self, v: &V, w: &V) -> Result<()> {
        let v_ix = self.ix_of(v)?;
        let w_ix = self.ix_of(w)?;
        let root_v = self.root_ix(v_ix);
        let root_w = self.root_ix(w_ix);
        if root_v == root_w {
            return Ok(());
        }
        if self.rank[root_v] <= self.rank[root_w] {
            self.parent[root_v] = root_w;
            if self.rank[root_v] == self.rank[root_w] {
                self.rank[root_w] += 1;
            }
        } else {
            self.parent[root_w] = root_v;
        }
        self.components -= 1;
        Ok(())
    }

    pub fn connected(&mut self, v: &V, w: &V) -> Result<bool> {
        let v_ix = self.ix_of(v)?;
        let w_ix = self.ix_of(w)?;
        Ok(self.root_ix(v_ix) == self.root_ix(w_ix))
    }
}

impl<V: Vertex> FromIterator<V> for DisjointSet<V> {
    /// Repeated vertices are skipped rather than reported.
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut set = Self::new();
        for v in iter {
            if !set.contains(&v) {
                set.push_singleton(v);
            }
        }
        set
    }
}
