//! Disjoint sets with weighted union.
//!
//! Elements live in an arena of `{parent, rank, next}` nodes. `rank` is the
//! size of the set rooted at a node, and a union hangs the smaller root under
//! the larger one, which keeps every parent chain O(log n) long. The `next`
//! links thread the members of each set into a list starting at its root, so
//! a set can be enumerated without scanning the whole arena.
//!
//! Path compression on `find` is optional; weighted union alone already
//! gives logarithmic finds.

use ahash::RandomState;
use arbor_common::types::VertexKey;
use arbor_common::utils::error::{Error, Result};
use indexmap::IndexSet;

#[derive(Debug, Clone, Copy)]
struct SetNode {
    parent: usize,
    rank: usize,
    next: Option<usize>,
}

/// A partition of keys into disjoint sets.
#[derive(Debug, Clone)]
pub struct DisjointSet<K: VertexKey> {
    keys: IndexSet<K, RandomState>,
    nodes: Vec<SetNode>,
    path_compression: bool,
    set_count: usize,
}

impl<K: VertexKey> Default for DisjointSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: VertexKey> DisjointSet<K> {
    /// Creates an empty partition without path compression.
    #[must_use]
    pub fn new() -> Self {
        Self {
            keys: IndexSet::default(),
            nodes: Vec::new(),
            path_compression: false,
            set_count: 0,
        }
    }

    /// Creates a partition with one singleton per key.
    pub fn from_keys(keys: impl IntoIterator<Item = K>) -> Self {
        let mut set = Self::new();
        for key in keys {
            set.make_singleton(key);
        }
        set
    }

    /// Enables or disables path compression during `find`.
    #[must_use]
    pub fn with_path_compression(mut self, enabled: bool) -> Self {
        self.path_compression = enabled;
        self
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no element was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of disjoint sets.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Adds `key` as a set of its own. Returns `false` if it was already
    /// present, in which case its current set is left untouched.
    pub fn make_singleton(&mut self, key: K) -> bool {
        let (index, inserted) = self.keys.insert_full(key);
        if inserted {
            self.nodes.push(SetNode {
                parent: index,
                rank: 1,
                next: None,
            });
            self.set_count += 1;
        }
        inserted
    }

    /// Returns the representative of the set containing `key`.
    pub fn find(&mut self, key: &K) -> Result<&K> {
        let index = self.index_of(key)?;
        let root = self.root(index);
        Ok(&self.keys[root])
    }

    /// Returns `true` if both keys are in the same set.
    pub fn same_set(&mut self, a: &K, b: &K) -> Result<bool> {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        Ok(self.root(a) == self.root(b))
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `false` if they already share a representative. Otherwise
    /// the root with the lower rank is attached under the other (ties keep
    /// `a`'s root) and the surviving root's rank becomes the sum.
    pub fn union(&mut self, a: &K, b: &K) -> Result<bool> {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        let (ra, rb) = (self.root(a), self.root(b));
        if ra == rb {
            return Ok(false);
        }

        let (winner, loser) = if self.nodes[ra].rank >= self.nodes[rb].rank {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.nodes[winner].rank += self.nodes[loser].rank;
        self.nodes[loser].parent = winner;

        // Splice the loser's member list in right after the winner
        let mut tail = loser;
        while let Some(next) = self.nodes[tail].next {
            tail = next;
        }
        self.nodes[tail].next = self.nodes[winner].next;
        self.nodes[winner].next = Some(loser);

        self.set_count -= 1;
        Ok(true)
    }

    /// Lists the members of the set containing `key`, representative first.
    pub fn members(&mut self, key: &K) -> Result<Vec<K>> {
        let index = self.index_of(key)?;
        let root = self.root(index);
        let mut members = Vec::with_capacity(self.nodes[root].rank);
        let mut cursor = Some(root);
        while let Some(current) = cursor {
            members.push(self.keys[current].clone());
            cursor = self.nodes[current].next;
        }
        Ok(members)
    }

    /// Size of the set containing `key`.
    pub fn set_size(&mut self, key: &K) -> Result<usize> {
        let index = self.index_of(key)?;
        let root = self.root(index);
        Ok(self.nodes[root].rank)
    }

    fn index_of(&self, key: &K) -> Result<usize> {
        self.keys
            .get_index_of(key)
            .ok_or_else(|| Error::UnknownElement(format!("{key:?}")))
    }

    fn root(&mut self, index: usize) -> usize {
        let mut root = index;
        while self.nodes[root].parent != root {
            root = self.nodes[root].parent;
        }
        if self.path_compression {
            let mut current = index;
            while current != root {
                let parent = self.nodes[current].parent;
                self.nodes[current].parent = root;
                current = parent;
            }
        }
        root
    }
}
