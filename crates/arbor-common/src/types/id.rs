//! Identifier types for vertices and edges.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable index of a vertex in a graph's vertex arena.
///
/// Vertex ids are assigned densely from zero in first-appearance order when
/// the graph is built, so they double as indices into per-vertex arrays.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[repr(transparent)]
pub struct VertexId(pub u32);

impl VertexId {
    /// Creates a new VertexId from an arena index.
    #[inline]
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Returns the arena index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<VertexId> for usize {
    fn from(id: VertexId) -> Self {
        id.index()
    }
}

/// Stable index of an edge in a graph's edge arena.
///
/// Input edges occupy the first ids in input order. For undirected graphs
/// the mirror arcs follow them.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[repr(transparent)]
pub struct EdgeId(pub u32);

impl EdgeId {
    /// Creates a new EdgeId from an arena index.
    #[inline]
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Returns the arena index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for EdgeId {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<EdgeId> for usize {
    fn from(id: EdgeId) -> Self {
        id.index()
    }
}
