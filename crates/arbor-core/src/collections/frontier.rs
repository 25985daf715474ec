//! Traversal frontiers.
//!
//! Breadth-first and depth-first search differ only in the order in which
//! discovered vertices are taken back out. Both are written once against
//! [`Frontier`] and instantiated with a queue or a stack.

use std::collections::VecDeque;

use arbor_common::types::VertexId;

/// The set of discovered but not yet explored vertices.
pub trait Frontier: Default {
    /// Adds a discovered vertex.
    fn push(&mut self, vertex: VertexId);

    /// Removes the next vertex to explore.
    fn pop(&mut self) -> Option<VertexId>;

    /// Number of pending vertices.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First-in first-out frontier (breadth-first order).
#[derive(Debug, Clone, Default)]
pub struct Fifo(VecDeque<VertexId>);

impl Frontier for Fifo {
    #[inline]
    fn push(&mut self, vertex: VertexId) {
        self.0.push_back(vertex);
    }

    #[inline]
    fn pop(&mut self) -> Option<VertexId> {
        self.0.pop_front()
    }

    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Last-in first-out frontier (depth-first order).
#[derive(Debug, Clone, Default)]
pub struct Lifo(Vec<VertexId>);

impl Frontier for Lifo {
    #[inline]
    fn push(&mut self, vertex: VertexId) {
        self.0.push(vertex);
    }

    #[inline]
    fn pop(&mut self) -> Option<VertexId> {
        self.0.pop()
    }

    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}
