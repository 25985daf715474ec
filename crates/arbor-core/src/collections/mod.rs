//! Data structures shared by the algorithms.
//!
//! - [`Frontier`] - the to-explore set of a traversal ([`Fifo`] for BFS, [`Lifo`] for DFS)
//! - [`IndexedPriorityQueue`] - binary min-heap with decrease-key (Dijkstra, Prim)
//! - [`DisjointSet`] - union-find with weighted union (Kruskal)

mod disjoint_set;
mod frontier;
mod priority_queue;

pub use disjoint_set::DisjointSet;
pub use frontier::{Fifo, Frontier, Lifo};
pub use priority_queue::IndexedPriorityQueue;
