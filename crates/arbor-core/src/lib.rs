//! # arbor-core
//!
//! Core layer for Arbor: the graph model and the data structures the
//! algorithms are built on.
//!
//! This crate depends only on `arbor-common`.
//!
//! ## Modules
//!
//! - [`graph`] - Arena-backed directed/undirected graphs built from edge lists
//! - [`collections`] - Traversal frontiers, indexed priority queue, disjoint sets

pub mod collections;
pub mod graph;

// Re-export commonly used types
pub use collections::{DisjointSet, Fifo, Frontier, IndexedPriorityQueue, Lifo};
pub use graph::{Edge, EdgeSpec, Graph, GraphBuilder, Orientation};
