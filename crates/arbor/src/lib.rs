//! # Arbor
//!
//! A pure-Rust engine for structural and optimisation queries on in-memory
//! graphs: reachability, shortest paths (single-source and all-pairs,
//! negative weights included), minimum spanning trees, maximum flow and
//! dependency ordering.
//!
//! Build a [`Graph`] once from an edge list, then call one algorithm entry
//! point per query. Algorithms never mutate the graph; each call allocates
//! its own scratch state and returns a typed result or an [`Error`].
//!
//! ## Features
//!
//! | Feature | Notes |
//! | ------- | ----- |
//! | `parallel` | Johnson's all-pairs search runs its per-source passes on rayon |
//!
//! ## Quick Start
//!
//! ```rust
//! use arbor::{build_directed, dijkstra, toposort};
//!
//! let g = build_directed([
//!     ("s", "t", 2.0),
//!     ("s", "v", 3.0),
//!     ("t", "u", 2.0),
//!     ("u", "v", 1.0),
//!     ("v", "t", 4.0),
//! ]);
//!
//! let paths = dijkstra(&g, g.vertex_id(&"s")?)?;
//! assert_eq!(paths.distance(g.vertex_id(&"u")?), 4.0);
//!
//! // v -> t and t -> u -> v form a cycle
//! assert!(toposort(&g).unwrap_err().is_cycle());
//! # Ok::<(), arbor::Error>(())
//! ```

// Re-export the algorithm API
pub use arbor_algorithms::{
    AlgorithmConfig, AlgorithmOutput, AlgorithmRegistry, Control, DistanceMatrix, Exploration,
    GraphAlgorithm, MaxFlow, Parameters, ShortestPaths, SpanningTree, TraversalEvent, TreeEdge,
    bellman_ford, bfs, bfs_layers, bfs_path, bfs_with_visitor, dfs, dfs_finish_order,
    dfs_with_visitor, dijkstra, dijkstra_path, dijkstra_with_config, explore, find_negative_cycle,
    is_dag, johnson, johnson_with_config, kruskal, kruskal_with_config, max_flow, prim, toposort,
};

// Re-export the graph model and data structures
pub use arbor_core::{
    DisjointSet, Edge, EdgeSpec, Fifo, Frontier, Graph, GraphBuilder, IndexedPriorityQueue, Lifo,
    Orientation,
};

// Re-export core types - you'll need these for ids, labels and errors
pub use arbor_common::types::{EdgeId, EdgeLabel, VertexId, VertexKey, Weight};
pub use arbor_common::utils::error::{Error, Result};

/// Builds a directed graph from `(from, to)`, `(from, to, weight)` or
/// `(from, to, label)` tuples.
pub fn build_directed<K, I, E>(edges: I) -> Graph<K>
where
    K: VertexKey,
    I: IntoIterator<Item = E>,
    E: Into<EdgeSpec<K>>,
{
    Graph::directed(edges)
}

/// Builds an undirected graph; fails with [`Error::ConflictingDirection`] if
/// an edge is given in both orientations.
pub fn build_undirected<K, I, E>(edges: I) -> Result<Graph<K>>
where
    K: VertexKey,
    I: IntoIterator<Item = E>,
    E: Into<EdgeSpec<K>>,
{
    Graph::undirected(edges)
}
