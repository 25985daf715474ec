//! # arbor-algorithms
//!
//! Graph algorithms for Arbor. Every entry point takes a [`Graph`] plus
//! vertex ids where needed, keeps its own per-call state, and returns a typed
//! result or an [`Error`].
//!
//! ## Algorithm Categories
//!
//! - [`traversal`] - BFS, DFS, shortest unweighted paths, visitor-driven searches
//! - [`components`] - Topological sort and DAG detection
//! - [`shortest_path`] - Dijkstra, Bellman-Ford, Johnson
//! - [`mst`] - Prim, Kruskal
//! - [`flow`] - Edmonds-Karp max flow and min cut
//!
//! ## Usage
//!
//! ```
//! use arbor_algorithms::dijkstra;
//! use arbor_core::Graph;
//!
//! let g = Graph::directed([("s", "t", 2.0), ("t", "u", 2.0)]);
//! let paths = dijkstra(&g, g.vertex_id(&"s")?)?;
//! assert_eq!(paths.distance(g.vertex_id(&"u")?), 4.0);
//! # Ok::<(), arbor_common::Error>(())
//! ```
//!
//! [`Graph`]: arbor_core::Graph
//! [`Error`]: arbor_common::Error

pub mod components;
pub mod config;
pub mod flow;
pub mod mst;
pub mod registry;
pub mod shortest_path;
pub mod traits;
pub mod traversal;
mod weights;

// Core traits
pub use traits::{AlgorithmOutput, Control, GraphAlgorithm, Parameters, TraversalEvent};

// Configuration
pub use config::AlgorithmConfig;

// Traversal algorithms
pub use traversal::{
    Exploration, bfs, bfs_layers, bfs_path, bfs_with_visitor, dfs, dfs_finish_order,
    dfs_with_visitor, explore,
};

// Component algorithms
pub use components::{is_dag, toposort};

// Shortest path algorithms
pub use shortest_path::{
    DistanceMatrix, ShortestPaths, bellman_ford, dijkstra, dijkstra_path, dijkstra_with_config,
    find_negative_cycle, johnson, johnson_with_config,
};

// Minimum Spanning Tree algorithms
pub use mst::{SpanningTree, TreeEdge, kruskal, kruskal_with_config, prim};

// Network Flow algorithms
pub use flow::{MaxFlow, max_flow};

// Registry
pub use registry::AlgorithmRegistry;

// Algorithm wrappers
pub use components::TopologicalSortAlgorithm;
pub use flow::MaxFlowAlgorithm;
pub use mst::{KruskalAlgorithm, PrimAlgorithm};
pub use shortest_path::{BellmanFordAlgorithm, DijkstraAlgorithm, JohnsonAlgorithm};
pub use traversal::{BfsAlgorithm, BfsPathAlgorithm, DfsAlgorithm};
