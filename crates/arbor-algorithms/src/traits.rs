//! Traversal control types and the registry interface.

use arbor_common::types::{EdgeId, VertexId, VertexKey};
use arbor_common::utils::error::{Error, Result};
use arbor_core::Graph;
use serde::{Deserialize, Serialize};

use crate::config::AlgorithmConfig;
use crate::flow::MaxFlow;
use crate::mst::SpanningTree;
use crate::shortest_path::{DistanceMatrix, ShortestPaths};

/// What a visitor wants the traversal to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control<B> {
    /// Keep going.
    Continue,
    /// Do not expand the current vertex or edge any further.
    Prune,
    /// Stop the traversal and return the value.
    Break(B),
}

/// An event emitted by [`bfs_with_visitor`](crate::bfs_with_visitor) or
/// [`dfs_with_visitor`](crate::dfs_with_visitor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalEvent {
    /// A vertex is seen for the first time.
    Discover(VertexId),
    /// The edge leads to an undiscovered vertex.
    TreeEdge {
        /// Tail.
        source: VertexId,
        /// Head.
        target: VertexId,
        /// The arc.
        edge: EdgeId,
    },
    /// The edge leads to an ancestor that is still in progress (DFS only).
    BackEdge {
        /// Tail.
        source: VertexId,
        /// Head.
        target: VertexId,
        /// The arc.
        edge: EdgeId,
    },
    /// The edge leads to a vertex that was already discovered (BFS) or
    /// finished (DFS).
    NonTreeEdge {
        /// Tail.
        source: VertexId,
        /// Head.
        target: VertexId,
        /// The arc.
        edge: EdgeId,
    },
    /// All edges of a vertex have been examined.
    Finish(VertexId),
}

// ============================================================================
// Registry Traits
// ============================================================================

/// Inputs for [`GraphAlgorithm::execute`].
#[derive(Debug, Clone)]
pub struct Parameters<K> {
    /// Start vertex for traversals, shortest paths and Prim; flow source.
    pub source: Option<K>,
    /// Target vertex for single-pair searches; flow sink.
    pub target: Option<K>,
    /// Tuning knobs.
    pub config: AlgorithmConfig,
}

impl<K> Default for Parameters<K> {
    fn default() -> Self {
        Self {
            source: None,
            target: None,
            config: AlgorithmConfig::default(),
        }
    }
}

impl<K: VertexKey> Parameters<K> {
    /// Creates empty parameters with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source vertex.
    #[must_use]
    pub fn with_source(mut self, source: K) -> Self {
        self.source = Some(source);
        self
    }

    /// Sets the target (or sink) vertex.
    #[must_use]
    pub fn with_target(mut self, target: K) -> Self {
        self.target = Some(target);
        self
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: AlgorithmConfig) -> Self {
        self.config = config;
        self
    }

    /// Resolves the source key, failing if it is missing or unknown.
    pub fn source_id(&self, graph: &Graph<K>) -> Result<VertexId> {
        let key = self
            .source
            .as_ref()
            .ok_or_else(|| Error::InvalidParameter("source parameter required".to_string()))?;
        graph.vertex_id(key)
    }

    /// Resolves the target key, failing if it is missing or unknown.
    pub fn target_id(&self, graph: &Graph<K>) -> Result<VertexId> {
        let key = self
            .target
            .as_ref()
            .ok_or_else(|| Error::InvalidParameter("target parameter required".to_string()))?;
        graph.vertex_id(key)
    }
}

/// The typed result of a registry call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AlgorithmOutput {
    /// A vertex sequence: visit order or topological order.
    Order(Vec<VertexId>),
    /// A single path, or `None` if the target is unreachable.
    Path(Option<Vec<VertexId>>),
    /// Single-source distances and predecessors.
    Distances(ShortestPaths),
    /// All-pairs distances.
    Matrix(DistanceMatrix),
    /// A spanning tree or forest.
    Tree(SpanningTree),
    /// A maximum flow and its minimum cut.
    Flow(MaxFlow),
}

/// An algorithm that can be looked up by name and run on any graph.
pub trait GraphAlgorithm<K: VertexKey>: Send + Sync {
    /// Registry name.
    fn name(&self) -> &str;

    /// One-line description.
    fn description(&self) -> &str;

    /// Runs the algorithm.
    fn execute(&self, graph: &Graph<K>, params: &Parameters<K>) -> Result<AlgorithmOutput>;
}
