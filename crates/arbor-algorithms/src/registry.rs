//! Name-based lookup of the algorithm wrappers.

use std::sync::Arc;

use arbor_common::types::VertexKey;
use arbor_common::utils::error::{Error, Result};
use arbor_common::utils::hash::FastHashMap;
use arbor_core::Graph;

use crate::components::TopologicalSortAlgorithm;
use crate::flow::MaxFlowAlgorithm;
use crate::mst::{KruskalAlgorithm, PrimAlgorithm};
use crate::shortest_path::{BellmanFordAlgorithm, DijkstraAlgorithm, JohnsonAlgorithm};
use crate::traits::{AlgorithmOutput, GraphAlgorithm, Parameters};
use crate::traversal::{BfsAlgorithm, BfsPathAlgorithm, DfsAlgorithm};

/// Registry of graph algorithms keyed by name.
pub struct AlgorithmRegistry<K: VertexKey> {
    algorithms: FastHashMap<String, Arc<dyn GraphAlgorithm<K>>>,
}

impl<K: VertexKey> Default for AlgorithmRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: VertexKey> AlgorithmRegistry<K> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            algorithms: FastHashMap::default(),
        }
    }

    /// Creates a registry holding every built-in algorithm.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(BfsAlgorithm));
        registry.register(Arc::new(DfsAlgorithm));
        registry.register(Arc::new(BfsPathAlgorithm));
        registry.register(Arc::new(DijkstraAlgorithm));
        registry.register(Arc::new(BellmanFordAlgorithm));
        registry.register(Arc::new(JohnsonAlgorithm));
        registry.register(Arc::new(PrimAlgorithm));
        registry.register(Arc::new(KruskalAlgorithm));
        registry.register(Arc::new(MaxFlowAlgorithm));
        registry.register(Arc::new(TopologicalSortAlgorithm));
        registry
    }

    /// Adds an algorithm, replacing any previous one with the same name.
    pub fn register(&mut self, algorithm: Arc<dyn GraphAlgorithm<K>>) {
        self.algorithms.insert(algorithm.name().to_string(), algorithm);
    }

    /// Looks up an algorithm by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn GraphAlgorithm<K>>> {
        self.algorithms.get(name).cloned()
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.algorithms.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Runs the named algorithm.
    ///
    /// Fails with [`Error::InvalidParameter`] for an unknown name.
    pub fn execute(&self, name: &str, graph: &Graph<K>, params: &Parameters<K>) -> Result<AlgorithmOutput> {
        let algorithm = self
            .algorithms
            .get(name)
            .ok_or_else(|| Error::InvalidParameter(format!("unknown algorithm: {name}")))?;
        tracing::debug!(algorithm = name, "executing");
        algorithm.execute(graph, params)
    }
}
