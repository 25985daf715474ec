//! Graph construction from edge lists.

use ahash::RandomState;
use arbor_common::types::{EdgeId, EdgeLabel, VertexId, VertexKey, Weight};
use arbor_common::utils::error::{Error, Result};
use arbor_common::utils::hash::FastHashSet;
use indexmap::IndexMap;

use super::{Adjacency, Edge, Graph, Orientation};

/// One input edge: `(from, to)` plus a label.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec<K> {
    /// Source key.
    pub from: K,
    /// Target key.
    pub to: K,
    /// Edge label.
    pub label: EdgeLabel,
}

impl<K> EdgeSpec<K> {
    /// Creates an edge specification.
    pub fn new(from: K, to: K, label: EdgeLabel) -> Self {
        Self { from, to, label }
    }
}

impl<K> From<(K, K)> for EdgeSpec<K> {
    fn from((from, to): (K, K)) -> Self {
        Self::new(from, to, EdgeLabel::Unweighted)
    }
}

impl<K> From<(K, K, Weight)> for EdgeSpec<K> {
    fn from((from, to, weight): (K, K, Weight)) -> Self {
        Self::new(from, to, EdgeLabel::Weighted(weight))
    }
}

impl<K> From<(K, K, EdgeLabel)> for EdgeSpec<K> {
    fn from((from, to, label): (K, K, EdgeLabel)) -> Self {
        Self::new(from, to, label)
    }
}

/// Collects vertices and edges, then freezes them into a [`Graph`].
///
/// ```
/// use arbor_core::Graph;
///
/// let g = Graph::builder()
///     .vertex("lonely")
///     .edge(("a", "b", 1.0))
///     .build_directed();
/// assert_eq!(g.vertex_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder<K> {
    vertices: Vec<K>,
    edges: Vec<EdgeSpec<K>>,
}

impl<K: VertexKey> Default for GraphBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: VertexKey> GraphBuilder<K> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Adds a vertex, which may stay isolated.
    #[must_use]
    pub fn vertex(mut self, key: K) -> Self {
        self.vertices.push(key);
        self
    }

    /// Adds several vertices.
    #[must_use]
    pub fn vertices(mut self, keys: impl IntoIterator<Item = K>) -> Self {
        self.vertices.extend(keys);
        self
    }

    /// Adds an edge.
    #[must_use]
    pub fn edge(mut self, edge: impl Into<EdgeSpec<K>>) -> Self {
        self.edges.push(edge.into());
        self
    }

    /// Adds several edges.
    #[must_use]
    pub fn edges<I, E>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeSpec<K>>,
    {
        self.edges.extend(edges.into_iter().map(Into::into));
        self
    }

    /// Builds a directed graph.
    #[must_use]
    pub fn build_directed(self) -> Graph<K> {
        let (vertices, arcs) = self.intern();
        let input_edges = arcs.len();
        let graph = assemble(Orientation::Directed, vertices, arcs, input_edges);
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built directed graph"
        );
        graph
    }

    /// Builds an undirected graph.
    ///
    /// Each input edge gets a mirror arc with the same label. Self-loops are
    /// stored once. Fails with [`Error::ConflictingDirection`] if an edge is
    /// given in both orientations.
    pub fn build_undirected(self) -> Result<Graph<K>> {
        let (vertices, mut arcs) = self.intern();

        let mut seen: FastHashSet<(VertexId, VertexId)> = FastHashSet::default();
        for edge in &arcs {
            if edge.source != edge.target {
                seen.insert((edge.source, edge.target));
            }
        }
        for edge in &arcs {
            if seen.contains(&(edge.target, edge.source)) {
                let key = |id: VertexId| {
                    vertices
                        .get_index(id.index())
                        .map(|(k, _)| format!("{k:?}"))
                        .unwrap_or_default()
                };
                return Err(Error::ConflictingDirection {
                    from: key(edge.source),
                    to: key(edge.target),
                });
            }
        }

        let input_edges = arcs.len();
        let mirrors: Vec<Edge> = arcs
            .iter()
            .filter(|edge| edge.source != edge.target)
            .map(|edge| Edge {
                source: edge.target,
                target: edge.source,
                label: edge.label,
            })
            .collect();
        arcs.extend(mirrors);

        let graph = assemble(Orientation::Undirected, vertices, arcs, input_edges);
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            arcs = graph.arc_count(),
            "built undirected graph"
        );
        Ok(graph)
    }

    /// Assigns vertex ids in first-appearance order and resolves endpoints.
    fn intern(self) -> (IndexMap<K, Adjacency, RandomState>, Vec<Edge>) {
        let mut vertices: IndexMap<K, Adjacency, RandomState> = IndexMap::default();
        let mut intern = |key: K| {
            let entry = vertices.entry(key);
            let index = entry.index();
            entry.or_default();
            VertexId::new(index)
        };

        // Edge endpoints come first so that vertex order matches the edge list
        let arcs: Vec<Edge> = self
            .edges
            .into_iter()
            .map(|spec| Edge {
                source: intern(spec.from),
                target: intern(spec.to),
                label: spec.label,
            })
            .collect();
        for key in self.vertices {
            intern(key);
        }

        (vertices, arcs)
    }
}

fn assemble<K: VertexKey>(
    orientation: Orientation,
    mut vertices: IndexMap<K, Adjacency, RandomState>,
    arcs: Vec<Edge>,
    input_edges: usize,
) -> Graph<K> {
    for (index, edge) in arcs.iter().enumerate() {
        if let Some((_, adjacency)) = vertices.get_index_mut(edge.source.index()) {
            adjacency.push(EdgeId::new(index));
        }
    }
    Graph::from_parts(orientation, vertices, arcs, input_edges)
}
