//! Arena-backed graphs built once from an edge list.
//!
//! A [`Graph`] owns its vertices in a contiguous arena keyed by the caller's
//! vertex keys. Vertices and edges are referred to by dense indices
//! ([`VertexId`], [`EdgeId`]), so neighbour lists and algorithm back-pointers
//! are plain integers rather than references.
//!
//! Topology is fixed after construction. Algorithms keep their own
//! per-call scratch state and never mutate the graph; derived graphs (the
//! reweighted graph in Johnson's algorithm, the flow graph reported by
//! max-flow) are built with [`Graph::map_labels`].
//!
//! ## Undirected graphs
//!
//! An undirected graph is a directed graph in which every input edge `(u, v)`
//! is stored together with a mirror arc `(v, u)` carrying the same label.
//! [`Graph::edges`] yields the input edges only, while [`Graph::arcs`] and
//! [`Graph::neighbours`] see both orientations.

mod builder;

pub use builder::{EdgeSpec, GraphBuilder};

use std::fmt;

use ahash::RandomState;
use arbor_common::types::{EdgeId, EdgeLabel, VertexId, VertexKey};
use arbor_common::utils::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Outgoing arcs of a single vertex.
pub(crate) type Adjacency = SmallVec<[EdgeId; 4]>;

/// Whether input edges are one-way or stored with a mirror arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Each input edge is a single arc.
    Directed,
    /// Each input edge is stored in both directions.
    Undirected,
}

/// A stored arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Tail of the arc.
    pub source: VertexId,
    /// Head of the arc.
    pub target: VertexId,
    /// Weight, capacity or nothing.
    pub label: EdgeLabel,
}

impl Edge {
    /// Returns the weight of a `Weighted` edge.
    ///
    /// Fails with [`Error::LabelMismatch`] for other labels and with
    /// [`Error::NonFiniteWeight`] if the weight is NaN or infinite.
    pub fn weight(&self, id: EdgeId) -> Result<f64> {
        let weight = self.label.weight().ok_or(Error::LabelMismatch {
            edge: id,
            expected: "weighted",
            found: self.label.kind(),
        })?;
        if !weight.is_finite() {
            return Err(Error::NonFiniteWeight { edge: id, weight });
        }
        Ok(weight)
    }
}

/// A directed or undirected graph with labelled edges.
#[derive(Clone)]
pub struct Graph<K: VertexKey> {
    orientation: Orientation,
    /// Vertex keys in first-appearance order; the position is the VertexId.
    vertices: IndexMap<K, Adjacency, RandomState>,
    /// Input arcs first, then mirror arcs for undirected graphs.
    arcs: Vec<Edge>,
    /// Number of input edges (a prefix of `arcs`).
    input_edges: usize,
}

impl<K: VertexKey> Graph<K> {
    /// Builds a directed graph from `(from, to)`, `(from, to, weight)` or
    /// `(from, to, label)` tuples. Vertices are the union of all endpoints.
    pub fn directed<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeSpec<K>>,
    {
        GraphBuilder::new().edges(edges).build_directed()
    }

    /// Builds an undirected graph, storing a mirror arc for every input edge.
    ///
    /// Fails with [`Error::ConflictingDirection`] if both `(u, v)` and
    /// `(v, u)` appear explicitly in the input.
    pub fn undirected<I, E>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeSpec<K>>,
    {
        GraphBuilder::new().edges(edges).build_undirected()
    }

    /// Returns a builder that also accepts isolated vertices.
    #[must_use]
    pub fn builder() -> GraphBuilder<K> {
        GraphBuilder::new()
    }

    pub(crate) fn from_parts(
        orientation: Orientation,
        vertices: IndexMap<K, Adjacency, RandomState>,
        arcs: Vec<Edge>,
        input_edges: usize,
    ) -> Self {
        Self {
            orientation,
            vertices,
            arcs,
            input_edges,
        }
    }

    /// Directed or undirected.
    #[inline]
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns `true` for directed graphs.
    #[inline]
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.orientation == Orientation::Directed
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of input edges (mirror arcs are not counted).
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.input_edges
    }

    /// Number of stored arcs, mirrors included.
    #[inline]
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Looks up the id of a vertex key.
    pub fn vertex_id(&self, key: &K) -> Result<VertexId> {
        self.vertices
            .get_index_of(key)
            .map(VertexId::new)
            .ok_or_else(|| Error::unknown_vertex(key))
    }

    /// Returns `true` if the key names a vertex of this graph.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.vertices.contains_key(key)
    }

    /// Returns the key of a vertex id.
    #[must_use]
    pub fn key(&self, id: VertexId) -> Option<&K> {
        self.vertices.get_index(id.index()).map(|(key, _)| key)
    }

    /// Fails with [`Error::UnknownVertex`] unless `id` belongs to this graph.
    pub fn check_vertex(&self, id: VertexId) -> Result<()> {
        if id.index() < self.vertices.len() {
            Ok(())
        } else {
            Err(Error::unknown_vertex(&id))
        }
    }

    /// Iterates vertex ids in first-appearance order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Iterates `(id, key)` pairs in first-appearance order.
    pub fn vertex_keys(&self) -> impl ExactSizeIterator<Item = (VertexId, &K)> + '_ {
        self.vertices
            .keys()
            .enumerate()
            .map(|(index, key)| (VertexId::new(index), key))
    }

    /// Maps a sequence of vertex ids back to their keys, skipping unknown ids.
    pub fn keys_of<'a>(&'a self, ids: &'a [VertexId]) -> impl Iterator<Item = &'a K> + 'a {
        ids.iter().filter_map(move |&id| self.key(id))
    }

    /// Returns a stored arc.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.arcs.get(id.index())
    }

    /// Iterates the input edges in input order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = (EdgeId, &Edge)> + '_ {
        self.arcs[..self.input_edges]
            .iter()
            .enumerate()
            .map(|(index, edge)| (EdgeId::new(index), edge))
    }

    /// Iterates every stored arc, mirror arcs included.
    pub fn arcs(&self) -> impl ExactSizeIterator<Item = (EdgeId, &Edge)> + '_ {
        self.arcs
            .iter()
            .enumerate()
            .map(|(index, edge)| (EdgeId::new(index), edge))
    }

    /// Iterates the arcs leaving `vertex`, in insertion order.
    ///
    /// Unknown ids yield nothing.
    pub fn out_arcs(&self, vertex: VertexId) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.adjacency(vertex)
            .iter()
            .map(move |&id| (id, &self.arcs[id.index()]))
    }

    /// Iterates `(neighbour, label)` for each arc leaving `vertex`.
    pub fn neighbours(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, &EdgeLabel)> + '_ {
        self.out_arcs(vertex).map(|(_, edge)| (edge.target, &edge.label))
    }

    /// Number of arcs leaving `vertex`.
    #[must_use]
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.adjacency(vertex).len()
    }

    fn adjacency(&self, vertex: VertexId) -> &[EdgeId] {
        self.vertices
            .get_index(vertex.index())
            .map_or(&[], |(_, adjacency)| adjacency.as_slice())
    }

    /// Derives a graph with the same vertices and arcs but new labels.
    ///
    /// `relabel` is called once per stored arc, mirror arcs of an undirected
    /// graph included, so orientation-dependent labels (reweighting, flows)
    /// can differ between an edge and its mirror.
    pub fn map_labels<F>(&self, mut relabel: F) -> Result<Self>
    where
        F: FnMut(EdgeId, &Edge) -> Result<EdgeLabel>,
    {
        let mut arcs = Vec::with_capacity(self.arcs.len());
        for (id, edge) in self.arcs() {
            arcs.push(Edge {
                label: relabel(id, edge)?,
                ..*edge
            });
        }

        Ok(Self {
            orientation: self.orientation,
            vertices: self.vertices.clone(),
            arcs,
            input_edges: self.input_edges,
        })
    }
}

impl<K: VertexKey> fmt::Debug for Graph<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for (_, edge) in self.edges() {
            match (self.key(edge.source), self.key(edge.target), edge.label) {
                (Some(source), Some(target), EdgeLabel::Unweighted) => {
                    list.entry(&(source, target))
                }
                (Some(source), Some(target), label) => list.entry(&(source, target, label)),
                _ => list.entry(edge),
            };
        }
        list.finish()
    }
}
