//! Minimum spanning trees: Prim and Kruskal.

use arbor_common::types::{EdgeId, VertexId, VertexKey, Weight};
use arbor_common::utils::error::{Error, Result};
use arbor_core::{DisjointSet, Graph, IndexedPriorityQueue};
use serde::{Deserialize, Serialize};

use crate::config::AlgorithmConfig;
use crate::traits::{AlgorithmOutput, GraphAlgorithm, Parameters};
use crate::weights::arc_weights;

/// An edge selected into a spanning tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeEdge {
    /// Endpoint already in the tree when the edge was chosen (Prim), or the
    /// input source (Kruskal).
    pub source: VertexId,
    /// The other endpoint.
    pub target: VertexId,
    /// The stored arc that was chosen.
    pub edge: EdgeId,
    /// Its weight.
    pub weight: Weight,
}

/// A spanning tree, or a spanning forest if the graph is disconnected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanningTree {
    edges: Vec<TreeEdge>,
    total_weight: Weight,
    component_count: usize,
    vertices_covered: usize,
}

impl SpanningTree {
    fn new(edges: Vec<TreeEdge>, component_count: usize, vertices_covered: usize) -> Self {
        let total_weight = edges.iter().map(|e| e.weight).sum();
        Self {
            edges,
            total_weight,
            component_count,
            vertices_covered,
        }
    }

    /// Tree edges in the order they were selected.
    #[must_use]
    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }

    /// Sum of the selected edge weights.
    #[must_use]
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Number of trees in the forest.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Number of vertices the tree (or forest) touches, isolated roots
    /// included.
    #[must_use]
    pub fn vertices_covered(&self) -> usize {
        self.vertices_covered
    }

    /// Returns `true` if this is a single tree over every vertex of `graph`.
    #[must_use]
    pub fn is_spanning<K: VertexKey>(&self, graph: &Graph<K>) -> bool {
        self.vertices_covered == graph.vertex_count() && self.component_count <= 1
    }
}

// ============================================================================
// Prim's Algorithm
// ============================================================================

/// Grows a minimum spanning tree from `start`.
///
/// Each non-tree vertex is keyed by the cheapest known arc joining it to the
/// tree; extracting it adds that arc. Only the component containing `start`
/// is covered. On a directed graph only outgoing arcs are followed.
///
/// Fails with [`Error::NonFiniteWeight`] if any weight is NaN or infinite.
pub fn prim<K: VertexKey>(graph: &Graph<K>, start: VertexId) -> Result<SpanningTree> {
    graph.check_vertex(start)?;
    let weights = arc_weights(graph)?;
    let n = graph.vertex_count();
    tracing::debug!(vertices = n, arcs = graph.arc_count(), start = %start, "prim");

    let mut min_weight = vec![f64::INFINITY; n];
    let mut come_from: Vec<Option<(VertexId, EdgeId)>> = vec![None; n];
    let mut in_tree = vec![false; n];
    let mut queue = IndexedPriorityQueue::with_capacity(n);
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut covered = 0;

    min_weight[start.index()] = 0.0;
    queue.push(start, 0.0)?;
    while !queue.is_empty() {
        let (vertex, _) = queue.pop_min()?;
        in_tree[vertex.index()] = true;
        covered += 1;
        if let Some((parent, edge)) = come_from[vertex.index()] {
            edges.push(TreeEdge {
                source: parent,
                target: vertex,
                edge,
                weight: weights[edge.index()],
            });
        }

        for (edge, arc) in graph.out_arcs(vertex) {
            let neighbour = arc.target;
            let weight = weights[edge.index()];
            if in_tree[neighbour.index()] || weight >= min_weight[neighbour.index()] {
                continue;
            }
            min_weight[neighbour.index()] = weight;
            come_from[neighbour.index()] = Some((vertex, edge));
            if queue.contains(&neighbour) {
                queue.decrease_key(&neighbour, weight)?;
            } else {
                queue.push(neighbour, weight)?;
            }
        }
    }

    Ok(SpanningTree::new(edges, 1, covered))
}

// ============================================================================
// Kruskal's Algorithm
// ============================================================================

/// Builds a minimum spanning forest from the input edges.
pub fn kruskal<K: VertexKey>(graph: &Graph<K>) -> Result<SpanningTree> {
    kruskal_with_config(graph, &AlgorithmConfig::default())
}

/// [`kruskal`] with explicit configuration.
///
/// Input edges are sorted by weight with a stable sort, so equal weights
/// keep their input order. An edge is kept when its endpoints are in
/// different components. Edge direction is ignored.
pub fn kruskal_with_config<K: VertexKey>(
    graph: &Graph<K>,
    config: &AlgorithmConfig,
) -> Result<SpanningTree> {
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "kruskal"
    );

    let mut candidates = graph
        .edges()
        .map(|(id, edge)| {
            Ok(TreeEdge {
                source: edge.source,
                target: edge.target,
                edge: id,
                weight: edge.weight(id)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    candidates.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut partition =
        DisjointSet::from_keys(graph.vertices()).with_path_compression(config.path_compression);
    let mut edges = Vec::with_capacity(graph.vertex_count().saturating_sub(1));
    for candidate in candidates {
        if partition.union(&candidate.source, &candidate.target)? {
            tracing::trace!(edge = %candidate.edge, weight = candidate.weight, "tree edge");
            edges.push(candidate);
        }
    }

    Ok(SpanningTree::new(
        edges,
        partition.set_count(),
        graph.vertex_count(),
    ))
}

// ============================================================================
// Algorithm Wrappers for Plugin Registry
// ============================================================================

/// Prim wrapper for the registry. Starts from the first vertex when no
/// source is given.
pub struct PrimAlgorithm;

impl<K: VertexKey> GraphAlgorithm<K> for PrimAlgorithm {
    fn name(&self) -> &str {
        "prim"
    }

    fn description(&self) -> &str {
        "Minimum spanning tree grown from a start vertex"
    }

    fn execute(&self, graph: &Graph<K>, params: &Parameters<K>) -> Result<AlgorithmOutput> {
        let start = match &params.source {
            Some(_) => params.source_id(graph)?,
            None => graph
                .vertices()
                .next()
                .ok_or_else(|| Error::InvalidParameter("graph has no vertices".to_string()))?,
        };
        prim(graph, start).map(AlgorithmOutput::Tree)
    }
}

/// Kruskal wrapper for the registry.
pub struct KruskalAlgorithm;

impl<K: VertexKey> GraphAlgorithm<K> for KruskalAlgorithm {
    fn name(&self) -> &str {
        "kruskal"
    }

    fn description(&self) -> &str {
        "Minimum spanning forest from sorted edges"
    }

    fn execute(&self, graph: &Graph<K>, params: &Parameters<K>) -> Result<AlgorithmOutput> {
        kruskal_with_config(graph, &params.config).map(AlgorithmOutput::Tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ewg() -> Graph<u8> {
        Graph::undirected([
            (0, 2, 26.0),
            (0, 4, 38.0),
            (0, 6, 58.0),
            (0, 7, 16.0),
            (1, 2, 36.0),
            (1, 3, 29.0),
            (1, 5, 32.0),
            (1, 7, 19.0),
            (2, 3, 17.0),
            (2, 6, 40.0),
            (2, 7, 34.0),
            (3, 6, 52.0),
            (4, 5, 35.0),
            (4, 6, 93.0),
            (4, 7, 37.0),
            (5, 7, 28.0),
        ])
        .unwrap()
    }

    fn weights(tree: &SpanningTree) -> Vec<Weight> {
        tree.edges().iter().map(|e| e.weight).collect()
    }

    #[test]
    fn test_kruskal_selection_order() {
        let g = ewg();
        let tree = kruskal(&g).unwrap();
        assert_eq!(
            weights(&tree),
            vec![16.0, 17.0, 19.0, 26.0, 28.0, 35.0, 40.0]
        );
        assert_eq!(tree.total_weight(), 181.0);
        assert!(tree.is_spanning(&g));
    }

    #[test]
    fn test_prim_matches_kruskal_weight() {
        let g = ewg();
        let tree = prim(&g, g.vertex_id(&2).unwrap()).unwrap();
        assert_eq!(tree.edges().len(), 7);
        assert_eq!(tree.total_weight(), 181.0);
        assert!(tree.is_spanning(&g));
        // Extraction order: the first edge leaves the start vertex
        assert_eq!(tree.edges()[0].source, g.vertex_id(&2).unwrap());
        assert_eq!(tree.edges()[0].weight, 17.0);
    }

    #[test]
    fn test_kruskal_skips_connected_endpoints() {
        let g = Graph::undirected([
            (0, 2, 26.0),
            (0, 4, 38.0),
            (0, 7, 16.0),
            (2, 3, 17.0),
            (2, 7, 34.0),
            (1, 7, 19.0),
        ])
        .unwrap();
        let tree = kruskal(&g).unwrap();
        assert_eq!(weights(&tree), vec![16.0, 17.0, 19.0, 26.0, 38.0]);
        assert_eq!(tree.total_weight(), 116.0);
        assert_eq!(tree.component_count(), 1);
    }

    #[test]
    fn test_kruskal_forest_on_disconnected_graph() {
        let g = Graph::builder()
            .edges([("a", "b", 1.0), ("c", "d", 2.0), ("d", "e", 3.0)])
            .vertex("z")
            .build_undirected()
            .unwrap();
        let tree = kruskal_with_config(&g, &AlgorithmConfig::default().with_path_compression(true)).unwrap();
        assert_eq!(tree.edges().len(), 3);
        assert_eq!(tree.component_count(), 3);
        assert!(!tree.is_spanning(&g));
    }

    #[test]
    fn test_prim_covers_start_component_only() {
        let g = Graph::undirected([("a", "b", 1.0), ("c", "d", 2.0)]).unwrap();
        let tree = prim(&g, g.vertex_id(&"c").unwrap()).unwrap();
        assert_eq!(tree.vertices_covered(), 2);
        assert_eq!(tree.total_weight(), 2.0);
        assert!(!tree.is_spanning(&g));
    }

    #[test]
    fn test_kruskal_ties_keep_input_order() {
        let g = Graph::undirected([("a", "b", 1.0), ("b", "c", 1.0), ("a", "c", 1.0)]).unwrap();
        let tree = kruskal(&g).unwrap();
        let chosen: Vec<_> = tree.edges().iter().map(|e| e.edge.index()).collect();
        assert_eq!(chosen, vec![0, 1]);
    }

    #[test]
    fn test_negative_weights_are_fine() {
        let g = Graph::undirected([("a", "b", -3.0), ("b", "c", 2.0), ("a", "c", -1.0)]).unwrap();
        assert_eq!(kruskal(&g).unwrap().total_weight(), -4.0);
        assert_eq!(prim(&g, g.vertex_id(&"b").unwrap()).unwrap().total_weight(), -4.0);
    }

    #[test]
    fn test_label_mismatch() {
        let g = Graph::undirected([("a", "b")]).unwrap();
        assert!(matches!(kruskal(&g), Err(Error::LabelMismatch { .. })));
        assert!(matches!(
            prim(&g, g.vertex_id(&"a").unwrap()),
            Err(Error::LabelMismatch { .. })
        ));
    }

    #[test]
    fn test_non_finite_weight_is_reported() {
        let g = Graph::undirected([("a", "b", f64::NAN), ("c", "b", 1.0), ("a", "c", 1.0)]).unwrap();
        assert!(matches!(
            prim(&g, g.vertex_id(&"a").unwrap()),
            Err(Error::NonFiniteWeight { edge, .. }) if edge == EdgeId::new(0)
        ));
        assert!(matches!(kruskal(&g), Err(Error::NonFiniteWeight { .. })));

        let unbounded = Graph::undirected([("a", "b", 1.0), ("b", "c", f64::INFINITY)]).unwrap();
        assert!(matches!(
            prim(&unbounded, unbounded.vertex_id(&"a").unwrap()),
            Err(Error::NonFiniteWeight { .. })
        ));
    }

    #[test]
    fn test_wrappers() {
        let g = ewg();
        let AlgorithmOutput::Tree(tree) = PrimAlgorithm.execute(&g, &Parameters::new()).unwrap() else {
            panic!("expected a tree");
        };
        assert_eq!(tree.total_weight(), 181.0);
        let AlgorithmOutput::Tree(tree) = KruskalAlgorithm.execute(&g, &Parameters::new()).unwrap() else {
            panic!("expected a tree");
        };
        assert_eq!(tree.total_weight(), 181.0);
    }
}
