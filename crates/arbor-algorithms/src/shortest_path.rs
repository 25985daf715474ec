//! Shortest path algorithms: Dijkstra, Bellman-Ford and Johnson.
//!
//! All three read `Weighted` labels and fail with
//! [`Error::LabelMismatch`](arbor_common::Error::LabelMismatch) on any other
//! variant. Distances are `f64`; unreachable vertices keep
//! `f64::INFINITY`.

use arbor_common::types::{EdgeLabel, VertexId, VertexKey, Weight};
use arbor_common::utils::error::{Error, Result};
use arbor_core::{Graph, IndexedPriorityQueue};
use serde::{Deserialize, Serialize};

use crate::config::AlgorithmConfig;
use crate::traits::{AlgorithmOutput, GraphAlgorithm, Parameters};
use crate::weights::{arc_weights, require_non_negative};

// ============================================================================
// Result Types
// ============================================================================

/// Single-source distances and the shortest-path tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPaths {
    source: VertexId,
    distances: Vec<Weight>,
    predecessors: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    fn unreached(source: VertexId, vertex_count: usize) -> Self {
        let mut distances = vec![f64::INFINITY; vertex_count];
        distances[source.index()] = 0.0;
        Self {
            source,
            distances,
            predecessors: vec![None; vertex_count],
        }
    }

    /// The start vertex.
    #[must_use]
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Distance from the source, `INFINITY` if unreachable or unknown.
    #[must_use]
    pub fn distance(&self, vertex: VertexId) -> Weight {
        self.distances
            .get(vertex.index())
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// All distances, indexed by vertex id.
    #[must_use]
    pub fn distances(&self) -> &[Weight] {
        &self.distances
    }

    /// The vertex before `vertex` on its shortest path.
    #[must_use]
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(vertex.index()).copied().flatten()
    }

    /// Returns `true` if the source reaches `vertex`.
    #[must_use]
    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_finite()
    }

    /// Reconstructs the path from the source to `target`.
    #[must_use]
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessor(current)?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }

    /// Iterates `(vertex, distance)` over the reachable vertices.
    pub fn reachable(&self) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_finite())
            .map(|(index, &d)| (VertexId::new(index), d))
    }

    /// Pairs each reachable vertex's key with its distance.
    pub fn by_key<'g, K: VertexKey>(&self, graph: &'g Graph<K>) -> Vec<(&'g K, Weight)> {
        self.reachable()
            .filter_map(|(vertex, d)| graph.key(vertex).map(|key| (key, d)))
            .collect()
    }
}

/// All-pairs distances, rows and columns in vertex id order.
///
/// Index it with [`VertexId`]s from the source graph; ids follow the order
/// in which keys first appeared, not the sorted order of the keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    size: usize,
    distances: Vec<Weight>,
    potentials: Vec<Weight>,
}

impl DistanceMatrix {
    fn from_rows(size: usize, rows: Vec<Vec<Weight>>, potentials: Vec<Weight>) -> Self {
        Self {
            size,
            distances: rows.into_iter().flatten().collect(),
            potentials,
        }
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance from `from` to `to`, `INFINITY` if unreachable.
    #[must_use]
    pub fn get(&self, from: VertexId, to: VertexId) -> Weight {
        if from.index() >= self.size || to.index() >= self.size {
            return f64::INFINITY;
        }
        self.distances[from.index() * self.size + to.index()]
    }

    /// Distances from `from` to every vertex.
    #[must_use]
    pub fn row(&self, from: VertexId) -> Option<&[Weight]> {
        let start = from.index().checked_mul(self.size)?;
        self.distances.get(start..start + self.size).filter(|_| from.index() < self.size)
    }

    /// The vertex potentials `h(v)` used for reweighting.
    #[must_use]
    pub fn potentials(&self) -> &[Weight] {
        &self.potentials
    }
}

// ============================================================================
// Dijkstra's Algorithm
// ============================================================================

/// Single-source shortest paths for non-negative weights.
///
/// Fails with [`Error::NegativeWeight`] if any arc has a negative weight
/// and with [`Error::NonFiniteWeight`] if one is NaN or infinite.
pub fn dijkstra<K: VertexKey>(graph: &Graph<K>, source: VertexId) -> Result<ShortestPaths> {
    dijkstra_with_config(graph, source, &AlgorithmConfig::default())
}

/// [`dijkstra`] with explicit configuration.
///
/// With `validate_weights` off, negative weights are not rejected and the
/// result is unspecified if one is present.
pub fn dijkstra_with_config<K: VertexKey>(
    graph: &Graph<K>,
    source: VertexId,
    config: &AlgorithmConfig,
) -> Result<ShortestPaths> {
    graph.check_vertex(source)?;
    let weights = arc_weights(graph)?;
    if config.validate_weights {
        require_non_negative(&weights)?;
    }
    tracing::debug!(
        vertices = graph.vertex_count(),
        arcs = graph.arc_count(),
        source = %source,
        "dijkstra"
    );
    run_dijkstra(graph, &weights, source, None)
}

/// Shortest path between two vertices.
///
/// Stops as soon as `target` is settled. Returns the distance and the path,
/// or `None` if `target` is unreachable.
pub fn dijkstra_path<K: VertexKey>(
    graph: &Graph<K>,
    source: VertexId,
    target: VertexId,
) -> Result<Option<(Weight, Vec<VertexId>)>> {
    graph.check_vertex(source)?;
    graph.check_vertex(target)?;
    let weights = arc_weights(graph)?;
    require_non_negative(&weights)?;
    let paths = run_dijkstra(graph, &weights, source, Some(target))?;
    Ok(paths
        .path_to(target)
        .map(|path| (paths.distance(target), path)))
}

/// Core loop. Each vertex is pushed at most once, improved with
/// `decrease_key` while queued, and never touched again once popped.
fn run_dijkstra<K: VertexKey>(
    graph: &Graph<K>,
    weights: &[Weight],
    source: VertexId,
    target: Option<VertexId>,
) -> Result<ShortestPaths> {
    let n = graph.vertex_count();
    let mut paths = ShortestPaths::unreached(source, n);
    let mut settled = vec![false; n];
    let mut queue = IndexedPriorityQueue::with_capacity(n);
    queue.push(source, 0.0)?;

    while !queue.is_empty() {
        let (vertex, distance) = queue.pop_min()?;
        settled[vertex.index()] = true;
        if Some(vertex) == target {
            break;
        }

        for (edge, arc) in graph.out_arcs(vertex) {
            let neighbour = arc.target;
            if settled[neighbour.index()] {
                continue;
            }
            let candidate = distance + weights[edge.index()];
            if candidate < paths.distances[neighbour.index()] {
                paths.distances[neighbour.index()] = candidate;
                paths.predecessors[neighbour.index()] = Some(vertex);
                if queue.contains(&neighbour) {
                    queue.decrease_key(&neighbour, candidate)?;
                } else {
                    queue.push(neighbour, candidate)?;
                }
            }
        }
    }

    Ok(paths)
}

// ============================================================================
// Bellman-Ford Algorithm
// ============================================================================

/// Single-source shortest paths for arbitrary weights.
///
/// Relaxes every stored arc (mirror arcs included) up to `|V| - 1` times,
/// stopping early once a pass changes nothing, then scans the arcs once
/// more. If any arc still improves its target, a negative cycle is
/// reachable from `source` and the call fails with
/// [`Error::NegativeCycleDetected`].
pub fn bellman_ford<K: VertexKey>(graph: &Graph<K>, source: VertexId) -> Result<ShortestPaths> {
    graph.check_vertex(source)?;
    let weights = arc_weights(graph)?;
    let n = graph.vertex_count();
    let mut paths = ShortestPaths::unreached(source, n);

    tracing::debug!(vertices = n, arcs = graph.arc_count(), source = %source, "bellman-ford");

    for pass in 1..n {
        let mut changed = false;
        for (edge, arc) in graph.arcs() {
            let from = paths.distances[arc.source.index()];
            if from == f64::INFINITY {
                continue;
            }
            let candidate = from + weights[edge.index()];
            if candidate < paths.distances[arc.target.index()] {
                paths.distances[arc.target.index()] = candidate;
                paths.predecessors[arc.target.index()] = Some(arc.source);
                changed = true;
            }
        }
        tracing::trace!(pass, changed, "relaxation pass");
        if !changed {
            break;
        }
    }

    for (edge, arc) in graph.arcs() {
        let from = paths.distances[arc.source.index()];
        if from + weights[edge.index()] < paths.distances[arc.target.index()] {
            tracing::warn!(source = %source, "negative cycle detected");
            return Err(Error::NegativeCycleDetected);
        }
    }

    Ok(paths)
}

/// Finds one negative cycle anywhere in the graph.
///
/// Every vertex starts at distance zero, so cycles unreachable from any
/// particular source are found too. Returns the cycle's vertices in edge
/// order (the last one has an arc back to the first), or `None`.
pub fn find_negative_cycle<K: VertexKey>(graph: &Graph<K>) -> Result<Option<Vec<VertexId>>> {
    let weights = arc_weights(graph)?;
    let n = graph.vertex_count();
    let mut distances = vec![0.0; n];
    let mut predecessors: Vec<Option<VertexId>> = vec![None; n];

    let mut last_relaxed = None;
    for _ in 0..n {
        last_relaxed = None;
        for (edge, arc) in graph.arcs() {
            let candidate = distances[arc.source.index()] + weights[edge.index()];
            if candidate < distances[arc.target.index()] {
                distances[arc.target.index()] = candidate;
                predecessors[arc.target.index()] = Some(arc.source);
                last_relaxed = Some(arc.target);
            }
        }
        if last_relaxed.is_none() {
            return Ok(None);
        }
    }
    let Some(mut vertex) = last_relaxed else {
        return Ok(None);
    };

    // n steps back along the predecessors always land on the cycle
    for _ in 0..n {
        match predecessors[vertex.index()] {
            Some(previous) => vertex = previous,
            None => return Ok(None),
        }
    }

    let mut cycle = vec![vertex];
    let mut current = predecessors[vertex.index()];
    while let Some(previous) = current {
        if previous == vertex {
            break;
        }
        cycle.push(previous);
        current = predecessors[previous.index()];
    }
    cycle.reverse();

    tracing::warn!(length = cycle.len(), "negative cycle found");
    Ok(Some(cycle))
}

// ============================================================================
// Johnson's Algorithm
// ============================================================================

/// Vertex of the graph augmented with Johnson's synthetic source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Augmented {
    Source,
    Vertex(VertexId),
}

/// All-pairs shortest paths for graphs with negative weights but no
/// negative cycle.
pub fn johnson<K: VertexKey>(graph: &Graph<K>) -> Result<DistanceMatrix> {
    johnson_with_config(graph, &AlgorithmConfig::default())
}

/// [`johnson`] with explicit configuration.
///
/// 1. Bellman-Ford from a synthetic source joined to every vertex by a
///    zero-weight arc yields potentials `h(v)`, or
///    [`Error::NegativeCycleDetected`].
/// 2. Each arc is reweighted to `h(u) + w(u, v) - h(v)`, which is
///    non-negative up to `config.reweight_tolerance`.
/// 3. Dijkstra runs from every vertex on the reweighted graph.
/// 4. True distances are `d'(u, v) - h(u) + h(v)`.
pub fn johnson_with_config<K: VertexKey>(
    graph: &Graph<K>,
    config: &AlgorithmConfig,
) -> Result<DistanceMatrix> {
    let n = graph.vertex_count();
    tracing::debug!(vertices = n, arcs = graph.arc_count(), "johnson");

    let potentials = potentials(graph)?;

    let tolerance = config.reweight_tolerance;
    let reweighted = graph.map_labels(|id, arc| {
        let mut weight =
            potentials[arc.source.index()] + arc.weight(id)? - potentials[arc.target.index()];
        if !weight.is_finite() {
            return Err(Error::NonFiniteWeight { edge: id, weight });
        }
        debug_assert!(
            weight >= -tolerance,
            "reweighted arc {id} is negative: {weight}"
        );
        if weight < 0.0 && weight >= -tolerance {
            weight = 0.0;
        }
        Ok(EdgeLabel::Weighted(weight))
    })?;
    let weights = arc_weights(&reweighted)?;

    let search = |source: VertexId| -> Result<Vec<Weight>> {
        let paths = run_dijkstra(&reweighted, &weights, source, None)?;
        let h_source = potentials[source.index()];
        Ok(paths
            .distances
            .iter()
            .zip(&potentials)
            .map(|(&d, &h_target)| {
                if d.is_finite() {
                    d - h_source + h_target
                } else {
                    f64::INFINITY
                }
            })
            .collect())
    };

    #[cfg(feature = "parallel")]
    if config.runs_parallel() {
        let rows = search_parallel(n, &search)?;
        return Ok(DistanceMatrix::from_rows(n, rows, potentials));
    }

    let rows = graph.vertices().map(&search).collect::<Result<Vec<_>>>()?;
    Ok(DistanceMatrix::from_rows(n, rows, potentials))
}

#[cfg(feature = "parallel")]
fn search_parallel<F>(vertex_count: usize, search: &F) -> Result<Vec<Vec<Weight>>>
where
    F: Fn(VertexId) -> Result<Vec<Weight>> + Sync,
{
    use rayon::prelude::*;

    tracing::trace!(threads = rayon::current_num_threads(), "parallel all-pairs search");
    (0..vertex_count)
        .into_par_iter()
        .map(|index| search(VertexId::new(index)))
        .collect()
}

/// Bellman-Ford from a synthetic source over the augmented graph.
fn potentials<K: VertexKey>(graph: &Graph<K>) -> Result<Vec<Weight>> {
    let mut builder = Graph::builder().vertex(Augmented::Source);
    for vertex in graph.vertices() {
        builder = builder.edge((Augmented::Source, Augmented::Vertex(vertex), 0.0));
    }
    for (id, arc) in graph.arcs() {
        builder = builder.edge((
            Augmented::Vertex(arc.source),
            Augmented::Vertex(arc.target),
            arc.weight(id)?,
        ));
    }
    let augmented = builder.build_directed();

    let paths = bellman_ford(&augmented, augmented.vertex_id(&Augmented::Source)?)?;
    graph
        .vertices()
        .map(|vertex| Ok(paths.distance(augmented.vertex_id(&Augmented::Vertex(vertex))?)))
        .collect()
}

// ============================================================================
// Algorithm Wrappers for Plugin Registry
// ============================================================================

/// Dijkstra wrapper for the registry.
pub struct DijkstraAlgorithm;

impl<K: VertexKey> GraphAlgorithm<K> for DijkstraAlgorithm {
    fn name(&self) -> &str {
        "dijkstra"
    }

    fn description(&self) -> &str {
        "Single-source shortest paths with non-negative weights"
    }

    fn execute(&self, graph: &Graph<K>, params: &Parameters<K>) -> Result<AlgorithmOutput> {
        dijkstra_with_config(graph, params.source_id(graph)?, &params.config)
            .map(AlgorithmOutput::Distances)
    }
}

/// Bellman-Ford wrapper for the registry.
pub struct BellmanFordAlgorithm;

impl<K: VertexKey> GraphAlgorithm<K> for BellmanFordAlgorithm {
    fn name(&self) -> &str {
        "bellman_ford"
    }

    fn description(&self) -> &str {
        "Single-source shortest paths with negative-cycle detection"
    }

    fn execute(&self, graph: &Graph<K>, params: &Parameters<K>) -> Result<AlgorithmOutput> {
        bellman_ford(graph, params.source_id(graph)?).map(AlgorithmOutput::Distances)
    }
}

/// Johnson wrapper for the registry.
pub struct JohnsonAlgorithm;

impl<K: VertexKey> GraphAlgorithm<K> for JohnsonAlgorithm {
    fn name(&self) -> &str {
        "johnson"
    }

    fn description(&self) -> &str {
        "All-pairs shortest paths via reweighting"
    }

    fn execute(&self, graph: &Graph<K>, params: &Parameters<K>) -> Result<AlgorithmOutput> {
        johnson_with_config(graph, &params.config).map(AlgorithmOutput::Matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_common::types::EdgeId;

    fn fixture() -> Graph<&'static str> {
        Graph::directed([
            ("s", "t", 2.0),
            ("s", "v", 3.0),
            ("t", "u", 2.0),
            ("u", "v", 1.0),
            ("v", "t", 4.0),
        ])
    }

    fn johnson_fixture() -> Graph<char> {
        Graph::directed([
            ('a', 'b', 2.0),
            ('a', 'c', 1.0),
            ('a', 'd', 3.0),
            ('b', 'c', -2.0),
            ('c', 'e', -1.0),
            ('d', 'c', -2.0),
            ('d', 'e', 4.0),
        ])
    }

    fn id<K: VertexKey>(graph: &Graph<K>, key: K) -> VertexId {
        graph.vertex_id(&key).unwrap()
    }

    #[test]
    fn test_dijkstra_distances() {
        let g = fixture();
        let paths = dijkstra(&g, id(&g, "s")).unwrap();
        let mut by_key = paths.by_key(&g);
        by_key.sort_by(|a, b| a.0.cmp(b.0));
        assert_eq!(
            by_key,
            vec![(&"s", 0.0), (&"t", 2.0), (&"u", 4.0), (&"v", 3.0)]
        );
        assert_eq!(paths.predecessor(id(&g, "u")), Some(id(&g, "t")));
    }

    #[test]
    fn test_dijkstra_unreachable_is_infinite() {
        let g = fixture();
        let paths = dijkstra(&g, id(&g, "u")).unwrap();
        assert_eq!(paths.distance(id(&g, "s")), f64::INFINITY);
        assert!(!paths.is_reachable(id(&g, "s")));
        assert_eq!(paths.path_to(id(&g, "s")), None);
        assert_eq!(paths.reachable().count(), 3);
    }

    #[test]
    fn test_dijkstra_rejects_negative_weight() {
        let g = Graph::directed([("a", "b", 1.0), ("b", "c", -1.0)]);
        assert!(matches!(
            dijkstra(&g, id(&g, "a")),
            Err(Error::NegativeWeight { weight, .. }) if weight == -1.0
        ));
        let unchecked = AlgorithmConfig::default().with_weight_validation(false);
        assert!(dijkstra_with_config(&g, id(&g, "a"), &unchecked).is_ok());
    }

    #[test]
    fn test_dijkstra_settled_vertex_is_final() {
        // b is popped at distance 1 before c relaxes c -> b
        let g = Graph::directed([("a", "b", 1.0), ("a", "c", 5.0), ("c", "b", -10.0)]);
        let unchecked = AlgorithmConfig::default().with_weight_validation(false);
        let paths = dijkstra_with_config(&g, id(&g, "a"), &unchecked).unwrap();
        assert_eq!(paths.distance(id(&g, "b")), 1.0);
        assert_eq!(paths.predecessor(id(&g, "b")), Some(id(&g, "a")));
        assert_eq!(paths.distance(id(&g, "c")), 5.0);
    }

    #[test]
    fn test_dijkstra_rejects_non_finite_weight() {
        let g = Graph::directed([("a", "b", f64::NAN), ("b", "c", 1.0)]);
        let a = id(&g, "a");
        assert!(matches!(
            dijkstra(&g, a),
            Err(Error::NonFiniteWeight { edge, weight }) if edge == EdgeId::new(0) && weight.is_nan()
        ));
        let unchecked = AlgorithmConfig::default().with_weight_validation(false);
        assert!(matches!(
            dijkstra_with_config(&g, a, &unchecked),
            Err(Error::NonFiniteWeight { .. })
        ));
        assert!(matches!(
            dijkstra_path(&g, a, id(&g, "c")),
            Err(Error::NonFiniteWeight { .. })
        ));
    }

    #[test]
    fn test_dijkstra_label_mismatch() {
        let g: Graph<u8> = Graph::directed([(1, 2)]);
        assert!(matches!(
            dijkstra(&g, id(&g, 1)),
            Err(Error::LabelMismatch { .. })
        ));
    }

    #[test]
    fn test_dijkstra_path() {
        let g = fixture();
        let (distance, path) = dijkstra_path(&g, id(&g, "s"), id(&g, "u")).unwrap().unwrap();
        assert_eq!(distance, 4.0);
        assert_eq!(g.keys_of(&path).copied().collect::<Vec<_>>(), vec!["s", "t", "u"]);
        assert_eq!(dijkstra_path(&g, id(&g, "u"), id(&g, "s")).unwrap(), None);
        let s = id(&g, "s");
        assert_eq!(dijkstra_path(&g, s, s).unwrap(), Some((0.0, vec![s])));
    }

    #[test]
    fn test_dijkstra_undirected() {
        let g = Graph::undirected([(1, 2, 5.0), (2, 3, 1.0), (1, 3, 7.0)]).unwrap();
        let paths = dijkstra(&g, id(&g, 3)).unwrap();
        assert_eq!(paths.distance(id(&g, 1)), 6.0);
    }

    #[test]
    fn test_bellman_ford_matches_dijkstra() {
        let g = fixture();
        let s = id(&g, "s");
        assert_eq!(
            bellman_ford(&g, s).unwrap().distances(),
            dijkstra(&g, s).unwrap().distances()
        );
    }

    #[test]
    fn test_bellman_ford_negative_edges() {
        let g = johnson_fixture();
        let paths = bellman_ford(&g, id(&g, 'a')).unwrap();
        assert_eq!(paths.distance(id(&g, 'c')), 0.0);
        assert_eq!(paths.distance(id(&g, 'e')), -1.0);
        let path = paths.path_to(id(&g, 'e')).unwrap();
        assert_eq!(g.keys_of(&path).collect::<String>(), "abce");
    }

    #[test]
    fn test_bellman_ford_negative_cycle() {
        let g = Graph::directed([("s", "t", 2.0), ("t", "s", -5.0)]);
        assert_eq!(
            bellman_ford(&g, id(&g, "s")),
            Err(Error::NegativeCycleDetected)
        );
    }

    #[test]
    fn test_bellman_ford_ignores_unreachable_cycle() {
        let g = Graph::directed([("s", "t", 1.0), ("x", "y", 1.0), ("y", "x", -3.0)]);
        let paths = bellman_ford(&g, id(&g, "s")).unwrap();
        assert_eq!(paths.distance(id(&g, "t")), 1.0);
        assert!(!paths.is_reachable(id(&g, "x")));
    }

    #[test]
    fn test_bellman_ford_undirected_negative_edge_is_cycle() {
        let g = Graph::undirected([(1, 2, -1.0)]).unwrap();
        assert_eq!(bellman_ford(&g, id(&g, 1)), Err(Error::NegativeCycleDetected));
    }

    #[test]
    fn test_find_negative_cycle() {
        let g = Graph::directed([("s", "t", 1.0), ("x", "y", 1.0), ("y", "z", 1.0), ("z", "x", -3.0)]);
        let cycle = find_negative_cycle(&g).unwrap().unwrap();
        assert_eq!(cycle.len(), 3);
        // Consecutive vertices are joined by arcs, and the last closes the loop
        for (i, &from) in cycle.iter().enumerate() {
            let to = cycle[(i + 1) % cycle.len()];
            assert!(g.neighbours(from).any(|(v, _)| v == to));
        }
        assert_eq!(find_negative_cycle(&fixture()).unwrap(), None);
    }

    #[test]
    fn test_find_negative_self_loop() {
        let g = Graph::directed([("a", "a", -1.0)]);
        assert_eq!(find_negative_cycle(&g).unwrap(), Some(vec![id(&g, "a")]));
    }

    #[test]
    fn test_johnson_matches_bellman_ford() {
        let g = johnson_fixture();
        let matrix = johnson(&g).unwrap();
        assert_eq!(matrix.size(), g.vertex_count());
        for u in g.vertices() {
            let expected = bellman_ford(&g, u).unwrap();
            assert_eq!(matrix.row(u).unwrap(), expected.distances());
        }
        assert_eq!(matrix.get(id(&g, 'a'), id(&g, 'e')), -1.0);
        assert_eq!(matrix.get(id(&g, 'e'), id(&g, 'a')), f64::INFINITY);
        assert!(matrix.potentials().iter().all(|&h| h <= 0.0));
    }

    #[test]
    fn test_johnson_negative_cycle() {
        let g = Graph::directed([("a", "b", -5.0), ("b", "a", 2.0)]);
        assert_eq!(johnson(&g), Err(Error::NegativeCycleDetected));
    }

    #[test]
    fn test_non_finite_weights_are_reported() {
        let nan = Graph::directed([("a", "b", f64::NAN), ("b", "c", 1.0)]);
        assert!(matches!(johnson(&nan), Err(Error::NonFiniteWeight { .. })));
        assert!(matches!(
            bellman_ford(&nan, id(&nan, "a")),
            Err(Error::NonFiniteWeight { .. })
        ));
        let infinite = Graph::directed([("a", "b", 1.0), ("b", "a", f64::NEG_INFINITY)]);
        assert_eq!(
            johnson(&infinite),
            Err(Error::NonFiniteWeight {
                edge: EdgeId::new(1),
                weight: f64::NEG_INFINITY
            })
        );
        assert!(matches!(
            find_negative_cycle(&infinite),
            Err(Error::NonFiniteWeight { .. })
        ));
    }

    #[test]
    fn test_johnson_isolated_vertex() {
        let g = Graph::builder()
            .edge(("a", "b", -1.0))
            .vertex("z")
            .build_directed();
        let matrix = johnson(&g).unwrap();
        let z = id(&g, "z");
        assert_eq!(matrix.get(z, z), 0.0);
        assert_eq!(matrix.get(z, id(&g, "a")), f64::INFINITY);
        assert_eq!(matrix.get(id(&g, "a"), id(&g, "b")), -1.0);
        assert_eq!(matrix.row(VertexId::new(9)), None);
    }

    #[test]
    fn test_johnson_parallel_config() {
        let g = johnson_fixture();
        let config = AlgorithmConfig::default().with_parallel(true);
        assert_eq!(johnson_with_config(&g, &config).unwrap(), johnson(&g).unwrap());
    }

    #[test]
    fn test_wrappers() {
        let g = fixture();
        let params = Parameters::new().with_source("s");
        let AlgorithmOutput::Distances(paths) = DijkstraAlgorithm.execute(&g, &params).unwrap() else {
            panic!("expected distances");
        };
        assert_eq!(paths.distance(id(&g, "v")), 3.0);
        assert!(matches!(
            BellmanFordAlgorithm.execute(&g, &params).unwrap(),
            AlgorithmOutput::Distances(_)
        ));
        assert!(matches!(
            JohnsonAlgorithm.execute(&g, &Parameters::new()).unwrap(),
            AlgorithmOutput::Matrix(_)
        ));
    }
}
