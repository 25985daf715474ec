//! Maximum flow with shortest augmenting paths (Edmonds-Karp).
//!
//! Capacities come from `Flow` labels; any other label fails with
//! [`Error::LabelMismatch`]. The input graph is never modified: flows live
//! in a separate residual graph and are reported through [`MaxFlow`],
//! which can rebuild a labelled copy of the network with
//! [`MaxFlow::flow_graph`].

use std::collections::VecDeque;

use arbor_common::types::{EdgeId, EdgeLabel, VertexId, VertexKey, Weight};
use arbor_common::utils::error::{Error, Result};
use arbor_core::Graph;
use serde::{Deserialize, Serialize};

use crate::traits::{AlgorithmOutput, GraphAlgorithm, Parameters};

// ============================================================================
// Residual Graph
// ============================================================================

/// Remaining capacity of every stored arc in both directions.
///
/// Arc `i` of the network owns residual arcs `2i` (forward, `capacity -
/// flow`) and `2i + 1` (backward, `flow`).
#[derive(Debug, Clone)]
struct ResidualGraph {
    tails: Vec<VertexId>,
    heads: Vec<VertexId>,
    capacities: Vec<Weight>,
    flows: Vec<Weight>,
    outgoing: Vec<Vec<usize>>,
}

impl ResidualGraph {
    fn new<K: VertexKey>(graph: &Graph<K>) -> Result<Self> {
        let mut capacities = Vec::with_capacity(graph.arc_count());
        let mut tails = Vec::with_capacity(graph.arc_count());
        let mut heads = Vec::with_capacity(graph.arc_count());
        let mut outgoing = vec![Vec::new(); graph.vertex_count()];

        for (id, arc) in graph.arcs() {
            let capacity = capacity_of(id, &arc.label)?;
            let forward = 2 * id.index();
            outgoing[arc.source.index()].push(forward);
            outgoing[arc.target.index()].push(forward + 1);
            capacities.push(capacity);
            tails.push(arc.source);
            heads.push(arc.target);
        }

        Ok(Self {
            flows: vec![0.0; capacities.len()],
            tails,
            heads,
            capacities,
            outgoing,
        })
    }

    #[inline]
    fn arc_of(residual: usize) -> (usize, bool) {
        (residual / 2, residual % 2 == 0)
    }

    fn residual(&self, residual: usize) -> Weight {
        match Self::arc_of(residual) {
            (arc, true) => self.capacities[arc] - self.flows[arc],
            (arc, false) => self.flows[arc],
        }
    }

    fn head(&self, residual: usize) -> VertexId {
        match Self::arc_of(residual) {
            (arc, true) => self.heads[arc],
            (arc, false) => self.tails[arc],
        }
    }

    /// BFS over arcs with strictly positive residual capacity. Returns the
    /// residual arc used to reach each vertex.
    fn search(&self, source: VertexId) -> Vec<Option<usize>> {
        let mut via = vec![None; self.outgoing.len()];
        let mut seen = vec![false; self.outgoing.len()];
        let mut queue = VecDeque::from([source]);
        seen[source.index()] = true;

        while let Some(vertex) = queue.pop_front() {
            for &residual in &self.outgoing[vertex.index()] {
                let head = self.head(residual);
                if !seen[head.index()] && self.residual(residual) > 0.0 {
                    seen[head.index()] = true;
                    via[head.index()] = Some(residual);
                    queue.push_back(head);
                }
            }
        }
        via
    }

    /// Walks `via` back from `sink`, returning the residual arcs of the path
    /// in sink-to-source order, or `None` if the sink was not reached.
    fn augmenting_path(&self, via: &[Option<usize>], source: VertexId, sink: VertexId) -> Option<Vec<usize>> {
        let mut path = Vec::new();
        let mut vertex = sink;
        while vertex != source {
            let residual = via[vertex.index()]?;
            path.push(residual);
            vertex = match Self::arc_of(residual) {
                (arc, true) => self.tails[arc],
                (arc, false) => self.heads[arc],
            };
        }
        Some(path)
    }

    fn augment(&mut self, path: &[usize], amount: Weight) {
        for &residual in path {
            match Self::arc_of(residual) {
                (arc, true) => self.flows[arc] += amount,
                (arc, false) => self.flows[arc] -= amount,
            }
        }
    }
}

fn capacity_of(id: EdgeId, label: &EdgeLabel) -> Result<Weight> {
    match *label {
        EdgeLabel::Flow { capacity, .. } if !capacity.is_finite() => Err(Error::NonFiniteWeight {
            edge: id,
            weight: capacity,
        }),
        EdgeLabel::Flow { capacity, .. } if capacity < 0.0 => Err(Error::InvalidParameter(
            format!("edge {id} has negative capacity {capacity}"),
        )),
        EdgeLabel::Flow { capacity, .. } => Ok(capacity),
        other => Err(Error::LabelMismatch {
            edge: id,
            expected: "flow",
            found: other.kind(),
        }),
    }
}

// ============================================================================
// Max-Flow Result
// ============================================================================

/// A maximum flow and the minimum cut that certifies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaxFlow {
    source: VertexId,
    sink: VertexId,
    value: Weight,
    flows: Vec<Weight>,
    capacities: Vec<Weight>,
    tails: Vec<VertexId>,
    heads: Vec<VertexId>,
    source_side: Vec<bool>,
    augmentations: usize,
}

impl MaxFlow {
    /// The flow source.
    #[must_use]
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// The flow sink.
    #[must_use]
    pub fn sink(&self) -> VertexId {
        self.sink
    }

    /// Total flow leaving the source.
    #[must_use]
    pub fn value(&self) -> Weight {
        self.value
    }

    /// Flow on a stored arc, zero for unknown ids.
    #[must_use]
    pub fn flow(&self, edge: EdgeId) -> Weight {
        self.flows.get(edge.index()).copied().unwrap_or(0.0)
    }

    /// Flow on every stored arc, indexed by [`EdgeId`].
    #[must_use]
    pub fn flows(&self) -> &[Weight] {
        &self.flows
    }

    /// Number of augmenting paths applied.
    #[must_use]
    pub fn augmentations(&self) -> usize {
        self.augmentations
    }

    /// Vertices still reachable from the source in the final residual graph.
    #[must_use]
    pub fn min_cut_source_side(&self) -> Vec<VertexId> {
        self.source_side
            .iter()
            .enumerate()
            .filter(|&(_, &inside)| inside)
            .map(|(index, _)| VertexId::new(index))
            .collect()
    }

    /// Arcs crossing from the source side to the sink side of the cut.
    #[must_use]
    pub fn min_cut_edges(&self) -> Vec<EdgeId> {
        (0..self.flows.len())
            .filter(|&arc| {
                self.source_side[self.tails[arc].index()] && !self.source_side[self.heads[arc].index()]
            })
            .map(EdgeId::new)
            .collect()
    }

    /// Total capacity of [`min_cut_edges`](Self::min_cut_edges); equals
    /// [`value`](Self::value) by the max-flow/min-cut theorem.
    #[must_use]
    pub fn cut_capacity(&self) -> Weight {
        self.min_cut_edges()
            .iter()
            .map(|edge| self.capacities[edge.index()])
            .sum()
    }

    /// Copies `graph` with every arc relabelled `Flow { capacity, flow }`
    /// using the computed flows.
    ///
    /// `graph` must be the network this flow was computed on.
    pub fn flow_graph<K: VertexKey>(&self, graph: &Graph<K>) -> Result<Graph<K>> {
        if graph.arc_count() != self.flows.len() {
            return Err(Error::InvalidParameter(format!(
                "flow has {} arcs, graph has {}",
                self.flows.len(),
                graph.arc_count()
            )));
        }
        graph.map_labels(|id, arc| {
            Ok(EdgeLabel::Flow {
                capacity: capacity_of(id, &arc.label)?,
                flow: self.flows[id.index()],
            })
        })
    }
}

// ============================================================================
// Edmonds-Karp
// ============================================================================

/// Computes a maximum flow from `source` to `sink`.
///
/// Starts from zero flow, whatever the `flow` fields of the input labels
/// say, and repeatedly augments along a shortest path of positive residual
/// capacity by its bottleneck. Terminates after O(VE) augmentations;
/// with integral capacities the flow stays integral.
///
/// Fails with [`Error::InvalidParameter`] if `source == sink` or a capacity
/// is negative.
pub fn max_flow<K: VertexKey>(graph: &Graph<K>, source: VertexId, sink: VertexId) -> Result<MaxFlow> {
    graph.check_vertex(source)?;
    graph.check_vertex(sink)?;
    if source == sink {
        return Err(Error::InvalidParameter(
            "source and sink must differ".to_string(),
        ));
    }

    let mut residual = ResidualGraph::new(graph)?;
    tracing::debug!(
        vertices = graph.vertex_count(),
        arcs = graph.arc_count(),
        source = %source,
        sink = %sink,
        "max flow"
    );

    let mut value = 0.0;
    let mut augmentations = 0;
    let via = loop {
        let via = residual.search(source);
        let Some(path) = residual.augmenting_path(&via, source, sink) else {
            break via;
        };
        let bottleneck = path
            .iter()
            .map(|&r| residual.residual(r))
            .fold(f64::INFINITY, f64::min);
        residual.augment(&path, bottleneck);
        value += bottleneck;
        augmentations += 1;
        tracing::trace!(bottleneck, length = path.len(), "augmented");
    };

    // The last search found no path: what it reached is the source side
    let mut source_side: Vec<bool> = via.iter().map(Option::is_some).collect();
    source_side[source.index()] = true;

    tracing::debug!(value, augmentations, "max flow complete");
    Ok(MaxFlow {
        source,
        sink,
        value,
        flows: residual.flows,
        capacities: residual.capacities,
        tails: residual.tails,
        heads: residual.heads,
        source_side,
        augmentations,
    })
}

// ============================================================================
// Algorithm Wrappers for Plugin Registry
// ============================================================================

/// Max-flow wrapper for the registry; `target` is the sink.
pub struct MaxFlowAlgorithm;

impl<K: VertexKey> GraphAlgorithm<K> for MaxFlowAlgorithm {
    fn name(&self) -> &str {
        "max_flow"
    }

    fn description(&self) -> &str {
        "Maximum flow and minimum cut between a source and a sink"
    }

    fn execute(&self, graph: &Graph<K>, params: &Parameters<K>) -> Result<AlgorithmOutput> {
        let source = params.source_id(graph)?;
        let sink = params.target_id(graph)?;
        max_flow(graph, source, sink).map(AlgorithmOutput::Flow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network() -> Graph<&'static str> {
        Graph::directed(
            [
                ("s", "v1", 16.0),
                ("s", "v2", 13.0),
                ("v1", "v3", 12.0),
                ("v2", "v1", 4.0),
                ("v2", "v4", 14.0),
                ("v3", "v2", 9.0),
                ("v3", "t", 20.0),
                ("v4", "v3", 7.0),
                ("v4", "t", 4.0),
            ]
            .map(|(u, v, c)| (u, v, EdgeLabel::capacity(c))),
        )
    }

    fn id(graph: &Graph<&'static str>, key: &'static str) -> VertexId {
        graph.vertex_id(&key).unwrap()
    }

    fn assert_feasible(graph: &Graph<&'static str>, flow: &MaxFlow) {
        let mut net = vec![0.0; graph.vertex_count()];
        for (id, arc) in graph.arcs() {
            let f = flow.flow(id);
            let capacity = arc.label.flow_capacity().unwrap();
            assert!((0.0..=capacity).contains(&f), "arc {id}: {f} / {capacity}");
            net[arc.source.index()] -= f;
            net[arc.target.index()] += f;
        }
        for v in graph.vertices() {
            if v == flow.source() {
                assert_eq!(net[v.index()], -flow.value());
            } else if v == flow.sink() {
                assert_eq!(net[v.index()], flow.value());
            } else {
                assert_eq!(net[v.index()], 0.0);
            }
        }
    }

    #[test]
    fn test_max_flow_value() {
        let g = network();
        let flow = max_flow(&g, id(&g, "s"), id(&g, "t")).unwrap();
        assert_eq!(flow.value(), 23.0);
        assert!(flow.augmentations() > 0);
        assert_feasible(&g, &flow);
    }

    #[test]
    fn test_min_cut_matches_value() {
        let g = network();
        let flow = max_flow(&g, id(&g, "s"), id(&g, "t")).unwrap();
        assert_eq!(flow.cut_capacity(), flow.value());
        let mut side: Vec<_> = g.keys_of(&flow.min_cut_source_side()).copied().collect();
        side.sort_unstable();
        assert_eq!(side, vec!["s", "v1", "v2", "v4"]);
        assert_eq!(flow.min_cut_edges().len(), 3);
    }

    #[test]
    fn test_unreachable_sink_has_zero_flow() {
        let g = Graph::builder()
            .edge(("s", "a", EdgeLabel::capacity(5.0)))
            .vertex("t")
            .build_directed();
        let flow = max_flow(&g, id(&g, "s"), id(&g, "t")).unwrap();
        assert_eq!(flow.value(), 0.0);
        assert_eq!(flow.augmentations(), 0);
        assert_eq!(flow.cut_capacity(), 0.0);
    }

    #[test]
    fn test_zero_capacity_edge_carries_nothing() {
        let g = Graph::directed([
            ("s", "a", EdgeLabel::capacity(0.0)),
            ("s", "t", EdgeLabel::capacity(2.0)),
            ("a", "t", EdgeLabel::capacity(9.0)),
        ]);
        let flow = max_flow(&g, id(&g, "s"), id(&g, "t")).unwrap();
        assert_eq!(flow.value(), 2.0);
        assert_eq!(flow.flow(EdgeId::new(0)), 0.0);
    }

    #[test]
    fn test_initial_flow_is_ignored() {
        let g = Graph::directed([(
            "s",
            "t",
            EdgeLabel::Flow {
                capacity: 3.0,
                flow: 3.0,
            },
        )]);
        assert_eq!(max_flow(&g, id(&g, "s"), id(&g, "t")).unwrap().value(), 3.0);
    }

    #[test]
    fn test_backward_residual_is_used() {
        // The first shortest path s-1-2-t blocks 2-t; the second path has to
        // cancel the flow on 1-2 and reroute it through 4
        let g = Graph::directed(
            [
                ("s", "1", 1.0),
                ("s", "3", 1.0),
                ("1", "2", 1.0),
                ("1", "4", 1.0),
                ("3", "2", 1.0),
                ("2", "t", 1.0),
                ("4", "t", 1.0),
            ]
            .map(|(u, v, c)| (u, v, EdgeLabel::capacity(c))),
        );
        let flow = max_flow(&g, id(&g, "s"), id(&g, "t")).unwrap();
        assert_eq!(flow.value(), 2.0);
        assert_eq!(flow.augmentations(), 2);
        assert_eq!(flow.flow(EdgeId::new(2)), 0.0);
        assert_feasible(&g, &flow);
    }

    #[test]
    fn test_invalid_inputs() {
        let g = network();
        assert!(matches!(
            max_flow(&g, id(&g, "s"), id(&g, "s")),
            Err(Error::InvalidParameter(_))
        ));
        let negative = Graph::directed([("s", "t", EdgeLabel::capacity(-1.0))]);
        assert!(matches!(
            max_flow(&negative, id(&negative, "s"), id(&negative, "t")),
            Err(Error::InvalidParameter(_))
        ));
        let weighted = Graph::directed([("s", "t", 1.0)]);
        assert_eq!(
            max_flow(&weighted, id(&weighted, "s"), id(&weighted, "t")).unwrap_err(),
            Error::LabelMismatch {
                edge: EdgeId::new(0),
                expected: "flow",
                found: "weighted"
            }
        );
    }

    #[test]
    fn test_non_finite_capacity_rejected() {
        for capacity in [f64::NAN, f64::INFINITY] {
            let g = Graph::directed([
                ("s", "a", EdgeLabel::capacity(2.0)),
                ("a", "t", EdgeLabel::capacity(capacity)),
            ]);
            assert!(matches!(
                max_flow(&g, id(&g, "s"), id(&g, "t")),
                Err(Error::NonFiniteWeight { edge, .. }) if edge == EdgeId::new(1)
            ));
        }
    }

    #[test]
    fn test_flow_graph_carries_flows() {
        let g = network();
        let flow = max_flow(&g, id(&g, "s"), id(&g, "t")).unwrap();
        let labelled = flow.flow_graph(&g).unwrap();
        let total_out: Weight = labelled
            .out_arcs(id(&g, "s"))
            .map(|(_, arc)| match arc.label {
                EdgeLabel::Flow { flow, .. } => flow,
                _ => 0.0,
            })
            .sum();
        assert_eq!(total_out, 23.0);
        let other = Graph::directed([("x", "y", EdgeLabel::capacity(1.0))]);
        assert!(flow.flow_graph(&other).is_err());
    }

    #[test]
    fn test_undirected_network() {
        let g = Graph::undirected(
            [("s", "a", 3.0), ("a", "t", 2.0), ("s", "t", 1.0)]
                .map(|(u, v, c)| (u, v, EdgeLabel::capacity(c))),
        )
        .unwrap();
        let flow = max_flow(&g, id(&g, "t"), id(&g, "s")).unwrap();
        assert_eq!(flow.value(), 3.0);
    }

    #[test]
    fn test_wrapper() {
        let g = network();
        let params = Parameters::new().with_source("s").with_target("t");
        let AlgorithmOutput::Flow(flow) = MaxFlowAlgorithm.execute(&g, &params).unwrap() else {
            panic!("expected a flow");
        };
        assert_eq!(flow.value(), 23.0);
    }
}
