//! Dependency ordering: topological sort and DAG detection.

use arbor_common::types::{VertexId, VertexKey};
use arbor_common::utils::error::{Error, Result};
use arbor_core::Graph;

use crate::traits::{AlgorithmOutput, Control, GraphAlgorithm, Parameters, TraversalEvent};
use crate::traversal::{Color, depth_first_visit};

// ============================================================================
// Topological Sort
// ============================================================================

/// Orders the vertices so that every edge `(u, v)` has `u` before `v`.
///
/// Runs a coloured DFS from every undiscovered vertex (in `VertexId` order)
/// and returns the reversed finishing order. Reaching a vertex that is still
/// in progress means the graph has a cycle, reported as
/// [`Error::CycleDetected`] naming that vertex. Undirected graphs with at
/// least one edge always fail, since every edge and its mirror form a cycle.
pub fn toposort<K: VertexKey>(graph: &Graph<K>) -> Result<Vec<VertexId>> {
    let n = graph.vertex_count();
    let mut colors = vec![Color::White; n];
    let mut finished = Vec::with_capacity(n);

    for root in graph.vertices() {
        if colors[root.index()] != Color::White {
            continue;
        }
        let cycle = depth_first_visit(graph, root, &mut colors, &mut |event: TraversalEvent| match event {
            TraversalEvent::BackEdge { target, .. } => Control::Break(target),
            TraversalEvent::Finish(vertex) => {
                finished.push(vertex);
                Control::Continue
            }
            _ => Control::Continue,
        });
        if let Some(vertex) = cycle {
            let vertex = graph
                .key(vertex)
                .map_or_else(|| vertex.to_string(), |key| format!("{key:?}"));
            tracing::warn!(%vertex, "cycle detected, no topological order");
            return Err(Error::CycleDetected { vertex });
        }
    }

    finished.reverse();
    tracing::debug!(vertices = n, "topological sort complete");
    Ok(finished)
}

/// Returns `true` if the graph has no directed cycle.
#[must_use]
pub fn is_dag<K: VertexKey>(graph: &Graph<K>) -> bool {
    toposort(graph).is_ok()
}

// ============================================================================
// Algorithm Wrappers for Plugin Registry
// ============================================================================

/// Topological sort wrapper for the registry.
pub struct TopologicalSortAlgorithm;

impl<K: VertexKey> GraphAlgorithm<K> for TopologicalSortAlgorithm {
    fn name(&self) -> &str {
        "toposort"
    }

    fn description(&self) -> &str {
        "Dependency order of a directed acyclic graph"
    }

    fn execute(&self, graph: &Graph<K>, _params: &Parameters<K>) -> Result<AlgorithmOutput> {
        toposort(graph).map(AlgorithmOutput::Order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dependency_graph() -> Graph<char> {
        Graph::directed([
            ('a', 'b'),
            ('a', 'c'),
            ('c', 'd'),
            ('c', 'f'),
            ('d', 'b'),
            ('d', 'e'),
            ('d', 'g'),
            ('h', 'f'),
            ('h', 'i'),
            ('i', 'g'),
        ])
    }

    fn position(order: &[VertexId]) -> Vec<usize> {
        let mut position = vec![0; order.len()];
        for (i, v) in order.iter().enumerate() {
            position[v.index()] = i;
        }
        position
    }

    #[test]
    fn test_toposort_respects_every_edge() {
        let g = dependency_graph();
        let order = toposort(&g).unwrap();
        assert_eq!(order.len(), g.vertex_count());
        let position = position(&order);
        for (_, edge) in g.edges() {
            assert!(position[edge.source.index()] < position[edge.target.index()]);
        }
    }

    #[test]
    fn test_toposort_exact_order() {
        let g = dependency_graph();
        let order: String = g.keys_of(&toposort(&g).unwrap()).collect();
        assert_eq!(order, "hiacfdgeb");
    }

    #[test]
    fn test_toposort_detects_cycle() {
        let g: Graph<char> = Graph::directed([('a', 'b'), ('b', 'c'), ('c', 'a')]);
        let err = toposort(&g).unwrap_err();
        assert_eq!(
            err,
            Error::CycleDetected {
                vertex: "'a'".into()
            }
        );
        assert!(!is_dag(&g));
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let g: Graph<u8> = Graph::directed([(1, 1)]);
        assert!(toposort(&g).unwrap_err().is_cycle());
    }

    #[test]
    fn test_isolated_and_empty() {
        let g: Graph<u8> = Graph::builder().vertices([3, 1, 2]).build_directed();
        let order: Vec<u8> = g.keys_of(&toposort(&g).unwrap()).copied().collect();
        assert_eq!(order, vec![2, 1, 3]);
        let empty: Graph<u8> = Graph::builder().build_directed();
        assert!(toposort(&empty).unwrap().is_empty());
    }

    #[test]
    fn test_undirected_edge_is_a_cycle() {
        let g = Graph::undirected([(1, 2)]).unwrap();
        assert!(!is_dag(&g));
    }

    #[test]
    fn test_wrapper() {
        let g = dependency_graph();
        let output = TopologicalSortAlgorithm.execute(&g, &Parameters::new()).unwrap();
        assert_eq!(output, AlgorithmOutput::Order(toposort(&g).unwrap()));
    }
}
