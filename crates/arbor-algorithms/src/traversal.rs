//! Graph traversal algorithms: BFS and DFS.
//!
//! The plain searches ([`bfs`], [`dfs`], [`bfs_path`]) run [`explore`] with a
//! queue or a stack frontier. The visitor-driven searches report every
//! discovery, edge classification and finish to a callback that can prune or
//! stop the traversal.

use arbor_common::types::{VertexId, VertexKey};
use arbor_common::utils::error::Result;
use arbor_core::{Fifo, Frontier, Graph, Lifo};
use serde::{Deserialize, Serialize};

use crate::traits::{AlgorithmOutput, Control, GraphAlgorithm, Parameters, TraversalEvent};

// ============================================================================
// Frontier Exploration
// ============================================================================

/// Visit order and search tree of a single-source exploration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exploration {
    /// Vertices in the order they were taken from the frontier.
    pub order: Vec<VertexId>,
    /// For every vertex, the vertex it was discovered from.
    pub come_from: Vec<Option<VertexId>>,
    source: VertexId,
}

impl Exploration {
    /// The start vertex.
    #[must_use]
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns `true` if `vertex` was reached.
    #[must_use]
    pub fn is_reached(&self, vertex: VertexId) -> bool {
        vertex == self.source || self.come_from.get(vertex.index()).is_some_and(Option::is_some)
    }

    /// Walks `come_from` back from `target` and returns the path from the
    /// source, or `None` if `target` was not reached.
    #[must_use]
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reached(target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.come_from[current.index()]?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

/// Explores everything reachable from `source`, taking vertices out of a
/// frontier of type `F`.
///
/// A vertex is marked seen when it is pushed, so each vertex enters the
/// frontier at most once and the search is O(V + E).
pub fn explore<K: VertexKey, F: Frontier>(graph: &Graph<K>, source: VertexId) -> Result<Exploration> {
    graph.check_vertex(source)?;
    let n = graph.vertex_count();
    let mut seen = vec![false; n];
    let mut come_from = vec![None; n];
    let mut order = Vec::with_capacity(n);
    let mut frontier = F::default();

    seen[source.index()] = true;
    frontier.push(source);
    while let Some(vertex) = frontier.pop() {
        order.push(vertex);
        for (neighbour, _) in graph.neighbours(vertex) {
            if !seen[neighbour.index()] {
                seen[neighbour.index()] = true;
                come_from[neighbour.index()] = Some(vertex);
                frontier.push(neighbour);
            }
        }
    }

    tracing::trace!(source = %source, reached = order.len(), "explored");
    Ok(Exploration {
        order,
        come_from,
        source,
    })
}

// ============================================================================
// BFS Implementation
// ============================================================================

/// Performs breadth-first search from `source`.
///
/// Returns the reachable vertices in BFS order.
pub fn bfs<K: VertexKey>(graph: &Graph<K>, source: VertexId) -> Result<Vec<VertexId>> {
    Ok(explore::<K, Fifo>(graph, source)?.order)
}

/// Finds a path with the fewest edges from `source` to `target`.
///
/// Returns `None` if `target` is unreachable and `[source]` if both are the
/// same vertex.
pub fn bfs_path<K: VertexKey>(
    graph: &Graph<K>,
    source: VertexId,
    target: VertexId,
) -> Result<Option<Vec<VertexId>>> {
    graph.check_vertex(target)?;
    Ok(explore::<K, Fifo>(graph, source)?.path_to(target))
}

/// Groups the reachable vertices by hop distance: `layers[i]` holds every
/// vertex `i` edges away from `source`.
pub fn bfs_layers<K: VertexKey>(graph: &Graph<K>, source: VertexId) -> Result<Vec<Vec<VertexId>>> {
    graph.check_vertex(source)?;
    let mut layers = Vec::new();
    let mut discovered = vec![false; graph.vertex_count()];
    let mut current_layer = vec![source];
    let mut next_layer = Vec::new();
    discovered[source.index()] = true;

    while !current_layer.is_empty() {
        for &vertex in &current_layer {
            for (neighbour, _) in graph.neighbours(vertex) {
                if !discovered[neighbour.index()] {
                    discovered[neighbour.index()] = true;
                    next_layer.push(neighbour);
                }
            }
        }
        layers.push(std::mem::take(&mut current_layer));
        std::mem::swap(&mut current_layer, &mut next_layer);
    }

    Ok(layers)
}

/// Performs breadth-first search with a visitor callback.
///
/// Returns `Some(B)` if the visitor returned `Control::Break(B)`, otherwise
/// `None`. Pruning a `Discover` or `TreeEdge` event keeps the vertex from
/// being expanded.
pub fn bfs_with_visitor<K, B, F>(graph: &Graph<K>, start: VertexId, mut visitor: F) -> Result<Option<B>>
where
    K: VertexKey,
    F: FnMut(TraversalEvent) -> Control<B>,
{
    graph.check_vertex(start)?;
    let mut discovered = vec![false; graph.vertex_count()];
    let mut queue = Fifo::default();

    discovered[start.index()] = true;
    match visitor(TraversalEvent::Discover(start)) {
        Control::Break(b) => return Ok(Some(b)),
        Control::Prune => {
            return Ok(match visitor(TraversalEvent::Finish(start)) {
                Control::Break(b) => Some(b),
                _ => None,
            });
        }
        Control::Continue => queue.push(start),
    }

    while let Some(vertex) = queue.pop() {
        for (edge, arc) in graph.out_arcs(vertex) {
            let neighbour = arc.target;
            if discovered[neighbour.index()] {
                if let Control::Break(b) = visitor(TraversalEvent::NonTreeEdge {
                    source: vertex,
                    target: neighbour,
                    edge,
                }) {
                    return Ok(Some(b));
                }
                continue;
            }

            discovered[neighbour.index()] = true;
            match visitor(TraversalEvent::TreeEdge {
                source: vertex,
                target: neighbour,
                edge,
            }) {
                Control::Break(b) => return Ok(Some(b)),
                Control::Prune => continue,
                Control::Continue => {}
            }
            match visitor(TraversalEvent::Discover(neighbour)) {
                Control::Break(b) => return Ok(Some(b)),
                Control::Prune => continue,
                Control::Continue => queue.push(neighbour),
            }
        }

        if let Control::Break(b) = visitor(TraversalEvent::Finish(vertex)) {
            return Ok(Some(b));
        }
    }

    Ok(None)
}

// ============================================================================
// DFS Implementation
// ============================================================================

/// Vertex state during DFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    /// Not yet discovered
    White,
    /// Discovered, still on the stack
    Gray,
    /// Finished
    Black,
}

/// Performs depth-first search from `source` with a stack frontier.
///
/// Returns the reachable vertices in the order they were taken off the stack.
pub fn dfs<K: VertexKey>(graph: &Graph<K>, source: VertexId) -> Result<Vec<VertexId>> {
    Ok(explore::<K, Lifo>(graph, source)?.order)
}

/// Lists the vertices reachable from `source` in DFS finishing order
/// (post-order).
pub fn dfs_finish_order<K: VertexKey>(graph: &Graph<K>, source: VertexId) -> Result<Vec<VertexId>> {
    let mut finished = Vec::new();
    dfs_with_visitor(graph, source, |event| -> Control<()> {
        if let TraversalEvent::Finish(vertex) = event {
            finished.push(vertex);
        }
        Control::Continue
    })?;
    Ok(finished)
}

/// Performs depth-first search with a visitor callback.
///
/// Uses an explicit stack, so deep graphs cannot overflow the call stack.
/// Returns `Some(B)` if the visitor returned `Control::Break(B)`, otherwise
/// `None`.
pub fn dfs_with_visitor<K, B, F>(graph: &Graph<K>, start: VertexId, mut visitor: F) -> Result<Option<B>>
where
    K: VertexKey,
    F: FnMut(TraversalEvent) -> Control<B>,
{
    graph.check_vertex(start)?;
    let mut colors = vec![Color::White; graph.vertex_count()];
    Ok(depth_first_visit(graph, start, &mut colors, &mut visitor))
}

/// Coloured DFS from `start` that leaves `colors` in place, so repeated
/// calls over several roots share one white/grey/black state.
///
/// `start` must be a valid, white vertex.
pub(crate) fn depth_first_visit<K, B, F>(
    graph: &Graph<K>,
    start: VertexId,
    colors: &mut [Color],
    visitor: &mut F,
) -> Option<B>
where
    K: VertexKey,
    F: FnMut(TraversalEvent) -> Control<B>,
{
    colors[start.index()] = Color::Gray;
    match visitor(TraversalEvent::Discover(start)) {
        Control::Break(b) => return Some(b),
        Control::Prune => {
            colors[start.index()] = Color::Black;
            return match visitor(TraversalEvent::Finish(start)) {
                Control::Break(b) => Some(b),
                _ => None,
            };
        }
        Control::Continue => {}
    }

    let mut stack = vec![(start, graph.out_arcs(start))];
    while let Some((vertex, arcs)) = stack.last_mut() {
        let vertex = *vertex;
        let Some((edge, arc)) = arcs.next() else {
            stack.pop();
            colors[vertex.index()] = Color::Black;
            if let Control::Break(b) = visitor(TraversalEvent::Finish(vertex)) {
                return Some(b);
            }
            continue;
        };

        let neighbour = arc.target;
        match colors[neighbour.index()] {
            Color::White => {
                match visitor(TraversalEvent::TreeEdge {
                    source: vertex,
                    target: neighbour,
                    edge,
                }) {
                    Control::Break(b) => return Some(b),
                    Control::Prune => continue,
                    Control::Continue => {}
                }

                colors[neighbour.index()] = Color::Gray;
                match visitor(TraversalEvent::Discover(neighbour)) {
                    Control::Break(b) => return Some(b),
                    Control::Prune => {
                        colors[neighbour.index()] = Color::Black;
                        if let Control::Break(b) = visitor(TraversalEvent::Finish(neighbour)) {
                            return Some(b);
                        }
                    }
                    Control::Continue => stack.push((neighbour, graph.out_arcs(neighbour))),
                }
            }
            Color::Gray => {
                // Back edge: the neighbour is an ancestor on the stack
                if let Control::Break(b) = visitor(TraversalEvent::BackEdge {
                    source: vertex,
                    target: neighbour,
                    edge,
                }) {
                    return Some(b);
                }
            }
            Color::Black => {
                if let Control::Break(b) = visitor(TraversalEvent::NonTreeEdge {
                    source: vertex,
                    target: neighbour,
                    edge,
                }) {
                    return Some(b);
                }
            }
        }
    }

    None
}

// ============================================================================
// Algorithm Wrappers for Plugin Registry
// ============================================================================

/// BFS algorithm wrapper for the registry.
pub struct BfsAlgorithm;

impl<K: VertexKey> GraphAlgorithm<K> for BfsAlgorithm {
    fn name(&self) -> &str {
        "bfs"
    }

    fn description(&self) -> &str {
        "Breadth-first search traversal from a source vertex"
    }

    fn execute(&self, graph: &Graph<K>, params: &Parameters<K>) -> Result<AlgorithmOutput> {
        bfs(graph, params.source_id(graph)?).map(AlgorithmOutput::Order)
    }
}

/// DFS algorithm wrapper for the registry.
pub struct DfsAlgorithm;

impl<K: VertexKey> GraphAlgorithm<K> for DfsAlgorithm {
    fn name(&self) -> &str {
        "dfs"
    }

    fn description(&self) -> &str {
        "Depth-first search traversal from a source vertex"
    }

    fn execute(&self, graph: &Graph<K>, params: &Parameters<K>) -> Result<AlgorithmOutput> {
        dfs(graph, params.source_id(graph)?).map(AlgorithmOutput::Order)
    }
}

/// Shortest unweighted path wrapper for the registry.
pub struct BfsPathAlgorithm;

impl<K: VertexKey> GraphAlgorithm<K> for BfsPathAlgorithm {
    fn name(&self) -> &str {
        "bfs_path"
    }

    fn description(&self) -> &str {
        "Path with the fewest edges between two vertices"
    }

    fn execute(&self, graph: &Graph<K>, params: &Parameters<K>) -> Result<AlgorithmOutput> {
        let source = params.source_id(graph)?;
        let target = params.target_id(graph)?;
        bfs_path(graph, source, target).map(AlgorithmOutput::Path)
    }
}
