//! Error types for Arbor.
//!
//! Every failure an algorithm can report is a local, recoverable condition,
//! so there is a single [`Error`] enum that callers can match on. Vertex
//! keys are rendered with their `Debug` form because the enum is not
//! generic over the caller's key type.

use thiserror::Error;

use crate::types::{EdgeId, Weight};

/// Result type alias for Arbor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by graph construction, the supporting data structures
/// and the algorithms.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A vertex key or id is not present in the graph.
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    /// Undirected construction saw both orientations of an edge.
    #[error("edge {from} -> {to} is given in both directions")]
    ConflictingDirection {
        /// Source key of the first orientation seen.
        from: String,
        /// Target key of the first orientation seen.
        to: String,
    },

    /// `pop_min` on an empty priority queue.
    #[error("pop from an empty priority queue")]
    EmptyQueue,

    /// `decrease_key` with a key that is not strictly lower than the
    /// current one.
    #[error("decrease-key to {new} is not lower than current key {current}")]
    KeyNotLower {
        /// Key currently stored for the item.
        current: String,
        /// Rejected replacement key.
        new: String,
    },

    /// `decrease_key` on an item that is not queued.
    #[error("item not found in priority queue: {0}")]
    NotFound(String),

    /// Disjoint-set operation on an element that was never added.
    #[error("unknown disjoint-set element: {0}")]
    UnknownElement(String),

    /// A negative-weight cycle makes shortest paths undefined.
    #[error("negative cycle detected")]
    NegativeCycleDetected,

    /// A directed cycle prevents a topological order.
    #[error("cycle detected at vertex {vertex}")]
    CycleDetected {
        /// Vertex that was revisited while still in progress.
        vertex: String,
    },

    /// An edge weight is negative where the algorithm requires `>= 0`.
    #[error("edge {edge} has negative weight {weight}")]
    NegativeWeight {
        /// Offending edge.
        edge: EdgeId,
        /// Its weight.
        weight: Weight,
    },

    /// An edge weight or capacity is NaN or infinite.
    #[error("edge {edge} has non-finite weight {weight}")]
    NonFiniteWeight {
        /// Offending edge.
        edge: EdgeId,
        /// Its weight.
        weight: Weight,
    },

    /// An edge carries a label variant the algorithm cannot interpret.
    #[error("edge {edge} has a {found} label, expected {expected}")]
    LabelMismatch {
        /// Offending edge.
        edge: EdgeId,
        /// Label kind the algorithm requires.
        expected: &'static str,
        /// Label kind that was found.
        found: &'static str,
    },

    /// An argument is out of the algorithm's domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl Error {
    /// Builds an [`Error::UnknownVertex`] from any debuggable key.
    pub fn unknown_vertex(key: &impl std::fmt::Debug) -> Self {
        Self::UnknownVertex(format!("{key:?}"))
    }

    /// Returns `true` for the two cycle conditions (negative-weight and
    /// directed), which are terminal results rather than bad input.
    #[must_use]
    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::NegativeCycleDetected | Self::CycleDetected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_vertex_uses_debug_form() {
        let err = Error::unknown_vertex(&"z");
        assert_eq!(err, Error::UnknownVertex("\"z\"".to_string()));
        assert_eq!(err.to_string(), "unknown vertex: \"z\"");
    }

    #[test]
    fn test_messages() {
        let err = Error::LabelMismatch {
            edge: EdgeId::new(3),
            expected: "weighted",
            found: "unweighted",
        };
        assert_eq!(
            err.to_string(),
            "edge 3 has a unweighted label, expected weighted"
        );
        assert_eq!(
            Error::NegativeWeight {
                edge: EdgeId::new(0),
                weight: -2.0
            }
            .to_string(),
            "edge 0 has negative weight -2"
        );
    }

    #[test]
    fn test_non_finite_message() {
        let err = Error::NonFiniteWeight {
            edge: EdgeId::new(1),
            weight: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "edge 1 has non-finite weight inf");
    }

    #[test]
    fn test_is_cycle() {
        assert!(Error::NegativeCycleDetected.is_cycle());
        assert!(
            Error::CycleDetected {
                vertex: "a".into()
            }
            .is_cycle()
        );
        assert!(!Error::EmptyQueue.is_cycle());
    }
}
