//! Edge payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric type of edge weights, capacities and flows.
///
/// Unreachable distances are reported as [`f64::INFINITY`].
pub type Weight = f64;

/// The label attached to an edge.
///
/// Each algorithm pattern-matches on the variant it needs and rejects the
/// others with [`Error::LabelMismatch`](crate::Error::LabelMismatch).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EdgeLabel {
    /// No payload; traversal and ordering only.
    #[default]
    Unweighted,
    /// A weight (cost, length) for shortest paths and spanning trees.
    Weighted(Weight),
    /// A flow-network edge.
    Flow {
        /// Maximum flow the edge can carry.
        capacity: Weight,
        /// Flow currently assigned to the edge, `0 <= flow <= capacity`.
        flow: Weight,
    },
}

impl EdgeLabel {
    /// Creates a flow label with the given capacity and no flow.
    #[inline]
    #[must_use]
    pub const fn capacity(capacity: Weight) -> Self {
        Self::Flow {
            capacity,
            flow: 0.0,
        }
    }

    /// Returns the weight of a `Weighted` label.
    #[inline]
    #[must_use]
    pub const fn weight(&self) -> Option<Weight> {
        match self {
            Self::Weighted(w) => Some(*w),
            _ => None,
        }
    }

    /// Returns the capacity of a `Flow` label.
    #[inline]
    #[must_use]
    pub const fn flow_capacity(&self) -> Option<Weight> {
        match self {
            Self::Flow { capacity, .. } => Some(*capacity),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Unweighted => "unweighted",
            Self::Weighted(_) => "weighted",
            Self::Flow { .. } => "flow",
        }
    }
}

impl From<Weight> for EdgeLabel {
    fn from(weight: Weight) -> Self {
        Self::Weighted(weight)
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unweighted => write!(f, "-"),
            Self::Weighted(w) => write!(f, "{w}"),
            Self::Flow { capacity, flow } => write!(f, "{flow}/{capacity}"),
        }
    }
}
