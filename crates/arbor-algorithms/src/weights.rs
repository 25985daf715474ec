//! Weight extraction shared by the weighted algorithms.

use arbor_common::types::{EdgeId, VertexKey, Weight};
use arbor_common::utils::error::{Error, Result};
use arbor_core::Graph;

/// Reads the weight of every stored arc, indexed by [`EdgeId`].
///
/// Fails with [`Error::LabelMismatch`] on the first arc that is not
/// `Weighted` and with [`Error::NonFiniteWeight`] on the first NaN or
/// infinite weight.
pub(crate) fn arc_weights<K: VertexKey>(graph: &Graph<K>) -> Result<Vec<Weight>> {
    graph.arcs().map(|(id, edge)| edge.weight(id)).collect()
}

/// Fails with [`Error::NegativeWeight`] on the first negative weight.
pub(crate) fn require_non_negative(weights: &[Weight]) -> Result<()> {
    match weights.iter().position(|&w| w < 0.0) {
        Some(index) => Err(Error::NegativeWeight {
            edge: EdgeId::new(index),
            weight: weights[index],
        }),
        None => Ok(()),
    }
}
