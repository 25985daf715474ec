//! Tuning knobs shared by the algorithm entry points.

use serde::{Deserialize, Serialize};

/// Configuration for the `*_with_config` entry points.
///
/// The plain entry points (`dijkstra`, `johnson`, `kruskal`) use
/// [`AlgorithmConfig::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmConfig {
    /// Check that every weight is non-negative before running Dijkstra.
    pub validate_weights: bool,
    /// Largest rounding error accepted on a reweighted edge in Johnson's
    /// algorithm; weights in `[-tolerance, 0)` are clamped to zero.
    pub reweight_tolerance: f64,
    /// Compress paths on `find` in Kruskal's disjoint set.
    pub path_compression: bool,
    /// Run Johnson's per-source searches on the rayon pool. Only honoured
    /// when the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            validate_weights: true,
            reweight_tolerance: 1e-9,
            path_compression: false,
            parallel: false,
        }
    }
}

impl AlgorithmConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the non-negative weight check.
    #[must_use]
    pub fn with_weight_validation(mut self, enabled: bool) -> Self {
        self.validate_weights = enabled;
        self
    }

    /// Sets the reweighting tolerance. Negative values are treated as zero.
    #[must_use]
    pub fn with_reweight_tolerance(mut self, tolerance: f64) -> Self {
        self.reweight_tolerance = tolerance.max(0.0);
        self
    }

    /// Enables or disables path compression.
    #[must_use]
    pub fn with_path_compression(mut self, enabled: bool) -> Self {
        self.path_compression = enabled;
        self
    }

    /// Enables or disables parallel all-pairs searches.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Returns `true` if the parallel path will actually be taken.
    #[must_use]
    pub fn runs_parallel(&self) -> bool {
        cfg!(feature = "parallel") && self.parallel
    }
}
