//! # arbor-common
//!
//! Foundation layer for Arbor: identifiers, edge labels, and utilities.
//!
//! This crate provides the fundamental building blocks used by all other
//! Arbor crates. It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (VertexId, EdgeId, EdgeLabel)
//! - [`utils`] - Utility functions and helpers (hashing, errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{EdgeId, EdgeLabel, VertexId, VertexKey, Weight};
pub use utils::error::{Error, Result};
