//! Core type definitions for Arbor.
//!
//! - Identifier types ([`VertexId`], [`EdgeId`]) indexing the graph arena
//! - Edge payloads ([`EdgeLabel`], [`Weight`])
//! - The [`VertexKey`] bound for caller-supplied vertex identities

mod id;
mod label;

pub use id::{EdgeId, VertexId};
pub use label::{EdgeLabel, Weight};

use std::fmt::Debug;
use std::hash::Hash;

/// Bound for externally supplied vertex identities.
///
/// Anything hashable, comparable and printable works: `&str`, `String`,
/// integers, or a caller-defined newtype. Keys are cloned once into the
/// graph at construction time. Graphs are shared across threads by the
/// parallel all-pairs search, hence `Send + Sync`.
pub trait VertexKey: Clone + Eq + Hash + Debug + Send + Sync {}

impl<T: Clone + Eq + Hash + Debug + Send + Sync> VertexKey for T {}
