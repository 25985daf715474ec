//! Common utilities used throughout Arbor.
//!
//! - [`error`] - The shared [`Error`] type and [`Result`] alias
//! - [`hash`] - Fast hash maps and sets (aHash, non-cryptographic)

pub mod error;
pub mod hash;

pub use error::{Error, Result};
pub use hash::{FastHashMap, FastHashSet};
