//! Fast hashing for internal lookup tables.
//!
//! Vertex keys and arena indices are hashed constantly during graph
//! construction and priority-queue bookkeeping, so the tables use aHash
//! instead of SipHash. None of these maps are exposed to untrusted input.

use ahash::RandomState;

/// HashMap with aHash.
pub type FastHashMap<K, V> = hashbrown::HashMap<K, V, RandomState>;

/// HashSet with aHash.
pub type FastHashSet<T> = hashbrown::HashSet<T, RandomState>;

/// Creates a new empty [`FastHashMap`] with the specified capacity.
#[inline]
#[must_use]
pub fn fast_map_with_capacity<K, V>(capacity: usize) -> FastHashMap<K, V> {
    FastHashMap::with_capacity_and_hasher(capacity, RandomState::new())
}
