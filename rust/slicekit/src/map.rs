//! Key and value extraction from hash maps.
//!
//! Map iteration order is unspecified, so neither function guarantees any
//! particular order; compare results as multisets.

use std::collections::HashMap;
use std::hash::BuildHasher;

/// Returns all keys of `m`, in unspecified order.
pub fn keys<K: Clone, V, S: BuildHasher>(m: &HashMap<K, V, S>) -> Vec<K> {
    m.keys().cloned().collect()
}

/// Returns all values of `m`, in unspecified order.
pub fn values<K, V: Clone, S: BuildHasher>(m: &HashMap<K, V, S>) -> Vec<V> {
    m.values().cloned().collect()
}
