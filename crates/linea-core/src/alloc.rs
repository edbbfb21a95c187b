//! Optimized collection types for Linea.
//!
//! This module provides:
//! - Re-exports of optimized hash collections using AHash
//! - An insertion-ordered map keyed with the same hasher

// Re-export optimized hash collections
pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};

/// Insertion-ordered map using AHash.
///
/// Iteration follows insertion order, which keeps per-key output stable
/// between runs.
pub type IndexMap<K, V> = indexmap::IndexMap<K, V, RandomState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashset_ahash() {
        let mut set = HashSet::new();
        set.insert(42);
        assert!(set.contains(&42));
    }

    #[test]
    fn test_index_map_keeps_insertion_order() {
        let mut map: IndexMap<&str, i32> = IndexMap::default();
        map.insert("b", 2);
        map.insert("a", 1);
        map.insert("c", 3);
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }
}
