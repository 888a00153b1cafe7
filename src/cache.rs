//! Bounded insertion-order memoization store.
//!
//! All engine caches share this structure: a map plus an insertion-order
//! queue, evicting the oldest entries in a batch when the capacity is
//! exceeded. Batch eviction trades granularity for fewer housekeeping passes
//! on hot paths.

use std::borrow::Borrow;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// A bounded cache that evicts its oldest-inserted entries on overflow.
///
/// Re-inserting an existing key replaces the stored value without changing
/// the key's insertion position.
#[derive(Debug)]
pub struct BoundedCache<K, V> {
    map: HashMap<K, V>,
    order: VecDeque<K>,
    capacity: usize,
    evict_batch: usize,
}

impl<K: Eq + Hash + Clone, V> BoundedCache<K, V> {
    /// Create a cache holding at most `capacity` entries, evicting one entry
    /// at a time on overflow.
    pub fn new(capacity: usize) -> Self {
        Self::with_batch_eviction(capacity, 1)
    }

    /// Create a cache that evicts `evict_batch` oldest entries in one pass
    /// when `capacity` is reached.
    pub fn with_batch_eviction(capacity: usize, evict_batch: usize) -> Self {
        Self {
            map: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
            evict_batch: evict_batch.max(1),
        }
    }

    /// Look up a key without affecting insertion order.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key)
    }

    /// Whether the key is present.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Insert a value, evicting the oldest batch first if the cache is full.
    pub fn insert(&mut self, key: K, value: V) {
        if self.map.contains_key(&key) {
            self.map.insert(key, value);
            return;
        }

        if self.map.len() >= self.capacity {
            self.evict_oldest();
        }

        self.order.push_back(key.clone());
        self.map.insert(key, value);
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.map.clear();
        self.order.clear();
    }

    fn evict_oldest(&mut self) {
        for _ in 0..self.evict_batch {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.map.remove(&oldest);
                }
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut cache = BoundedCache::new(4);
        cache.insert("a", 1);
        cache.insert("b", 2);

        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.get(&"c"), None);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_single_eviction_is_oldest_first() {
        let mut cache = BoundedCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.insert("c", 3);

        assert!(!cache.contains(&"a"));
        assert!(cache.contains(&"b"));
        assert!(cache.contains(&"c"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_batch_eviction() {
        let mut cache = BoundedCache::with_batch_eviction(10, 2);
        for i in 0..10 {
            cache.insert(i, i);
        }
        assert_eq!(cache.len(), 10);

        // Overflow drops the two oldest in one pass.
        cache.insert(10, 10);
        assert_eq!(cache.len(), 9);
        assert!(!cache.contains(&0));
        assert!(!cache.contains(&1));
        assert!(cache.contains(&2));
        assert!(cache.contains(&10));
    }

    #[test]
    fn test_reinsert_replaces_value_in_place() {
        let mut cache = BoundedCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.insert("a", 9);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"a"), Some(&9));

        // "a" kept its original insertion slot, so it is still the oldest.
        cache.insert("c", 3);
        assert!(!cache.contains(&"a"));
        assert!(cache.contains(&"b"));
    }

    #[test]
    fn test_clear() {
        let mut cache = BoundedCache::new(4);
        cache.insert(1, "x");
        cache.insert(2, "y");
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.get(&1), None);
    }

    #[test]
    fn test_zero_capacity_clamps_to_one() {
        let mut cache = BoundedCache::new(0);
        cache.insert("a", 1);
        assert_eq!(cache.len(), 1);

        cache.insert("b", 2);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&"b"));
    }
}
