//! # Keyed cache of fetched query results
//!
//! [`QueryCache`] maps a canonical request key (the serialized filter
//! parameters, or an item id) to the last fetched value plus a freshness
//! flag. Reads through [`QueryCache::get`] only succeed while the entry is
//! fresh, so marking entries stale is what forces the next read back to the
//! server. Invalidation is a bulk mark-stale over the whole resource family,
//! not a targeted walk: values are kept so a view can keep showing the old
//! data while its refetch is in flight ([`QueryCache::peek`]).

use std::collections::HashMap;

#[derive(Clone, Debug)]
struct CacheEntry<T> {
    value: T,
    fresh: bool,
}

/// Cache of query results keyed by a canonical request serialization.
#[derive(Clone, Debug)]
pub struct QueryCache<T> {
    entries: HashMap<String, CacheEntry<T>>,
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> QueryCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached value for `key`, only while it is fresh.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries
            .get(key)
            .filter(|entry| entry.fresh)
            .map(|entry| &entry.value)
    }

    /// The cached value for `key` regardless of freshness.
    pub fn peek(&self, key: &str) -> Option<&T> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Store a freshly fetched value.
    pub fn insert(&mut self, key: impl Into<String>, value: T) {
        self.entries.insert(key.into(), CacheEntry { value, fresh: true });
    }

    /// Mark one entry stale, keeping its value.
    pub fn invalidate(&mut self, key: &str) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.fresh = false;
        }
    }

    /// Mark every entry stale.
    pub fn invalidate_all(&mut self) {
        for entry in self.entries.values_mut() {
            entry.fresh = false;
        }
    }

    /// Drop one entry entirely.
    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_entries_are_served() {
        let mut cache = QueryCache::new();
        cache.insert("todos?status=pending", vec![1, 2, 3]);
        assert_eq!(cache.get("todos?status=pending"), Some(&vec![1, 2, 3]));
        assert!(cache.get("todos?status=done").is_none());
    }

    #[test]
    fn stale_entries_are_not_served_but_can_be_peeked() {
        let mut cache = QueryCache::new();
        cache.insert("todos", "first".to_string());
        cache.invalidate("todos");

        assert!(cache.get("todos").is_none());
        assert_eq!(cache.peek("todos").map(String::as_str), Some("first"));
    }

    #[test]
    fn invalidate_all_marks_every_entry_stale() {
        let mut cache = QueryCache::new();
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.invalidate_all();

        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_none());
        // Values survive for stale rendering
        assert_eq!(cache.peek("a"), Some(&1));
        assert_eq!(cache.peek("b"), Some(&2));
    }

    #[test]
    fn reinserting_restores_freshness() {
        let mut cache = QueryCache::new();
        cache.insert("todos", 1);
        cache.invalidate_all();
        cache.insert("todos", 2);

        assert_eq!(cache.get("todos"), Some(&2));
    }

    #[test]
    fn remove_drops_the_value_entirely() {
        let mut cache = QueryCache::new();
        cache.insert("todos/42", "gone".to_string());
        cache.remove("todos/42");

        assert!(cache.get("todos/42").is_none());
        assert!(cache.peek("todos/42").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn invalidating_an_unknown_key_is_harmless() {
        let mut cache: QueryCache<u32> = QueryCache::new();
        cache.invalidate("nope");
        assert!(cache.is_empty());
    }
}
