//! Name-keyed lazy cache
//!
//! Process-wide memoized lookup: values are built at most once per name and
//! shared as `Arc`s. No eviction; entries live for the lifetime of the
//! cache.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A mutex-guarded, lazily populated map from name to shared value.
#[derive(Debug, Default)]
pub struct LazyCache<V> {
    entries: Mutex<HashMap<String, Arc<V>>>,
}

impl<V> LazyCache<V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the value for `name`, building it with `init` on first use.
    ///
    /// The lock is held across `init`, so population happens exactly once
    /// per name even under concurrent access. `init` must not call back
    /// into this cache.
    pub fn get_or_init<F>(&self, name: &str, init: F) -> Arc<V>
    where
        F: FnOnce() -> V,
    {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(v) = entries.get(name) {
            return v.clone();
        }
        let v = Arc::new(init());
        entries.insert(name.to_string(), v.clone());
        v
    }

    /// Return the value for `name` if already populated.
    pub fn get(&self, name: &str) -> Option<Arc<V>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(name).cloned()
    }

    /// Whether `name` has been populated.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of populated entries.
    pub fn len(&self) -> usize {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn populates_once_per_name() {
        let cache = LazyCache::new();
        let builds = AtomicU32::new(0);
        let build = || {
            builds.fetch_add(1, Ordering::SeqCst);
            42u32
        };

        let a = cache.get_or_init("answer", build);
        let b = cache.get_or_init("answer", build);
        assert_eq!(*a, 42);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn distinct_names_get_distinct_values() {
        let cache = LazyCache::new();
        let a = cache.get_or_init("a", || 1);
        let b = cache.get_or_init("b", || 2);
        assert_eq!((*a, *b), (1, 2));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn get_without_populating() {
        let cache: LazyCache<String> = LazyCache::new();
        assert!(cache.get("missing").is_none());
        assert!(!cache.contains("missing"));
        assert!(cache.is_empty());

        cache.get_or_init("present", || "v".to_string());
        assert_eq!(cache.get("present").as_deref().map(String::as_str), Some("v"));
        assert!(cache.contains("present"));
    }

    #[test]
    fn concurrent_access_builds_once() {
        let cache = LazyCache::new();
        let builds = AtomicU32::new(0);

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    let v = cache.get_or_init("shared", || {
                        builds.fetch_add(1, Ordering::SeqCst);
                        7u32
                    });
                    assert_eq!(*v, 7);
                });
            }
        });

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }
}
