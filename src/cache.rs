//! Memoization of normalization results
//!
//! Entries are only ever inserted, never evicted: the cache lives exactly
//! as long as the normalizer that owns it.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// What a cached result is keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheKey {
    /// The raw path alone. A later call with the same path but a
    /// different base gets the first result back.
    #[default]
    Path,
    /// The raw path together with the raw base.
    PathAndBase,
}

/// Insert-only map from raw input to combined path
///
/// Safe to share between threads. When two threads race to fill the same
/// key, both get the value that landed first.
///
/// # Examples
/// ```
/// use path_to::{CacheKey, NormalizationCache};
///
/// let cache = NormalizationCache::new(CacheKey::Path);
/// assert_eq!(cache.get_or_compute("x.txt", "a", || "/a/x.txt".into()), "/a/x.txt");
/// assert_eq!(cache.get_or_compute("x.txt", "b", || "/b/x.txt".into()), "/a/x.txt");
/// ```
#[derive(Debug, Default)]
pub struct NormalizationCache {
    key: CacheKey,
    entries: RwLock<FxHashMap<(String, String), String>>,
}

impl NormalizationCache {
    /// Empty cache with the given key policy
    pub fn new(key: CacheKey) -> Self {
        Self {
            key,
            entries: RwLock::new(FxHashMap::default()),
        }
    }

    /// What results are keyed on
    pub fn key_policy(&self) -> CacheKey {
        self.key
    }

    fn key_for(&self, path: &str, base: &str) -> (String, String) {
        match self.key {
            CacheKey::Path => (path.to_string(), String::new()),
            CacheKey::PathAndBase => (path.to_string(), base.to_string()),
        }
    }

    /// Look up a previously stored result
    pub fn get(&self, path: &str, base: &str) -> Option<String> {
        self.entries.read().get(&self.key_for(path, base)).cloned()
    }

    /// Return the stored result for the key, computing and storing it first
    /// if absent
    ///
    /// `compute` runs outside the lock.
    pub fn get_or_compute<F>(&self, path: &str, base: &str, compute: F) -> String
    where
        F: FnOnce() -> String,
    {
        let key = self.key_for(path, base);

        if let Some(hit) = self.entries.read().get(&key) {
            log::debug!("Normalization cache hit for {path:?}");
            return hit.clone();
        }

        let computed = compute();
        log::debug!("Caching normalization of {path:?} as {computed:?}");
        self.entries.write().entry(key).or_insert(computed).clone()
    }

    /// Number of stored results
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether nothing has been stored yet
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
