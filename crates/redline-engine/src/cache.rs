//! Injected caching of comparison results.

use std::collections::{HashMap, VecDeque};
use std::sync::RwLock;

use tracing::warn;

use redline_types::{ContentId, DocumentDiff};

const KEY_DOMAIN: &str = "redline-diff-v1";

/// Cache key for one comparison: a BLAKE3 hash over both texts and the
/// alignment flag.
///
/// Texts are length-prefixed so `("ab", "c")` and `("a", "bc")` never collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiffKey(ContentId);

impl DiffKey {
    pub fn new(original: &str, revised: &str, align_by_headings: bool) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(KEY_DOMAIN.as_bytes());
        hasher.update(b":");
        for text in [original, revised] {
            hasher.update(&(text.len() as u64).to_le_bytes());
            hasher.update(text.as_bytes());
        }
        hasher.update(&[u8::from(align_by_headings)]);
        Self(ContentId::from_hash(hasher.finalize()))
    }

    /// The underlying content hash.
    pub fn id(&self) -> ContentId {
        self.0
    }
}

/// Storage for previously computed comparisons.
///
/// Implementations must be safe to share between threads. A cache is an
/// optimisation only: a miss must never change the result.
pub trait DiffCache: Send + Sync {
    /// Look up a previous result.
    fn get(&self, key: &DiffKey) -> Option<DocumentDiff>;

    /// Store a result. Implementations may drop entries at any time.
    fn put(&self, key: DiffKey, diff: DocumentDiff);
}

/// In-memory, HashMap-based cache with optional FIFO eviction.
///
/// Intended for embedding a differ in a long-running process. Entries are
/// held behind a `RwLock` and cloned on read.
pub struct InMemoryDiffCache {
    capacity: Option<usize>,
    inner: RwLock<CacheInner>,
}

#[derive(Default)]
struct CacheInner {
    entries: HashMap<DiffKey, DocumentDiff>,
    order: VecDeque<DiffKey>,
}

impl InMemoryDiffCache {
    /// Create an unbounded cache.
    pub fn new() -> Self {
        Self {
            capacity: None,
            inner: RwLock::new(CacheInner::default()),
        }
    }

    /// Create a cache holding at most `capacity` results; the oldest entry
    /// is evicted first.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            inner: RwLock::new(CacheInner::default()),
        }
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.inner.read().map(|i| i.entries.len()).unwrap_or(0)
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached result.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.entries.clear();
            inner.order.clear();
        }
    }
}

impl Default for InMemoryDiffCache {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffCache for InMemoryDiffCache {
    fn get(&self, key: &DiffKey) -> Option<DocumentDiff> {
        match self.inner.read() {
            Ok(inner) => inner.entries.get(key).cloned(),
            Err(_) => {
                warn!(key = %key.id().short_hex(), "diff cache lock poisoned; treating as miss");
                None
            }
        }
    }

    fn put(&self, key: DiffKey, diff: DocumentDiff) {
        if self.capacity == Some(0) {
            return;
        }
        let Ok(mut inner) = self.inner.write() else {
            warn!(key = %key.id().short_hex(), "diff cache lock poisoned; dropping entry");
            return;
        };

        if inner.entries.insert(key, diff).is_none() {
            inner.order.push_back(key);
        }
        if let Some(capacity) = self.capacity {
            while inner.entries.len() > capacity {
                let Some(oldest) = inner.order.pop_front() else {
                    break;
                };
                inner.entries.remove(&oldest);
            }
        }
    }
}

impl std::fmt::Debug for InMemoryDiffCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryDiffCache")
            .field("capacity", &self.capacity)
            .field("entries", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redline_types::DocumentStats;

    fn diff_with_additions(n: usize) -> DocumentDiff {
        DocumentDiff {
            stats: DocumentStats {
                total_additions: n,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn key_is_deterministic() {
        assert_eq!(DiffKey::new("a", "b", true), DiffKey::new("a", "b", true));
    }

    #[test]
    fn key_depends_on_every_input() {
        let base = DiffKey::new("a", "b", true);
        assert_ne!(base, DiffKey::new("a", "b", false));
        assert_ne!(base, DiffKey::new("b", "a", true));
        assert_ne!(DiffKey::new("ab", "c", true), DiffKey::new("a", "bc", true));
    }

    #[test]
    fn put_then_get() {
        let cache = InMemoryDiffCache::new();
        let key = DiffKey::new("x", "y", true);
        assert!(cache.get(&key).is_none());

        cache.put(key, diff_with_additions(3));
        assert_eq!(cache.get(&key).unwrap().stats.total_additions, 3);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn overwrite_keeps_single_entry() {
        let cache = InMemoryDiffCache::new();
        let key = DiffKey::new("x", "y", true);
        cache.put(key, diff_with_additions(1));
        cache.put(key, diff_with_additions(2));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&key).unwrap().stats.total_additions, 2);
    }

    #[test]
    fn capacity_evicts_oldest() {
        let cache = InMemoryDiffCache::with_capacity(2);
        let k1 = DiffKey::new("1", "", true);
        let k2 = DiffKey::new("2", "", true);
        let k3 = DiffKey::new("3", "", true);
        cache.put(k1, diff_with_additions(1));
        cache.put(k2, diff_with_additions(2));
        cache.put(k3, diff_with_additions(3));

        assert_eq!(cache.len(), 2);
        assert!(cache.get(&k1).is_none());
        assert!(cache.get(&k2).is_some());
        assert!(cache.get(&k3).is_some());
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let cache = InMemoryDiffCache::with_capacity(0);
        cache.put(DiffKey::new("a", "b", true), DocumentDiff::default());
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_empties_cache() {
        let cache = InMemoryDiffCache::new();
        cache.put(DiffKey::new("a", "b", true), DocumentDiff::default());
        cache.clear();
        assert!(cache.is_empty());
    }
}
