//! Set-diff reconciliation for per-chunk visual objects.
//!
//! Overlay renderers want exactly one object per desired chunk coordinate,
//! created lazily and torn down when the coordinate leaves the desired
//! set. [`KeyedCache`] makes that diff explicit: compute the desired key
//! set, create what is missing, dispose what is stale, keep the rest.

use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

/// Outcome of one reconciliation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    /// Entries created this pass.
    pub created: usize,
    /// Entries disposed this pass.
    pub disposed: usize,
    /// Entries that survived unchanged.
    pub kept: usize,
}

/// A cache of one value per key, reconciled against a desired key set.
///
/// `V` is typically a handle to some renderer-owned object. The cache
/// never clones or recreates surviving values, so handle identity is
/// stable across passes.
pub struct KeyedCache<K, V> {
    entries: FxHashMap<K, V>,
}

impl<K: Eq + Hash + Copy, V> KeyedCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Reconciles the cache against `desired`.
    ///
    /// Missing keys are populated via `create`; keys no longer desired are
    /// removed and handed to `dispose` for teardown.
    pub fn reconcile(
        &mut self,
        desired: &FxHashSet<K>,
        mut create: impl FnMut(&K) -> V,
        mut dispose: impl FnMut(K, V),
    ) -> ReconcileStats {
        let mut stats = ReconcileStats::default();

        for key in desired {
            if !self.entries.contains_key(key) {
                self.entries.insert(*key, create(key));
                stats.created += 1;
            }
        }

        let stale: Vec<K> = self
            .entries
            .keys()
            .filter(|key| !desired.contains(key))
            .copied()
            .collect();
        stats.disposed = stale.len();
        for key in stale {
            if let Some(value) = self.entries.remove(&key) {
                dispose(key, value);
            }
        }

        stats.kept = self.entries.len() - stats.created;
        stats
    }

    /// Removes everything, handing each value to `dispose`.
    pub fn clear(&mut self, mut dispose: impl FnMut(K, V)) {
        for (key, value) in self.entries.drain() {
            dispose(key, value);
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all live `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }
}

impl<K: Eq + Hash + Copy, V> Default for KeyedCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
