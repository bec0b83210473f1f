//! Memoized content measurements.

use std::collections::HashMap;

use crate::{Size, ViewId};

/// Exact bit pattern of a candidate size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SizeKey(u32, u32);

impl From<Size> for SizeKey {
    fn from(size: Size) -> Self {
        Self(size.width.to_bits(), size.height.to_bits())
    }
}

/// Hit and miss counters of a [`SizeCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that found nothing.
    pub misses: u64,
    /// Entries currently stored.
    pub entries: usize,
}

/// Results of content measurement keyed by (target, candidate size).
///
/// Owned by exactly one negotiator, which manages exactly one target, so the
/// number of distinct keys stays small and there is no eviction. The owner
/// clears it whenever its configuration changes.
#[derive(Debug, Default)]
pub struct SizeCache {
    entries: HashMap<(ViewId, SizeKey), Size>,
    hits: u64,
    misses: u64,
}

impl SizeCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored size for `target` measured at `candidate`.
    pub fn lookup(&mut self, target: ViewId, candidate: Size) -> Option<Size> {
        let found = self.entries.get(&(target, candidate.into())).copied();
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    /// Records the size `target` produced for `candidate`.
    pub fn store(&mut self, target: ViewId, candidate: Size, result: Size) {
        self.entries.insert((target, candidate.into()), result);
    }

    /// Drops every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }
}
