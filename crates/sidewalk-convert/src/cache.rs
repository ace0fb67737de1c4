//! Conversion cache.
//!
//! Memoizes CMYK results keyed by the exact input sample. Images usually
//! reuse a small palette, so most pixels become a hash lookup instead of a
//! profile transform.
//!
//! Alpha is part of the key but not of the stored value: the cached
//! quadruple is ink only and alpha is re-attached from the sample.
//!
//! # Concurrency
//!
//! Reads take a shared lock. A miss computes outside any lock and then
//! inserts; two threads missing on the same key may both compute, and the
//! first insert wins. Transforms are deterministic so both results agree.
//!
//! # Example
//!
//! ```rust
//! use sidewalk_convert::ConversionCache;
//! use sidewalk_core::RgbaSample;
//! use sidewalk_icc::{ColorTransform, IccResult};
//!
//! struct Naive;
//! impl ColorTransform for Naive {
//!     fn to_cmyk(&self, rgba: &[f32]) -> IccResult<[f32; 4]> {
//!         let k = 1.0 - rgba[0].max(rgba[1]).max(rgba[2]);
//!         Ok([0.0, 0.0, 0.0, k])
//!     }
//! }
//!
//! let cache = ConversionCache::new();
//! let grey = RgbaSample::new(128, 128, 128, 255);
//! let first = cache.get_or_compute(grey, &Naive).unwrap();
//! let second = cache.get_or_compute(grey, &Naive).unwrap();
//! assert_eq!(first, second);
//! assert_eq!(cache.len(), 1);
//! ```

use sidewalk_core::{CmykaSample, RgbaSample};
use sidewalk_icc::{ColorTransform, IccResult};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Outcome of a cache lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Value came from the cache.
    Hit,
    /// Value was computed by this call.
    Miss,
}

/// Counters describing cache use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that ran the transform.
    pub misses: u64,
    /// Distinct keys stored.
    pub entries: usize,
}

/// Thread-safe memo of CMYK quadruples keyed by `K`.
///
/// No eviction: the cache grows with the number of distinct keys seen and
/// lives as long as its owner keeps it.
pub struct ConversionCache<K = RgbaSample> {
    entries: RwLock<HashMap<K, [f32; 4]>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K: Eq + Hash + Copy> ConversionCache<K> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty cache with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns the stored quadruple for `key`.
    pub fn get(&self, key: &K) -> Option<[f32; 4]> {
        let map = self.entries.read().unwrap_or_else(|e| e.into_inner());
        map.get(key).copied()
    }

    /// Returns the stored value, or computes, stores and returns a new one.
    ///
    /// The value already in the map wins over a concurrently computed one.
    ///
    /// # Errors
    ///
    /// Whatever `compute` returns; nothing is stored on error.
    pub fn get_or_try_insert_with<E, F>(&self, key: K, compute: F) -> Result<([f32; 4], Lookup), E>
    where
        F: FnOnce() -> Result<[f32; 4], E>,
    {
        if let Some(hit) = self.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok((hit, Lookup::Hit));
        }

        let value = compute()?;
        self.misses.fetch_add(1, Ordering::Relaxed);

        let mut map = self.entries.write().unwrap_or_else(|e| e.into_inner());
        let stored = *map.entry(key).or_insert(value);
        Ok((stored, Lookup::Miss))
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// True if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all entries and resets counters.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Current counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

impl ConversionCache<RgbaSample> {
    /// Looks up `sample`, running `transform` on a miss.
    ///
    /// The returned alpha is always the sample's own alpha / 255.
    ///
    /// # Errors
    ///
    /// Propagates the transform's error.
    pub fn get_or_compute<T>(&self, sample: RgbaSample, transform: &T) -> IccResult<CmykaSample>
    where
        T: ColorTransform + ?Sized,
    {
        self.lookup(sample, transform).map(|(cmyka, _)| cmyka)
    }

    /// Like [`get_or_compute`](Self::get_or_compute), also reporting hit or miss.
    pub fn lookup<T>(&self, sample: RgbaSample, transform: &T) -> IccResult<(CmykaSample, Lookup)>
    where
        T: ColorTransform + ?Sized,
    {
        let (cmyk, lookup) =
            self.get_or_try_insert_with(sample, || transform.to_cmyk(&sample.normalized()))?;
        Ok((CmykaSample::from_cmyk(cmyk, sample.alpha_f32()), lookup))
    }
}

impl<K: Eq + Hash + Copy> Default for ConversionCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> std::fmt::Debug for ConversionCache<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversionCache")
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}
