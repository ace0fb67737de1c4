//! Per-pixel observability hooks.
//!
//! The converter reports every computed sample and every cache hit to a
//! [`ConversionObserver`]. Observers see results; they cannot change them.

use sidewalk_core::{CmykaSample, RgbaSample};
use std::sync::atomic::{AtomicU64, Ordering};

/// Receives conversion events from [`crate::ImageConverter`].
pub trait ConversionObserver: Send + Sync {
    /// Called after the transform produced `cmyka` for `sample`.
    fn on_convert(&self, sample: RgbaSample, cmyka: CmykaSample) {
        let _ = (sample, cmyka);
    }

    /// Called when `sample` was answered from the cache.
    fn on_hit(&self, sample: RgbaSample) {
        let _ = sample;
    }
}

/// Ignores all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ConversionObserver for NoopObserver {}

/// Emits a `trace` event per converted color.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ConversionObserver for TracingObserver {
    fn on_convert(&self, sample: RgbaSample, cmyka: CmykaSample) {
        tracing::trace!(
            target: "sidewalk::pixels",
            "RGBA: {} CMYK: ({}, {}, {}, {})",
            sample,
            cmyka.c,
            cmyka.m,
            cmyka.y,
            cmyka.k
        );
    }
}

/// Counts events.
#[derive(Debug, Default)]
pub struct CountingObserver {
    conversions: AtomicU64,
    hits: AtomicU64,
}

impl CountingObserver {
    /// Creates a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of transform invocations seen.
    pub fn conversions(&self) -> u64 {
        self.conversions.load(Ordering::Relaxed)
    }

    /// Number of cache hits seen.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }
}

impl ConversionObserver for CountingObserver {
    fn on_convert(&self, _: RgbaSample, _: CmykaSample) {
        self.conversions.fetch_add(1, Ordering::Relaxed);
    }

    fn on_hit(&self, _: RgbaSample) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }
}

impl<T: ConversionObserver + ?Sized> ConversionObserver for std::sync::Arc<T> {
    fn on_convert(&self, sample: RgbaSample, cmyka: CmykaSample) {
        (**self).on_convert(sample, cmyka);
    }

    fn on_hit(&self, sample: RgbaSample) {
        (**self).on_hit(sample);
    }
}
