//! Image converter.
//!
//! Drives a whole bitmap through decode, cache and transform, producing one
//! [`CmykaSample`] per pixel in the source's row-major order.

use crate::cache::{ConversionCache, Lookup};
use crate::observer::{ConversionObserver, NoopObserver};
use crate::{ConvertConfig, ConvertError, ConvertResult};
use sidewalk_core::{decode_argb, Bitmap, CmykaImage, CmykaSample, Plane, RgbaSample};
use sidewalk_icc::{CmykTransform, ColorTransform};
use std::path::Path;
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Converts RGB(A) bitmaps to CMYKA images.
///
/// Holds one transform for its whole life; the conversion cache is either
/// created per call ([`convert`](Self::convert)) or supplied by the caller
/// ([`convert_with_cache`](Self::convert_with_cache)).
///
/// # Example
///
/// ```rust
/// use sidewalk_convert::ImageConverter;
/// use sidewalk_core::Bitmap;
/// use sidewalk_icc::{ColorTransform, IccResult};
///
/// struct Naive;
/// impl ColorTransform for Naive {
///     fn to_cmyk(&self, rgba: &[f32]) -> IccResult<[f32; 4]> {
///         Ok([1.0 - rgba[0], 1.0 - rgba[1], 1.0 - rgba[2], 0.0])
///     }
/// }
///
/// let converter = ImageConverter::new(Naive);
/// let out = converter.convert(&Bitmap::filled(3, 2, 0x00FF_0000, false)).unwrap();
/// assert_eq!(out.len(), 6);
/// assert_eq!(out.get(0, 0).unwrap().cmyk(), [0.0, 1.0, 1.0, 0.0]);
/// ```
pub struct ImageConverter {
    transform: Arc<dyn ColorTransform>,
    observer: Arc<dyn ConversionObserver>,
    parallel: bool,
}

impl ImageConverter {
    /// Creates a sequential converter around `transform`.
    pub fn new<T: ColorTransform + 'static>(transform: T) -> Self {
        Self::from_shared(Arc::new(transform))
    }

    /// Creates a converter sharing an existing transform.
    pub fn from_shared(transform: Arc<dyn ColorTransform>) -> Self {
        Self {
            transform,
            observer: Arc::new(NoopObserver),
            parallel: false,
        }
    }

    /// Loads the CMYK profile at `path` and builds a converter for it.
    ///
    /// # Errors
    ///
    /// [`ConvertError::Profile`] for any load or profile failure.
    pub fn from_profile(path: &Path) -> ConvertResult<Self> {
        let transform = CmykTransform::from_file(path).map_err(ConvertError::Profile)?;
        tracing::info!(profile = transform.description(), "CMYK profile loaded");
        Ok(Self::new(transform))
    }

    /// Builds a converter from configuration.
    ///
    /// # Errors
    ///
    /// [`ConvertError::Config`] if no profile is set, otherwise as
    /// [`from_profile`](Self::from_profile).
    pub fn from_config(config: &ConvertConfig) -> ConvertResult<Self> {
        let path = config.profile_path()?;
        Ok(Self::from_profile(path)?.with_parallel(config.parallel))
    }

    /// Replaces the observer notified of each converted sample.
    pub fn with_observer<O: ConversionObserver + 'static>(mut self, observer: O) -> Self {
        self.observer = Arc::new(observer);
        self
    }

    /// Enables or disables row-parallel conversion.
    ///
    /// Without the `parallel` feature the flag is accepted and ignored.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The transform in use.
    pub fn transform(&self) -> &dyn ColorTransform {
        &*self.transform
    }

    /// Whether rows are converted in parallel.
    pub fn is_parallel(&self) -> bool {
        self.parallel && cfg!(feature = "parallel")
    }

    /// Converts a bitmap using a cache scoped to this call.
    ///
    /// # Errors
    ///
    /// [`ConvertError::Input`] for a malformed bitmap and
    /// [`ConvertError::Transform`] if the transform rejects a sample. No
    /// partial image is returned.
    pub fn convert(&self, bitmap: &Bitmap) -> ConvertResult<CmykaImage> {
        let cache = ConversionCache::new();
        self.convert_with_cache(bitmap, &cache)
    }

    /// Converts a bitmap, reading and filling `cache`.
    ///
    /// A cache reused across calls must stay with the same transform.
    pub fn convert_with_cache(
        &self,
        bitmap: &Bitmap,
        cache: &ConversionCache,
    ) -> ConvertResult<CmykaImage> {
        let argb = decode_argb(bitmap)?;
        tracing::debug!(
            width = argb.width(),
            height = argb.height(),
            has_alpha = bitmap.has_alpha,
            parallel = self.is_parallel(),
            "converting bitmap"
        );

        let data = if self.is_parallel() {
            self.convert_par(&argb, cache)?
        } else {
            self.convert_seq(&argb, cache)?
        };

        let stats = cache.stats();
        tracing::debug!(
            distinct = stats.entries,
            hits = stats.hits,
            misses = stats.misses,
            "conversion done"
        );

        Ok(Plane::from_vec(argb.width(), argb.height(), data)?)
    }

    /// Converts one packed sample through the cache.
    fn convert_sample(&self, argb: u32, cache: &ConversionCache) -> ConvertResult<CmykaSample> {
        let sample = RgbaSample::from_argb(argb);
        let (cmyka, lookup) = cache.lookup(sample, &*self.transform)?;
        match lookup {
            Lookup::Miss => self.observer.on_convert(sample, cmyka),
            Lookup::Hit => self.observer.on_hit(sample),
        }
        Ok(cmyka)
    }

    fn convert_seq(&self, argb: &Plane<u32>, cache: &ConversionCache) -> ConvertResult<Vec<CmykaSample>> {
        argb.iter()
            .map(|&px| self.convert_sample(px, cache))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn convert_par(&self, argb: &Plane<u32>, cache: &ConversionCache) -> ConvertResult<Vec<CmykaSample>> {
        let width = argb.width().max(1) as usize;
        let mut out = vec![CmykaSample::default(); argb.len()];

        out.par_chunks_mut(width)
            .zip(argb.as_slice().par_chunks(width))
            .try_for_each(|(dst, src)| {
                for (d, &px) in dst.iter_mut().zip(src) {
                    *d = self.convert_sample(px, cache)?;
                }
                Ok::<(), ConvertError>(())
            })?;

        Ok(out)
    }

    #[cfg(not(feature = "parallel"))]
    fn convert_par(&self, argb: &Plane<u32>, cache: &ConversionCache) -> ConvertResult<Vec<CmykaSample>> {
        self.convert_seq(argb, cache)
    }
}

impl std::fmt::Debug for ImageConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageConverter")
            .field("parallel", &self.parallel)
            .finish_non_exhaustive()
    }
}
