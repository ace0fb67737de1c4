//! Bitmap resampling for the print path.
//!
//! Resizing is separable: columns first, then rows. Each destination index
//! gets a precomputed list of source weights that sums to one, so flat
//! regions stay flat under every filter.
//!
//! When downscaling, kernels are stretched by the scale factor so every
//! source sample still contributes. Bitmaps with alpha are resampled in
//! premultiplied form; otherwise the colour of fully transparent pixels
//! bleeds into their visible neighbours.
//!
//! # Example
//!
//! ```rust
//! use sidewalk_ops::resize::{resize_f32, Filter};
//!
//! let src = vec![0.5f32; 16 * 16 * 4];
//! let dst = resize_f32(&src, 16, 16, 4, 32, 8, Filter::Bilinear).unwrap();
//! assert_eq!(dst.len(), 32 * 8 * 4);
//! ```

use crate::{OpsError, OpsResult, PrinterGeometry};
use sidewalk_core::Bitmap;
use std::f32::consts::PI;
use std::str::FromStr;

/// Resampling kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Box of width one: picks the closest source sample.
    Nearest,
    /// Tent of radius one.
    Bilinear,
    /// Mitchell cubic (B = C = 1/3), radius two.
    #[default]
    Bicubic,
    /// Windowed sinc, three lobes.
    Lanczos3,
}

impl Filter {
    /// Distance beyond which the kernel is zero, in source samples.
    #[inline]
    pub fn radius(self) -> f32 {
        match self {
            Filter::Nearest => 0.5,
            Filter::Bilinear => 1.0,
            Filter::Bicubic => 2.0,
            Filter::Lanczos3 => 3.0,
        }
    }

    /// Kernel value at offset `t` from the sample centre.
    pub fn eval(self, t: f32) -> f32 {
        let t = t.abs();
        if t >= self.radius() {
            return 0.0;
        }
        match self {
            Filter::Nearest => 1.0,
            Filter::Bilinear => 1.0 - t,
            Filter::Bicubic => mitchell(t),
            Filter::Lanczos3 => sinc(t) * sinc(t / 3.0),
        }
    }
}

impl FromStr for Filter {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" => Ok(Filter::Nearest),
            "bilinear" | "linear" => Ok(Filter::Bilinear),
            "bicubic" | "cubic" => Ok(Filter::Bicubic),
            "lanczos" | "lanczos3" => Ok(Filter::Lanczos3),
            other => Err(OpsError::InvalidParameter(format!("unknown filter '{other}'"))),
        }
    }
}

/// Mitchell cubic for `0 <= t < 2`, coefficients folded for B = C = 1/3.
#[inline]
fn mitchell(t: f32) -> f32 {
    let p = if t < 1.0 {
        (7.0 * t - 12.0) * t * t + 16.0 / 3.0
    } else {
        ((-7.0 / 3.0 * t + 12.0) * t - 20.0) * t + 32.0 / 3.0
    };
    p / 6.0
}

/// Normalized sinc.
#[inline]
fn sinc(t: f32) -> f32 {
    if t.abs() < 1e-6 {
        return 1.0;
    }
    let x = PI * t;
    x.sin() / x
}

/// Source taps for one destination index.
struct Taps {
    start: usize,
    weights: Vec<f32>,
}

/// Normalized taps for mapping `src_len` samples onto `dst_len`.
fn taps(src_len: usize, dst_len: usize, filter: Filter) -> Vec<Taps> {
    let scale = src_len as f32 / dst_len as f32;
    let stretch = scale.max(1.0);
    let reach = filter.radius() * stretch;
    let last = src_len - 1;

    (0..dst_len)
        .map(|i| {
            let center = (i as f32 + 0.5) * scale - 0.5;
            let left = ((center - reach).floor().max(0.0) as usize).min(last);
            let right = ((center + reach).ceil().max(0.0) as usize).min(last);

            let mut weights: Vec<f32> = (left..=right)
                .map(|s| filter.eval((s as f32 - center) / stretch))
                .collect();
            let total: f32 = weights.iter().sum();

            if total.abs() > f32::EPSILON {
                weights.iter_mut().for_each(|w| *w /= total);
            } else {
                // kernel fell between samples: take the closest one
                let nearest = (center.round().max(0.0) as usize).clamp(left, right);
                weights.iter_mut().for_each(|w| *w = 0.0);
                weights[nearest - left] = 1.0;
            }

            Taps {
                start: left,
                weights,
            }
        })
        .collect()
}

/// Resizes interleaved f32 image data.
///
/// # Errors
///
/// [`OpsError::InvalidDimensions`] if any dimension or the channel count is
/// zero, or if `src` does not hold `src_w * src_h * channels` values.
pub fn resize_f32(
    src: &[f32],
    src_w: usize,
    src_h: usize,
    channels: usize,
    dst_w: usize,
    dst_h: usize,
    filter: Filter,
) -> OpsResult<Vec<f32>> {
    if src_w == 0 || src_h == 0 || channels == 0 {
        return Err(OpsError::InvalidDimensions(
            "source width, height, and channels must be > 0".into(),
        ));
    }
    if dst_w == 0 || dst_h == 0 {
        return Err(OpsError::InvalidDimensions(
            "destination size must be > 0".into(),
        ));
    }
    let expected = src_w
        .checked_mul(src_h)
        .and_then(|v| v.checked_mul(channels))
        .ok_or_else(|| OpsError::InvalidDimensions("image dimensions overflow".into()))?;
    if src.len() != expected {
        return Err(OpsError::InvalidDimensions(format!(
            "expected {} values, got {}",
            expected,
            src.len()
        )));
    }

    // horizontal: src_w x src_h -> dst_w x src_h
    let cols = taps(src_w, dst_w, filter);
    let mut temp = vec![0.0f32; dst_w * src_h * channels];
    for y in 0..src_h {
        let src_row = &src[y * src_w * channels..(y + 1) * src_w * channels];
        let dst_row = &mut temp[y * dst_w * channels..(y + 1) * dst_w * channels];
        for (x, tap) in cols.iter().enumerate() {
            let out = &mut dst_row[x * channels..(x + 1) * channels];
            for (i, &w) in tap.weights.iter().enumerate() {
                let px = &src_row[(tap.start + i) * channels..(tap.start + i + 1) * channels];
                for (o, &v) in out.iter_mut().zip(px) {
                    *o += v * w;
                }
            }
        }
    }

    // vertical: dst_w x src_h -> dst_w x dst_h
    let rows = taps(src_h, dst_h, filter);
    let stride = dst_w * channels;
    let mut dst = vec![0.0f32; stride * dst_h];
    for (y, tap) in rows.iter().enumerate() {
        let out = &mut dst[y * stride..(y + 1) * stride];
        for (i, &w) in tap.weights.iter().enumerate() {
            let sy = tap.start + i;
            let line = &temp[sy * stride..(sy + 1) * stride];
            for (o, &v) in out.iter_mut().zip(line) {
                *o += v * w;
            }
        }
    }

    Ok(dst)
}

/// Resizes a packed bitmap, keeping its alpha mode.
///
/// # Errors
///
/// [`OpsError::Input`] if the bitmap is malformed, and
/// [`OpsError::InvalidDimensions`] for empty source or destination.
pub fn resize_bitmap(bitmap: &Bitmap, width: u32, height: u32, filter: Filter) -> OpsResult<Bitmap> {
    bitmap.validate()?;
    if bitmap.is_empty() {
        return Err(OpsError::InvalidDimensions("cannot resize an empty bitmap".into()));
    }
    if width == bitmap.width && height == bitmap.height {
        return Ok(bitmap.clone());
    }

    let channels = bitmap.channels() as usize;
    let mut src: Vec<f32> = bitmap
        .to_bytes()
        .into_iter()
        .map(f32::from)
        .collect();
    if bitmap.has_alpha {
        for px in src.chunks_exact_mut(4) {
            let a = px[3] / 255.0;
            px[..3].iter_mut().for_each(|v| *v *= a);
        }
    }

    let mut out = resize_f32(
        &src,
        bitmap.width as usize,
        bitmap.height as usize,
        channels,
        width as usize,
        height as usize,
        filter,
    )?;

    if bitmap.has_alpha {
        for px in out.chunks_exact_mut(4) {
            let a = px[3];
            // below half a level the pixel rounds to transparent anyway
            let unscale = if a >= 0.5 { 255.0 / a } else { 0.0 };
            px[..3].iter_mut().for_each(|v| *v *= unscale);
        }
    }

    let bytes: Vec<u8> = out
        .into_iter()
        .map(|v| v.round().clamp(0.0, 255.0) as u8)
        .collect();

    let resized = if bitmap.has_alpha {
        Bitmap::from_rgba8(width, height, &bytes)?
    } else {
        Bitmap::from_rgb8(width, height, &bytes)?
    };
    Ok(resized)
}

/// Scales a bitmap horizontally to the printer's pixel width.
///
/// Height is left as is, matching the print path which feeds rows to the
/// printer one at a time.
///
/// # Errors
///
/// See [`resize_bitmap`]; a geometry with zero width is rejected.
pub fn resize_to_print_width(
    bitmap: &Bitmap,
    geometry: &PrinterGeometry,
    filter: Filter,
) -> OpsResult<Bitmap> {
    let width = geometry.target_width();
    tracing::debug!(
        from = bitmap.width,
        to = width,
        height = bitmap.height,
        "resizing to print width"
    );
    resize_bitmap(bitmap, width, bitmap.height, filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_constant_preserved() {
        let src = vec![0.5f32; 16 * 16 * 4];
        for filter in [Filter::Nearest, Filter::Bilinear, Filter::Bicubic, Filter::Lanczos3] {
            let dst = resize_f32(&src, 16, 16, 4, 7, 23, filter).unwrap();
            assert_eq!(dst.len(), 7 * 23 * 4);
            for v in dst {
                assert_abs_diff_eq!(v, 0.5, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn test_nearest_upscale_duplicates() {
        let src = vec![0.0f32, 1.0];
        let dst = resize_f32(&src, 2, 1, 1, 4, 1, Filter::Nearest).unwrap();
        assert_eq!(dst, vec![0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_invalid_sizes() {
        assert!(resize_f32(&[0.0; 4], 2, 2, 1, 0, 2, Filter::Bilinear).is_err());
        assert!(resize_f32(&[0.0; 3], 2, 2, 1, 2, 2, Filter::Bilinear).is_err());
        assert!(resize_f32(&[], 0, 0, 1, 2, 2, Filter::Bilinear).is_err());
    }

    #[test]
    fn test_resize_bitmap_keeps_alpha_mode() {
        let rgb = Bitmap::filled(10, 4, 0x0080_4020, false);
        let out = resize_bitmap(&rgb, 5, 4, Filter::Bilinear).unwrap();
        assert!(!out.has_alpha);
        assert_eq!((out.width, out.height), (5, 4));
        assert!(out.pixels.iter().all(|&p| p == 0x0080_4020));

        let rgba = Bitmap::filled(3, 3, 0x40FF_0000, true);
        let out = resize_bitmap(&rgba, 6, 1, Filter::Lanczos3).unwrap();
        assert!(out.has_alpha);
        assert!(out.pixels.iter().all(|&p| p == 0x40FF_0000));
    }

    #[test]
    fn test_transparent_colour_does_not_bleed() {
        // invisible blue next to opaque red
        let bmp = Bitmap::new(2, 1, vec![0x0000_00FF, 0xFFFF_0000], true);
        let out = resize_bitmap(&bmp, 1, 1, Filter::Bilinear).unwrap();
        assert_eq!(out.pixels, vec![0x80FF_0000]);

        let clear = Bitmap::filled(4, 2, 0x0012_3456, true);
        let out = resize_bitmap(&clear, 2, 1, Filter::Bicubic).unwrap();
        assert!(out.pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_kernel_shapes() {
        for filter in [Filter::Nearest, Filter::Bilinear, Filter::Bicubic, Filter::Lanczos3] {
            assert_eq!(filter.eval(filter.radius()), 0.0);
            assert_eq!(filter.eval(0.3), filter.eval(-0.3));
        }
        assert_eq!(Filter::Lanczos3.eval(0.0), 1.0);
        assert_abs_diff_eq!(Filter::Lanczos3.eval(1.0), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(Filter::Bilinear.eval(0.25), 0.75);
        // Mitchell: 8/9 at the centre, 1/18 one sample out
        assert_abs_diff_eq!(Filter::Bicubic.eval(0.0), 8.0 / 9.0, epsilon = 1e-6);
        assert_abs_diff_eq!(Filter::Bicubic.eval(1.0), 1.0 / 18.0, epsilon = 1e-6);
    }

    #[test]
    fn test_print_width() {
        let bmp = Bitmap::filled(200, 50, 0x00FF_FFFF, false);
        let out = resize_to_print_width(&bmp, &PrinterGeometry::default(), Filter::Bicubic).unwrap();
        assert_eq!((out.width, out.height), (96, 50));

        let zero = PrinterGeometry::new(0, 4);
        assert!(resize_to_print_width(&bmp, &zero, Filter::Bicubic).is_err());
        assert!(resize_bitmap(&Bitmap::empty(true), 4, 4, Filter::Bicubic).is_err());
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("Lanczos".parse::<Filter>().unwrap(), Filter::Lanczos3);
        assert_eq!("linear".parse::<Filter>().unwrap(), Filter::Bilinear);
        assert!("gauss".parse::<Filter>().is_err());
    }
}
