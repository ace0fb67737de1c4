//! Pixel codec.
//!
//! Turns a caller-supplied [`Bitmap`] into a [`Plane`] of packed ARGB words
//! (alpha 31..24, red 23..16, green 15..8, blue 7..0).
//!
//! - Bitmaps with alpha are copied through unchanged.
//! - Bitmaps without alpha get an opaque alpha byte, and their `0x00RRGGBB`
//!   color bytes are moved into the ARGB slots channel by channel.

use crate::sample::{ALPHA_SHIFT, BLUE_SHIFT, GREEN_SHIFT, RED_SHIFT};
use crate::{Bitmap, Plane, Result};

/// Decodes a bitmap into row-major ARGB samples.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidInput`] if the sample buffer length is not
/// `width * height`.
///
/// # Example
///
/// ```rust
/// use sidewalk_core::{Bitmap, decode_argb};
///
/// let rgb = Bitmap::new(2, 1, vec![0x0012_3456, 0x00AB_CDEF], false);
/// let argb = decode_argb(&rgb).unwrap();
/// assert_eq!(argb.as_slice(), &[0xFF12_3456, 0xFFAB_CDEF]);
/// ```
pub fn decode_argb(bitmap: &Bitmap) -> Result<Plane<u32>> {
    bitmap.validate()?;

    let data = if bitmap.has_alpha {
        bitmap.pixels.clone()
    } else {
        bitmap.pixels.iter().map(|&p| opaque_from_rgb(p)).collect()
    };

    Plane::from_vec(bitmap.width, bitmap.height, data)
}

/// Builds an opaque ARGB word from a `0x00RRGGBB` sample.
#[inline]
pub fn opaque_from_rgb(rgb: u32) -> u32 {
    let blue = rgb & 0xFF;
    let green = (rgb >> 8) & 0xFF;
    let red = (rgb >> 16) & 0xFF;
    (0xFF << ALPHA_SHIFT) | (red << RED_SHIFT) | (green << GREEN_SHIFT) | (blue << BLUE_SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, RgbaSample};

    #[test]
    fn test_alpha_copied_through() {
        let src = vec![0x0000_0000, 0x7F10_2030, 0xFFFF_FFFF, 0x01AB_CDEF];
        let bmp = Bitmap::new(2, 2, src.clone(), true);
        let out = decode_argb(&bmp).unwrap();
        assert_eq!(out.width(), 2);
        assert_eq!(out.height(), 2);
        assert_eq!(out.as_slice(), src.as_slice());
    }

    #[test]
    fn test_opaque_synthesis() {
        // top byte of an alpha-less sample is garbage and must be ignored
        let bmp = Bitmap::new(3, 1, vec![0x0011_2233, 0x5544_5566, 0x0000_0000], false);
        let out = decode_argb(&bmp).unwrap();
        for &p in out.iter() {
            assert_eq!(RgbaSample::from_argb(p).a, 255);
        }
        assert_eq!(
            RgbaSample::from_argb(*out.get(0, 0).unwrap()),
            RgbaSample::new(0x11, 0x22, 0x33, 255)
        );
        assert_eq!(*out.get(1, 0).unwrap(), 0xFF44_5566);
        assert_eq!(*out.get(2, 0).unwrap(), 0xFF00_0000);
    }

    #[test]
    fn test_row_major_shape() {
        let bmp = Bitmap::new(3, 2, (0..6).collect(), true);
        let out = decode_argb(&bmp).unwrap();
        assert_eq!(out.row(1), Some(&[3u32, 4, 5][..]));
    }

    #[test]
    fn test_length_mismatch_fails_fast() {
        let bmp = Bitmap::new(4, 4, vec![0; 15], true);
        assert!(matches!(decode_argb(&bmp), Err(Error::InvalidInput(_))));

        let bmp = Bitmap::new(1, 1, vec![0; 2], false);
        assert!(matches!(decode_argb(&bmp), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_empty_and_single() {
        let out = decode_argb(&Bitmap::empty(false)).unwrap();
        assert!(out.is_empty());

        let out = decode_argb(&Bitmap::new(1, 1, vec![0x00FF_FFFF], false)).unwrap();
        assert_eq!(out.as_slice(), &[0xFFFF_FFFF]);
    }
}
