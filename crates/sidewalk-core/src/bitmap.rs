//! Image containers.
//!
//! - [`Bitmap`] - packed 32-bit pixels as supplied by an image loader
//! - [`Plane`] - row-major grid of arbitrary cells, produced by the codec and converter
//!
//! # Memory Layout
//!
//! Both containers store pixels in **row-major** order, top-to-bottom:
//!
//! ```text
//! Memory: [p(0,0) p(1,0) ... p(w-1,0)]  <- Row 0
//!         [p(0,1) p(1,1) ... p(w-1,1)]  <- Row 1
//!         ...
//! ```
//!
//! A [`Bitmap`] with `has_alpha == true` stores ARGB words. Without alpha,
//! each word is `0x00RRGGBB` and the top byte is ignored.

use crate::{CmykaSample, Error, Result};

/// A converted image: one [`CmykaSample`] per source pixel.
pub type CmykaImage = Plane<CmykaSample>;

/// A decoded bitmap with packed 32-bit samples.
///
/// Fields are public because the bitmap belongs to the caller; the codec
/// validates them before use (see [`Bitmap::validate`]).
///
/// # Example
///
/// ```rust
/// use sidewalk_core::Bitmap;
///
/// let bmp = Bitmap::filled(4, 2, 0xFFFF_0000, true);
/// assert_eq!(bmp.pixel_count(), 8);
/// assert!(bmp.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major packed samples.
    pub pixels: Vec<u32>,
    /// Whether the top byte of each sample carries alpha.
    pub has_alpha: bool,
}

impl Bitmap {
    /// Creates a bitmap from raw packed samples. Length is not checked here.
    pub fn new(width: u32, height: u32, pixels: Vec<u32>, has_alpha: bool) -> Self {
        Self {
            width,
            height,
            pixels,
            has_alpha,
        }
    }

    /// Creates a bitmap where every sample equals `pixel`.
    pub fn filled(width: u32, height: u32, pixel: u32, has_alpha: bool) -> Self {
        let count = width as usize * height as usize;
        Self::new(width, height, vec![pixel; count], has_alpha)
    }

    /// Creates an empty (0x0) bitmap.
    pub fn empty(has_alpha: bool) -> Self {
        Self::new(0, 0, Vec::new(), has_alpha)
    }

    /// Packs interleaved 8-bit RGBA bytes into an alpha-carrying bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `data.len() != width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        let count = checked_count(width, height)?;
        if data.len() != count * 4 {
            return Err(Error::invalid_input(format!(
                "expected {} RGBA bytes, got {}",
                count * 4,
                data.len()
            )));
        }
        let pixels = data
            .chunks_exact(4)
            .map(|px| {
                (px[3] as u32) << 24 | (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32
            })
            .collect();
        Ok(Self::new(width, height, pixels, true))
    }

    /// Packs interleaved 8-bit RGB bytes into a bitmap without alpha.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `data.len() != width * height * 3`.
    pub fn from_rgb8(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        let count = checked_count(width, height)?;
        if data.len() != count * 3 {
            return Err(Error::invalid_input(format!(
                "expected {} RGB bytes, got {}",
                count * 3,
                data.len()
            )));
        }
        let pixels = data
            .chunks_exact(3)
            .map(|px| (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32)
            .collect();
        Ok(Self::new(width, height, pixels, false))
    }

    /// Number of pixels implied by the dimensions.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True if the bitmap has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    /// Number of channels (4 with alpha, 3 without).
    #[inline]
    pub fn channels(&self) -> u32 {
        if self.has_alpha { 4 } else { 3 }
    }

    /// Checks that the sample buffer matches the dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] on a length mismatch and
    /// [`Error::InvalidDimensions`] if `width * height` overflows.
    pub fn validate(&self) -> Result<()> {
        let expected = checked_count(self.width, self.height)?;
        if self.pixels.len() != expected {
            return Err(Error::invalid_input(format!(
                "bitmap {}x{} needs {} samples, buffer has {}",
                self.width,
                self.height,
                expected,
                self.pixels.len()
            )));
        }
        Ok(())
    }

    /// Interleaved 8-bit bytes, RGBA if the bitmap has alpha and RGB otherwise.
    pub fn to_bytes(&self) -> Vec<u8> {
        if self.has_alpha {
            self.pixels
                .iter()
                .flat_map(|&p| [(p >> 16) as u8, (p >> 8) as u8, p as u8, (p >> 24) as u8])
                .collect()
        } else {
            self.pixels
                .iter()
                .flat_map(|&p| [(p >> 16) as u8, (p >> 8) as u8, p as u8])
                .collect()
        }
    }
}

/// `width * height` as usize, rejecting overflow.
fn checked_count(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| Error::invalid_dimensions(width, height, "pixel count overflows"))
}

/// A row-major two-dimensional grid.
///
/// # Example
///
/// ```rust
/// use sidewalk_core::Plane;
///
/// let mut plane = Plane::filled(3, 2, 0u32);
/// plane.as_mut_slice()[4] = 7;
/// assert_eq!(plane.get(1, 1), Some(&7));
/// assert_eq!(plane.rows().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Plane<T> {
    width: u32,
    height: u32,
    data: Vec<T>,
}

impl<T: Clone> Plane<T> {
    /// Creates a grid with every cell set to `value`.
    pub fn filled(width: u32, height: u32, value: T) -> Self {
        let count = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![value; count],
        }
    }
}

impl<T> Plane<T> {
    /// Wraps an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<T>) -> Result<Self> {
        let expected = checked_count(width, height)?;
        if data.len() != expected {
            return Err(Error::invalid_input(format!(
                "expected {} cells, got {}",
                expected,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Grid width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total cell count.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Cell at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y as usize * self.width as usize + x as usize)
    }

    /// Row `y` as a slice.
    pub fn row(&self, y: u32) -> Option<&[T]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        self.data.get(start..start + w)
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // width 0 implies an empty buffer, so the chunk size never matters there
        self.data.chunks(self.width.max(1) as usize)
    }

    /// Iterates rows top to bottom, mutably.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        self.data.chunks_mut(self.width.max(1) as usize)
    }

    /// Iterates cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Underlying row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Underlying row-major buffer, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the grid and returns its buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba8() {
        let bmp = Bitmap::from_rgba8(2, 1, &[255, 0, 0, 128, 1, 2, 3, 255]).unwrap();
        assert!(bmp.has_alpha);
        assert_eq!(bmp.pixels, vec![0x80FF_0000, 0xFF01_0203]);
        assert_eq!(bmp.to_bytes(), vec![255, 0, 0, 128, 1, 2, 3, 255]);
    }

    #[test]
    fn test_from_rgb8() {
        let bmp = Bitmap::from_rgb8(1, 2, &[10, 20, 30, 40, 50, 60]).unwrap();
        assert!(!bmp.has_alpha);
        assert_eq!(bmp.pixels, vec![0x000A_141E, 0x0028_323C]);
        assert_eq!(bmp.to_bytes(), vec![10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn test_wrong_byte_count() {
        assert!(Bitmap::from_rgb8(2, 2, &[0; 11]).is_err());
        assert!(Bitmap::from_rgba8(2, 2, &[0; 15]).is_err());
    }

    #[test]
    fn test_validate() {
        let mut bmp = Bitmap::filled(3, 3, 0, false);
        assert!(bmp.validate().is_ok());
        bmp.pixels.pop();
        assert!(matches!(bmp.validate(), Err(Error::InvalidInput(_))));
        assert!(Bitmap::empty(true).validate().is_ok());
    }

    #[test]
    fn test_plane_rows() {
        let plane = Plane::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let rows: Vec<&[i32]> = plane.rows().collect();
        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..], &[5, 6][..]]);
        assert_eq!(plane.row(2), Some(&[5, 6][..]));
        assert_eq!(plane.row(3), None);
        assert_eq!(plane.get(1, 0), Some(&2));
        assert_eq!(plane.get(2, 0), None);
    }

    #[test]
    fn test_plane_empty() {
        let plane: Plane<u8> = Plane::filled(0, 0, 0);
        assert!(plane.is_empty());
        assert_eq!(plane.rows().count(), 0);
        assert!(Plane::<u8>::from_vec(2, 2, vec![0; 3]).is_err());
    }
}
