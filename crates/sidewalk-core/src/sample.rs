//! Per-pixel value types.
//!
//! - [`RgbaSample`] - 8-bit RGBA tuple, the exact cache key of the converter
//! - [`CmykaSample`] - floating-point CMYK ink values plus pass-through alpha
//!
//! # ARGB Packing
//!
//! ```text
//! bits: 31..24  23..16  15..8  7..0
//!         A       R       G     B
//! ```

use std::fmt;

/// Shift of the alpha byte in an ARGB word.
pub const ALPHA_SHIFT: u32 = 24;
/// Shift of the red byte in an ARGB word.
pub const RED_SHIFT: u32 = 16;
/// Shift of the green byte in an ARGB word.
pub const GREEN_SHIFT: u32 = 8;
/// Shift of the blue byte in an ARGB word.
pub const BLUE_SHIFT: u32 = 0;

/// An 8-bit RGBA sample.
///
/// Equality and hashing are exact: two samples that differ only in alpha
/// are different keys.
///
/// # Example
///
/// ```rust
/// use sidewalk_core::RgbaSample;
///
/// let red = RgbaSample::from_argb(0xFFFF_0000);
/// assert_eq!(red, RgbaSample::new(255, 0, 0, 255));
/// assert_eq!(red.to_argb(), 0xFFFF_0000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RgbaSample {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl RgbaSample {
    /// Creates a sample from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpacks an ARGB word.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> ALPHA_SHIFT) as u8,
            r: (argb >> RED_SHIFT) as u8,
            g: (argb >> GREEN_SHIFT) as u8,
            b: (argb >> BLUE_SHIFT) as u8,
        }
    }

    /// Packs the sample into an ARGB word.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << ALPHA_SHIFT)
            | ((self.r as u32) << RED_SHIFT)
            | ((self.g as u32) << GREEN_SHIFT)
            | ((self.b as u32) << BLUE_SHIFT)
    }

    /// Returns `[r, g, b, a]` scaled to [0, 1].
    #[inline]
    pub fn normalized(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Alpha scaled to [0, 1].
    #[inline]
    pub fn alpha_f32(self) -> f32 {
        self.a as f32 / 255.0
    }
}

impl From<u32> for RgbaSample {
    fn from(argb: u32) -> Self {
        Self::from_argb(argb)
    }
}

impl fmt::Display for RgbaSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// A CMYK sample with alpha.
///
/// Ink channels are whatever the profile transform produced; they are
/// nominally in [0, 1] but not clamped. Alpha is the source alpha / 255.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CmykaSample {
    /// Cyan.
    pub c: f32,
    /// Magenta.
    pub m: f32,
    /// Yellow.
    pub y: f32,
    /// Key (black).
    pub k: f32,
    /// Alpha (1.0 = opaque).
    pub a: f32,
}

impl CmykaSample {
    /// Creates a sample from its five channels.
    #[inline]
    pub const fn new(c: f32, m: f32, y: f32, k: f32, a: f32) -> Self {
        Self { c, m, y, k, a }
    }

    /// Combines a CMYK quadruple with an alpha value.
    #[inline]
    pub const fn from_cmyk(cmyk: [f32; 4], a: f32) -> Self {
        Self {
            c: cmyk[0],
            m: cmyk[1],
            y: cmyk[2],
            k: cmyk[3],
            a,
        }
    }

    /// The ink channels as `[c, m, y, k]`.
    #[inline]
    pub const fn cmyk(&self) -> [f32; 4] {
        [self.c, self.m, self.y, self.k]
    }

    /// All five channels as `[c, m, y, k, a]`.
    #[inline]
    pub const fn to_array(&self) -> [f32; 5] {
        [self.c, self.m, self.y, self.k, self.a]
    }
}

impl fmt::Display for CmykaSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {})",
            self.c, self.m, self.y, self.k, self.a
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    #[test]
    fn test_argb_unpack() {
        let s = RgbaSample::from_argb(0x80_11_22_33);
        assert_eq!(s, RgbaSample::new(0x11, 0x22, 0x33, 0x80));
        assert_eq!(s.to_argb(), 0x80_11_22_33);
    }

    #[test]
    fn test_alpha_distinguishes_keys() {
        let mut set = HashSet::new();
        set.insert(RgbaSample::new(10, 20, 30, 255));
        set.insert(RgbaSample::new(10, 20, 30, 254));
        set.insert(RgbaSample::new(10, 20, 30, 255));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_normalized() {
        let n = RgbaSample::new(255, 0, 51, 102).normalized();
        assert_relative_eq!(n[0], 1.0);
        assert_relative_eq!(n[1], 0.0);
        assert_relative_eq!(n[2], 0.2);
        assert_relative_eq!(n[3], 0.4);
    }

    #[test]
    fn test_cmyka_layout() {
        let s = CmykaSample::from_cmyk([0.1, 0.2, 0.3, 0.4], 0.5);
        assert_eq!(s.cmyk(), [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(s.to_array(), [0.1, 0.2, 0.3, 0.4, 0.5]);
    }
}
