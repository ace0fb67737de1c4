//! sRGB to CIE XYZ.
//!
//! Gamma-decodes sRGB with the IEC 61966-2-1 EOTF and multiplies the linear
//! triple by the sRGB primaries matrix, Bradford-adapted from D65 to D50 so
//! the result lands in the ICC profile connection space.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999, ICC.1:2010 Annex D

use glam::{Mat3, Vec3};

/// D50 white point as XYZ (Y = 1).
pub const D50_WHITE: [f32; 3] = [0.9642, 1.0, 0.8249];

/// Linear sRGB to XYZ (D50), column-major.
///
/// Columns are the XYZ coordinates of the red, green and blue primaries.
pub const SRGB_TO_XYZ_D50: Mat3 = Mat3::from_cols(
    Vec3::new(0.436_074_7, 0.222_504_5, 0.013_932_2),
    Vec3::new(0.385_064_9, 0.716_878_6, 0.097_104_5),
    Vec3::new(0.143_080_4, 0.060_616_9, 0.714_173_3),
);

/// sRGB EOTF: decodes sRGB encoded values to linear light.
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts an encoded sRGB triple in [0, 1] to D50 XYZ.
///
/// # Example
///
/// ```rust
/// use sidewalk_icc::xyz::srgb_to_xyz;
///
/// let white = srgb_to_xyz([1.0, 1.0, 1.0]);
/// assert!((white[1] - 1.0).abs() < 1e-4);
/// ```
#[inline]
pub fn srgb_to_xyz(rgb: [f32; 3]) -> [f32; 3] {
    let linear = Vec3::new(eotf(rgb[0]), eotf(rgb[1]), eotf(rgb[2]));
    (SRGB_TO_XYZ_D50 * linear).to_array()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_eotf_boundaries() {
        assert_eq!(eotf(0.0), 0.0);
        assert_abs_diff_eq!(eotf(1.0), 1.0, epsilon = 1e-6);
        // sRGB 0.5 is roughly 0.214 linear
        assert_abs_diff_eq!(eotf(0.5), 0.214, epsilon = 0.01);
    }

    #[test]
    fn test_white_is_d50() {
        let xyz = srgb_to_xyz([1.0, 1.0, 1.0]);
        for (got, want) in xyz.iter().zip(D50_WHITE.iter()) {
            assert_abs_diff_eq!(*got, *want, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_black_is_origin() {
        assert_eq!(srgb_to_xyz([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_primaries_luminance() {
        let r = srgb_to_xyz([1.0, 0.0, 0.0]);
        let g = srgb_to_xyz([0.0, 1.0, 0.0]);
        let b = srgb_to_xyz([0.0, 0.0, 1.0]);
        assert_abs_diff_eq!(r[1], 0.2225, epsilon = 1e-3);
        assert_abs_diff_eq!(g[1], 0.7169, epsilon = 1e-3);
        assert_abs_diff_eq!(b[1], 0.0606, epsilon = 1e-3);
    }

    #[test]
    fn test_deterministic() {
        let a = srgb_to_xyz([0.3, 0.6, 0.9]);
        let b = srgb_to_xyz([0.3, 0.6, 0.9]);
        assert_eq!(a, b);
    }
}
