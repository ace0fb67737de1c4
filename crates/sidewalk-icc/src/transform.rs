//! sRGB to CMYK through an ICC press profile.

use crate::xyz::srgb_to_xyz;
use crate::{IccError, IccResult, Profile};
use lcms2::{PixelFormat, Transform as LcmsTransform};
use std::path::Path;
use std::sync::Mutex;

/// lcms2 reports float CMYK as ink percentages.
const LCMS_INK_SCALE: f32 = 100.0;

/// Converts one normalized RGBA sample to CMYK.
///
/// Implementations must be deterministic: equal input, bit-identical output.
/// Alpha is part of the call so profile-aware alpha handling can be added
/// without changing the signature; the caller carries it to the output.
pub trait ColorTransform: Send + Sync {
    /// Converts `[r, g, b, a]` in [0, 1] to `[c, m, y, k]`.
    ///
    /// # Errors
    ///
    /// Returns [`IccError::InvalidInput`] unless `rgba` has exactly 4 values.
    fn to_cmyk(&self, rgba: &[f32]) -> IccResult<[f32; 4]>;
}

impl<T: ColorTransform + ?Sized> ColorTransform for std::sync::Arc<T> {
    fn to_cmyk(&self, rgba: &[f32]) -> IccResult<[f32; 4]> {
        (**self).to_cmyk(rgba)
    }
}

impl<T: ColorTransform + ?Sized> ColorTransform for &T {
    fn to_cmyk(&self, rgba: &[f32]) -> IccResult<[f32; 4]> {
        (**self).to_cmyk(rgba)
    }
}

/// Checks the RGBA arity shared by every [`ColorTransform`].
pub(crate) fn expect_rgba(rgba: &[f32]) -> IccResult<[f32; 4]> {
    <[f32; 4]>::try_from(rgba).map_err(|_| {
        IccError::InvalidInput(format!("need RGBA (4 channels), got {}", rgba.len()))
    })
}

/// sRGB -> XYZ (D50) -> CMYK using a press profile.
///
/// The profile is loaded once; the lcms2 transform is reused for every call.
/// Output is in the profile's native channel order with no clamping.
///
/// # Example
///
/// ```rust,no_run
/// use sidewalk_icc::{CmykTransform, ColorTransform, Profile};
/// use std::path::Path;
///
/// let press = Profile::from_file(Path::new("USWebCoatedSWOP.icc")).unwrap();
/// let transform = CmykTransform::new(&press).unwrap();
/// let black = transform.to_cmyk(&[0.0, 0.0, 0.0, 1.0]).unwrap();
/// assert!(black[3] > 0.5);
/// ```
pub struct CmykTransform {
    inner: Mutex<LcmsTransform<[f32; 3], [f32; 4]>>,
    description: String,
}

impl CmykTransform {
    /// Builds the XYZ -> CMYK transform for `target`.
    ///
    /// # Errors
    ///
    /// Returns [`IccError::ColorSpaceMismatch`] if `target` is not a CMYK
    /// profile, or [`IccError::TransformFailed`] if lcms2 rejects it.
    pub fn new(target: &Profile) -> IccResult<Self> {
        if !target.is_cmyk() {
            return Err(IccError::ColorSpaceMismatch {
                expected: "CmykData".into(),
                actual: target.color_space(),
            });
        }

        let pcs = Profile::xyz();
        // ICC colorimetric conversion from the connection space, no gamut mapping
        let inner = LcmsTransform::new(
            &pcs.inner,
            PixelFormat::XYZ_FLT,
            &target.inner,
            PixelFormat::CMYK_FLT,
            lcms2::Intent::RelativeColorimetric,
        )
        .map_err(|e| IccError::TransformFailed(e.to_string()))?;

        let description = target.description();
        tracing::debug!(profile = %description, "created XYZ -> CMYK transform");

        Ok(Self {
            inner: Mutex::new(inner),
            description,
        })
    }

    /// Loads `path` and builds the transform.
    ///
    /// # Errors
    ///
    /// Any profile load error from [`Profile::from_file`] plus the errors of
    /// [`CmykTransform::new`].
    pub fn from_file(path: &Path) -> IccResult<Self> {
        let profile = Profile::from_file(path)?;
        Self::new(&profile)
    }

    /// Description of the target profile.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Maps a D50 XYZ triple to CMYK in [0, 1] ink units.
    pub fn xyz_to_cmyk(&self, xyz: [f32; 3]) -> [f32; 4] {
        let mut out = [[0.0f32; 4]];
        {
            // the transform holds no state a panicking holder could corrupt
            let guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            guard.transform_pixels(&[xyz], &mut out);
        }
        out[0].map(|ink| ink / LCMS_INK_SCALE)
    }
}

impl ColorTransform for CmykTransform {
    fn to_cmyk(&self, rgba: &[f32]) -> IccResult<[f32; 4]> {
        let [r, g, b, _alpha] = expect_rgba(rgba)?;
        Ok(self.xyz_to_cmyk(srgb_to_xyz([r, g, b])))
    }
}

impl std::fmt::Debug for CmykTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CmykTransform")
            .field("profile", &self.description)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Path to a real CMYK press profile, if the environment provides one.
    fn press_profile() -> Option<std::path::PathBuf> {
        let path = std::path::PathBuf::from(std::env::var_os("SIDEWALK_CMYK_PROFILE")?);
        path.is_file().then_some(path)
    }

    #[test]
    fn test_arity() {
        assert_eq!(expect_rgba(&[0.1, 0.2, 0.3, 0.4]).unwrap(), [0.1, 0.2, 0.3, 0.4]);
        assert!(matches!(expect_rgba(&[0.1, 0.2, 0.3]), Err(IccError::InvalidInput(_))));
        assert!(matches!(expect_rgba(&[0.0; 5]), Err(IccError::InvalidInput(_))));
        assert!(matches!(expect_rgba(&[]), Err(IccError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_rgb_profile() {
        let err = CmykTransform::new(&Profile::srgb()).unwrap_err();
        assert!(matches!(err, IccError::ColorSpaceMismatch { .. }));
        assert!(err.is_profile_error());
    }

    #[test]
    fn test_press_profile_sanity() {
        let Some(path) = press_profile() else {
            eprintln!("SKIP: SIDEWALK_CMYK_PROFILE not set");
            return;
        };
        let transform = CmykTransform::from_file(&path).unwrap();

        let white = transform.to_cmyk(&[1.0, 1.0, 1.0, 1.0]).unwrap();
        assert!(white[0] < 0.05 && white[1] < 0.05 && white[2] < 0.05, "{white:?}");
        assert!(white[3] < 0.1, "{white:?}");

        let black = transform.to_cmyk(&[0.0, 0.0, 0.0, 1.0]).unwrap();
        assert!(black[3] > 0.5, "{black:?}");

        // alpha does not take part in the conversion
        let opaque = transform.to_cmyk(&[0.2, 0.4, 0.6, 1.0]).unwrap();
        let clear = transform.to_cmyk(&[0.2, 0.4, 0.6, 0.0]).unwrap();
        assert_eq!(opaque, clear);

        let again = transform.to_cmyk(&[0.2, 0.4, 0.6, 1.0]).unwrap();
        assert_eq!(opaque, again);

        assert!(matches!(
            transform.to_cmyk(&[0.2, 0.4, 0.6]),
            Err(IccError::InvalidInput(_))
        ));
    }
}
