//! ICC profile wrapper.

use crate::{IccError, IccResult};
use lcms2::{ColorSpaceSignature, Profile as LcmsProfile};
use std::path::Path;

/// An ICC color profile.
///
/// # Example
///
/// ```rust,no_run
/// use sidewalk_icc::Profile;
/// use std::path::Path;
///
/// let press = Profile::from_file(Path::new("USWebCoatedSWOP.icc")).unwrap();
/// assert!(press.is_cmyk());
/// println!("Description: {}", press.description());
/// ```
pub struct Profile {
    /// Internal lcms2 profile handle.
    pub(crate) inner: LcmsProfile,
}

impl Profile {
    /// Loads a profile from an ICC file.
    ///
    /// # Errors
    ///
    /// Returns [`IccError::LoadFailed`] if the file is missing or does not
    /// parse as an ICC profile.
    pub fn from_file(path: &Path) -> IccResult<Self> {
        if !path.is_file() {
            return Err(IccError::LoadFailed(format!(
                "{}: no such file",
                path.display()
            )));
        }
        let inner = LcmsProfile::new_file(path)
            .map_err(|e| IccError::LoadFailed(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), "loaded ICC profile");
        Ok(Self { inner })
    }

    /// Creates a profile from raw ICC data.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sidewalk_icc::Profile;
    ///
    /// let bytes = Profile::srgb().to_icc().unwrap();
    /// let profile = Profile::from_icc(&bytes).unwrap();
    /// assert!(profile.is_rgb());
    /// ```
    pub fn from_icc(data: &[u8]) -> IccResult<Self> {
        let inner =
            LcmsProfile::new_icc(data).map_err(|e| IccError::InvalidProfile(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Creates an sRGB profile (IEC 61966-2-1).
    pub fn srgb() -> Self {
        Self {
            inner: LcmsProfile::new_srgb(),
        }
    }

    /// Creates a CIE XYZ profile.
    ///
    /// The CIE 1931 XYZ space relative to D50, i.e. the ICC profile
    /// connection space.
    pub fn xyz() -> Self {
        Self {
            inner: LcmsProfile::new_xyz(),
        }
    }

    /// Returns the profile description.
    pub fn description(&self) -> String {
        self.inner
            .info(lcms2::InfoType::Description, lcms2::Locale::none())
            .unwrap_or_default()
    }

    /// Returns the profile copyright.
    pub fn copyright(&self) -> String {
        self.inner
            .info(lcms2::InfoType::Copyright, lcms2::Locale::none())
            .unwrap_or_default()
    }

    /// Returns the color space signature.
    pub fn color_space(&self) -> String {
        format!("{:?}", self.inner.color_space())
    }

    /// Returns true if this is an RGB profile.
    pub fn is_rgb(&self) -> bool {
        matches!(self.inner.color_space(), ColorSpaceSignature::RgbData)
    }

    /// Returns true if this is a CMYK profile.
    pub fn is_cmyk(&self) -> bool {
        matches!(self.inner.color_space(), ColorSpaceSignature::CmykData)
    }

    /// Exports the profile as ICC data.
    pub fn to_icc(&self) -> IccResult<Vec<u8>> {
        self.inner
            .icc()
            .map_err(|e| IccError::InvalidProfile(e.to_string()))
    }
}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("description", &self.description())
            .field("color_space", &self.color_space())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb() {
        let profile = Profile::srgb();
        assert!(profile.is_rgb());
        assert!(!profile.is_cmyk());
        assert!(!profile.description().is_empty());
    }

    #[test]
    fn test_xyz() {
        let profile = Profile::xyz();
        assert!(!profile.is_rgb());
        assert!(!profile.is_cmyk());
    }

    #[test]
    fn test_missing_file() {
        let err = Profile::from_file(Path::new("/definitely/not/here.icc")).unwrap_err();
        assert!(matches!(err, IccError::LoadFailed(_)));
        assert!(err.is_profile_error());
    }

    #[test]
    fn test_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.icc");
        std::fs::write(&path, b"not an icc profile").unwrap();

        let err = Profile::from_file(&path).unwrap_err();
        assert!(matches!(err, IccError::LoadFailed(_)));
    }

    #[test]
    fn test_icc_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("srgb.icc");
        std::fs::write(&path, Profile::srgb().to_icc().unwrap()).unwrap();

        let reloaded = Profile::from_file(&path).unwrap();
        assert!(reloaded.is_rgb());
    }
}
