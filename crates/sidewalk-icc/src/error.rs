//! ICC error types.

use thiserror::Error;

/// Result type for ICC operations.
pub type IccResult<T> = Result<T, IccError>;

/// Errors that can occur during ICC operations.
#[derive(Debug, Error)]
pub enum IccError {
    /// Failed to load profile from file.
    #[error("failed to load profile: {0}")]
    LoadFailed(String),

    /// Invalid profile data.
    #[error("invalid profile data: {0}")]
    InvalidProfile(String),

    /// Failed to create transform.
    #[error("failed to create transform: {0}")]
    TransformFailed(String),

    /// Profile color space mismatch.
    #[error("color space mismatch: expected {expected}, got {actual}")]
    ColorSpaceMismatch {
        /// Expected color space.
        expected: String,
        /// Actual color space.
        actual: String,
    },

    /// Wrong number of channels handed to a transform.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl IccError {
    /// True for failures to obtain a usable profile (missing, unreadable,
    /// unparseable, or not a CMYK profile).
    pub fn is_profile_error(&self) -> bool {
        matches!(
            self,
            Self::LoadFailed(_)
                | Self::InvalidProfile(_)
                | Self::ColorSpaceMismatch { .. }
                | Self::TransformFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_error_split() {
        let all = [
            IccError::LoadFailed("gone".into()),
            IccError::InvalidProfile("truncated".into()),
            IccError::TransformFailed("lcms".into()),
            IccError::ColorSpaceMismatch {
                expected: "CmykData".into(),
                actual: "RgbData".into(),
            },
            IccError::InvalidInput("3 channels".into()),
        ];
        for err in &all {
            // exhaustive so a new kind has to pick a side
            let expected = match err {
                IccError::LoadFailed(_)
                | IccError::InvalidProfile(_)
                | IccError::TransformFailed(_)
                | IccError::ColorSpaceMismatch { .. } => true,
                IccError::InvalidInput(_) => false,
            };
            assert_eq!(err.is_profile_error(), expected, "{err}");
        }
    }
}
