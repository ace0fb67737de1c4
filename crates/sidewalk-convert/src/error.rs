//! Error types for image conversion.

use sidewalk_icc::IccError;
use thiserror::Error;

/// Error type for conversion and configuration.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The bitmap broke its data contract.
    #[error(transparent)]
    Input(#[from] sidewalk_core::Error),

    /// The ICC profile could not be loaded or used.
    ///
    /// Fatal to conversion only; callers can still show the source image.
    #[error("profile error: {0}")]
    Profile(IccError),

    /// The color transform rejected a sample.
    #[error("transform error: {0}")]
    Transform(IccError),

    /// Configuration is missing or inconsistent.
    #[error("config error: {0}")]
    Config(String),

    /// Reading the configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid YAML for [`crate::ConvertConfig`].
    #[error("config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl ConvertError {
    /// True if the conversion subsystem is unusable because of its profile.
    pub fn is_profile_error(&self) -> bool {
        matches!(self, Self::Profile(_))
    }
}

impl From<IccError> for ConvertError {
    fn from(err: IccError) -> Self {
        if err.is_profile_error() {
            Self::Profile(err)
        } else {
            Self::Transform(err)
        }
    }
}

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
