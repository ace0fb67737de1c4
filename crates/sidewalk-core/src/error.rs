//! Error types for sidewalk-core operations.
//!
//! # Usage
//!
//! ```rust
//! use sidewalk_core::{Error, Result};
//!
//! fn check(len: usize, width: u32, height: u32) -> Result<()> {
//!     let expected = width as usize * height as usize;
//!     if len != expected {
//!         return Err(Error::invalid_input(format!("expected {expected} samples, got {len}")));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by bitmap and codec operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller broke a data contract (e.g. buffer length does not match dimensions).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Image dimensions overflow addressable memory.
    #[error("invalid dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Why the dimensions were rejected
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidInput`].
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Creates an [`Error::InvalidDimensions`].
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::invalid_input("bad");
        assert_eq!(err.to_string(), "invalid input: bad");

        let err = Error::invalid_dimensions(80, 60, "too large");
        assert_eq!(err.to_string(), "invalid dimensions 80x60: too large");
    }

    #[test]
    fn test_error_kinds() {
        // exhaustive: every kind here has a producer in bitmap.rs
        let err = crate::Bitmap::new(2, 2, vec![0; 3], true).validate().unwrap_err();
        match err {
            Error::InvalidInput(msg) => assert!(msg.contains("needs 4 samples")),
            Error::InvalidDimensions { .. } => panic!("expected a length mismatch"),
        }
    }
}
