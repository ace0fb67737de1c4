//! # sidewalk-core
//!
//! Core types for the sidewalk print conversion pipeline.
//!
//! This crate provides the foundational types used by every other sidewalk crate:
//!
//! - [`Bitmap`] - Caller-owned packed 32-bit image (ARGB or `0x00RRGGBB`)
//! - [`Plane`] - Row-major two-dimensional grid, used for decoded and converted pixels
//! - [`RgbaSample`], [`CmykaSample`] - Immutable per-pixel value types
//! - [`codec`] - Pixel codec turning a [`Bitmap`] into packed ARGB samples
//!
//! ## Crate Structure
//!
//! ```text
//! sidewalk-core (this crate)
//!    ^
//!    |
//!    +-- sidewalk-icc (profiles, sRGB -> XYZ -> CMYK)
//!    +-- sidewalk-convert (cache, image converter)
//!    +-- sidewalk-ops (resize)
//!    +-- sidewalk-io (read, save, CMYK export)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bitmap;
pub mod codec;
pub mod error;
pub mod sample;

pub use bitmap::{Bitmap, CmykaImage, Plane};
pub use codec::decode_argb;
pub use error::{Error, Result};
pub use sample::{CmykaSample, RgbaSample};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use sidewalk_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bitmap::{Bitmap, CmykaImage, Plane};
    pub use crate::codec::decode_argb;
    pub use crate::error::{Error, Result};
    pub use crate::sample::{CmykaSample, RgbaSample};
}
