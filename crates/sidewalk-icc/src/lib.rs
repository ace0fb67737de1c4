//! # sidewalk-icc
//!
//! ICC profile support for the sidewalk print pipeline.
//!
//! Converting one pixel is a two step affair:
//!
//! 1. sRGB is gamma-decoded and multiplied into CIE XYZ (D50, the ICC
//!    profile connection space) - see [`xyz`].
//! 2. XYZ is mapped into the device space of a CMYK press profile through
//!    Little CMS 2 - see [`CmykTransform`].
//!
//! # Example
//!
//! ```rust,no_run
//! use sidewalk_icc::{CmykTransform, ColorTransform};
//! use std::path::Path;
//!
//! let transform = CmykTransform::from_file(Path::new("USWebCoatedSWOP.icc")).unwrap();
//! let cmyk = transform.to_cmyk(&[1.0, 0.0, 0.0, 1.0]).unwrap();
//! println!("red -> {:?}", cmyk);
//! ```
//!
//! # Thread Safety
//!
//! [`CmykTransform`] serializes access to its lcms2 handle, so a single
//! instance can be shared across worker threads.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod profile;
mod transform;
pub mod xyz;

pub use error::{IccError, IccResult};
pub use profile::Profile;
pub use transform::{CmykTransform, ColorTransform};
