//! # sidewalk-convert
//!
//! RGB(A) to CMYK(A) image conversion for the sidewalk printer.
//!
//! The pipeline for one bitmap:
//!
//! ```text
//! Bitmap --decode_argb--> ARGB plane --+--> cache hit ----------------+--> CmykaImage
//!                                      |                              |
//!                                      +--> ColorTransform (miss) -----+
//! ```
//!
//! - [`ImageConverter`] - orchestrates decode, cache and transform
//! - [`ConversionCache`] - memo of CMYK results keyed by exact RGBA sample
//! - [`ConversionObserver`] - per-pixel hooks, e.g. [`TracingObserver`]
//! - [`ConvertConfig`] - YAML configuration (profile path, parallelism, print size)
//!
//! # Example
//!
//! ```rust,no_run
//! use sidewalk_convert::{ConvertConfig, ImageConverter, TracingObserver};
//! use sidewalk_core::Bitmap;
//!
//! let config = ConvertConfig::from_file("sidewalk.yaml")?;
//! let converter = ImageConverter::from_config(&config)?.with_observer(TracingObserver);
//! let cmyka = converter.convert(&Bitmap::filled(96, 40, 0xFFFF_FFFF, true))?;
//! println!("{} samples", cmyka.len());
//! # Ok::<(), sidewalk_convert::ConvertError>(())
//! ```
//!
//! # Features
//!
//! - `parallel` (default) - row-parallel conversion on the rayon pool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cache;
mod config;
mod converter;
mod error;
pub mod observer;

pub use cache::{CacheStats, ConversionCache, Lookup};
pub use config::ConvertConfig;
pub use converter::ImageConverter;
pub use error::{ConvertError, ConvertResult};
pub use observer::{ConversionObserver, CountingObserver, NoopObserver, TracingObserver};
