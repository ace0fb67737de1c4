//! # sidewalk-ops
//!
//! Image operations applied before color conversion.
//!
//! - [`resize`] - separable resampling of float buffers and packed bitmaps
//! - [`geometry`] - printer width/DPI and the pixel width they imply

#![warn(missing_docs)]

mod error;
pub mod geometry;
pub mod resize;

pub use error::{OpsError, OpsResult};
pub use geometry::PrinterGeometry;
pub use resize::{resize_bitmap, resize_f32, resize_to_print_width, Filter};
