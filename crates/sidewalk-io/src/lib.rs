//! # sidewalk-io
//!
//! Image I/O for the sidewalk printer.
//!
//! - [`read`] - load PNG, JPEG or TIFF into a [`sidewalk_core::Bitmap`]
//! - [`save_to_file`] - write `<filename>.<format>`, reporting success as a bool
//! - [`write_cmyk_tiff`] - export a converted image as separated CMYK
//!
//! # Example
//!
//! ```rust,no_run
//! let bitmap = sidewalk_io::read("photo.png")?;
//! let saved = sidewalk_io::save_to_file(&bitmap, "photo_copy", "tiff")?;
//! assert!(saved);
//! # Ok::<(), sidewalk_io::IoError>(())
//! ```

#![warn(missing_docs)]

pub mod cmyk;
mod error;
mod format;
mod read;
pub mod save;

pub use cmyk::write_cmyk_tiff;
pub use error::{IoError, IoResult};
pub use format::Format;
pub use read::read;
pub use save::{save_to_dir, save_to_file};
