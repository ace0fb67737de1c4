//! CLI command implementations

pub mod convert;
pub mod info;
pub mod save;

use anyhow::{Context, Result};
use sidewalk_core::Bitmap;
use std::path::Path;

/// Load image from path
pub fn load_image(path: &Path) -> Result<Bitmap> {
    sidewalk_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}
