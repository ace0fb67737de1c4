//! CMYK TIFF export.
//!
//! Converted images are stored as 8-bit separated (CMYK) TIFF, the layout
//! print RIPs expect. Ink values are clamped to [0, 1] before scaling since
//! profile output may overshoot slightly. Alpha is dropped.

use crate::{IoError, IoResult};
use sidewalk_core::CmykaImage;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Packs ink channels as interleaved `c, m, y, k` bytes.
pub fn cmyk_to_bytes(image: &CmykaImage) -> Vec<u8> {
    image
        .iter()
        .flat_map(|s| s.cmyk().map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8))
        .collect()
}

/// Writes a converted image as an 8-bit CMYK TIFF.
///
/// # Errors
///
/// [`IoError::EncodeError`] for an empty image or encoder failure, and
/// [`IoError::Io`] if the file cannot be created or written.
pub fn write_cmyk_tiff<P: AsRef<Path>>(path: P, image: &CmykaImage) -> IoResult<()> {
    use tiff::encoder::{colortype, compression, TiffEncoder};

    let path = path.as_ref();
    if image.is_empty() {
        return Err(IoError::EncodeError("cannot write an empty image".into()));
    }

    let mut writer = BufWriter::new(File::create(path)?);
    {
        let mut encoder = TiffEncoder::new(&mut writer)
            .map_err(|e: tiff::TiffError| IoError::EncodeError(e.to_string()))?;
        encoder
            .write_image_with_compression::<colortype::CMYK8, compression::Lzw>(
                image.width(),
                image.height(),
                compression::Lzw,
                &cmyk_to_bytes(image),
            )
            .map_err(|e: tiff::TiffError| IoError::EncodeError(e.to_string()))?;
    }
    writer.flush()?;

    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "CMYK TIFF written"
    );
    Ok(())
}
