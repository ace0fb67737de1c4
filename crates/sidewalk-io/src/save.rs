//! Saving bitmaps to disk.
//!
//! The save operation takes a bare file name and a format token and writes
//! `<filename>.<format>`. Malformed names are a caller error; everything that
//! goes wrong while writing is logged and reported as `Ok(false)`.

use crate::{Format, IoError, IoResult};
use sidewalk_core::Bitmap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// JPEG quality used by the save operation.
const JPEG_QUALITY: u8 = 90;

/// Writes `bitmap` to `<filename>.<format>` in the current directory.
///
/// Returns `Ok(true)` once the file is written and `Ok(false)` if the format
/// has no writer or writing failed.
///
/// # Errors
///
/// [`IoError::InvalidInput`] if `filename` or `format` is empty or contains
/// a `.`; the filesystem is not touched in that case.
///
/// # Example
///
/// ```rust,no_run
/// use sidewalk_core::Bitmap;
///
/// let bmp = Bitmap::filled(4, 4, 0x00FF_0000, false);
/// assert!(sidewalk_io::save_to_file(&bmp, "image01", "png")?);
/// # Ok::<(), sidewalk_io::IoError>(())
/// ```
pub fn save_to_file(bitmap: &Bitmap, filename: &str, format: &str) -> IoResult<bool> {
    save_to_dir(Path::new(""), bitmap, filename, format)
}

/// Like [`save_to_file`], writing into `dir` instead of the current directory.
pub fn save_to_dir(dir: &Path, bitmap: &Bitmap, filename: &str, format: &str) -> IoResult<bool> {
    check_token("format", format)?;
    check_token("filename", filename)?;

    let Some(kind) = Format::from_token(format) else {
        tracing::warn!(format, "no writer for format");
        return Ok(false);
    };

    let path = target_path(dir, filename, format);
    match write(&path, bitmap, kind) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "saved");
            Ok(true)
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "save failed");
            Ok(false)
        }
    }
}

/// Rejects empty tokens and tokens carrying their own extension.
fn check_token(what: &str, token: &str) -> IoResult<()> {
    if token.is_empty() {
        return Err(IoError::InvalidInput(format!("{what} is empty")));
    }
    if token.contains('.') {
        return Err(IoError::InvalidInput(format!(
            "{what} must not contain '.': {token:?}"
        )));
    }
    Ok(())
}

/// Encodes `bitmap` as `format` at `path`.
///
/// # Errors
///
/// Propagates file and encoder errors.
pub fn write(path: &Path, bitmap: &Bitmap, format: Format) -> IoResult<()> {
    bitmap.validate()?;
    match format {
        Format::Png => write_png(path, bitmap),
        Format::Jpeg => write_jpeg(path, bitmap),
        Format::Tiff => write_tiff(path, bitmap),
    }
}

fn write_png(path: &Path, bitmap: &Bitmap) -> IoResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    {
        let mut encoder = png::Encoder::new(&mut writer, bitmap.width, bitmap.height);
        encoder.set_color(if bitmap.has_alpha {
            png::ColorType::Rgba
        } else {
            png::ColorType::Rgb
        });
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

        let mut png_writer = encoder
            .write_header()
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
        png_writer
            .write_image_data(&bitmap.to_bytes())
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
        png_writer
            .finish()
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
    }
    // dropping a BufWriter swallows the final write error
    writer.flush()?;
    Ok(())
}

fn write_jpeg(path: &Path, bitmap: &Bitmap) -> IoResult<()> {
    use jpeg_encoder::{ColorType, Encoder};

    let width = u16::try_from(bitmap.width)
        .map_err(|_| IoError::EncodeError(format!("width {} too large for JPEG", bitmap.width)))?;
    let height = u16::try_from(bitmap.height)
        .map_err(|_| IoError::EncodeError(format!("height {} too large for JPEG", bitmap.height)))?;

    // JPEG has no alpha channel
    let rgb: Vec<u8> = bitmap
        .pixels
        .iter()
        .flat_map(|&p| [(p >> 16) as u8, (p >> 8) as u8, p as u8])
        .collect();

    let mut buffer = Vec::new();
    Encoder::new(&mut buffer, JPEG_QUALITY)
        .encode(&rgb, width, height, ColorType::Rgb)
        .map_err(|e: jpeg_encoder::EncodingError| IoError::EncodeError(e.to_string()))?;
    std::fs::write(path, buffer)?;
    Ok(())
}

fn write_tiff(path: &Path, bitmap: &Bitmap) -> IoResult<()> {
    use tiff::encoder::{colortype, TiffEncoder};

    let mut writer = BufWriter::new(File::create(path)?);
    {
        let mut encoder = TiffEncoder::new(&mut writer)
            .map_err(|e: tiff::TiffError| IoError::EncodeError(e.to_string()))?;
        let bytes = bitmap.to_bytes();
        let result = if bitmap.has_alpha {
            encoder.write_image::<colortype::RGBA8>(bitmap.width, bitmap.height, &bytes)
        } else {
            encoder.write_image::<colortype::RGB8>(bitmap.width, bitmap.height, &bytes)
        };
        result.map_err(|e: tiff::TiffError| IoError::EncodeError(e.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Path the save operation would write for `filename` and `format` in `dir`.
pub fn target_path(dir: &Path, filename: &str, format: &str) -> PathBuf {
    dir.join(format!("{filename}.{format}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_token() {
        assert!(check_token("filename", "image01").is_ok());
        assert!(matches!(check_token("filename", "a.b"), Err(IoError::InvalidInput(_))));
        assert!(matches!(check_token("format", "p.ng"), Err(IoError::InvalidInput(_))));
        assert!(matches!(check_token("format", ""), Err(IoError::InvalidInput(_))));
    }

    #[test]
    fn test_target_path() {
        assert_eq!(
            target_path(Path::new("out"), "image01", "png"),
            PathBuf::from("out/image01.png")
        );
    }
}
