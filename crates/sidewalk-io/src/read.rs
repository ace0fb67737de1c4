//! Image loading.
//!
//! Decodes a file into a [`Bitmap`]. Sources with an alpha channel produce
//! ARGB bitmaps; everything else is packed as `0x00RRGGBB`.
//!
//! | Format | Accepted layouts                              |
//! |--------|-----------------------------------------------|
//! | PNG    | any (palette and 16-bit are reduced to 8-bit) |
//! | JPEG   | RGB, grayscale                                |
//! | TIFF   | 8-bit RGB, RGBA, grayscale                    |

use crate::{Format, IoError, IoResult};
use sidewalk_core::Bitmap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads an image, choosing the decoder from the file extension.
///
/// # Errors
///
/// [`IoError::UnsupportedFormat`] for unknown extensions, [`IoError::Io`] if
/// the file cannot be opened and [`IoError::DecodeError`] for corrupt data.
///
/// # Example
///
/// ```rust,no_run
/// let bitmap = sidewalk_io::read("strawberry.jpg")?;
/// println!("{}x{}", bitmap.width, bitmap.height);
/// # Ok::<(), sidewalk_io::IoError>(())
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Bitmap> {
    let path = path.as_ref();
    let format = Format::from_path(path)
        .ok_or_else(|| IoError::UnsupportedFormat(path.display().to_string()))?;

    let bitmap = match format {
        Format::Png => read_png(path)?,
        Format::Jpeg => read_jpeg(path)?,
        Format::Tiff => read_tiff(path)?,
    };
    tracing::debug!(
        path = %path.display(),
        ?format,
        width = bitmap.width,
        height = bitmap.height,
        has_alpha = bitmap.has_alpha,
        "image loaded"
    );
    Ok(bitmap)
}

fn read_png(path: &Path) -> IoResult<Bitmap> {
    let file = File::open(path)?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
    let data = &buf[..info.buffer_size()];

    let bitmap = match info.color_type {
        png::ColorType::Rgb => Bitmap::from_rgb8(info.width, info.height, data)?,
        png::ColorType::Rgba => Bitmap::from_rgba8(info.width, info.height, data)?,
        png::ColorType::Grayscale => Bitmap::from_rgb8(info.width, info.height, &gray_to_rgb(data))?,
        png::ColorType::GrayscaleAlpha => {
            let rgba: Vec<u8> = data
                .chunks_exact(2)
                .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
                .collect();
            Bitmap::from_rgba8(info.width, info.height, &rgba)?
        }
        other => {
            return Err(IoError::DecodeError(format!(
                "unexpected PNG output layout {other:?}"
            )));
        }
    };
    Ok(bitmap)
}

fn read_jpeg(path: &Path) -> IoResult<Bitmap> {
    let file = File::open(path)?;
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(file));
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;

    let (width, height) = (u32::from(info.width), u32::from(info.height));
    let bitmap = match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => Bitmap::from_rgb8(width, height, &pixels)?,
        jpeg_decoder::PixelFormat::L8 => Bitmap::from_rgb8(width, height, &gray_to_rgb(&pixels))?,
        jpeg_decoder::PixelFormat::L16 => {
            // big-endian samples; keep the high byte
            let high: Vec<u8> = pixels.chunks_exact(2).map(|l| l[0]).collect();
            Bitmap::from_rgb8(width, height, &gray_to_rgb(&high))?
        }
        jpeg_decoder::PixelFormat::CMYK32 => {
            return Err(IoError::UnsupportedFormat(
                "JPEG is already CMYK; expected an RGB source".into(),
            ));
        }
    };
    Ok(bitmap)
}

fn read_tiff(path: &Path) -> IoResult<Bitmap> {
    use tiff::decoder::{Decoder, DecodingResult};
    use tiff::ColorType;

    let file = File::open(path)?;
    let mut decoder = Decoder::new(BufReader::new(file))
        .map_err(|e: tiff::TiffError| IoError::DecodeError(e.to_string()))?;
    let (width, height) = decoder
        .dimensions()
        .map_err(|e: tiff::TiffError| IoError::DecodeError(e.to_string()))?;
    let color_type = decoder
        .colortype()
        .map_err(|e: tiff::TiffError| IoError::DecodeError(e.to_string()))?;
    let data = match decoder
        .read_image()
        .map_err(|e: tiff::TiffError| IoError::DecodeError(e.to_string()))?
    {
        DecodingResult::U8(data) => data,
        _ => return Err(IoError::UnsupportedFormat("TIFF with non 8-bit samples".into())),
    };

    let bitmap = match color_type {
        ColorType::RGB(8) => Bitmap::from_rgb8(width, height, &data)?,
        ColorType::RGBA(8) => Bitmap::from_rgba8(width, height, &data)?,
        ColorType::Gray(8) => Bitmap::from_rgb8(width, height, &gray_to_rgb(&data))?,
        other => return Err(IoError::UnsupportedFormat(format!("TIFF {other:?}"))),
    };
    Ok(bitmap)
}

fn gray_to_rgb(gray: &[u8]) -> Vec<u8> {
    gray.iter().flat_map(|&g| [g, g, g]).collect()
}
