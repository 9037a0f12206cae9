use std::{io::Cursor, path::Path};

use image::{DynamicImage, ImageFormat, ImageReader};

use crate::foundation::{
    core::Size,
    error::{ThumbError, ThumbResult},
};

/// Containers accepted as input.
pub const SUPPORTED_FORMATS: [ImageFormat; 4] = [
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Gif,
    ImageFormat::WebP,
];

/// Read a whole image file into memory.
pub fn read_image_file(path: &Path) -> ThumbResult<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| ThumbError::io(format!("read image '{}'", path.display()), e))
}

/// Decode encoded image bytes; the container is detected from the content.
///
/// Only [`SUPPORTED_FORMATS`] are accepted. Animated GIFs yield their first
/// frame.
pub fn decode_image(bytes: &[u8]) -> ThumbResult<DynamicImage> {
    let format = detect_format(bytes)?;
    tracing::debug!(?format, len = bytes.len(), "decoding image");
    image::load_from_memory_with_format(bytes, format)
        .map_err(|e| ThumbError::decode(format!("decode {format:?} image: {e}")))
}

/// Read only the header of encoded image bytes and report their dimensions.
pub fn header_size(bytes: &[u8]) -> ThumbResult<Size> {
    let format = detect_format(bytes)?;
    let (width, height) = ImageReader::with_format(Cursor::new(bytes), format)
        .into_dimensions()
        .map_err(|e| ThumbError::decode(format!("read {format:?} header: {e}")))?;
    Ok(Size::new(width, height))
}

fn detect_format(bytes: &[u8]) -> ThumbResult<ImageFormat> {
    let format = image::guess_format(bytes)
        .map_err(|e| ThumbError::decode(format!("detect image format: {e}")))?;
    if !SUPPORTED_FORMATS.contains(&format) {
        return Err(ThumbError::decode(format!(
            "unsupported image format {format:?}"
        )));
    }
    Ok(format)
}

#[cfg(test)]
#[path = "../../tests/unit/codec/decode.rs"]
mod tests;
