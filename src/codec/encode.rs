use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};

use crate::{
    foundation::error::{ThumbError, ThumbResult},
    pixels::buffer::PixelBuffer,
};

/// Write `buffer` to `writer` as an 8-bit RGBA PNG.
///
/// Zero-area buffers have no PNG representation and fail with
/// [`ThumbError::Encode`].
pub fn write_png<W: Write>(writer: W, buffer: &PixelBuffer) -> ThumbResult<()> {
    ensure_encodable(buffer)?;
    let pixels = buffer.packed_bytes();
    PngEncoder::new(writer)
        .write_image(
            &pixels,
            buffer.width(),
            buffer.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| ThumbError::encode(format!("encode png: {e}")))
}

fn ensure_encodable(buffer: &PixelBuffer) -> ThumbResult<()> {
    if buffer.size().is_empty() {
        return Err(ThumbError::encode(format!(
            "cannot encode an empty {}x{} image",
            buffer.width(),
            buffer.height()
        )));
    }
    Ok(())
}

/// Encode `buffer` as PNG bytes.
pub fn encode_png(buffer: &PixelBuffer) -> ThumbResult<Vec<u8>> {
    let mut out = Vec::new();
    write_png(&mut out, buffer)?;
    Ok(out)
}

/// Encode `buffer` as PNG into a new file at `path`, replacing any existing one.
///
/// A buffer that cannot be encoded is rejected before `path` is touched.
pub fn save_png(buffer: &PixelBuffer, path: &Path) -> ThumbResult<()> {
    ensure_encodable(buffer)?;
    let file = File::create(path)
        .map_err(|e| ThumbError::io(format!("create '{}'", path.display()), e))?;
    let mut writer = BufWriter::new(file);
    write_png(&mut writer, buffer)?;

    let file = writer
        .into_inner()
        .map_err(|e| ThumbError::io(format!("flush '{}'", path.display()), e.into_error()))?;
    file.sync_all()
        .map_err(|e| ThumbError::io(format!("sync '{}'", path.display()), e))?;
    tracing::debug!(path = %path.display(), "saved png");
    Ok(())
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> ThumbResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ThumbError::io(
                format!("create output directory '{}'", parent.display()),
                e,
            )
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/codec/encode.rs"]
mod tests;
