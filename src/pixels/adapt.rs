use image::DynamicImage;

use crate::{
    foundation::{
        core::Rgba8,
        error::{ThumbError, ThumbResult},
    },
    pixels::buffer::{BYTES_PER_PIXEL, PixelBuffer},
};

/// Convert a decoded image into the canonical RGBA8 layout.
///
/// RGBA8 input is moved without copying pixels. The common 8-bit layouts are
/// expanded directly; every other layout goes through the `image` crate's
/// conversion. No resizing happens here.
pub fn normalize(image: DynamicImage) -> ThumbResult<PixelBuffer> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(ThumbError::invalid_image(format!(
            "decoded image has empty bounds {width}x{height}"
        )));
    }

    let data = match image {
        DynamicImage::ImageRgba8(buf) => buf.into_raw(),
        DynamicImage::ImageRgb8(buf) => expand(buf.as_raw(), 3, |p| [p[0], p[1], p[2], 255]),
        DynamicImage::ImageLuma8(buf) => expand(buf.as_raw(), 1, |p| [p[0], p[0], p[0], 255]),
        DynamicImage::ImageLumaA8(buf) => expand(buf.as_raw(), 2, |p| [p[0], p[0], p[0], p[1]]),
        other => other.to_rgba8().into_raw(),
    };
    PixelBuffer::from_raw(width, height, data)
}

fn expand(src: &[u8], channels: usize, to_rgba: impl Fn(&[u8]) -> Rgba8) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len() / channels * BYTES_PER_PIXEL);
    for px in src.chunks_exact(channels) {
        out.extend_from_slice(&to_rgba(px));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/pixels/adapt.rs"]
mod tests;
