use std::path::Path;

use image::DynamicImage;

use crate::{
    codec::decode::{decode_image, read_image_file},
    foundation::error::ThumbResult,
    ops::{
        composite::{draw_over, mask_composite},
        mask::CornerMask,
        resample::resize_nearest,
    },
    pipeline::layout::ItemLayout,
    pixels::{adapt::normalize, buffer::PixelBuffer},
};

/// Output canvas edge used when none is given.
pub const DEFAULT_TARGET_SIZE: u32 = 220;
/// Corner radius used when none is given.
pub const DEFAULT_CORNER_RADIUS: u32 = 20;

/// Parameters of one item thumbnail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ItemParams {
    /// Edge length of the square output canvas, in pixels.
    pub target_size: u32,
    /// Radius of the rounded corners of the fitted image, in pixels.
    pub corner_radius: u32,
}

impl Default for ItemParams {
    fn default() -> Self {
        Self {
            target_size: DEFAULT_TARGET_SIZE,
            corner_radius: DEFAULT_CORNER_RADIUS,
        }
    }
}

/// Fit `source` with rounded corners onto a transparent square canvas.
///
/// Pure and infallible: degenerate sizes produce an empty or fully
/// transparent canvas rather than an error.
#[tracing::instrument(skip(source), fields(width = source.width(), height = source.height()))]
pub fn build_item(source: &PixelBuffer, params: ItemParams) -> PixelBuffer {
    let layout = ItemLayout::compute(source.size(), params.target_size);
    tracing::debug!(?layout, "computed item layout");

    let resized = resize_nearest(source, layout.fitted.width, layout.fitted.height);
    let mask = CornerMask::new(layout.fitted, params.corner_radius);
    let masked = mask_composite(&resized, &mask);
    tracing::trace!(pixels = layout.fitted.area(), "masked fitted image");

    let mut canvas = PixelBuffer::new(layout.canvas.width, layout.canvas.height);
    draw_over(&mut canvas, &masked, layout.offset);
    canvas
}

/// Normalize a decoded image and build its item thumbnail.
pub fn create_item_from_image(image: DynamicImage, params: ItemParams) -> ThumbResult<PixelBuffer> {
    let source = normalize(image)?;
    Ok(build_item(&source, params))
}

/// Decode encoded bytes (PNG, JPEG, GIF, WebP) and build their item thumbnail.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn create_item_from_bytes(bytes: &[u8], params: ItemParams) -> ThumbResult<PixelBuffer> {
    let image = decode_image(bytes)?;
    create_item_from_image(image, params)
}

/// Read an image file and build a `target_size` square item with rounded
/// corners of `corner_radius`.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn create_item(path: &Path, target_size: u32, corner_radius: u32) -> ThumbResult<PixelBuffer> {
    let bytes = read_image_file(path)?;
    create_item_from_bytes(
        &bytes,
        ItemParams {
            target_size,
            corner_radius,
        },
    )
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/item.rs"]
mod tests;
