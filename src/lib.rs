//! item-thumb turns an arbitrary raster image into a square "item" thumbnail.
//!
//! The source is scaled to fit the square and centered on a transparent
//! canvas, with its corners cut by a procedural rounded-rectangle alpha mask.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: PNG/JPEG/GIF/WebP bytes -> [`image::DynamicImage`] ([`decode_image`])
//! 2. **Normalize**: any decoded layout -> canonical [`PixelBuffer`] ([`normalize`])
//! 3. **Fit**: pick the scaled size and centering offset ([`ItemLayout`])
//! 4. **Resample**: nearest-neighbor scale to the fitted size ([`resize_nearest`])
//! 5. **Mask**: cut the corners with a [`CornerMask`] ([`mask_composite`])
//! 6. **Composite**: source-replace onto the square canvas ([`draw_over`])
//! 7. **Encode** (optional): PNG bytes or file ([`encode_png`], [`save_png`])
//!
//! Steps 3 to 6 are pure and never fail; see [`build_item`]. Decode and
//! encode are the only fallible stages and report a [`ThumbError`].
//!
//! ```no_run
//! let item = item_thumb::create_item("cover.webp".as_ref(), 220, 20)?;
//! item_thumb::save_png(&item, "cover.png".as_ref())?;
//! # Ok::<(), item_thumb::ThumbError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod codec;
mod foundation;
mod ops;
mod pipeline;
mod pixels;

pub use codec::decode::{SUPPORTED_FORMATS, decode_image, header_size, read_image_file};
pub use codec::encode::{encode_png, ensure_parent_dir, save_png, write_png};
pub use foundation::core::{Offset, Rgba8, Size, TRANSPARENT};
pub use foundation::error::{ThumbError, ThumbResult};
pub use ops::composite::{draw_over, mask_composite};
pub use ops::mask::{AlphaMask, CLEAR, CornerMask, OPAQUE};
pub use ops::resample::resize_nearest;
pub use pipeline::item::{
    DEFAULT_CORNER_RADIUS, DEFAULT_TARGET_SIZE, ItemParams, build_item, create_item,
    create_item_from_bytes, create_item_from_image,
};
pub use pipeline::layout::{ItemLayout, centering_offset, fit_size};
pub use pixels::adapt::normalize;
pub use pixels::buffer::{BYTES_PER_PIXEL, PixelBuffer};
