use std::borrow::Cow;

use crate::foundation::{
    core::{Rgba8, Size},
    error::{ThumbError, ThumbResult},
};

/// Bytes per canonical pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Canonical pixel surface: straight-alpha RGBA8, row-major, explicit stride.
///
/// Pixel `(x, y)` lives at byte offset `y * stride + x * 4`. Buffers created by
/// this crate are tightly packed (`stride == width * 4`); strided buffers only
/// come in through [`PixelBuffer::from_raw_with_stride`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a fully transparent, tightly packed buffer.
    pub fn new(width: u32, height: u32) -> Self {
        let stride = width as usize * BYTES_PER_PIXEL;
        Self {
            width,
            height,
            stride,
            data: vec![0; stride * height as usize],
        }
    }

    /// Allocate a tightly packed buffer with every pixel set to `px`.
    pub fn filled(width: u32, height: u32, px: Rgba8) -> Self {
        let count = width as usize * height as usize;
        Self {
            width,
            height,
            stride: width as usize * BYTES_PER_PIXEL,
            data: px.repeat(count),
        }
    }

    /// Wrap tightly packed RGBA8 bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> ThumbResult<Self> {
        let stride = (width as usize)
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or_else(|| ThumbError::invalid_image("row size overflow"))?;
        Self::from_raw_with_stride(width, height, stride, data)
    }

    /// Wrap RGBA8 bytes whose rows are `stride` bytes apart.
    ///
    /// Fails with [`ThumbError::InvalidImage`] when `stride < width * 4` or
    /// `data` is shorter than `stride * height`.
    pub fn from_raw_with_stride(
        width: u32,
        height: u32,
        stride: usize,
        data: Vec<u8>,
    ) -> ThumbResult<Self> {
        let row_len = (width as usize)
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or_else(|| ThumbError::invalid_image("row size overflow"))?;
        if stride < row_len {
            return Err(ThumbError::invalid_image(format!(
                "stride {stride} is smaller than a {width}px row ({row_len} bytes)"
            )));
        }
        let needed = stride
            .checked_mul(height as usize)
            .ok_or_else(|| ThumbError::invalid_image("buffer size overflow"))?;
        if data.len() < needed {
            return Err(ThumbError::invalid_image(format!(
                "{width}x{height} buffer with stride {stride} needs {needed} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bounds of the buffer.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Distance in bytes between the starts of two consecutive rows.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// `true` when rows carry no padding.
    pub fn is_tightly_packed(&self) -> bool {
        self.stride == self.width as usize * BYTES_PER_PIXEL
    }

    /// Raw backing bytes, including any row padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Byte offset of pixel `(x, y)`.
    pub fn offset_of(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride + x as usize * BYTES_PER_PIXEL
    }

    /// The `width * 4` pixel bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height, "row {y} out of bounds (height {})", self.height);
        let start = y as usize * self.stride;
        &self.data[start..start + self.width as usize * BYTES_PER_PIXEL]
    }

    /// Mutable view of the pixel bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(y < self.height, "row {y} out of bounds (height {})", self.height);
        let start = y as usize * self.stride;
        &mut self.data[start..start + self.width as usize * BYTES_PER_PIXEL]
    }

    /// Pixel at `(x, y)`, or `None` outside the bounds.
    pub fn get_pixel(&self, x: i64, y: i64) -> Option<Rgba8> {
        if !self.size().contains(x, y) {
            return None;
        }
        let i = self.offset_of(x as u32, y as u32);
        let px = &self.data[i..i + BYTES_PER_PIXEL];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        match self.get_pixel(i64::from(x), i64::from(y)) {
            Some(px) => px,
            None => panic!(
                "pixel ({x}, {y}) out of bounds ({}x{})",
                self.width, self.height
            ),
        }
    }

    /// Overwrite pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the bounds.
    pub fn put_pixel(&mut self, x: u32, y: u32, px: Rgba8) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds ({}x{})",
            self.width,
            self.height
        );
        let i = self.offset_of(x, y);
        self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&px);
    }

    /// Pixel bytes without row padding; borrows when already tightly packed.
    pub fn packed_bytes(&self) -> Cow<'_, [u8]> {
        let len = self.width as usize * self.height as usize * BYTES_PER_PIXEL;
        if self.is_tightly_packed() {
            return Cow::Borrowed(&self.data[..len]);
        }
        let mut out = Vec::with_capacity(len);
        for y in 0..self.height {
            out.extend_from_slice(self.row(y));
        }
        Cow::Owned(out)
    }

    /// Consume the buffer into tightly packed RGBA8 bytes.
    pub fn into_raw(self) -> Vec<u8> {
        if self.is_tightly_packed() {
            let len = self.stride * self.height as usize;
            let mut data = self.data;
            data.truncate(len);
            return data;
        }
        self.packed_bytes().into_owned()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pixels/buffer.rs"]
mod tests;
