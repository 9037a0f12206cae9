use crate::pixels::buffer::{BYTES_PER_PIXEL, PixelBuffer};

/// Nearest-neighbor resize to `width x height`.
///
/// Destination pixel `(x, y)` copies source pixel
/// `(floor((x + 0.5) * src_w / width), floor((y + 0.5) * src_h / height))`
/// verbatim; nothing is blended. A zero target dimension gives an empty
/// buffer, and an empty source gives a transparent one.
pub fn resize_nearest(src: &PixelBuffer, width: u32, height: u32) -> PixelBuffer {
    let mut dst = PixelBuffer::new(width, height);
    if dst.size().is_empty() || src.size().is_empty() {
        return dst;
    }

    let columns: Vec<usize> = (0..width)
        .map(|x| nearest_index(x, src.width(), width) as usize * BYTES_PER_PIXEL)
        .collect();

    for y in 0..height {
        let src_row = src.row(nearest_index(y, src.height(), height));
        let dst_row = dst.row_mut(y);
        for (px, &sx) in dst_row.chunks_exact_mut(BYTES_PER_PIXEL).zip(&columns) {
            px.copy_from_slice(&src_row[sx..sx + BYTES_PER_PIXEL]);
        }
    }
    dst
}

/// `floor((i + 0.5) * src_len / dst_len)`, evaluated exactly.
///
/// Always `< src_len` for `i < dst_len`.
pub(crate) fn nearest_index(i: u32, src_len: u32, dst_len: u32) -> u32 {
    let num = (2 * u128::from(i) + 1) * u128::from(src_len);
    (num / (2 * u128::from(dst_len))) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/ops/resample.rs"]
mod tests;
