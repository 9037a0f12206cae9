use std::ops::Range;

use crate::{
    foundation::core::{Offset, Size},
    ops::mask::AlphaMask,
    pixels::buffer::{BYTES_PER_PIXEL, PixelBuffer},
};

/// Copy `src`, clamping each pixel's alpha to the mask's alpha at that pixel.
///
/// RGB channels are copied bit-for-bit; only alpha can go down.
pub fn mask_composite<M: AlphaMask + ?Sized>(src: &PixelBuffer, mask: &M) -> PixelBuffer {
    let mut out = PixelBuffer::new(src.width(), src.height());
    for y in 0..src.height() {
        let src_row = src.row(y);
        let out_row = out.row_mut(y);
        for (x, (d, s)) in out_row
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .zip(src_row.chunks_exact(BYTES_PER_PIXEL))
            .enumerate()
        {
            d.copy_from_slice(s);
            d[3] = s[3].min(mask.alpha_at(x as i64, i64::from(y)));
        }
    }
    out
}

/// Source-replace `src` into `dst`.
///
/// Destination pixel `(x, y)` takes source pixel `(x + dx, y + dy)` verbatim,
/// alpha included, whenever that source pixel exists. Every other destination
/// pixel keeps its value.
pub fn draw_over(dst: &mut PixelBuffer, src: &PixelBuffer, offset: Offset) {
    let Some((xs, ys)) = overlap(dst.size(), src.size(), offset) else {
        return;
    };

    let dst_start = xs.start as usize * BYTES_PER_PIXEL;
    let src_start = (i64::from(xs.start) + offset.dx) as usize * BYTES_PER_PIXEL;
    let len = xs.len() * BYTES_PER_PIXEL;
    for y in ys {
        let sy = (i64::from(y) + offset.dy) as u32;
        dst.row_mut(y)[dst_start..dst_start + len]
            .copy_from_slice(&src.row(sy)[src_start..src_start + len]);
    }
}

/// Destination columns and rows whose displaced coordinates land in `src`.
fn overlap(dst: Size, src: Size, offset: Offset) -> Option<(Range<u32>, Range<u32>)> {
    let xs = axis_overlap(dst.width, src.width, offset.dx)?;
    let ys = axis_overlap(dst.height, src.height, offset.dy)?;
    Some((xs, ys))
}

fn axis_overlap(dst_len: u32, src_len: u32, delta: i64) -> Option<Range<u32>> {
    let start = delta.saturating_neg().max(0);
    let end = i64::from(src_len)
        .saturating_sub(delta)
        .min(i64::from(dst_len));
    (start < end).then(|| start as u32..end as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/ops/composite.rs"]
mod tests;
