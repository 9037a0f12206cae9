use crate::{foundation::core::Size, pixels::buffer::PixelBuffer};

/// Alpha of a fully covered mask pixel.
pub const OPAQUE: u8 = 255;
/// Alpha of a cut-out mask pixel.
pub const CLEAR: u8 = 0;

/// Point-wise alpha stencil consulted while compositing.
///
/// Implementations are pure functions of the coordinate and must accept any
/// coordinate, including ones outside the surface they describe.
pub trait AlphaMask {
    /// Alpha in `0..=255` at `(x, y)`.
    fn alpha_at(&self, x: i64, y: i64) -> u8;
}

impl<F> AlphaMask for F
where
    F: Fn(i64, i64) -> u8,
{
    fn alpha_at(&self, x: i64, y: i64) -> u8 {
        self(x, y)
    }
}

/// Rounded-rectangle stencil of a given size and corner radius.
///
/// Alpha is binary. Each corner owns the `(r + 1) x (r + 1)` square touching
/// it; inside that square a pixel is cut when its offset from the corner
/// circle, measured with half-pixel centers, reaches the radius. The other
/// three corners are evaluated as mirror images of the top-left one.
///
/// When `r > min(w, h) / 2` the corner squares overlap; a pixel then follows
/// the last matching corner in top-left, top-right, bottom-left, bottom-right
/// order. A radius of zero never cuts anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CornerMask {
    /// Bounds of the rounded rectangle.
    pub size: Size,
    /// Corner radius in pixels.
    pub radius: u32,
}

#[derive(Clone, Copy, Debug)]
enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    const EVALUATION_ORDER: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    fn is_right(self) -> bool {
        matches!(self, Corner::TopRight | Corner::BottomRight)
    }

    fn is_bottom(self) -> bool {
        matches!(self, Corner::BottomLeft | Corner::BottomRight)
    }
}

impl CornerMask {
    /// Mask for a `size` rectangle with corners of radius `radius`.
    pub fn new(size: Size, radius: u32) -> Self {
        Self { size, radius }
    }

    /// Mask covering `buffer`'s bounds.
    pub fn for_buffer(buffer: &PixelBuffer, radius: u32) -> Self {
        Self::new(buffer.size(), radius)
    }

    /// `(x, y)` reflected into the top-left corner's frame for the corner that
    /// claims it, or `None` when no corner square contains it.
    fn folded(&self, x: i64, y: i64) -> Option<(i64, i64)> {
        let r = i64::from(self.radius);
        let right_edge = i64::from(self.size.width) - 1;
        let bottom_edge = i64::from(self.size.height) - 1;

        let mut claimed = None;
        for corner in Corner::EVALUATION_ORDER {
            let fx = if corner.is_right() { right_edge - x } else { x };
            let fy = if corner.is_bottom() { bottom_edge - y } else { y };
            if fx <= r && fy <= r {
                claimed = Some((fx, fy));
            }
        }
        claimed
    }
}

impl AlphaMask for CornerMask {
    fn alpha_at(&self, x: i64, y: i64) -> u8 {
        if self.radius == 0 {
            return OPAQUE;
        }
        match self.folded(x, y) {
            Some((fx, fy)) if outside_arc(fx, fy, i64::from(self.radius)) => CLEAR,
            _ => OPAQUE,
        }
    }
}

fn outside_arc(x: i64, y: i64, r: i64) -> bool {
    let ox = (r - x) as f64 + 0.5;
    let oy = (y - r) as f64 + 0.5;
    let r = r as f64;
    ox * ox + oy * oy >= r * r
}

#[cfg(test)]
#[path = "../../tests/unit/ops/mask.rs"]
mod tests;
