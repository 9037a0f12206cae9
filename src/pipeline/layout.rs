use crate::foundation::core::{Offset, Size};

/// Geometry of one item thumbnail.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ItemLayout {
    /// Bounds of the normalized source image.
    pub source: Size,
    /// Square output canvas.
    pub canvas: Size,
    /// Size the source is resampled to before masking.
    pub fitted: Size,
    /// `target_size / max(source.width, source.height)`; informational.
    pub scale: f64,
    /// Displacement handed to [`crate::draw_over`] to center `fitted` on `canvas`.
    pub offset: Offset,
}

impl ItemLayout {
    /// Lay out `source` on a `target_size x target_size` canvas.
    pub fn compute(source: Size, target_size: u32) -> Self {
        let fitted = fit_size(source, target_size);
        let longest = source.width.max(source.height);
        let scale = if longest == 0 {
            0.0
        } else {
            f64::from(target_size) / f64::from(longest)
        };
        Self {
            source,
            canvas: Size::new(target_size, target_size),
            fitted,
            scale,
            offset: centering_offset(target_size, fitted),
        }
    }

    /// Canvas coordinate of the fitted image's top-left pixel.
    pub fn placement(&self) -> (i64, i64) {
        (-self.offset.dx, -self.offset.dy)
    }
}

/// Scale `source` so its longer side equals `target_size`, keeping the aspect
/// ratio and truncating.
///
/// Each side is `floor(target_size * side / longest)`, which is the fit scale
/// applied without floating-point drift: the longer side always lands exactly
/// on `target_size`.
pub fn fit_size(source: Size, target_size: u32) -> Size {
    let longest = source.width.max(source.height);
    if longest == 0 {
        return Size::default();
    }
    let scale = |side: u32| (u64::from(target_size) * u64::from(side) / u64::from(longest)) as u32;
    Size::new(scale(source.width), scale(source.height))
}

/// Offset that centers `fitted` on a square canvas of `target_size`.
///
/// Both halves are truncated before subtracting. When the canvas and the
/// fitted side differ in parity the margins differ by one pixel: the trailing
/// margin is wider for an odd canvas, the leading one for an odd fitted side.
pub fn centering_offset(target_size: u32, fitted: Size) -> Offset {
    let half = i64::from(target_size / 2);
    Offset::new(
        -(half - i64::from(fitted.width / 2)),
        -(half - i64::from(fitted.height / 2)),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/layout.rs"]
mod tests;
