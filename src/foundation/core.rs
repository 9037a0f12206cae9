/// Straight-alpha RGBA8 pixel, channel order `[r, g, b, a]`.
pub type Rgba8 = [u8; 4];

/// Fully transparent black.
pub const TRANSPARENT: Rgba8 = [0, 0, 0, 0];

/// Bounds of a pixel surface. The origin is always `(0, 0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Size {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl Size {
    /// Build a size from its two dimensions.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels covered.
    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// `true` when either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// `true` when `(x, y)` addresses a pixel inside these bounds.
    pub fn contains(self, x: i64, y: i64) -> bool {
        (0..i64::from(self.width)).contains(&x) && (0..i64::from(self.height)).contains(&y)
    }
}

/// Signed displacement between a destination and a source surface.
///
/// Destination pixel `(x, y)` reads source pixel `(x + dx, y + dy)`, so a
/// source drawn further right/down on the canvas has a negative offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Offset {
    /// Horizontal displacement.
    pub dx: i64,
    /// Vertical displacement.
    pub dy: i64,
}

impl Offset {
    /// No displacement.
    pub const ZERO: Self = Self { dx: 0, dy: 0 };

    /// Build an offset from its two components.
    pub const fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }
}
