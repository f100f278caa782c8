use super::Vec2;

/// Axis-aligned rectangle, top-left origin.
///
/// Window placement is expressed as a `Rect`; the rectangle is recorded as
/// given and is expected to have finite, non-negative size (`begin_window`
/// asserts this in debug builds). A degenerate rectangle contains nothing.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Top-left corner.
    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    /// Bottom-right corner (exclusive).
    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Half-open containment: `[min, max)`.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }
}
