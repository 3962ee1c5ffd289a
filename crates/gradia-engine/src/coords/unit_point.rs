use super::{Rect, Vec2};

/// A point in the unit square: `x` and `y` are fractions of a frame's width
/// and height, `(0, 0)` at the top-left corner and `(1, 1)` at the bottom-right.
///
/// Values outside `[0, 1]` are representable and map outside the frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct UnitPoint {
    pub x: f32,
    pub y: f32,
}

impl UnitPoint {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Maps this point into `frame`, returning a position in logical pixels.
    #[inline]
    pub fn to_absolute(self, frame: Rect) -> Vec2 {
        Vec2::new(
            frame.origin.x + self.x * frame.size.x,
            frame.origin.y + self.y * frame.size.y,
        )
    }
}
