use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient in logical pixel space, as consumed by draw commands.
///
/// Semantics:
/// - `start` and `end` are absolute positions in the same space as geometry.
/// - Stops define premultiplied linear colors.
/// - Outside the `start..end` axis the edge stops are extended (pad).
///
/// Layers describe gradients in unit space; backends produce this type once a
/// layer has a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Two-stop gradient from `start_color` at `t = 0` to `end_color` at `t = 1`.
    pub fn two_stop(start: Vec2, end: Vec2, start_color: Color, end_color: Color) -> Self {
        Self::new(
            start,
            end,
            vec![ColorStop::new(0.0, start_color), ColorStop::new(1.0, end_color)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_stop_orders_colors() {
        let a = Color::from_premul(1.0, 0.0, 0.0, 1.0);
        let b = Color::from_premul(0.0, 0.0, 1.0, 1.0);
        let g = LinearGradient::two_stop(Vec2::zero(), Vec2::new(10.0, 0.0), a, b);
        assert_eq!(g.stops, vec![ColorStop::new(0.0, a), ColorStop::new(1.0, b)]);
        assert_eq!(g.end, Vec2::new(10.0, 0.0));
    }
}
