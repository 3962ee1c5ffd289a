use crate::coords::{CornerRadii, Vec2};
use crate::layer::GradientLayer;
use crate::paint::{LinearGradient, Paint};
use crate::scene::{DrawCmd, RectCmd, RoundedRectCmd};

use super::{drawable_parts, GradientBackend};

/// Translates layers into scene draw commands.
///
/// `origin` offsets layer frames from host coordinates into the draw list's
/// space (usually the host frame origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SceneBackend {
    pub origin: Vec2,
}

impl SceneBackend {
    #[inline]
    pub const fn new(origin: Vec2) -> Self {
        Self { origin }
    }
}

impl GradientBackend for SceneBackend {
    type Native = DrawCmd;

    fn translate(&self, layer: &GradientLayer) -> Option<DrawCmd> {
        let (frame, [start_color, end_color]) = drawable_parts(layer)?;
        let rect = frame.translated(self.origin);

        // Zero-length axis: flat fill with the start color.
        let paint = if layer.start_point == layer.end_point {
            Paint::Solid(start_color)
        } else {
            Paint::LinearGradient(LinearGradient::two_stop(
                layer.start_point.to_absolute(rect),
                layer.end_point.to_absolute(rect),
                start_color,
                end_color,
            ))
        };

        let cmd = match layer.corner_radius {
            Some(r) if r > 0.0 => DrawCmd::RoundedRect(RoundedRectCmd::new(rect, CornerRadii::all(r), paint)),
            _ => DrawCmd::Rect(RectCmd::new(rect, paint)),
        };
        Some(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::gradient::{gradient_layer, Direction};
    use crate::paint::{Color, ColorStop};

    fn a() -> Color { Color::from_premul(1.0, 0.0, 0.0, 1.0) }
    fn b() -> Color { Color::from_premul(0.0, 1.0, 0.0, 1.0) }

    #[test]
    fn maps_unit_points_into_offset_frame() {
        let layer = gradient_layer(Direction::TopLeading, Direction::BottomTrailing, a(), b())
            .with_frame(Rect::new(0.0, 0.0, 100.0, 50.0));
        let backend = SceneBackend::new(Vec2::new(10.0, 10.0));

        let Some(DrawCmd::Rect(cmd)) = backend.translate(&layer) else {
            panic!("expected a rect command");
        };
        assert_eq!(cmd.rect, Rect::new(10.0, 10.0, 100.0, 50.0));
        assert_eq!(
            cmd.paint,
            Paint::LinearGradient(LinearGradient::new(
                Vec2::new(10.0, 10.0),
                Vec2::new(110.0, 60.0),
                vec![ColorStop::new(0.0, a()), ColorStop::new(1.0, b())],
            ))
        );
    }

    #[test]
    fn corner_radius_produces_rounded_rect() {
        let layer = gradient_layer(Direction::Top, Direction::Bottom, a(), b())
            .with_frame(Rect::new(0.0, 0.0, 40.0, 40.0))
            .with_corner_radius(12.0);

        let Some(DrawCmd::RoundedRect(cmd)) = SceneBackend::default().translate(&layer) else {
            panic!("expected a rounded rect command");
        };
        assert_eq!(cmd.radii, CornerRadii::all(12.0));
    }

    #[test]
    fn degenerate_axis_is_a_flat_fill() {
        let layer = gradient_layer(Direction::Center, Direction::Center, a(), b())
            .with_frame(Rect::new(0.0, 0.0, 10.0, 10.0));
        let cmd = SceneBackend::default().translate(&layer);
        assert_eq!(cmd.as_ref().map(DrawCmd::paint), Some(&Paint::Solid(a())));
    }

    #[test]
    fn invisible_layers_translate_to_nothing() {
        let unsized_layer = gradient_layer(Direction::Top, Direction::Bottom, a(), b());
        let colorless = gradient_layer(Direction::Top, Direction::Bottom, a(), None)
            .with_frame(Rect::new(0.0, 0.0, 10.0, 10.0));
        let empty = gradient_layer(Direction::Top, Direction::Bottom, a(), b())
            .with_frame(Rect::new(0.0, 0.0, 0.0, 10.0));

        let backend = SceneBackend::default();
        assert!(backend.translate(&unsized_layer).is_none());
        assert!(backend.translate(&colorless).is_none());
        assert!(backend.translate(&empty).is_none());
    }

    #[test]
    fn negative_frame_is_skipped_like_the_layer_reports() {
        let layer = gradient_layer(Direction::TopLeading, Direction::BottomTrailing, a(), b())
            .with_frame(Rect::new(10.0, 10.0, -4.0, -3.0));

        assert!(!layer.is_drawable());
        assert!(SceneBackend::default().translate(&layer).is_none());
    }
}
