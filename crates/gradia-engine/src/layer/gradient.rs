use crate::coords::{Rect, UnitPoint, Vec2};
use crate::gradient::{GradientColors, GradientSpec};
use crate::paint::Color;
use crate::surface::HostSurface;

/// A renderable two-color linear gradient layer.
///
/// Endpoints are in unit space; `frame` is the absolute pixel rectangle the
/// layer covers in its host's coordinate space. A layer starts unsized
/// (`frame == None`) and draws nothing until a frame is set.
///
/// Lifecycle: unsized → sized → inserted → (re-sized on layout) → removed.
/// Sizing after insertion and removal are always the owner's job.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientLayer {
    pub start_point: UnitPoint,
    pub end_point: UnitPoint,
    pub colors: GradientColors,
    pub frame: Option<Rect>,
    pub corner_radius: Option<f32>,
}

impl GradientLayer {
    pub fn from_spec(spec: GradientSpec) -> Self {
        Self {
            start_point: spec.start_point,
            end_point: spec.end_point,
            colors: spec.colors,
            frame: None,
            corner_radius: None,
        }
    }

    /// The gradient description this layer was built from (frame and radius dropped).
    #[inline]
    pub fn spec(&self) -> GradientSpec {
        GradientSpec::from_points(self.start_point, self.end_point, self.colors)
    }

    /// Ordered color list: `[start, end]`, or empty when the pair was incomplete.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        self.colors.as_slice()
    }

    #[inline]
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = Some(frame);
    }

    /// Sets the frame to `host`'s current bounds.
    ///
    /// Call from every layout pass of the host for caller-managed layers.
    #[inline]
    pub fn fit_to<H: HostSurface + ?Sized>(&mut self, host: &H) {
        self.set_frame(host.bounds());
    }

    #[inline]
    pub fn with_frame(mut self, frame: Rect) -> Self {
        self.set_frame(frame);
        self
    }

    #[inline]
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    #[inline]
    pub fn is_sized(&self) -> bool {
        self.frame.is_some()
    }

    /// True when the layer has a non-empty frame and a complete color pair.
    ///
    /// A frame with negative width or height counts as empty.
    pub fn is_drawable(&self) -> bool {
        !self.colors.is_empty() && self.frame.is_some_and(|f| !f.is_empty())
    }

    /// Start point in pixels, once sized.
    #[inline]
    pub fn start_position(&self) -> Option<Vec2> {
        self.frame.map(|f| self.start_point.to_absolute(f))
    }

    /// End point in pixels, once sized.
    #[inline]
    pub fn end_position(&self) -> Option<Vec2> {
        self.frame.map(|f| self.end_point.to_absolute(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::Direction;
    use crate::surface::Surface;

    fn layer() -> GradientLayer {
        GradientSpec::new(
            Direction::TopLeading,
            Direction::BottomTrailing,
            Color::from_premul(1.0, 1.0, 1.0, 1.0),
            Color::transparent(),
        )
        .into_layer()
    }

    #[test]
    fn unsized_layer_has_no_positions() {
        let layer = layer();
        assert!(!layer.is_sized());
        assert!(!layer.is_drawable());
        assert_eq!(layer.start_position(), None);
    }

    #[test]
    fn fit_to_takes_host_bounds() {
        let host = Surface::new(Rect::new(25.0, 25.0, 64.0, 32.0));
        let mut layer = layer();
        layer.fit_to(&host);
        assert_eq!(layer.frame, Some(Rect::new(0.0, 0.0, 64.0, 32.0)));
        assert_eq!(layer.start_position(), Some(Vec2::new(0.0, 0.0)));
        assert_eq!(layer.end_position(), Some(Vec2::new(64.0, 32.0)));
        assert!(layer.is_drawable());
    }

    #[test]
    fn empty_frame_or_colors_is_not_drawable() {
        let sized_empty = layer().with_frame(Rect::new(0.0, 0.0, 0.0, 10.0));
        assert!(!sized_empty.is_drawable());

        let mut colorless = layer().with_frame(Rect::new(0.0, 0.0, 10.0, 10.0));
        colorless.colors = GradientColors::Empty;
        assert!(!colorless.is_drawable());
    }

    #[test]
    fn negative_frame_is_not_drawable_and_positions_stay_raw() {
        let layer = layer().with_frame(Rect::new(10.0, 10.0, -4.0, -3.0));
        assert!(!layer.is_drawable());
        assert_eq!(layer.start_position(), Some(Vec2::new(10.0, 10.0)));
        assert_eq!(layer.end_position(), Some(Vec2::new(6.0, 7.0)));
    }

    #[test]
    fn spec_round_trips_through_layer() {
        let layer = layer().with_corner_radius(8.0);
        assert_eq!(layer.spec().into_layer().corner_radius, None);
        assert_eq!(layer.spec().start_point, layer.start_point);
    }
}
