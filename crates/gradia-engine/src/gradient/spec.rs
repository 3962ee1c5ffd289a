use crate::coords::UnitPoint;
use crate::layer::GradientLayer;
use crate::paint::Color;

use super::{resolve, Direction, GradientColors};

/// Declarative description of a two-color linear gradient in unit space.
///
/// `start_point == end_point` is allowed; such a gradient renders as a flat fill.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientSpec {
    pub start_point: UnitPoint,
    pub end_point: UnitPoint,
    pub colors: GradientColors,
}

impl GradientSpec {
    /// Resolves two directions and two optional colors into a spec.
    ///
    /// If either color is absent the spec carries no colors at all.
    pub fn new(
        from: Direction,
        to: Direction,
        start_color: impl Into<Option<Color>>,
        end_color: impl Into<Option<Color>>,
    ) -> Self {
        Self::from_points(
            resolve(from),
            resolve(to),
            GradientColors::from_options(start_color.into(), end_color.into()),
        )
    }

    #[inline]
    pub const fn from_points(start_point: UnitPoint, end_point: UnitPoint, colors: GradientColors) -> Self {
        Self { start_point, end_point, colors }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start_point == self.end_point
    }

    /// False when the color pair is incomplete; the resulting layer is transparent.
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.colors.is_empty()
    }

    /// Builds an unsized, uninserted layer from this spec.
    #[inline]
    pub fn into_layer(self) -> GradientLayer {
        GradientLayer::from_spec(self)
    }
}
