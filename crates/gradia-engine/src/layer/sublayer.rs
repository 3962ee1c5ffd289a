use crate::coords::Rect;
use crate::paint::Color;

use super::GradientLayer;

/// Flat-colored content layer: stands in for a host's existing child content.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolidLayer {
    pub frame: Rect,
    pub color: Color,
    pub corner_radius: Option<f32>,
}

impl SolidLayer {
    #[inline]
    pub fn new(frame: Rect, color: Color) -> Self {
        Self { frame, color, corner_radius: None }
    }

    #[inline]
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }
}

/// One entry of a host's layer stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Sublayer {
    Gradient(GradientLayer),
    Solid(SolidLayer),
}

impl Sublayer {
    #[inline]
    pub fn as_gradient(&self) -> Option<&GradientLayer> {
        match self {
            Sublayer::Gradient(layer) => Some(layer),
            Sublayer::Solid(_) => None,
        }
    }

    #[inline]
    pub fn as_gradient_mut(&mut self) -> Option<&mut GradientLayer> {
        match self {
            Sublayer::Gradient(layer) => Some(layer),
            Sublayer::Solid(_) => None,
        }
    }
}

impl From<GradientLayer> for Sublayer {
    #[inline]
    fn from(layer: GradientLayer) -> Self {
        Sublayer::Gradient(layer)
    }
}

impl From<SolidLayer> for Sublayer {
    #[inline]
    fn from(layer: SolidLayer) -> Self {
        Sublayer::Solid(layer)
    }
}
