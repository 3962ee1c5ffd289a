//! Backend adapters: translate gradient layers into a rendering system's
//! native gradient representation.
//!
//! Layers stay declarative (unit-space endpoints plus a frame). An adapter maps
//! them into absolute geometry when they are drawn:
//! - [`SceneBackend`]: renderer-agnostic [`DrawCmd`](crate::scene::DrawCmd)s
//! - [`GpuBackend`]: `#[repr(C)]` instance records ready for a vertex buffer

mod gpu;
mod scene;

pub use gpu::{instance_bytes, GpuBackend, GradientInstance};
pub use scene::SceneBackend;

use crate::coords::Rect;
use crate::gradient::GradientColors;
use crate::layer::GradientLayer;
use crate::paint::Color;

/// Converts a [`GradientLayer`] into a backend-native object.
pub trait GradientBackend {
    type Native;

    /// Returns `None` when the layer has nothing to draw: no frame yet, an empty
    /// frame, or an incomplete color pair.
    fn translate(&self, layer: &GradientLayer) -> Option<Self::Native>;
}

/// Frame and color pair of a layer that will actually produce pixels.
///
/// Same rule as [`GradientLayer::is_drawable`]: frames with zero or negative
/// extent are skipped, never flipped.
fn drawable_parts(layer: &GradientLayer) -> Option<(Rect, [Color; 2])> {
    let Some(frame) = layer.frame else {
        log::trace!("skipping unsized gradient layer");
        return None;
    };
    let GradientColors::Pair(colors) = layer.colors else {
        log::trace!("skipping gradient layer without colors");
        return None;
    };
    if frame.is_empty() {
        log::trace!("skipping gradient layer with empty frame {frame:?}");
        return None;
    }
    Some((frame, colors))
}
