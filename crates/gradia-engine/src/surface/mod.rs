//! Host surfaces: the views gradients are attached to.
//!
//! [`HostSurface`] is the narrow interface the attach operations need from a
//! toolkit view. [`Surface`] is an in-memory implementation with deferred
//! layout and a layer stack; it also serves as the reference host in tests and
//! demos.
//!
//! All calls are expected on the toolkit's UI thread; `&mut` access is the
//! only synchronization.

mod view;

pub use view::Surface;

use crate::coords::Rect;
use crate::layer::GradientLayer;
use crate::paint::Color;

/// Toolkit view operations consumed by the gradient attach contracts.
pub trait HostSurface {
    /// The surface's rectangle in its own coordinate space (origin at `(0, 0)`).
    ///
    /// Only meaningful after layout has settled; see [`layout_if_needed`](Self::layout_if_needed).
    fn bounds(&self) -> Rect;

    /// Synchronously completes any pending layout pass.
    ///
    /// Returns `true` if a pass ran.
    fn layout_if_needed(&mut self) -> bool;

    /// Sets or clears (`None`) the flat background fill.
    fn set_background_fill(&mut self, fill: Option<Color>);

    /// Places `layer` beneath all existing content (index 0 of the layer stack).
    fn insert_at_bottom(&mut self, layer: GradientLayer);
}
