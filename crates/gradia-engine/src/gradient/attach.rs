use crate::layer::GradientLayer;
use crate::paint::Color;
use crate::surface::HostSurface;

use super::{Direction, GradientSpec};

/// Attaches a gradient to `host` as its background.
///
/// Clears the host's flat background fill, forces any pending layout so the
/// bounds are final, then inserts a layer framed to those bounds at the bottom
/// of the host's layer stack. The frame is not tracked afterwards; hosts that
/// resize later should use [`gradient_layer`] instead.
///
/// Every call inserts a new layer. Remove the previous one first when
/// re-applying, or the stack accumulates gradients.
///
/// A missing color is not an error: the inserted layer has no colors and draws
/// nothing.
pub fn apply_gradient<H>(
    host: &mut H,
    from: Direction,
    to: Direction,
    start_color: impl Into<Option<Color>>,
    end_color: impl Into<Option<Color>>,
) where
    H: HostSurface + ?Sized,
{
    host.set_background_fill(None);
    host.layout_if_needed();

    let mut layer = gradient_layer(from, to, start_color, end_color);
    layer.set_frame(host.bounds());

    log::debug!("gradient {from:?} -> {to:?} inserted at bottom, frame {:?}", layer.frame);
    host.insert_at_bottom(layer);
}

/// Builds a configured gradient layer without a frame, not attached to anything.
///
/// The caller owns it: set its frame to the host bounds (see
/// [`GradientLayer::fit_to`]), insert it, and repeat the sizing on every layout
/// pass of the host.
pub fn gradient_layer(
    from: Direction,
    to: Direction,
    start_color: impl Into<Option<Color>>,
    end_color: impl Into<Option<Color>>,
) -> GradientLayer {
    let spec = GradientSpec::new(from, to, start_color, end_color);
    if !spec.is_visible() {
        log::debug!("gradient {from:?} -> {to:?} has an incomplete color pair; layer is transparent");
    }
    spec.into_layer()
}
