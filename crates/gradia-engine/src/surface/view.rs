use crate::backend::{GradientBackend, SceneBackend};
use crate::coords::{CornerRadii, Rect, Vec2};
use crate::layer::{GradientLayer, SolidLayer, Sublayer};
use crate::paint::{Color, Paint};
use crate::scene::{DrawList, ZIndex};

use super::HostSurface;

/// Retained in-memory view.
///
/// Layout is deferred: [`set_frame`](Self::set_frame) only schedules the new
/// frame, and [`bounds`](HostSurface::bounds) keeps reporting the old one until
/// [`layout_if_needed`](HostSurface::layout_if_needed) runs.
#[derive(Debug, Default)]
pub struct Surface {
    frame: Rect,
    pending_frame: Option<Rect>,
    background: Option<Color>,
    sublayers: Vec<Sublayer>,
    layout_passes: u32,
}

impl Surface {
    /// A laid-out surface with `frame` in its parent's coordinates.
    pub fn new(frame: Rect) -> Self {
        Self { frame, ..Self::default() }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// The settled frame in parent coordinates.
    #[inline]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Schedules a new frame; applied by the next layout pass.
    pub fn set_frame(&mut self, frame: Rect) {
        self.pending_frame = Some(frame);
    }

    #[inline]
    pub fn needs_layout(&self) -> bool {
        self.pending_frame.is_some()
    }

    /// Number of layout passes that have run.
    #[inline]
    pub fn layout_passes(&self) -> u32 {
        self.layout_passes
    }

    #[inline]
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    // ── layer stack ───────────────────────────────────────────────────────

    /// Layer stack, bottom first.
    #[inline]
    pub fn sublayers(&self) -> &[Sublayer] {
        &self.sublayers
    }

    #[inline]
    pub fn sublayers_mut(&mut self) -> &mut [Sublayer] {
        &mut self.sublayers
    }

    /// Pushes `layer` on top of the stack.
    pub fn add_sublayer(&mut self, layer: impl Into<Sublayer>) {
        self.sublayers.push(layer.into());
    }

    /// Removes and returns the layer at `index`, or `None` if out of range.
    pub fn remove_sublayer(&mut self, index: usize) -> Option<Sublayer> {
        (index < self.sublayers.len()).then(|| self.sublayers.remove(index))
    }

    /// Gradient layers, bottom first.
    pub fn gradient_layers(&self) -> impl Iterator<Item = &GradientLayer> {
        self.sublayers.iter().filter_map(Sublayer::as_gradient)
    }

    pub fn gradient_layers_mut(&mut self) -> impl Iterator<Item = &mut GradientLayer> {
        self.sublayers.iter_mut().filter_map(Sublayer::as_gradient_mut)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Records the background fill and every drawable sublayer, bottom first,
    /// into `draw_list` at `z`. Geometry is offset by the surface's frame origin.
    ///
    /// Gradient layers that are unsized or colorless emit nothing.
    pub fn record(&self, draw_list: &mut DrawList, z: ZIndex) {
        let origin = self.frame.origin;

        if let Some(color) = self.background {
            draw_list.push_solid_rect(z, self.frame, color);
        }

        let backend = SceneBackend::new(origin);
        for sublayer in &self.sublayers {
            match sublayer {
                Sublayer::Gradient(layer) => {
                    if let Some(cmd) = backend.translate(layer) {
                        draw_list.push(z, cmd);
                    }
                }
                Sublayer::Solid(layer) => record_solid(draw_list, z, layer, origin),
            }
        }
    }
}

fn record_solid(draw_list: &mut DrawList, z: ZIndex, layer: &SolidLayer, origin: Vec2) {
    let rect = layer.frame.translated(origin);
    match layer.corner_radius {
        Some(r) if r > 0.0 => {
            draw_list.push_rounded_rect(z, rect, CornerRadii::all(r), Paint::Solid(layer.color))
        }
        _ => draw_list.push_solid_rect(z, rect, layer.color),
    }
}

impl HostSurface for Surface {
    #[inline]
    fn bounds(&self) -> Rect {
        self.frame.local()
    }

    fn layout_if_needed(&mut self) -> bool {
        let Some(frame) = self.pending_frame.take() else {
            return false;
        };
        self.frame = frame;
        self.layout_passes += 1;
        log::trace!("surface laid out to {frame:?}");
        true
    }

    #[inline]
    fn set_background_fill(&mut self, fill: Option<Color>) {
        self.background = fill;
    }

    fn insert_at_bottom(&mut self, layer: GradientLayer) {
        self.sublayers.insert(0, Sublayer::Gradient(layer));
    }
}
