use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::layer::GradientLayer;
use crate::surface::Surface;

use super::{drawable_parts, GradientBackend};

/// Per-instance GPU record for a two-stop linear gradient quad.
///
/// Positions are absolute logical pixels. A zero-length axis (`p0 == p1`)
/// tells the shader to fill with `color0`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GradientInstance {
    pub origin: [f32; 2],
    pub size: [f32; 2],
    pub color0: [f32; 4], // premultiplied
    pub color1: [f32; 4], // premultiplied
    pub p0: [f32; 2],
    pub p1: [f32; 2],
    pub radius: f32,
    pub _pad: [f32; 3], // 16-byte alignment
}

/// Translates layers into [`GradientInstance`]s.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GpuBackend {
    pub origin: Vec2,
}

impl GpuBackend {
    #[inline]
    pub const fn new(origin: Vec2) -> Self {
        Self { origin }
    }

    /// Instances for every drawable gradient layer of `surface`, bottom first.
    ///
    /// Uses the surface's frame origin on top of `self.origin`.
    pub fn instances(&self, surface: &Surface) -> Vec<GradientInstance> {
        let backend = GpuBackend::new(self.origin + surface.frame().origin);
        surface
            .gradient_layers()
            .filter_map(|layer| backend.translate(layer))
            .collect()
    }
}

impl GradientBackend for GpuBackend {
    type Native = GradientInstance;

    fn translate(&self, layer: &GradientLayer) -> Option<GradientInstance> {
        let (frame, [start_color, end_color]) = drawable_parts(layer)?;
        let rect = frame.translated(self.origin);

        Some(GradientInstance {
            origin: rect.origin.to_array(),
            size: rect.size.to_array(),
            color0: start_color.to_array(),
            color1: end_color.to_array(),
            p0: layer.start_point.to_absolute(rect).to_array(),
            p1: layer.end_point.to_absolute(rect).to_array(),
            radius: layer.corner_radius.unwrap_or(0.0).max(0.0),
            _pad: [0.0; 3],
        })
    }
}

/// Raw bytes of `instances`, for uploading into an instance buffer.
#[inline]
pub fn instance_bytes(instances: &[GradientInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::gradient::{apply_gradient, gradient_layer, Direction};
    use crate::layer::SolidLayer;
    use crate::paint::Color;

    fn a() -> Color { Color::from_premul(0.5, 0.0, 0.0, 0.5) }
    fn b() -> Color { Color::from_premul(0.0, 0.0, 1.0, 1.0) }

    #[test]
    fn instance_layout_is_80_bytes() {
        assert_eq!(std::mem::size_of::<GradientInstance>(), 80);
    }

    #[test]
    fn instances_follow_surface_stack() {
        let mut surface = Surface::new(Rect::new(20.0, 0.0, 100.0, 50.0));
        surface.add_sublayer(SolidLayer::new(Rect::new(0.0, 0.0, 5.0, 5.0), b()));
        apply_gradient(&mut surface, Direction::Leading, Direction::Trailing, a(), b());

        let instances = GpuBackend::default().instances(&surface);

        assert_eq!(instances.len(), 1);
        let inst = instances[0];
        assert_eq!(inst.origin, [20.0, 0.0]);
        assert_eq!(inst.size, [100.0, 50.0]);
        assert_eq!(inst.color0, [0.5, 0.0, 0.0, 0.5]);
        assert_eq!(inst.color1, [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(inst.p0, [20.0, 25.0]);
        assert_eq!(inst.p1, [120.0, 25.0]);
        assert_eq!(inst.radius, 0.0);
        assert_eq!(instance_bytes(&instances).len(), 80);
    }

    #[test]
    fn degenerate_axis_keeps_start_color_first() {
        let layer = gradient_layer(Direction::Center, Direction::Center, a(), b())
            .with_frame(Rect::new(0.0, 0.0, 40.0, 20.0));

        let Some(inst) = GpuBackend::default().translate(&layer) else {
            panic!("expected an instance");
        };
        assert_eq!(inst.p0, inst.p1);
        assert_eq!(inst.p0, [20.0, 10.0]);
        assert_eq!(inst.color0, a().to_array());
    }

    #[test]
    fn negative_corner_radius_clamps_to_zero() {
        let layer = gradient_layer(Direction::Top, Direction::Bottom, a(), b())
            .with_frame(Rect::new(0.0, 0.0, 10.0, 10.0))
            .with_corner_radius(-3.0);

        let inst = GpuBackend::default().translate(&layer);
        assert_eq!(inst.map(|i| i.radius), Some(0.0));
    }

    #[test]
    fn negative_frame_emits_no_instance() {
        let layer = gradient_layer(Direction::Top, Direction::Bottom, a(), b())
            .with_frame(Rect::new(10.0, 10.0, -4.0, -3.0));
        assert!(GpuBackend::default().translate(&layer).is_none());
    }

    #[test]
    fn colorless_layers_emit_no_instances() {
        let mut surface = Surface::new(Rect::new(0.0, 0.0, 100.0, 50.0));
        apply_gradient(&mut surface, Direction::Top, Direction::Bottom, a(), None);
        assert!(GpuBackend::default().instances(&surface).is_empty());
    }
}
