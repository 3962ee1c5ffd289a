use std::io::{self, Write};

use anyhow::{ensure, Context, Result};

use gradia_engine::backend::{instance_bytes, GpuBackend};
use gradia_engine::coords::Rect;
use gradia_engine::gradient::{apply_gradient, gradient_layer, Direction};
use gradia_engine::layer::{SolidLayer, Sublayer};
use gradia_engine::logging::{init_logging, LoggingConfig};
use gradia_engine::paint::Color;
use gradia_engine::scene::{DrawList, ZIndex};
use gradia_engine::surface::{HostSurface, Surface};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let sunrise = Color::from_srgb_u8(0xff, 0x9a, 0x3c, 0xff);
    let dusk = Color::from_srgb_u8(0x3a, 0x1c, 0x71, 0xff);

    // ── one-shot: applied once, frame fixed at attach time ────────────────
    let mut banner = Surface::new(Rect::new(16.0, 16.0, 320.0, 96.0))
        .with_background(Color::from_srgb_u8(0x20, 0x20, 0x20, 0xff));
    banner.add_sublayer(SolidLayer::new(Rect::new(12.0, 12.0, 120.0, 24.0), Color::from_srgb_u8(0xff, 0xff, 0xff, 0xff)));

    apply_gradient(&mut banner, Direction::TopLeading, Direction::BottomTrailing, sunrise, dusk);
    ensure!(banner.background().is_none(), "banner background was not cleared");
    ensure!(
        matches!(banner.sublayers().first(), Some(Sublayer::Gradient(_))),
        "gradient is not the bottom layer"
    );

    // ── caller-managed: re-sized on every layout pass ─────────────────────
    let mut card = Surface::new(Rect::new(16.0, 128.0, 200.0, 120.0));
    let mut layer = gradient_layer(Direction::Top, Direction::Bottom, dusk, sunrise).with_corner_radius(12.0);
    layer.fit_to(&card);
    card.insert_at_bottom(layer);

    for width in [240.0, 280.0, 320.0] {
        card.set_frame(Rect::new(16.0, 128.0, width, 120.0));
        if card.layout_if_needed() {
            let bounds = card.bounds();
            card.gradient_layers_mut().for_each(|layer| layer.set_frame(bounds));
        }
    }
    log::info!("card laid out {} times", card.layout_passes());

    // ── draw ──────────────────────────────────────────────────────────────
    let mut draw_list = DrawList::new();
    banner.record(&mut draw_list, ZIndex(0));
    card.record(&mut draw_list, ZIndex(1));

    let gpu = GpuBackend::default();
    let mut instances = gpu.instances(&banner);
    instances.extend(gpu.instances(&card));
    ensure!(instances.len() == 2, "expected two gradient instances, got {}", instances.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "gradia studio").context("writing report")?;
    writeln!(out, "  draw commands : {}", draw_list.len()).context("writing report")?;
    for item in draw_list.iter_in_paint_order() {
        writeln!(out, "    z={:<2} {:?}", item.key.z.0, item.cmd).context("writing report")?;
    }
    writeln!(
        out,
        "  gpu instances : {} ({} bytes)",
        instances.len(),
        instance_bytes(&instances).len()
    )
    .context("writing report")?;

    Ok(())
}
