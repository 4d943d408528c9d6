use crate::gui::diagram::view;
use crate::gui::surface::CairoSurface;
use anyhow::Context as _;
use cairo::{Context, Format, ImageSurface};
use mecanum::{Angle, Frame, Layout, Theme};
use std::path::Path;

/// Renders a single frame to a PNG file without opening a window.
pub fn render_png(path: &Path, layout: &Layout, angle: Angle, spin: f64) -> anyhow::Result<()> {
    layout.validate()?;
    let theme = Theme::default();
    let plot = view::render_reference_plot(layout, &theme)?;
    let frame = Frame::compute(layout, angle, spin)?;

    let image = ImageSurface::create(
        Format::ARgb32,
        layout.canvas_width().ceil() as i32,
        layout.canvas_height.ceil() as i32,
    )?;
    {
        let cr = Context::new(&image)?;
        frame.draw(&mut CairoSurface::new(&cr), layout, &theme, &plot)?;
    }

    let mut file = fs_err::File::create(path)?;
    image
        .write_to_png(&mut file)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote frame at angle {:.3} to {}", angle.radians(), path.display());
    Ok(())
}
