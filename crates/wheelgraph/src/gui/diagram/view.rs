use super::model::State;
use crate::gui::surface::CairoSurface;
use cairo::{Context, Format, ImageSurface};
use mecanum::{GeomError, Layout, ReferencePlot, Theme};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DrawError {
    #[error(transparent)]
    Geometry(#[from] GeomError),
    #[error(transparent)]
    Cairo(#[from] cairo::Error),
}

/// Renders the static plot into its own image, once per layout.
pub fn render_reference_plot(layout: &Layout, theme: &Theme) -> Result<ImageSurface, DrawError> {
    let plot = ReferencePlot::new(layout)?;
    let image = ImageSurface::create(
        Format::ARgb32,
        layout.plot_width.ceil() as i32,
        layout.plot_height.ceil() as i32,
    )?;
    {
        let cr = Context::new(&image)?;
        plot.draw(&mut CairoSurface::new(&cr), theme)?;
    }
    image.flush();
    Ok(image)
}

pub fn draw(cr: &Context, state: &mut State, theme: &Theme) -> Result<(), DrawError> {
    if state.cached_plot(theme).is_none() {
        let plot = render_reference_plot(&state.layout, theme)?;
        state.store_plot(*theme, plot);
    }

    let frame = state.frame()?;
    if let Some(plot) = state.cached_plot(theme) {
        frame.draw(&mut CairoSurface::new(cr), &state.layout, theme, plot)?;
    }
    Ok(())
}
