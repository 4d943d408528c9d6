use cairo::{Context, FontSlant, FontWeight, ImageSurface};
use mecanum::Point;
use mecanum::surface::{Color, Stroke, Surface, TextStyle};
use std::f64::consts::TAU;

/// Draws onto a cairo context, either a widget's or an offscreen image's.
pub struct CairoSurface<'a> {
    cr: &'a Context,
}

impl<'a> CairoSurface<'a> {
    pub fn new(cr: &'a Context) -> Self {
        Self { cr }
    }

    fn set_color(&self, color: Color) {
        let (r, g, b, a) = color.into_components();
        self.cr.set_source_rgba(r, g, b, a);
    }

    fn set_stroke(&self, stroke: Stroke) {
        self.set_color(stroke.color);
        self.cr.set_line_width(stroke.thickness);
    }
}

impl Surface for CairoSurface<'_> {
    type Image = ImageSurface;
    type Error = cairo::Error;

    fn set_background(&mut self, color: Color) -> Result<(), Self::Error> {
        self.set_color(color);
        self.cr.paint()
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<(), Self::Error> {
        self.set_stroke(stroke);
        self.cr.move_to(from.x, from.y);
        self.cr.line_to(to.x, to.y);
        self.cr.stroke()
    }

    fn fill_rect(
        &mut self,
        center: Point,
        width: f64,
        height: f64,
        color: Color,
    ) -> Result<(), Self::Error> {
        self.set_color(color);
        self.cr
            .rectangle(center.x - width / 2.0, center.y - height / 2.0, width, height);
        self.cr.fill()
    }

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        stroke: Stroke,
    ) -> Result<(), Self::Error> {
        self.set_stroke(stroke);
        self.cr.new_sub_path();
        self.cr.arc(center.x, center.y, radius, 0.0, TAU);
        self.cr.stroke()
    }

    fn draw_text(&mut self, text: &str, at: Point, style: TextStyle) -> Result<(), Self::Error> {
        self.set_color(style.color);
        self.cr.select_font_face("Sans", FontSlant::Normal, FontWeight::Normal);
        self.cr.set_font_size(style.size);

        let ext = self.cr.text_extents(text)?;
        let (dx, dy) = style.anchor.top_left_offset(ext.width(), ext.height());
        // cairo positions text by its baseline origin
        self.cr
            .move_to(at.x + dx - ext.x_bearing(), at.y + dy - ext.y_bearing());
        self.cr.show_text(text)
    }

    fn draw_image(&mut self, image: &Self::Image, at: Point) -> Result<(), Self::Error> {
        self.cr.set_source_surface(image, at.x, at.y)?;
        self.cr.paint()
    }
}
