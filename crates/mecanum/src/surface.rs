//! The drawing boundary. Anything that can stroke lines, fill rectangles,
//! place text and blit a pre-rendered image can show the diagram.

use crate::geom::Point;
use palette::Srgba;
use std::convert::Infallible;

pub type Color = Srgba<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub thickness: f64,
}

impl Stroke {
    pub fn new(color: Color, thickness: f64) -> Self {
        Self { color, thickness }
    }
}

/// Which point of the text's bounding box lands on the given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    TopCenter,
}

impl Anchor {
    /// Offset from the anchor position to the top-left corner of a box of
    /// the given size.
    pub fn top_left_offset(&self, width: f64, _height: f64) -> (f64, f64) {
        match self {
            Self::TopCenter => (-width / 2.0, 0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub anchor: Anchor,
    pub color: Color,
}

pub trait Surface {
    type Image;
    type Error;

    fn set_background(&mut self, color: Color) -> Result<(), Self::Error>;

    fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<(), Self::Error>;

    fn fill_rect(
        &mut self,
        center: Point,
        width: f64,
        height: f64,
        color: Color,
    ) -> Result<(), Self::Error>;

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        stroke: Stroke,
    ) -> Result<(), Self::Error>;

    fn draw_text(&mut self, text: &str, at: Point, style: TextStyle) -> Result<(), Self::Error>;

    fn draw_image(&mut self, image: &Self::Image, at: Point) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background(Color),
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Rect {
        center: Point,
        width: f64,
        height: f64,
        color: Color,
    },
    Circle {
        center: Point,
        radius: f64,
        stroke: Stroke,
    },
    Text {
        text: String,
        at: Point,
        style: TextStyle,
    },
    /// A nested recording blitted at `at`; `commands` is its length.
    Image { at: Point, commands: usize },
}

/// Display list surface. Images are themselves recordings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recording {
    pub commands: Vec<DrawCommand>,
}

impl Recording {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, Stroke)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, stroke } => Some((*from, *to, *stroke)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for Recording {
    type Image = Recording;
    type Error = Infallible;

    fn set_background(&mut self, color: Color) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Background(color));
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Line { from, to, stroke });
        Ok(())
    }

    fn fill_rect(
        &mut self,
        center: Point,
        width: f64,
        height: f64,
        color: Color,
    ) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Rect {
            center,
            width,
            height,
            color,
        });
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        stroke: Stroke,
    ) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            stroke,
        });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, at: Point, style: TextStyle) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            style,
        });
        Ok(())
    }

    fn draw_image(&mut self, image: &Self::Image, at: Point) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Image {
            at,
            commands: image.commands.len(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_offsets() {
        assert_eq!(Anchor::TopCenter.top_left_offset(40.0, 10.0), (-20.0, 0.0));
    }
}
