//! Composes the diagram: a unit-circle dial with the wheel in the middle on
//! the left, the reference plot with the angle marker on the right.

use crate::error::GeomError;
use crate::geom::{Point, Region};
use crate::phase::{self, GridLine, PhaseSample, Series};
use crate::rollers::{RollerSegment, WheelSpec};
use crate::selector::Angle;
use crate::surface::{Anchor, Color, Stroke, Surface, TextStyle};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

const AXIS_THICKNESS: f64 = 3.0;
const CURVE_THICKNESS: f64 = 3.0;
const GRID_THICKNESS: f64 = 1.0;
const MARKER_THICKNESS: f64 = 4.0;
const ROLLER_THICKNESS: f64 = 3.0;
const LABEL_SIZE: f64 = 16.0;
const LABEL_GAP: f64 = 4.0;
const TITLE_SIZE: f64 = 24.0;
const TITLE_TOP: f64 = 8.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub canvas_height: f64,
    pub dial_margin: f64,
    /// Square reserved for the dial, margins included.
    pub dial_extent: f64,
    pub plot_width: f64,
    pub plot_height: f64,
    /// Grid lines per π on the reference plot.
    pub grid_divisions: u32,
    pub curve_samples: usize,
    pub wheel: WheelSpec,
    pub title: Option<String>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            canvas_height: 400.0,
            dial_margin: 32.0,
            dial_extent: 350.0,
            plot_width: 640.0,
            plot_height: 400.0,
            grid_divisions: 4,
            curve_samples: 640,
            wheel: WheelSpec::default(),
            title: None,
        }
    }
}

impl Layout {
    pub fn validate(&self) -> Result<(), GeomError> {
        GeomError::require_positive("canvas_height", self.canvas_height)?;
        GeomError::require_positive("dial_diameter", self.dial_diameter())?;
        GeomError::require_positive("plot_width", self.plot_width)?;
        GeomError::require_positive("plot_height", self.plot_height)?;
        GeomError::require_positive("grid_divisions", self.grid_divisions as f64)?;
        GeomError::require_positive("roller_spacing", self.wheel.roller_spacing)?;
        self.wheel.footprint()?;
        Ok(())
    }

    pub fn dial_diameter(&self) -> f64 {
        self.dial_extent - 2.0 * self.dial_margin
    }

    pub fn dial_center(&self) -> Point {
        Point::new(
            self.dial_diameter() / 2.0 + self.dial_margin,
            self.canvas_height / 2.0,
        )
    }

    pub fn canvas_width(&self) -> f64 {
        self.dial_diameter() + 2.0 * self.dial_margin + self.plot_width
    }

    pub fn plot_origin(&self) -> Point {
        Point::new(self.canvas_width() - self.plot_width, 0.0)
    }

    pub fn interactive_region(&self) -> Region {
        Region::from_size(self.canvas_width(), self.canvas_height)
    }

    /// Drag travel for one full turn: the width of the plot.
    pub fn track_width(&self) -> f64 {
        self.plot_width
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub ink: Color,
    pub lagging: Color,
    pub leading: Color,
    pub marker: Color,
    pub wheel: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::new(1.0, 1.0, 1.0, 1.0),
            ink: Color::new(0.0, 0.0, 0.0, 1.0),
            lagging: Color::new(1.0, 0.0, 0.0, 1.0),
            leading: Color::new(0.0, 0.0, 1.0, 1.0),
            marker: Color::new(0.0, 1.0, 0.0, 1.0),
            wheel: Color::new(127.0 / 255.0, 127.0 / 255.0, 127.0 / 255.0, 1.0),
        }
    }
}

impl Theme {
    fn series(&self, series: Series) -> Color {
        match series {
            Series::Lagging => self.lagging,
            Series::Leading => self.leading,
        }
    }
}

/// The static plot behind the marker. Independent of the angle, so it is
/// drawn once into an offscreen image and blitted every frame.
#[derive(Debug, Clone)]
pub struct ReferencePlot {
    width: f64,
    height: f64,
    samples: usize,
    grid: Vec<GridLine>,
}

impl ReferencePlot {
    pub fn new(layout: &Layout) -> Result<Self, GeomError> {
        Ok(Self {
            width: GeomError::require_positive("plot_width", layout.plot_width)?,
            height: GeomError::require_positive("plot_height", layout.plot_height)?,
            samples: layout.curve_samples,
            grid: phase::grid_lines(layout.grid_divisions, layout.plot_width)?,
        })
    }

    pub fn draw<S: Surface>(&self, surface: &mut S, theme: &Theme) -> Result<(), S::Error> {
        let axis_y = self.height / 2.0;
        surface.draw_line(
            Point::new(0.0, axis_y),
            Point::new(self.width, axis_y),
            Stroke::new(theme.ink, AXIS_THICKNESS),
        )?;

        for series in Series::iter() {
            let stroke = Stroke::new(theme.series(series), CURVE_THICKNESS);
            for (a, b) in phase::curve_segments(self.samples, self.width, self.height) {
                surface.draw_line(
                    Point::new(a.x, a.y(series)),
                    Point::new(b.x, b.y(series)),
                    stroke,
                )?;
            }
        }

        let label_style = TextStyle {
            size: LABEL_SIZE,
            anchor: Anchor::TopCenter,
            color: theme.ink,
        };
        for line in &self.grid {
            surface.draw_line(
                Point::new(line.x, 0.0),
                Point::new(line.x, self.height),
                Stroke::new(theme.ink, GRID_THICKNESS),
            )?;
            if let Some(label) = &line.label {
                surface.draw_text(
                    &label.to_string(),
                    Point::new(line.x, axis_y + LABEL_GAP),
                    label_style,
                )?;
            }
        }
        Ok(())
    }
}

/// Everything the renderer needs for one frame, recomputed from scalars.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub angle: Angle,
    pub phase: PhaseSample,
    /// Marker position relative to the plot's left edge.
    pub marker_x: f64,
    pub rotation_offset: f64,
    pub rollers: Vec<RollerSegment>,
}

impl Frame {
    /// `spin` is extra rotation from an animation driver, added to the
    /// surface travel implied by the angle.
    pub fn compute(layout: &Layout, angle: Angle, spin: f64) -> Result<Self, GeomError> {
        let rotation_offset = layout.wheel.surface_travel(angle.radians()) + spin;
        Ok(Self {
            angle,
            phase: PhaseSample::at(angle.radians()),
            marker_x: phase::marker_x(angle.radians(), layout.plot_width),
            rotation_offset,
            rollers: layout.wheel.rollers(rotation_offset)?,
        })
    }

    pub fn draw<S: Surface>(
        &self,
        surface: &mut S,
        layout: &Layout,
        theme: &Theme,
        plot: &S::Image,
    ) -> Result<(), S::Error> {
        surface.set_background(theme.background)?;

        let origin = layout.plot_origin();
        surface.draw_image(plot, origin)?;

        let marker = Stroke::new(theme.marker, MARKER_THICKNESS);
        let line_x = origin.x + self.marker_x;
        surface.draw_line(
            Point::new(line_x, 0.0),
            Point::new(line_x, layout.canvas_height),
            marker,
        )?;

        let center = layout.dial_center();
        let radius = layout.dial_diameter() / 2.0;
        surface.stroke_circle(center, radius, Stroke::new(theme.ink, MARKER_THICKNESS))?;

        self.draw_wheel(surface, layout, theme, center)?;

        // screen y grows downwards
        let tip = Point::new(
            center.x + self.angle.cos() * radius,
            center.y - self.angle.sin() * radius,
        );
        surface.draw_line(center, tip, marker)?;

        if let Some(title) = &layout.title {
            surface.draw_text(
                title,
                Point::new(layout.canvas_width() / 2.0, TITLE_TOP),
                TextStyle {
                    size: TITLE_SIZE,
                    anchor: Anchor::TopCenter,
                    color: theme.ink,
                },
            )?;
        }
        Ok(())
    }

    fn draw_wheel<S: Surface>(
        &self,
        surface: &mut S,
        layout: &Layout,
        theme: &Theme,
        center: Point,
    ) -> Result<(), S::Error> {
        surface.fill_rect(center, layout.wheel.width, layout.wheel.height, theme.wheel)?;

        let stroke = Stroke::new(theme.ink, ROLLER_THICKNESS);
        for roller in &self.rollers {
            let roller = roller.translate(center.x, center.y);
            surface.draw_line(roller.start(), roller.end(), stroke)?;
        }
        Ok(())
    }
}
