use super::MAX_TICK_SECONDS;
use crate::config::Config;
use cairo::ImageSurface;
use mecanum::selector::DragAction;
use mecanum::{AngleSelector, DragGesture, Frame, GeomError, Layout, Point, Region, Theme};

pub struct State {
    pub selector: AngleSelector,
    pub layout: Layout,
    /// Rotation offset accumulated by the frame clock.
    pub spin: f64,
    pub spin_speed: f64,
    pointer: Option<Point>,
    last_tick: Option<i64>,
    /// Reference plot and the theme it was rendered with.
    plot: Option<(Theme, ImageSurface)>,
}

impl State {
    pub fn new(config: &Config) -> Self {
        Self {
            selector: AngleSelector::new(config.layout.interactive_region()),
            layout: config.layout.clone(),
            spin: 0.0,
            spin_speed: config.spin_speed,
            pointer: None,
            last_tick: None,
            plot: None,
        }
    }

    /// Keeps the angle; everything derived from the layout is rebuilt.
    pub fn apply_config(&mut self, config: &Config) {
        self.layout = config.layout.clone();
        self.spin_speed = config.spin_speed;
        self.selector.set_region(self.layout.interactive_region());
        self.plot = None;
        if !self.animating() {
            self.last_tick = None;
        }
    }

    /// Whether the frame clock has anything to drive.
    pub fn animating(&self) -> bool {
        self.spin_speed != 0.0
    }

    /// The dead zone follows the widget's actual allocation.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.selector.set_region(Region::from_size(width, height));
    }

    pub fn begin_drag(&mut self, at: Point) {
        self.pointer = Some(at);
    }

    pub fn drag_to(&mut self, at: Point) -> Result<DragAction, GeomError> {
        let Some(previous) = self.pointer.replace(at) else {
            return Ok(DragAction::default());
        };
        self.selector
            .apply_drag(DragGesture::new(previous, at), self.layout.track_width())
    }

    pub fn end_drag(&mut self) {
        self.pointer = None;
    }

    /// Advances the spin animation to `frame_time` (microseconds). Returns
    /// whether the wheel moved.
    pub fn tick(&mut self, frame_time: i64) -> bool {
        let previous = self.last_tick.replace(frame_time);
        if self.spin_speed == 0.0 {
            return false;
        }
        let Some(previous) = previous else {
            return false;
        };

        let dt = ((frame_time - previous) as f64 / 1_000_000.0).clamp(0.0, MAX_TICK_SECONDS);
        self.spin += self.spin_speed * dt;
        dt > 0.0
    }

    pub fn frame(&self) -> Result<Frame, GeomError> {
        Frame::compute(&self.layout, self.selector.current_angle(), self.spin)
    }

    /// The cached plot, unless it was rendered with other colours.
    pub fn cached_plot(&self, theme: &Theme) -> Option<&ImageSurface> {
        self.plot
            .as_ref()
            .filter(|(rendered_with, _)| rendered_with == theme)
            .map(|(_, plot)| plot)
    }

    pub fn store_plot(&mut self, theme: Theme, plot: ImageSurface) {
        self.plot = Some((theme, plot));
    }
}
