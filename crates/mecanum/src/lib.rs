//! Geometry behind the mecanum wheel diagram: the drag-controlled phase
//! angle, the two phase-shifted signals plotted against it, and the
//! scrolling roller hatch drawn on the wheel.

pub mod error;
pub mod geom;
pub mod phase;
pub mod rollers;
pub mod scene;
pub mod selector;
pub mod surface;

pub use error::GeomError;
pub use geom::{Point, Region};
pub use scene::{Frame, Layout, ReferencePlot, Theme};
pub use selector::{Angle, AngleSelector, DragGesture, SharedAngleSelector};
