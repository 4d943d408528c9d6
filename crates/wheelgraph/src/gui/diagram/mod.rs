pub mod model;
pub mod view;

pub use model::State;
pub use view::{DrawError, draw, render_reference_plot};

/// Longest frame-clock gap fed to the spin animation, in seconds. Longer
/// pauses (window hidden, suspend) would otherwise jump the pattern.
pub const MAX_TICK_SECONDS: f64 = 0.1;
