//! The two phase-shifted sine signals plotted beside the dial, and the
//! helpers that place things on that plot.

use crate::error::GeomError;
use std::f64::consts::{FRAC_PI_4, TAU};
use std::fmt;
use strum::{Display as StrumDisplay, EnumIter};

/// `sin(θ − π/4)` and `sin(θ + π/4)` evaluated at one angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSample {
    pub y1: f64,
    pub y2: f64,
}

impl PhaseSample {
    pub fn at(theta: f64) -> Self {
        Self {
            y1: (theta - FRAC_PI_4).sin(),
            y2: (theta + FRAC_PI_4).sin(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum Series {
    /// `y1`, a quarter of π behind the angle.
    Lagging,
    /// `y2`, a quarter of π ahead of the angle.
    Leading,
}

/// One point of the reference plot in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    pub x: f64,
    pub y1: f64,
    pub y2: f64,
}

impl CurveSample {
    pub fn y(&self, series: Series) -> f64 {
        match series {
            Series::Lagging => self.y1,
            Series::Leading => self.y2,
        }
    }
}

/// Signal values in `[-1, 1]` span the middle two thirds of the plot.
pub fn to_pixel_y(value: f64, plot_height: f64) -> f64 {
    plot_height / 2.0 - value * plot_height / 3.0
}

/// `total_samples` evenly spaced samples across `[0, plot_width)`. The
/// iterator is cheap to clone, so the curve can be walked again.
pub fn sample_curve(
    total_samples: usize,
    plot_width: f64,
    plot_height: f64,
) -> impl Iterator<Item = CurveSample> + Clone {
    let step = if total_samples == 0 {
        0.0
    } else {
        plot_width / total_samples as f64
    };

    (0..total_samples).map(move |i| {
        let x = i as f64 * step;
        let sample = PhaseSample::at(x / plot_width * TAU);
        CurveSample {
            x,
            y1: to_pixel_y(sample.y1, plot_height),
            y2: to_pixel_y(sample.y2, plot_height),
        }
    })
}

/// Consecutive sample pairs, ready to be stroked as line segments.
pub fn curve_segments(
    total_samples: usize,
    plot_width: f64,
    plot_height: f64,
) -> impl Iterator<Item = (CurveSample, CurveSample)> + Clone {
    let samples = sample_curve(total_samples, plot_width, plot_height);
    samples.clone().zip(samples.skip(1))
}

pub fn marker_x(angle: f64, plot_width: f64) -> f64 {
    angle / TAU * plot_width
}

/// A multiple of π as a reduced fraction. `numerator == None` stands for 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLabel {
    pub numerator: Option<u32>,
    pub denominator: u32,
}

impl GridLabel {
    pub fn ascii(&self) -> String {
        self.render("pi")
    }

    fn render(&self, pi: &str) -> String {
        let numerator = self.numerator.map(|n| n.to_string()).unwrap_or_default();
        match self.denominator {
            1 => format!("{numerator}{pi}"),
            d => format!("{numerator}{pi}/{d}"),
        }
    }
}

impl fmt::Display for GridLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render("π"))
    }
}

/// Label for grid line `index`, where each step is `π / total_divisions`.
/// The origin line carries no label.
pub fn grid_label(index: u32, total_divisions: u32) -> Result<Option<GridLabel>, GeomError> {
    GeomError::require_positive("total_divisions", total_divisions as f64)?;

    if index == 0 {
        return Ok(None);
    }

    let (mut num, mut denom) = (index, total_divisions);
    while num % 2 == 0 && denom % 2 == 0 {
        num /= 2;
        denom /= 2;
    }

    Ok(Some(GridLabel {
        numerator: (num != 1).then_some(num),
        denominator: denom,
    }))
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    pub x: f64,
    pub label: Option<GridLabel>,
}

/// Vertical grid lines over one full turn, `[0, 2π)`.
pub fn grid_lines(total_divisions: u32, plot_width: f64) -> Result<Vec<GridLine>, GeomError> {
    let lines = 2 * total_divisions;
    (0..lines)
        .map(|index| {
            Ok(GridLine {
                x: index as f64 / lines as f64 * plot_width,
                label: grid_label(index, total_divisions)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;
    use strum::IntoEnumIterator;

    const EPS: f64 = 1e-12;

    fn from_pixel_y(pixel: f64, plot_height: f64) -> f64 {
        (plot_height / 2.0 - pixel) * 3.0 / plot_height
    }

    #[test]
    fn test_marker_x_spans_plot() {
        for width in [1.0, 640.0, 1234.5] {
            assert_eq!(marker_x(0.0, width), 0.0);
            assert!((marker_x(TAU, width) - width).abs() < 1e-9);
        }
        assert!((marker_x(std::f64::consts::PI, 640.0) - 320.0).abs() < EPS);
    }

    #[test]
    fn test_sample_curve_pixel_per_sample() {
        let samples: Vec<_> = sample_curve(640, 640.0, 400.0).collect();
        assert_eq!(samples.len(), 640);
        assert_eq!(samples[0].x, 0.0);
        assert_eq!(samples[639].x, 639.0);

        // sin(-π/4) and sin(π/4) at the origin
        let expected = 200.0 + (FRAC_PI_4).sin() * 400.0 / 3.0;
        assert!((samples[0].y1 - expected).abs() < EPS);
        assert!((samples[0].y2 - (400.0 - expected)).abs() < EPS);
    }

    #[test]
    fn test_sample_curve_is_restartable() {
        let curve = sample_curve(100, 640.0, 400.0);
        let first: Vec<_> = curve.clone().collect();
        let second: Vec<_> = curve.collect();
        assert_eq!(first, second);
        assert_eq!(first[1].x, 6.4);
    }

    #[test]
    fn test_samples_stay_within_unit_band() {
        let height = 400.0;
        for sample in sample_curve(640, 640.0, height) {
            for series in Series::iter() {
                let value = from_pixel_y(sample.y(series), height);
                assert!((-1.0 - EPS..=1.0 + EPS).contains(&value));
            }
        }
    }

    #[test]
    fn test_phase_shift_symmetry() {
        for i in 0..64 {
            let theta = i as f64 / 64.0 * TAU;
            let now = PhaseSample::at(theta);
            let later = PhaseSample::at(theta + FRAC_PI_2);
            assert!((later.y1 - now.y2).abs() < EPS);
            assert!((now.y1 + later.y2).abs() < EPS);
        }
    }

    #[test]
    fn test_curve_segments_stitch_samples() {
        let segments: Vec<_> = curve_segments(640, 640.0, 400.0).collect();
        assert_eq!(segments.len(), 639);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
        assert_eq!(curve_segments(1, 640.0, 400.0).count(), 0);
        assert_eq!(curve_segments(0, 640.0, 400.0).count(), 0);
    }

    #[test]
    fn test_grid_label_reduction() {
        let label = |i| grid_label(i, 4).unwrap();

        assert_eq!(label(0), None);
        assert_eq!(
            label(4),
            Some(GridLabel {
                numerator: None,
                denominator: 1
            })
        );
        assert_eq!(label(2).unwrap().to_string(), "π/2");
        assert_eq!(label(1).unwrap().to_string(), "π/4");
        assert_eq!(label(3).unwrap().to_string(), "3π/4");
        assert_eq!(label(4).unwrap().to_string(), "π");
        assert_eq!(label(6).unwrap().to_string(), "3π/2");
        assert_eq!(label(8).unwrap().to_string(), "2π");
        assert_eq!(label(6).unwrap().ascii(), "3pi/2");
    }

    #[test]
    fn test_series_names() {
        let names: Vec<_> = Series::iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["lagging", "leading"]);
    }

    #[test]
    fn test_grid_label_rejects_zero_divisions() {
        assert!(grid_label(1, 0).is_err());
    }

    #[test]
    fn test_grid_lines_cover_one_turn() {
        let lines = grid_lines(4, 640.0).unwrap();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0].label, None);
        assert_eq!(lines[4].x, 320.0);
        assert_eq!(lines[7].x, 560.0);
        assert!(lines[1..].iter().all(|l| l.label.is_some()));
    }
}
