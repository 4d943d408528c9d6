use crate::error::GeomError;
use crate::geom::Point;
use serde::{Deserialize, Serialize};

/// Wheel silhouette, centred on its local origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    width: f64,
    height: f64,
}

impl Footprint {
    pub fn new(width: f64, height: f64) -> Result<Self, GeomError> {
        Ok(Self {
            width: GeomError::require_positive("width", width)?,
            height: GeomError::require_positive("height", height)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn contains(&self, p: Point, tolerance: f64) -> bool {
        p.x.abs() <= self.width / 2.0 + tolerance && p.y.abs() <= self.height / 2.0 + tolerance
    }
}

/// One roller groove in wheel-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollerSegment {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl RollerSegment {
    pub fn start(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self {
            x0: self.x0 + dx,
            y0: self.y0 + dy,
            x1: self.x1 + dx,
            y1: self.y1 + dy,
        }
    }
}

/// `rotation_offset` reduced into `[0, spacing)`. `rem_euclid` rounds tiny
/// negative offsets up to exactly `spacing`, which is folded back to zero.
fn roller_phase(rotation_offset: f64, spacing: f64) -> f64 {
    let phase = rotation_offset.rem_euclid(spacing);
    if phase >= spacing { 0.0 } else { phase }
}

/// Diagonal hatch covering `footprint`, scrolled by `rotation_offset`.
///
/// Lines run from the left edge at `diag_y` up to the right edge at
/// `diag_y - width`, one every `spacing`. Ends that would leave the
/// rectangle are pulled back along the diagonal onto its top or bottom
/// edge. Only `rotation_offset` modulo `spacing` matters, and negative
/// offsets scroll the other way without a seam.
pub fn generate(
    footprint: Footprint,
    spacing: f64,
    rotation_offset: f64,
) -> Result<Vec<RollerSegment>, GeomError> {
    let spacing = GeomError::require_positive("spacing", spacing)?;
    let (w, h) = (footprint.width, footprint.height);
    let (half_w, half_h) = (w / 2.0, h / 2.0);

    let mut segments = Vec::new();
    let mut diag_y = -half_h - roller_phase(rotation_offset, spacing) + spacing;

    while diag_y < half_h + w {
        let end_offset = if diag_y > half_h { diag_y - half_h } else { 0.0 };
        let start_offset = if diag_y - w < -half_h {
            diag_y - w + half_h
        } else {
            0.0
        };

        segments.push(RollerSegment {
            x0: -half_w + end_offset,
            y0: diag_y - end_offset,
            x1: half_w + start_offset,
            y1: diag_y - w - start_offset,
        });
        diag_y += spacing;
    }

    log::trace!(
        "Generated {} roller segments (offset {rotation_offset})",
        segments.len()
    );
    Ok(segments)
}

/// Named wheel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelSpec {
    pub width: f64,
    pub height: f64,
    pub roller_spacing: f64,
}

impl Default for WheelSpec {
    fn default() -> Self {
        Self {
            width: 36.0,
            height: 96.0,
            roller_spacing: 27.0,
        }
    }
}

impl WheelSpec {
    pub fn footprint(&self) -> Result<Footprint, GeomError> {
        Footprint::new(self.width, self.height)
    }

    pub fn rollers(&self, rotation_offset: f64) -> Result<Vec<RollerSegment>, GeomError> {
        generate(self.footprint()?, self.roller_spacing, rotation_offset)
    }

    /// Distance the wheel surface travels when turned by `angle` radians.
    pub fn surface_travel(&self, angle: f64) -> f64 {
        angle * self.height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn wheel() -> Footprint {
        Footprint::new(36.0, 96.0).unwrap()
    }

    #[test]
    fn test_first_segment_at_default_phase() {
        let segments = generate(wheel(), 27.0, 0.0).unwrap();

        assert_eq!(segments.len(), 4);
        // diag_y = -48 + 27, clipped at the top edge on its right end
        assert_eq!(segments[0].start(), Point::new(-18.0, -21.0));
        assert_eq!(segments[0].end(), Point::new(9.0, -48.0));
        // fully inside
        assert_eq!(segments[1].start(), Point::new(-18.0, 6.0));
        assert_eq!(segments[1].end(), Point::new(18.0, -30.0));
    }

    #[test]
    fn test_segments_are_clipped_to_footprint() {
        let footprint = wheel();
        for offset in [0.0, 3.5, 13.0, 26.9, -4.0, 1000.25] {
            for seg in generate(footprint, 27.0, offset).unwrap() {
                assert!(footprint.contains(seg.start(), EPS), "{seg:?} at {offset}");
                assert!(footprint.contains(seg.end(), EPS), "{seg:?} at {offset}");
            }
        }
    }

    #[test]
    fn test_segments_keep_diagonal_slope() {
        for seg in generate(wheel(), 27.0, 11.0).unwrap() {
            let (dx, dy) = (seg.x1 - seg.x0, seg.y1 - seg.y0);
            assert!((dx + dy).abs() < EPS, "{seg:?} is not at 45°");
        }
    }

    #[test]
    fn test_generate_is_idempotent() {
        let a = generate(wheel(), 27.0, 42.0).unwrap();
        let b = generate(wheel(), 27.0, 42.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pattern_repeats_every_spacing() {
        let base = generate(wheel(), 27.0, 5.0).unwrap();
        assert_eq!(generate(wheel(), 27.0, 32.0).unwrap(), base);
        assert_eq!(
            generate(wheel(), 27.0, 0.0).unwrap(),
            generate(wheel(), 27.0, 27.0).unwrap()
        );
    }

    #[test]
    fn test_negative_offset_uses_euclidean_remainder() {
        assert_eq!(
            generate(wheel(), 27.0, -5.0).unwrap(),
            generate(wheel(), 27.0, 22.0).unwrap()
        );

        let first = generate(wheel(), 27.0, -5.0).unwrap()[0];
        assert!(first.y0 <= -21.0 + EPS && first.y0 > -48.0);
    }

    #[test]
    fn test_tiny_negative_offset_wraps_to_zero_phase() {
        assert_eq!(roller_phase(-1e-15, 27.0), 0.0);
        for offset in [-1e-15, -1e-300, -f64::MIN_POSITIVE] {
            let phase = roller_phase(offset, 27.0);
            assert!((0.0..27.0).contains(&phase), "phase {phase} for {offset}");
        }

        let segments = generate(wheel(), 27.0, -1e-15).unwrap();
        assert_eq!(segments, generate(wheel(), 27.0, 0.0).unwrap());
        assert_eq!(segments.len(), 4);
        assert_ne!(segments[0].start(), segments[0].end());
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert_eq!(
            generate(wheel(), 0.0, 0.0),
            Err(GeomError::InvalidParameter {
                name: "spacing",
                value: 0.0
            })
        );
        assert!(generate(wheel(), -27.0, 0.0).is_err());
        assert!(Footprint::new(0.0, 96.0).is_err());
        assert!(Footprint::new(36.0, -1.0).is_err());
    }

    #[test]
    fn test_wheel_spec_defaults() {
        let spec = WheelSpec::default();
        assert_eq!(spec.rollers(0.0).unwrap(), generate(wheel(), 27.0, 0.0).unwrap());
        assert_eq!(spec.surface_travel(std::f64::consts::PI), 48.0 * std::f64::consts::PI);
    }
}
