use crate::error::GeomError;
use crate::geom::{Point, Region};
use derive_more::{Deref, Display, Into};
use parking_lot::Mutex;
use std::f64::consts::TAU;
use std::sync::Arc;

/// Phase angle in radians, always within `[0, 2π]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Display, Deref, Into)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Self = Self(0.0);
    pub const FULL_TURN: Self = Self(TAU);

    /// Snaps to the nearest bound instead of wrapping.
    pub fn clamped(radians: f64) -> Self {
        Self(radians.clamp(0.0, TAU))
    }

    pub fn radians(self) -> f64 {
        self.0
    }
}

/// One pointer move, consumed by a single [`AngleSelector::apply_drag`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    pub previous: Point,
    pub current: Point,
}

impl DragGesture {
    pub fn new(previous: Point, current: Point) -> Self {
        Self { previous, current }
    }

    pub fn dx(&self) -> f64 {
        self.current.x - self.previous.x
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragAction {
    pub applied: bool,
    pub should_redraw: bool,
}

/// Owns the angle picked by horizontal drags. Drags whose current pointer
/// position falls outside `region` are ignored.
#[derive(Debug, Clone)]
pub struct AngleSelector {
    angle: Angle,
    region: Region,
}

impl AngleSelector {
    pub fn new(region: Region) -> Self {
        Self {
            angle: Angle::ZERO,
            region,
        }
    }

    pub fn reset(&mut self) {
        self.angle = Angle::ZERO;
    }

    pub fn set_region(&mut self, region: Region) {
        self.region = region;
    }

    pub fn current_angle(&self) -> Angle {
        self.angle
    }

    /// `track_width` pixels of horizontal travel sweep one full turn.
    pub fn apply_drag(
        &mut self,
        gesture: DragGesture,
        track_width: f64,
    ) -> Result<DragAction, GeomError> {
        let track_width = GeomError::require_positive("track_width", track_width)?;

        // dead zone
        if !self.region.contains(gesture.current) {
            log::trace!("Ignoring drag outside interactive region: {:?}", gesture.current);
            return Ok(DragAction::default());
        }

        let delta = gesture.dx() / track_width * TAU;
        let next = Angle::clamped(self.angle.radians() + delta);
        let changed = next != self.angle;
        self.angle = next;

        Ok(DragAction {
            applied: true,
            should_redraw: changed,
        })
    }
}

/// Serialises every read and write of an [`AngleSelector`] for hosts that
/// deliver drags and frames on different threads.
#[derive(Debug, Clone)]
pub struct SharedAngleSelector(Arc<Mutex<AngleSelector>>);

impl SharedAngleSelector {
    pub fn new(selector: AngleSelector) -> Self {
        Self(Arc::new(Mutex::new(selector)))
    }

    pub fn apply_drag(
        &self,
        gesture: DragGesture,
        track_width: f64,
    ) -> Result<DragAction, GeomError> {
        self.0.lock().apply_drag(gesture, track_width)
    }

    pub fn current_angle(&self) -> Angle {
        self.0.lock().current_angle()
    }

    pub fn set_region(&self, region: Region) {
        self.0.lock().set_region(region);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK: f64 = 640.0;

    fn selector() -> AngleSelector {
        AngleSelector::new(Region::from_size(990.0, 400.0))
    }

    fn drag(from_x: f64, to_x: f64) -> DragGesture {
        DragGesture::new(Point::new(from_x, 200.0), Point::new(to_x, 200.0))
    }

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(selector().current_angle(), Angle::ZERO);
    }

    #[test]
    fn test_drag_converts_track_width_to_full_turn() {
        let mut s = selector();
        s.apply_drag(drag(100.0, 260.0), TRACK).unwrap();
        assert!((s.current_angle().radians() - TAU / 4.0).abs() < 1e-12);

        s.apply_drag(drag(260.0, 180.0), TRACK).unwrap();
        assert!((s.current_angle().radians() - TAU / 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_clamps_instead_of_wrapping() {
        let mut s = selector();
        let action = s.apply_drag(drag(500.0, 400.0), TRACK).unwrap();
        assert_eq!(s.current_angle(), Angle::ZERO);
        assert!(action.applied);
        assert!(!action.should_redraw);

        s.apply_drag(drag(0.0, 900.0), TRACK).unwrap();
        assert_eq!(s.current_angle(), Angle::FULL_TURN);

        s.apply_drag(drag(0.0, 900.0), TRACK).unwrap();
        assert_eq!(s.current_angle(), Angle::FULL_TURN);
    }

    #[test]
    fn test_angle_stays_in_range_for_any_drag_sequence() {
        let mut s = selector();
        let moves = [
            (0.0, 700.0),
            (700.0, 10.0),
            (10.0, 990.0),
            (300.0, 120.0),
            (120.0, 121.0),
            (990.0, 0.0),
            (0.0, 333.3),
            (640.0, -10.0),
        ];
        for (from, to) in moves.iter().cycle().take(64) {
            s.apply_drag(drag(*from, *to), TRACK).unwrap();
            let a = s.current_angle().radians();
            assert!((0.0..=TAU).contains(&a), "angle {a} out of range");
        }
    }

    #[test]
    fn test_dead_zone_is_a_no_op() {
        let mut s = selector();
        s.apply_drag(drag(0.0, 64.0), TRACK).unwrap();
        let before = s.current_angle();

        let outside = [
            DragGesture::new(Point::new(100.0, 100.0), Point::new(-1.0, 100.0)),
            DragGesture::new(Point::new(100.0, 100.0), Point::new(991.0, 100.0)),
            DragGesture::new(Point::new(100.0, 100.0), Point::new(300.0, -3.0)),
            DragGesture::new(Point::new(100.0, 100.0), Point::new(300.0, 401.0)),
        ];
        for gesture in outside {
            let action = s.apply_drag(gesture, TRACK).unwrap();
            assert!(!action.applied);
            assert_eq!(s.current_angle(), before);
        }
    }

    #[test]
    fn test_previous_position_may_lie_outside() {
        let mut s = selector();
        let gesture = DragGesture::new(Point::new(-40.0, 200.0), Point::new(24.0, 200.0));
        assert!(s.apply_drag(gesture, TRACK).unwrap().applied);
        assert!(s.current_angle().radians() > 0.0);
    }

    #[test]
    fn test_reset_and_resize() {
        let mut s = selector();
        s.apply_drag(drag(0.0, 320.0), TRACK).unwrap();
        s.reset();
        assert_eq!(s.current_angle(), Angle::ZERO);

        s.set_region(Region::from_size(100.0, 100.0));
        assert!(!s.apply_drag(drag(0.0, 150.0), TRACK).unwrap().applied);
    }

    #[test]
    fn test_rejects_non_positive_track_width() {
        let mut s = selector();
        assert_eq!(
            s.apply_drag(drag(0.0, 10.0), 0.0),
            Err(GeomError::InvalidParameter {
                name: "track_width",
                value: 0.0
            })
        );
        assert_eq!(s.current_angle(), Angle::ZERO);
    }

    #[test]
    fn test_shared_selector_serialises_threads() {
        let shared = SharedAngleSelector::new(selector());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    for _ in 0..10 {
                        shared.apply_drag(drag(0.0, 1.0), TRACK).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let expected = 40.0 / TRACK * TAU;
        assert!((shared.current_angle().radians() - expected).abs() < 1e-9);
    }
}
