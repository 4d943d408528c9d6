#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Axis-aligned rectangle in canvas coordinates. Edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Region {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Region {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// A region anchored at the canvas origin.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn contains(&self, p: Point) -> bool {
        !(p.x < self.left || p.y < self.top || p.x > self.right || p.y > self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_edges_are_inclusive() {
        let region = Region::from_size(990.0, 400.0);

        assert!(region.contains(Point::new(0.0, 0.0)));
        assert!(region.contains(Point::new(990.0, 400.0)));
        assert!(!region.contains(Point::new(-0.5, 10.0)));
        assert!(!region.contains(Point::new(10.0, 400.5)));
    }
}
