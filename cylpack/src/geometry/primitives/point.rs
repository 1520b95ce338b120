use crate::geometry::geo_traits::DistanceTo;

/// Geometric primitive representing a point
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Point(pub f32, pub f32);

impl Point {
    pub fn x(&self) -> f32 {
        self.0
    }

    pub fn y(&self) -> f32 {
        self.1
    }

    /// Returns a copy of this point, translated by `(dx, dy)`.
    pub fn translate(&self, dx: f32, dy: f32) -> Point {
        Point(self.0 + dx, self.1 + dy)
    }
}

impl DistanceTo<Point> for Point {
    fn distance(&self, other: &Point) -> f32 {
        self.sq_distance(other).sqrt()
    }

    fn sq_distance(&self, other: &Point) -> f32 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }
}

impl From<Point> for (f32, f32) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f32, f32)> for Point {
    fn from(p: (f32, f32)) -> Self {
        Point(p.0, p.1)
    }
}
