use std::f32::consts::PI;

use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Point;

/// Geometric primitive representing a circle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Point, radius: f32) -> Self {
        debug_assert!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {radius}"
        );
        debug_assert!(
            center.0.is_finite() && center.1.is_finite(),
            "invalid circle center: {center:?}"
        );

        Self { center, radius }
    }

    pub fn area(&self) -> f32 {
        self.radius * self.radius * PI
    }
}

impl CollidesWith<Circle> for Circle {
    /// Circles collide iff their centers lie strictly closer than the sum of
    /// their radii. Touching circles do not collide.
    fn collides_with(&self, other: &Circle) -> bool {
        let (cx1, cx2) = (self.center.0, other.center.0);
        let (cy1, cy2) = (self.center.1, other.center.1);
        let (r1, r2) = (self.radius, other.radius);

        let dx = cx1 - cx2;
        let dy = cy1 - cy2;
        let sq_d = dx * dx + dy * dy;

        sq_d < (r1 + r2) * (r1 + r2)
    }
}
