use crate::entities::Container;
use crate::geometry::primitives::{Circle, Point};

/// A [`Cylinder`](crate::entities::Cylinder) that has been placed at a concrete position.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct PlacedCylinder {
    /// Position of the center of the footprint
    pub center: Point,
    /// Radius of the footprint, copied from the source cylinder
    pub radius: f32,
    /// Weight, copied from the source cylinder
    pub weight: f32,
}

impl PlacedCylinder {
    /// Footprint of the placed cylinder
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }
}

/// Concrete positions for a set of cylinders, derived from a single placement order.
/// A layout is rebuilt from scratch for every evaluation or translated as a
/// whole, never partially updated.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub container: Container,
    /// Placed cylinders, in placement order
    pub placed: Vec<PlacedCylinder>,
}

impl Layout {
    pub fn new(container: Container) -> Self {
        Self {
            container,
            placed: vec![],
        }
    }

    /// Weighted centre of mass of all placed cylinders.
    /// Requires a positive total weight, see [`Instance::new`](crate::entities::Instance::new).
    pub fn centroid(&self) -> Point {
        let total_weight = self.placed.iter().map(|p| p.weight).sum::<f32>();
        debug_assert!(total_weight > 0.0, "layout has no weight");

        let cx = self
            .placed
            .iter()
            .map(|p| p.center.0 * p.weight)
            .sum::<f32>()
            / total_weight;
        let cy = self
            .placed
            .iter()
            .map(|p| p.center.1 * p.weight)
            .sum::<f32>()
            / total_weight;
        Point(cx, cy)
    }

    /// Translates every placed cylinder by the same `(dx, dy)`.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        for p in &mut self.placed {
            p.center = p.center.translate(dx, dy);
        }
    }

    /// Ratio of the floor area covered by cylinders to the total floor area.
    pub fn density(&self) -> f32 {
        let placed_area = self.placed.iter().map(|p| p.circle().area()).sum::<f32>();
        placed_area / (self.container.width * self.container.depth)
    }
}
