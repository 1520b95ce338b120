use anyhow::Result;
use anyhow::ensure;

use crate::geometry::primitives::{Point, Rect};

/// Rectangular container floor on which [`Cylinder`](crate::entities::Cylinder)s are placed.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Container {
    pub width: f32,
    pub depth: f32,
    /// Maximum total weight the container is rated for.
    /// Declared in the problem data, but not part of the default constraint
    /// checks, see [`Evaluator`](crate::eval::Evaluator).
    pub max_weight: f32,
}

impl Container {
    pub fn new(width: f32, depth: f32, max_weight: f32) -> Result<Self> {
        ensure!(
            width > 0.0 && depth > 0.0,
            "container dimensions must be positive, width: {width}, depth: {depth}"
        );
        Ok(Self {
            width,
            depth,
            max_weight,
        })
    }

    /// Geometric center of the container floor
    pub fn center(&self) -> Point {
        self.bbox().centroid()
    }

    /// Outer boundary of the container floor
    pub fn bbox(&self) -> Rect {
        Rect::try_new(0.0, 0.0, self.width, self.depth)
            .expect("container dimensions are validated at construction")
    }

    /// Zone in which the weighted centroid of a layout must lie:
    /// the central 60% of the floor on each axis.
    pub fn balance_zone(&self) -> Rect {
        Rect::try_new(
            0.2 * self.width,
            0.2 * self.depth,
            0.8 * self.width,
            0.8 * self.depth,
        )
        .expect("container dimensions are validated at construction")
    }
}
