use crate::entities::{Container, Cylinder, Layout, PlacedCylinder};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Circle, Point};
use crate::util::assertions;

/// Builds a [`Layout`] by processing cylinders in the given `order` and
/// placing each at the first collision-free center found by a grid scan.
///
/// A cylinder that exhausts its entire scan grid without finding a free
/// center fails the whole order: `None` is returned, never a partial layout.
/// This is a normal search outcome, signalling an infeasible order.
///
/// The result is fully determined by the order, the container dimensions and
/// the cylinder radii.
pub fn place(order: &[usize], cylinders: &[Cylinder], container: &Container) -> Option<Layout> {
    let mut layout = Layout::new(*container);

    for &idx in order {
        let cylinder = &cylinders[idx];
        let center = scan_free_center(cylinder.radius(), &layout)?;
        layout.placed.push(PlacedCylinder {
            center,
            radius: cylinder.radius(),
            weight: cylinder.weight,
        });
    }

    debug_assert!(assertions::layout_is_overlap_free(&layout));

    Some(layout)
}

/// Scans candidate centers on a uniform grid with step `min(radius, 1.0)`,
/// starting at `(radius, radius)` and advancing the y-coordinate fastest,
/// bounded by `[radius, dimension - radius]` on each axis. Returns the first
/// center at which a circle of `radius` collides with no placed cylinder.
fn scan_free_center(radius: f32, layout: &Layout) -> Option<Point> {
    let container = &layout.container;
    let step = f32::min(radius, 1.0);

    let mut x = radius;
    while x <= container.width - radius {
        let mut y = radius;
        while y <= container.depth - radius {
            let candidate = Circle::new(Point(x, y), radius);
            let collision = layout
                .placed
                .iter()
                .any(|p| candidate.collides_with(&p.circle()));
            if !collision {
                return Some(candidate.center);
            }
            y += step;
        }
        x += step;
    }
    None
}
