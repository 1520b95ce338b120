use itertools::Itertools;

use crate::entities::Layout;
use crate::geometry::geo_traits::CollidesWith;

/// True if no pair of placed cylinders overlaps
pub fn layout_is_overlap_free(layout: &Layout) -> bool {
    layout
        .placed
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !a.circle().collides_with(&b.circle()))
}

/// True if every placed cylinder lies within the container boundary,
/// with `tolerance` of slack for floating point drift of the scan grid
pub fn layout_is_within_bounds(layout: &Layout, tolerance: f32) -> bool {
    layout.placed.iter().all(|p| {
        p.center.0 - p.radius >= -tolerance
            && p.center.0 + p.radius <= layout.container.width + tolerance
            && p.center.1 - p.radius >= -tolerance
            && p.center.1 + p.radius <= layout.container.depth + tolerance
    })
}

/// True if `order` contains every index in `0..n` exactly once
pub fn order_is_permutation(order: &[usize], n: usize) -> bool {
    let mut seen = vec![false; n];
    order.len() == n
        && order
            .iter()
            .all(|&i| i < n && !std::mem::replace(&mut seen[i], true))
}
