use crate::entities::Layout;

/// Shifts the entire layout by a single rigid translation, moving its
/// weighted centroid as close to the container center as the boundary allows.
///
/// The ideal shift (container center minus centroid) is clamped per axis to
/// the tightest remaining slack of any placed cylinder and then applied
/// uniformly. Relative distances between cylinders are untouched, so a layout
/// without overlaps stays without overlaps. When a boundary-binding cylinder
/// stops the shift short, the balance may remain imperfect: this operator is
/// best-effort, not a guarantee.
pub fn repair(layout: &mut Layout) {
    if layout.placed.is_empty() {
        return;
    }

    let container = layout.container;
    let centroid = layout.centroid();
    let target = container.center();

    let ideal_dx = target.0 - centroid.0;
    let ideal_dy = target.1 - centroid.1;

    // tightest slack towards each of the four boundaries, over all cylinders
    let dx_min = -layout
        .placed
        .iter()
        .map(|p| p.center.0 - p.radius)
        .fold(f32::INFINITY, f32::min);
    let dx_max = layout
        .placed
        .iter()
        .map(|p| container.width - (p.center.0 + p.radius))
        .fold(f32::INFINITY, f32::min);
    let dy_min = -layout
        .placed
        .iter()
        .map(|p| p.center.1 - p.radius)
        .fold(f32::INFINITY, f32::min);
    let dy_max = layout
        .placed
        .iter()
        .map(|p| container.depth - (p.center.1 + p.radius))
        .fold(f32::INFINITY, f32::min);

    // clamp the shift once, not per cylinder
    let dx = f32::max(dx_min, f32::min(ideal_dx, dx_max));
    let dy = f32::max(dy_min, f32::min(ideal_dy, dy_max));

    layout.translate(dx, dy);
}
