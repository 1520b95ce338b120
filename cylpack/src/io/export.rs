use itertools::Itertools;

use crate::entities::{Instance, Layout};
use crate::io::ext_repr::{ExtContainer, ExtCylinder, ExtInstance, ExtPlacement, ExtSolution};

/// Converts an internal instance back into its external representation.
pub fn export_instance(instance: &Instance) -> ExtInstance {
    ExtInstance {
        name: instance.name.clone(),
        container: ExtContainer {
            width: instance.container.width,
            depth: instance.container.depth,
            max_weight: instance.container.max_weight,
        },
        cylinders: instance
            .cylinders
            .iter()
            .map(|c| ExtCylinder {
                id: c.id as u64,
                diameter: c.diameter,
                weight: c.weight,
            })
            .collect_vec(),
    }
}

/// Converts a solved layout into its external representation.
/// `order` must be the placement order the layout was built from: the i-th
/// placed cylinder corresponds to the i-th entry of `order`.
pub fn export_solution(
    instance: &Instance,
    order: &[usize],
    layout: &Layout,
    fitness: u32,
    run_time_ms: u64,
) -> ExtSolution {
    debug_assert!(order.len() == layout.placed.len());

    let placements = order
        .iter()
        .zip(layout.placed.iter())
        .map(|(&idx, p)| ExtPlacement {
            id: instance.cylinders[idx].id as u64,
            x: p.center.0,
            y: p.center.1,
            radius: p.radius,
        })
        .collect_vec();

    ExtSolution {
        order: order.to_vec(),
        fitness,
        density: layout.density(),
        run_time_ms,
        placements,
    }
}
