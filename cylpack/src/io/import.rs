use anyhow::{Context, Result};
use itertools::Itertools;

use crate::entities::{Container, Cylinder, Instance};
use crate::io::ext_repr::ExtInstance;

/// Converts the external representation of an instance into the internal one,
/// rejecting degenerate data at the boundary.
pub fn import_instance(ext_instance: &ExtInstance) -> Result<Instance> {
    let container = Container::new(
        ext_instance.container.width,
        ext_instance.container.depth,
        ext_instance.container.max_weight,
    )
    .with_context(|| format!("invalid container in instance '{}'", ext_instance.name))?;

    let cylinders = ext_instance
        .cylinders
        .iter()
        .map(|ext_cyl| Cylinder::new(ext_cyl.id as usize, ext_cyl.diameter, ext_cyl.weight))
        .collect_vec();

    Instance::new(ext_instance.name.clone(), container, cylinders)
}
