use anyhow::Result;
use anyhow::ensure;

use crate::entities::{Container, Cylinder};

/// The static (unmodifiable) representation of a problem instance:
/// a container and the cylinders to be loaded into it.
#[derive(Clone, Debug)]
pub struct Instance {
    pub name: String,
    pub container: Container,
    /// Cylinders to be placed. Placement orders refer to positions in this vec.
    pub cylinders: Vec<Cylinder>,
}

impl Instance {
    /// Rejects instances for which the weighted centroid would be undefined.
    pub fn new(name: String, container: Container, cylinders: Vec<Cylinder>) -> Result<Self> {
        ensure!(!cylinders.is_empty(), "instance '{name}' has no cylinders");
        let total_weight = cylinders.iter().map(|c| c.weight).sum::<f32>();
        ensure!(
            total_weight > 0.0,
            "instance '{name}' has non-positive total weight: {total_weight}"
        );
        Ok(Self {
            name,
            container,
            cylinders,
        })
    }

    pub fn total_weight(&self) -> f32 {
        self.cylinders.iter().map(|c| c.weight).sum()
    }
}
