use serde::{Deserialize, Serialize};

/// The JSON representation of a problem instance.
/// Field names follow the interchange format of the reference data sets.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    pub container: ExtContainer,
    /// Cylinders to be loaded into the container
    pub cylinders: Vec<ExtCylinder>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtContainer {
    pub width: f32,
    pub depth: f32,
    pub max_weight: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtCylinder {
    pub id: u64,
    pub diameter: f32,
    pub weight: f32,
}

/// The JSON representation of a solved layout
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Placement order that produced the layout, as positions in the
    /// instance's cylinder list
    pub order: Vec<usize>,
    /// Constraint-violation score of the layout, 0 means feasible
    pub fitness: u32,
    /// Ratio of the floor area covered by cylinders
    pub density: f32,
    /// The time it took to generate the solution in milliseconds
    pub run_time_ms: u64,
    pub placements: Vec<ExtPlacement>,
}

/// Concrete position of one cylinder in a solved layout
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacement {
    /// ID of the cylinder as defined in the instance
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}
