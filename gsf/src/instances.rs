//! Built-in reference instances for the cylinder loading problem,
//! ranging from trivially solvable to constraint-pressured.

use cylpack::entities::{Container, Cylinder, Instance};

/// All built-in reference instances, easiest first
pub fn reference_instances() -> Vec<Instance> {
    let mut instances = basic_instances();
    instances.extend(challenging_instances());
    instances
}

/// Simple instances, solvable by all solvers
pub fn basic_instances() -> Vec<Instance> {
    vec![
        instance(
            "basic_01_three_identical",
            container(10.0, 10.0, 100.0),
            vec![
                Cylinder::new(1, 2.0, 10.0),
                Cylinder::new(2, 2.0, 10.0),
                Cylinder::new(3, 2.0, 10.0),
            ],
        ),
        instance(
            "basic_02_two_sizes",
            container(12.0, 10.0, 150.0),
            vec![
                Cylinder::new(1, 3.0, 20.0),
                Cylinder::new(2, 3.0, 20.0),
                Cylinder::new(3, 2.0, 15.0),
                Cylinder::new(4, 2.0, 15.0),
            ],
        ),
        instance(
            "basic_03_varied_sizes",
            container(15.0, 12.0, 200.0),
            vec![
                Cylinder::new(1, 3.5, 25.0),
                Cylinder::new(2, 3.0, 20.0),
                Cylinder::new(3, 2.5, 18.0),
                Cylinder::new(4, 2.5, 18.0),
                Cylinder::new(5, 2.0, 15.0),
            ],
        ),
    ]
}

/// More difficult instances requiring actual optimization
pub fn challenging_instances() -> Vec<Instance> {
    vec![
        instance(
            "challenge_01_tight_packing",
            container(15.0, 15.0, 300.0),
            vec![
                Cylinder::new(1, 4.0, 35.0),
                Cylinder::new(2, 3.5, 30.0),
                Cylinder::new(3, 3.5, 30.0),
                Cylinder::new(4, 3.0, 25.0),
                Cylinder::new(5, 3.0, 25.0),
                Cylinder::new(6, 2.5, 20.0),
                Cylinder::new(7, 2.5, 20.0),
                Cylinder::new(8, 2.0, 15.0),
            ],
        ),
        instance(
            "challenge_02_weight_balance",
            container(18.0, 14.0, 400.0),
            vec![
                Cylinder::new(1, 3.0, 80.0),
                Cylinder::new(2, 3.0, 80.0),
                Cylinder::new(3, 2.5, 10.0),
                Cylinder::new(4, 2.5, 10.0),
                Cylinder::new(5, 2.5, 10.0),
                Cylinder::new(6, 2.5, 10.0),
                Cylinder::new(7, 3.5, 60.0),
                Cylinder::new(8, 3.5, 60.0),
            ],
        ),
        instance(
            "challenge_03_many_small",
            container(20.0, 15.0, 350.0),
            (1..=12).map(|id| Cylinder::new(id, 2.0, 15.0)).collect(),
        ),
        instance(
            "challenge_04_mixed_constraints",
            container(20.0, 20.0, 500.0),
            vec![
                Cylinder::new(1, 5.0, 50.0),
                Cylinder::new(2, 4.5, 45.0),
                Cylinder::new(3, 4.0, 40.0),
                Cylinder::new(4, 3.5, 35.0),
                Cylinder::new(5, 3.5, 35.0),
                Cylinder::new(6, 3.0, 30.0),
                Cylinder::new(7, 3.0, 30.0),
                Cylinder::new(8, 2.5, 25.0),
                Cylinder::new(9, 2.5, 25.0),
                Cylinder::new(10, 2.0, 20.0),
            ],
        ),
    ]
}

fn container(width: f32, depth: f32, max_weight: f32) -> Container {
    Container::new(width, depth, max_weight).expect("reference container is well-formed")
}

fn instance(name: &str, container: Container, cylinders: Vec<Cylinder>) -> Instance {
    Instance::new(name.to_string(), container, cylinders)
        .expect("reference instance is well-formed")
}
