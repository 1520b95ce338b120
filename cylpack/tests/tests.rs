use cylpack::entities::{Container, Cylinder, Instance, Layout, PlacedCylinder};
use cylpack::eval::{Evaluator, PLACEMENT_PENALTY, Strictness, place, repair};
use cylpack::geometry::geo_traits::DistanceTo;
use cylpack::geometry::primitives::Point;
use cylpack::util::assertions;
use float_cmp::approx_eq;
use rand::SeedableRng;
use rand::prelude::SmallRng;
use rand::seq::SliceRandom;
use test_case::test_case;

const BOUNDS_TOLERANCE: f32 = 1e-4;

fn three_identical() -> Instance {
    Instance::new(
        "three_identical".to_string(),
        Container::new(10.0, 10.0, 100.0).unwrap(),
        vec![
            Cylinder::new(1, 2.0, 10.0),
            Cylinder::new(2, 2.0, 10.0),
            Cylinder::new(3, 2.0, 10.0),
        ],
    )
    .unwrap()
}

fn varied_sizes() -> Instance {
    Instance::new(
        "varied_sizes".to_string(),
        Container::new(15.0, 12.0, 200.0).unwrap(),
        vec![
            Cylinder::new(1, 3.5, 25.0),
            Cylinder::new(2, 3.0, 20.0),
            Cylinder::new(3, 2.5, 18.0),
            Cylinder::new(4, 2.5, 18.0),
            Cylinder::new(5, 2.0, 15.0),
        ],
    )
    .unwrap()
}

fn layout_of(container: Container, placed: &[(f32, f32, f32, f32)]) -> Layout {
    Layout {
        container,
        placed: placed
            .iter()
            .map(|&(x, y, radius, weight)| PlacedCylinder {
                center: Point(x, y),
                radius,
                weight,
            })
            .collect(),
    }
}

#[test]
fn grid_scan_stacks_three_identical_cylinders_along_the_first_column() {
    let instance = three_identical();
    let layout = place(&[0, 1, 2], &instance.cylinders, &instance.container)
        .expect("three unit-radius cylinders fit a 10x10 container");

    let expected = [Point(1.0, 1.0), Point(1.0, 3.0), Point(1.0, 5.0)];
    for (placed, expected) in layout.placed.iter().zip(expected.iter()) {
        assert!(approx_eq!(f32, placed.center.0, expected.0, epsilon = 1e-6));
        assert!(approx_eq!(f32, placed.center.1, expected.1, epsilon = 1e-6));
    }
}

#[test]
fn repair_centers_the_three_identical_cylinders() {
    let instance = three_identical();
    let mut layout = place(&[0, 1, 2], &instance.cylinders, &instance.container).unwrap();
    repair(&mut layout);

    // the column shifts from x = 1 to x = 5 and up by 2: centroid lands on (5, 5)
    let expected = [Point(5.0, 3.0), Point(5.0, 5.0), Point(5.0, 7.0)];
    for (placed, expected) in layout.placed.iter().zip(expected.iter()) {
        assert!(approx_eq!(f32, placed.center.0, expected.0, epsilon = 1e-6));
        assert!(approx_eq!(f32, placed.center.1, expected.1, epsilon = 1e-6));
    }

    let evaluator = Evaluator::new(&instance, Strictness::Full);
    assert_eq!(evaluator.eval_order(&[0, 1, 2]), 0);
}

#[test_case(12.0; "wider than the container")]
#[test_case(10.5; "slightly too wide")]
#[test_case(200.0; "vastly oversized")]
fn oversized_cylinder_cannot_be_placed(diameter: f32) {
    let instance = Instance::new(
        "oversized".to_string(),
        Container::new(10.0, 10.0, 100.0).unwrap(),
        vec![Cylinder::new(1, diameter, 10.0)],
    )
    .unwrap();

    assert_eq!(place(&[0], &instance.cylinders, &instance.container), None);

    let evaluator = Evaluator::new(&instance, Strictness::Full);
    assert_eq!(evaluator.eval_order(&[0]), PLACEMENT_PENALTY);
}

#[test]
fn placement_is_deterministic() {
    let instance = varied_sizes();
    let mut rng = SmallRng::seed_from_u64(0);
    let mut order: Vec<usize> = (0..instance.cylinders.len()).collect();

    for _ in 0..10 {
        order.shuffle(&mut rng);
        let first = place(&order, &instance.cylinders, &instance.container);
        let second = place(&order, &instance.cylinders, &instance.container);
        assert_eq!(first, second);
    }
}

#[test]
fn placements_of_random_orders_respect_overlap_and_boundary_invariants() {
    let instance = varied_sizes();
    let mut rng = SmallRng::seed_from_u64(1);
    let mut order: Vec<usize> = (0..instance.cylinders.len()).collect();

    for _ in 0..50 {
        order.shuffle(&mut rng);
        let Some(layout) = place(&order, &instance.cylinders, &instance.container) else {
            continue;
        };
        assert!(assertions::layout_is_overlap_free(&layout));
        assert!(assertions::layout_is_within_bounds(&layout, BOUNDS_TOLERANCE));
    }
}

#[test]
fn repair_preserves_feasibility_and_never_worsens_the_balance() {
    let instance = varied_sizes();
    let target = instance.container.center();
    let mut rng = SmallRng::seed_from_u64(2);
    let mut order: Vec<usize> = (0..instance.cylinders.len()).collect();

    for _ in 0..50 {
        order.shuffle(&mut rng);
        let Some(mut layout) = place(&order, &instance.cylinders, &instance.container) else {
            continue;
        };
        let distance_before = layout.centroid().distance(&target);

        repair(&mut layout);

        let distance_after = layout.centroid().distance(&target);
        assert!(distance_after <= distance_before + BOUNDS_TOLERANCE);
        assert!(assertions::layout_is_overlap_free(&layout));
        assert!(assertions::layout_is_within_bounds(&layout, BOUNDS_TOLERANCE));
    }
}

#[test]
fn fitness_is_zero_for_a_fully_feasible_layout() {
    let instance = three_identical();
    let layout = layout_of(
        instance.container,
        &[(3.0, 5.0, 1.0, 10.0), (7.0, 5.0, 1.0, 10.0)],
    );

    let evaluator = Evaluator::new(&instance, Strictness::Full);
    assert_eq!(evaluator.eval_layout(&layout), 0);
}

#[test]
fn overlaps_are_caught_by_the_full_evaluator_only() {
    let instance = three_identical();
    // overlapping pair, but the centroid sits nicely inside the balance zone
    let layout = layout_of(
        instance.container,
        &[(4.5, 5.0, 1.0, 10.0), (5.5, 5.0, 1.0, 10.0)],
    );

    let full = Evaluator::new(&instance, Strictness::Full);
    let balance_only = Evaluator::new(&instance, Strictness::BalanceOnly);
    assert_eq!(full.eval_layout(&layout), 1);
    assert_eq!(balance_only.eval_layout(&layout), 0);
}

#[test]
fn touching_cylinders_do_not_count_as_overlapping() {
    let instance = three_identical();
    let layout = layout_of(
        instance.container,
        &[(4.0, 5.0, 1.0, 10.0), (6.0, 5.0, 1.0, 10.0)],
    );

    let evaluator = Evaluator::new(&instance, Strictness::Full);
    assert_eq!(evaluator.eval_layout(&layout), 0);
}

#[test]
fn boundary_violations_are_caught_by_the_full_evaluator() {
    let instance = three_identical();
    let layout = layout_of(instance.container, &[(0.5, 5.0, 1.0, 10.0)]);

    let evaluator = Evaluator::new(&instance, Strictness::Full);
    assert_eq!(evaluator.eval_layout(&layout), 1);
}

#[test]
fn unbalanced_layouts_are_caught_by_both_evaluator_variants() {
    let instance = three_identical();
    // nearly all weight in the bottom-left corner, centroid far outside the zone
    let layout = layout_of(
        instance.container,
        &[(1.5, 1.5, 1.0, 100.0), (8.5, 8.5, 1.0, 1.0)],
    );

    let full = Evaluator::new(&instance, Strictness::Full);
    let balance_only = Evaluator::new(&instance, Strictness::BalanceOnly);
    assert_eq!(full.eval_layout(&layout), 1);
    assert_eq!(balance_only.eval_layout(&layout), 1);
}

#[test]
fn max_weight_is_only_checked_when_enabled() {
    let instance = Instance::new(
        "overweight".to_string(),
        Container::new(10.0, 10.0, 15.0).unwrap(),
        vec![Cylinder::new(1, 2.0, 10.0), Cylinder::new(2, 2.0, 10.0)],
    )
    .unwrap();
    let layout = layout_of(
        instance.container,
        &[(3.0, 5.0, 1.0, 10.0), (7.0, 5.0, 1.0, 10.0)],
    );

    let mut evaluator = Evaluator::new(&instance, Strictness::Full);
    assert_eq!(evaluator.eval_layout(&layout), 0);

    evaluator.check_max_weight = true;
    assert_eq!(evaluator.eval_layout(&layout), 1);
}

#[test]
fn degenerate_instances_are_rejected() {
    assert!(Container::new(0.0, 10.0, 100.0).is_err());
    assert!(Container::new(10.0, -1.0, 100.0).is_err());

    let container = Container::new(10.0, 10.0, 100.0).unwrap();
    assert!(Instance::new("empty".to_string(), container, vec![]).is_err());
    assert!(
        Instance::new(
            "weightless".to_string(),
            container,
            vec![Cylinder::new(1, 2.0, 0.0)],
        )
        .is_err()
    );
}
