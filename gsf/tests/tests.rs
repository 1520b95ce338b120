use cylpack::entities::{Container, Cylinder, Instance};
use cylpack::eval::{Evaluator, PLACEMENT_PENALTY, Strictness, place, repair};
use cylpack::util::assertions;
use gsf::config::GSFConfig;
use gsf::instances;
use gsf::opt::ga::GeneticOptimizer;
use gsf::opt::{NO_SOLUTION, greedy, random_restart};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use test_case::test_case;

fn instance_by_name(name: &str) -> Instance {
    instances::reference_instances()
        .into_iter()
        .find(|instance| instance.name == name)
        .expect("unknown reference instance")
}

fn unplaceable_instance() -> Instance {
    Instance::new(
        "oversized".to_string(),
        Container::new(4.0, 4.0, 100.0).unwrap(),
        vec![Cylinder::new(1, 6.0, 10.0)],
    )
    .unwrap()
}

#[test_case("basic_01_three_identical")]
#[test_case("basic_02_two_sizes")]
#[test_case("basic_03_varied_sizes")]
#[test_case("challenge_01_tight_packing")]
#[test_case("challenge_02_weight_balance")]
#[test_case("challenge_03_many_small")]
#[test_case("challenge_04_mixed_constraints")]
fn genetic_solver_reports_a_reproducible_best_order(name: &str) {
    let instance = instance_by_name(name);
    let mut config = GSFConfig::default();
    config.n_generations = 40;

    let mut optimizer = GeneticOptimizer::new(&instance, config, SmallRng::seed_from_u64(0));
    let result = optimizer.solve();

    let order = result
        .best_order
        .expect("every evaluated population yields a best order");
    assert!(assertions::order_is_permutation(
        &order,
        instance.cylinders.len()
    ));

    // the weight-aware half of the initial population is placeable on every
    // reference instance, so the placement penalty is never the best score
    assert!(result.best_fitness < PLACEMENT_PENALTY);

    // re-evaluating the reported order reproduces the reported fitness
    let evaluator = Evaluator::new(&instance, Strictness::Full);
    assert_eq!(evaluator.eval_order(&order), result.best_fitness);
}

#[test]
fn genetic_solver_is_reproducible_with_a_fixed_seed() {
    let instance = instance_by_name("challenge_01_tight_packing");
    let mut config = GSFConfig::default();
    config.n_generations = 15;

    let first = GeneticOptimizer::new(&instance, config, SmallRng::seed_from_u64(7)).solve();
    let second = GeneticOptimizer::new(&instance, config, SmallRng::seed_from_u64(7)).solve();

    assert_eq!(first.best_order, second.best_order);
    assert_eq!(first.best_fitness, second.best_fitness);
}

#[test]
fn genetic_solver_with_zero_generations_scores_the_initial_population() {
    let instance = instance_by_name("basic_01_three_identical");
    let mut config = GSFConfig::default();
    config.n_generations = 0;

    let result = GeneticOptimizer::new(&instance, config, SmallRng::seed_from_u64(0)).solve();

    // the weight-aware half of the initial population already solves this
    // instance, so even generation 0 reports a feasible order
    assert_eq!(result.best_fitness, 0);
    assert!(result.best_order.is_some());
}

#[test]
fn genetic_solver_reports_the_placement_penalty_when_nothing_fits() {
    let instance = unplaceable_instance();
    let mut config = GSFConfig::default();
    config.n_generations = 3;

    let result = GeneticOptimizer::new(&instance, config, SmallRng::seed_from_u64(0)).solve();

    assert_eq!(result.best_fitness, PLACEMENT_PENALTY);
    assert_eq!(result.best_order, Some(vec![0]));
}

#[test]
fn greedy_solves_every_basic_instance() {
    for instance in instances::basic_instances() {
        let result = greedy::solve(&instance, &GSFConfig::default());
        assert!(result.best_fitness < PLACEMENT_PENALTY);

        let order = result.best_order.expect("greedy always reports its order");
        let mut layout = place(&order, &instance.cylinders, &instance.container)
            .expect("the descending-weight order is placeable on the basic instances");
        repair(&mut layout);

        assert!(assertions::layout_is_overlap_free(&layout));
        assert!(assertions::layout_is_within_bounds(&layout, 1e-4));

        let evaluator = Evaluator::new(&instance, Strictness::BalanceOnly);
        assert_eq!(evaluator.eval_layout(&layout), result.best_fitness);
    }
}

#[test]
fn greedy_is_deterministic() {
    let instance = instance_by_name("challenge_04_mixed_constraints");
    let config = GSFConfig::default();

    let first = greedy::solve(&instance, &config);
    let second = greedy::solve(&instance, &config);

    assert_eq!(first.best_order, second.best_order);
    assert_eq!(first.best_fitness, second.best_fitness);
}

#[test]
fn greedy_centers_the_three_identical_cylinders() {
    let instance = instance_by_name("basic_01_three_identical");
    let result = greedy::solve(&instance, &GSFConfig::default());

    assert_eq!(result.best_order, Some(vec![0, 1, 2]));
    assert_eq!(result.best_fitness, 0);
}

#[test]
fn random_restart_solves_the_simplest_instance_on_the_first_placed_attempt() {
    let instance = instance_by_name("basic_01_three_identical");
    let config = GSFConfig::default();

    // identical cylinders: every order decodes to the same feasible layout
    let mut rng = SmallRng::seed_from_u64(0);
    let result = random_restart::solve(&instance, &config, &mut rng);

    assert_eq!(result.best_fitness, 0);
    assert!(result.best_order.is_some());
}

#[test]
fn random_restart_with_zero_attempts_returns_no_result() {
    let instance = instance_by_name("basic_01_three_identical");
    let mut config = GSFConfig::default();
    config.n_restart_attempts = 0;

    let mut rng = SmallRng::seed_from_u64(0);
    let result = random_restart::solve(&instance, &config, &mut rng);

    assert_eq!(result.best_order, None);
    assert_eq!(result.best_fitness, NO_SOLUTION);
}

#[test]
fn random_restart_returns_no_result_when_every_attempt_fails_to_place() {
    let instance = unplaceable_instance();
    let config = GSFConfig::default();

    let mut rng = SmallRng::seed_from_u64(0);
    let result = random_restart::solve(&instance, &config, &mut rng);

    assert_eq!(result.best_order, None);
    assert_eq!(result.best_fitness, NO_SOLUTION);
}
