use cylpack::entities::Instance;
use cylpack::eval::{Evaluator, PLACEMENT_PENALTY, Strictness};
use cylpack::eval::{place, repair};
use log::info;

use crate::config::GSFConfig;
use crate::opt::{SearchResult, descending_weight_order};

/// Deterministic baseline: place the cylinders once in descending-weight
/// order, repair the balance once and score the result with the balance-only
/// evaluator. No iteration, no randomness.
pub fn solve(instance: &Instance, config: &GSFConfig) -> SearchResult {
    let order = descending_weight_order(&instance.cylinders);

    let mut evaluator = Evaluator::new(instance, Strictness::BalanceOnly);
    evaluator.check_max_weight = config.check_max_weight;

    let fitness = match place(&order, &instance.cylinders, &instance.container) {
        None => PLACEMENT_PENALTY,
        Some(mut layout) => {
            repair(&mut layout);
            evaluator.eval_layout(&layout)
        }
    };

    info!("[GREEDY] '{}': fitness {fitness}", instance.name);

    SearchResult {
        best_order: Some(order),
        best_fitness: fitness,
    }
}
