use cylpack::entities::Instance;
use cylpack::eval::{Evaluator, Strictness};
use cylpack::eval::{place, repair};
use log::info;
use rand::prelude::SmallRng;
use rand::seq::SliceRandom;

use crate::config::GSFConfig;
use crate::opt::{NO_SOLUTION, Order, SearchResult};

/// Random-restart baseline: up to `n_restart_attempts` uniform random orders
/// are drawn; every successfully placed one is repaired and scored with the
/// balance-only evaluator, keeping the best. Orders that cannot be placed
/// consume an attempt without being scored. Stops early on a fitness of 0.
pub fn solve(instance: &Instance, config: &GSFConfig, rng: &mut SmallRng) -> SearchResult {
    let n = instance.cylinders.len();

    let mut evaluator = Evaluator::new(instance, Strictness::BalanceOnly);
    evaluator.check_max_weight = config.check_max_weight;

    let mut best_order: Option<Order> = None;
    let mut best_fitness = NO_SOLUTION;

    for attempt in 0..config.n_restart_attempts {
        let mut order: Order = (0..n).collect();
        order.shuffle(rng);

        let Some(mut layout) = place(&order, &instance.cylinders, &instance.container) else {
            continue;
        };
        repair(&mut layout);
        let fitness = evaluator.eval_layout(&layout);

        if fitness < best_fitness {
            (best_order, best_fitness) = (Some(order), fitness);
            info!("[RR] attempt {attempt}: improved best fitness to {best_fitness}");
        }
        if best_fitness == 0 {
            break;
        }
    }

    info!("[RR] '{}': best fitness {best_fitness}", instance.name);

    SearchResult {
        best_order,
        best_fitness,
    }
}
