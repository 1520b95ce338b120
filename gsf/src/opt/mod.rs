use std::cmp::Reverse;

use cylpack::entities::Cylinder;
use itertools::Itertools;
use ordered_float::NotNan;

pub mod ga;
pub mod greedy;
pub mod random_restart;

/// Permutation of cylinder indices, fixing the placement order
pub type Order = Vec<usize>;

/// Fitness reported by solvers that never managed to place any order
pub const NO_SOLUTION: u32 = u32::MAX;

/// Best placement order found by a solver, together with its fitness
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// Best order found, `None` if no order could be placed at all
    pub best_order: Option<Order>,
    /// Fitness of the best order, [`NO_SOLUTION`] if none was found
    pub best_fitness: u32,
}

/// Order sorting the cylinders by descending weight: heavier cylinders are
/// placed first, which anchors them close to the scan origin.
pub fn descending_weight_order(cylinders: &[Cylinder]) -> Order {
    (0..cylinders.len())
        .sorted_by_cached_key(|&i| {
            let weight = NotNan::new(cylinders[i].weight).expect("cylinder weight is NaN");
            Reverse(weight)
        })
        .collect_vec()
}
