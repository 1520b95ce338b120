use cylpack::entities::Instance;
use cylpack::eval::{Evaluator, Strictness};
use cylpack::util::assertions;
use log::info;
use rand::Rng;
use rand::prelude::SmallRng;
use rand::seq::SliceRandom;
use thousands::Separable;

use crate::config::GSFConfig;
use crate::opt::{NO_SOLUTION, Order, SearchResult, descending_weight_order};

/// Genetic algorithm over placement orders.
///
/// Chromosomes are permutations of the cylinder indices; fitness is the full
/// constraint-violation score of the decoded (placed and repaired) layout.
/// The best (order, fitness) ever seen is tracked across generations; the
/// population itself is fully replaced every generation.
pub struct GeneticOptimizer<'a> {
    pub instance: &'a Instance,
    pub config: GSFConfig,
    evaluator: Evaluator<'a>,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
    pub eval_counter: usize,
}

impl<'a> GeneticOptimizer<'a> {
    pub fn new(instance: &'a Instance, config: GSFConfig, rng: SmallRng) -> Self {
        assert!(config.tournament_size > 0);
        assert!(config.population_size >= config.tournament_size);
        let mut evaluator = Evaluator::new(instance, Strictness::Full);
        evaluator.check_max_weight = config.check_max_weight;
        Self {
            instance,
            config,
            evaluator,
            rng,
            eval_counter: 0,
        }
    }

    pub fn solve(&mut self) -> SearchResult {
        let n = self.instance.cylinders.len();
        let mut population = self.initial_population(n);

        let mut best_order: Option<Order> = None;
        let mut best_fitness = NO_SOLUTION;

        // generation 0 scores the initial population; every further round
        // breeds a new population first
        for generation in 0..=self.config.n_generations {
            let fitnesses = population
                .iter()
                .map(|order| self.evaluator.eval_order(order))
                .collect::<Vec<_>>();
            self.eval_counter += fitnesses.len();

            for (order, &fitness) in population.iter().zip(fitnesses.iter()) {
                if fitness < best_fitness {
                    (best_order, best_fitness) = (Some(order.clone()), fitness);
                    info!("[GA] gen {generation}: improved best fitness to {best_fitness}");
                }
            }

            if best_fitness == 0 {
                info!("[GA] gen {generation}: feasible layout found, stopping early");
                break;
            }
            if generation == self.config.n_generations {
                break;
            }

            population = self.breed(&population, &fitnesses);
        }

        info!(
            "[GA] finished after {} evaluations, best fitness: {best_fitness}",
            self.eval_counter.separate_with_commas()
        );

        SearchResult {
            best_order,
            best_fitness,
        }
    }

    /// Half of the population are uniform random shuffles, the other half are
    /// identical copies of the descending-weight order.
    fn initial_population(&mut self, n: usize) -> Vec<Order> {
        let mut population = Vec::with_capacity(self.config.population_size);
        for _ in 0..self.config.population_size / 2 {
            let mut order: Order = (0..n).collect();
            order.shuffle(&mut self.rng);
            population.push(order);
        }
        let weight_aware = descending_weight_order(&self.instance.cylinders);
        for _ in 0..self.config.population_size / 2 {
            population.push(weight_aware.clone());
        }
        population
    }

    /// Breeds a full replacement population: tournament selection of two
    /// parents, order crossover, at most one swap mutation per child.
    fn breed(&mut self, population: &[Order], fitnesses: &[u32]) -> Vec<Order> {
        let mut next_population = Vec::with_capacity(self.config.population_size);
        while next_population.len() < self.config.population_size {
            let parent_1 = self.tournament(population, fitnesses);
            let parent_2 = self.tournament(population, fitnesses);
            let mut child = order_crossover(&parent_1, &parent_2, &mut self.rng);
            if self.rng.random::<f32>() < self.config.mutation_rate {
                swap_mutation(&mut child, &mut self.rng);
            }
            next_population.push(child);
        }
        next_population
    }

    /// k-way tournament: sample k members without replacement, keep the one
    /// with the lowest fitness.
    fn tournament(&mut self, population: &[Order], fitnesses: &[u32]) -> Order {
        let contenders =
            rand::seq::index::sample(&mut self.rng, population.len(), self.config.tournament_size);
        let winner = contenders
            .iter()
            .min_by_key(|&i| fitnesses[i])
            .expect("tournament is never empty");
        population[winner].clone()
    }
}

/// Two-point order crossover: the segment between two random cut points is
/// copied verbatim from `parent_1`, the remaining positions are filled with
/// `parent_2`'s indices in their original order, skipping indices already
/// present. The child is always a permutation of the same index set as its
/// parents.
pub fn order_crossover(parent_1: &[usize], parent_2: &[usize], rng: &mut impl Rng) -> Order {
    let n = parent_1.len();
    if n < 2 {
        return parent_1.to_vec();
    }

    let cuts = rand::seq::index::sample(rng, n, 2);
    let (a, b) = (
        usize::min(cuts.index(0), cuts.index(1)),
        usize::max(cuts.index(0), cuts.index(1)),
    );

    let mut in_segment = vec![false; n];
    for &idx in &parent_1[a..b] {
        in_segment[idx] = true;
    }

    let mut fill = parent_2.iter().copied().filter(|&idx| !in_segment[idx]);
    let child: Order = (0..n)
        .map(|i| match (a..b).contains(&i) {
            true => parent_1[i],
            false => fill
                .next()
                .expect("parent 2 covers all positions outside the segment"),
        })
        .collect();

    debug_assert!(assertions::order_is_permutation(&child, n));

    child
}

/// Swaps two random distinct positions of `order`.
pub fn swap_mutation(order: &mut [usize], rng: &mut impl Rng) {
    if order.len() < 2 {
        return;
    }
    let positions = rand::seq::index::sample(rng, order.len(), 2);
    order.swap(positions.index(0), positions.index(1));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn crossover_always_yields_a_permutation() {
        let mut rng = SmallRng::seed_from_u64(42);
        for n in 2..12 {
            let mut parent_1: Order = (0..n).collect();
            let mut parent_2: Order = (0..n).collect();
            for _ in 0..100 {
                parent_1.shuffle(&mut rng);
                parent_2.shuffle(&mut rng);
                let child = order_crossover(&parent_1, &parent_2, &mut rng);
                assert!(assertions::order_is_permutation(&child, n));
            }
        }
    }

    #[test]
    fn crossover_of_single_element_orders() {
        let mut rng = SmallRng::seed_from_u64(0);
        let child = order_crossover(&[0], &[0], &mut rng);
        assert_eq!(child, vec![0]);
    }

    #[test]
    fn mutation_preserves_the_permutation() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut order: Order = (0..10).collect();
        for _ in 0..100 {
            swap_mutation(&mut order, &mut rng);
            assert!(assertions::order_is_permutation(&order, 10));
        }
    }
}
