use cylpack::io::svg::svg_util::SvgDrawOptions;
use serde::{Deserialize, Serialize};

/// Configuration for the GSF solvers
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct GSFConfig {
    /// Number of permutations in every generation of the genetic algorithm
    pub population_size: usize,
    /// Maximum number of generations bred before the genetic algorithm gives up
    pub n_generations: usize,
    /// Probability that a freshly bred child undergoes a single swap mutation
    pub mutation_rate: f32,
    /// Number of candidates sampled (without replacement) per tournament selection
    pub tournament_size: usize,
    /// Attempt budget of the random-restart solver
    pub n_restart_attempts: usize,
    /// Seed for the PRNG. If undefined, the solvers will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Also reject layouts heavier than the container rating.
    /// Not part of the reference constraint set, off by default.
    #[serde(default)]
    pub check_max_weight: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for GSFConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            n_generations: 500,
            mutation_rate: 0.15,
            tournament_size: 3,
            n_restart_attempts: 200,
            prng_seed: Some(0),
            check_max_weight: false,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
