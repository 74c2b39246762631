//! This module contains example models and logic to demonstrate practical usage
//! of the crate.

#[cfg(test)]
#[path = "../tests/unit/example_test.rs"]
mod example_test;

use crate::evolution::{Evolver, Telemetry};
use crate::genome::{Chromosome, Fitness, Gene};
use crate::utils::Environment;

/// An example 0/1 knapsack instance scored over binary genomes.
pub struct Knapsack {
    /// Weight capacity.
    pub capacity: i64,
    /// Item weights.
    pub weights: Vec<i64>,
    /// Item values.
    pub values: Vec<i64>,
}

impl Knapsack {
    /// Scores a binary genome greedily: a gene value of one takes the item when
    /// it still fits the remaining capacity.
    pub fn score(&self, genes: &[Gene]) -> Fitness {
        let mut weight = 0;
        let mut value = 0;
        for (index, &gene) in genes.iter().enumerate() {
            if gene == 0 || weight + self.weights[index] > self.capacity {
                continue;
            }
            weight += self.weights[index];
            value += self.values[index];
        }

        value
    }
}

/// Runs a caller-owned evolution loop for the given amount of generations and
/// returns the best chromosome ever scored together with its fitness.
///
/// The population and fitness vector stay under the caller's control between
/// generations; this helper only demonstrates the canonical loop shape.
pub fn run_evolution<F>(
    mut population: Vec<Chromosome>,
    evolver: &Evolver,
    environment: &Environment,
    telemetry: &mut Telemetry,
    generations: usize,
    score: F,
) -> Option<(Chromosome, Fitness)>
where
    F: Fn(&Chromosome) -> Fitness,
{
    let random = environment.random.as_ref();
    let mut fitness = vec![0; population.len()];

    let mut best: Option<(Chromosome, Fitness)> = None;
    for _ in 0..generations {
        for (index, chromosome) in population.iter().enumerate() {
            fitness[index] = score(chromosome);
            if best.as_ref().map_or(true, |&(_, value)| fitness[index] > value) {
                best = Some((chromosome.clone(), fitness[index]));
            }
        }
        telemetry.on_generation(&fitness);

        evolver.evolve(random, &mut population, &fitness);
    }

    best
}
