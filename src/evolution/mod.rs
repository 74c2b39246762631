//! Contains the generational replacement orchestrator and evolution telemetry.

#[cfg(test)]
#[path = "../../tests/unit/evolution/evolver_test.rs"]
mod evolver_test;

mod replacement;
use self::replacement::k_min_indexes;

pub mod telemetry;
pub use self::telemetry::*;

use crate::genome::{Chromosome, Fitness};
use crate::operators::{Crossover, Mutator, NaturalSelection};
use crate::operators::{MultiPointCrossover, ScrambleMutation, StochasticUniversalSampling};
use crate::utils::{GenericResult, Random};

/// Replaces a part of one generation with the next one: parents are selected by
/// a [`NaturalSelection`] strategy, recombined pairwise by a [`Crossover`]
/// strategy, mutated with the configured probability, and the children overwrite
/// the currently worst individuals.
///
/// The population itself and its fitness vector are owned by the caller's loop;
/// the evolver never changes the population length, only slot contents.
pub struct Evolver {
    replacement_count: usize,
    mutation_rate: f32,
    selection: Box<dyn NaturalSelection + Send + Sync>,
    crossover: Box<dyn Crossover + Send + Sync>,
    mutator: Box<dyn Mutator + Send + Sync>,
}

impl Evolver {
    /// Runs one generational step, overwriting the `replacement_count` worst
    /// slots of the population with freshly bred children.
    ///
    /// Population and fitness must be index aligned and at least
    /// `replacement_count` long; violating this is a programming error.
    pub fn evolve(&self, random: &dyn Random, population: &mut [Chromosome], fitness: &[Fitness]) {
        assert_eq!(population.len(), fitness.len());
        assert!(self.replacement_count <= population.len());

        let mut indexes = self.selection.select_parents(random, self.replacement_count, fitness);
        // decorrelate pairing order from selection order
        random.shuffle(&mut indexes);

        let mut children = Vec::with_capacity(self.replacement_count);
        for pair in indexes.chunks_exact(2).take(self.replacement_count / 2) {
            let (mut x, mut y) = self.crossover.crossover(random, &population[pair[0]], &population[pair[1]]);
            if random.uniform_ratio() < self.mutation_rate {
                self.mutator.mutate(random, &mut x);
            }
            if random.uniform_ratio() < self.mutation_rate {
                self.mutator.mutate(random, &mut y);
            }
            children.push(x);
            children.push(y);
        }

        for (child, slot) in children.into_iter().zip(k_min_indexes(fitness, self.replacement_count)) {
            population[slot] = child;
        }
    }

    /// Returns the amount of individuals replaced each generation.
    pub fn replacement_count(&self) -> usize {
        self.replacement_count
    }
}

/// Provides a way to configure and build an [`Evolver`].
///
/// Defaults match the engine's canonical setup: stochastic universal sampling,
/// single point crossover and scramble mutation.
pub struct EvolverBuilder {
    replacement_count: usize,
    mutation_rate: f32,
    selection: Box<dyn NaturalSelection + Send + Sync>,
    crossover: Box<dyn Crossover + Send + Sync>,
    mutator: Box<dyn Mutator + Send + Sync>,
}

impl Default for EvolverBuilder {
    fn default() -> Self {
        Self {
            replacement_count: 2,
            mutation_rate: 0.01,
            selection: Box::new(StochasticUniversalSampling),
            crossover: Box::new(MultiPointCrossover { points: 1 }),
            mutator: Box::new(ScrambleMutation),
        }
    }
}

impl EvolverBuilder {
    /// Sets the amount of individuals replaced each generation. An odd value is
    /// rounded up to the next even one as children are produced in pairs.
    pub fn with_replacement_count(mut self, count: usize) -> Self {
        self.replacement_count = count;
        self
    }

    /// Sets the probability of each child being mutated.
    pub fn with_mutation_rate(mut self, rate: f32) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the parent selection strategy.
    pub fn with_selection(mut self, selection: Box<dyn NaturalSelection + Send + Sync>) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the crossover strategy.
    pub fn with_crossover(mut self, crossover: Box<dyn Crossover + Send + Sync>) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the mutation strategy.
    pub fn with_mutator(mut self, mutator: Box<dyn Mutator + Send + Sync>) -> Self {
        self.mutator = mutator;
        self
    }

    /// Builds an [`Evolver`], validating the configuration.
    pub fn build(self) -> GenericResult<Evolver> {
        if self.replacement_count == 0 {
            return Err("replacement count must be positive".into());
        }

        if !(0. ..=1.).contains(&self.mutation_rate) {
            return Err(format!("mutation rate must be within [0, 1], got {}", self.mutation_rate).into());
        }

        Ok(Evolver {
            replacement_count: self.replacement_count + self.replacement_count % 2,
            mutation_rate: self.mutation_rate,
            selection: self.selection,
            crossover: self.crossover,
            mutator: self.mutator,
        })
    }
}
