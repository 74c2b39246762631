#[cfg(test)]
#[path = "../../tests/unit/operators/mutation_test.rs"]
mod mutation_test;

use crate::genome::{Chromosome, Gene};
use crate::utils::Random;
use std::fmt::{Display, Formatter};

/// Introduces randomness into the population. Mutations should stay rare to
/// avoid degrading the search into a random walk, yet some are necessary for
/// convergence.
///
/// The application probability is the orchestrator's concern: `mutate` always
/// mutates. Mutators work on unpacked chromosomes because the species' bit
/// length matters to some of them.
pub trait Mutator: Display {
    /// Mutates the chromosome in place.
    fn mutate(&self, random: &dyn Random, chromosome: &mut Chromosome);
}

/// Overwrites one randomly picked gene with a random value below the maximum
/// allele. Equivalent to bit flip mutation for species with a bit width of one.
/// Most useful when genes affect independent behavior, i.e. not for permutation
/// genomes.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomResettingMutation;

impl Mutator for RandomResettingMutation {
    fn mutate(&self, random: &dyn Random, chromosome: &mut Chromosome) {
        let index = random.uniform_int(0, chromosome.genes.len() as i32 - 1) as usize;
        // NOTE the replacement value never reaches the max allele itself; kept
        // as-is for compatibility
        let value = random.uniform_int(0, chromosome.species().max_allele() as i32 - 1) as Gene;
        chromosome.genes[index] = value;
    }
}

impl Display for RandomResettingMutation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomResettingMutation")
    }
}

/// Swaps the values of two genes. Most appropriate for permutation genomes.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwapMutation;

impl Mutator for SwapMutation {
    fn mutate(&self, random: &dyn Random, chromosome: &mut Chromosome) {
        // drawing an index plus a forward offset guarantees two distinct
        // positions without rejection sampling
        let len = chromosome.genes.len() as i32;
        let first = random.uniform_int(0, len - 2);
        let offset = random.uniform_int(0, len - first - 2) + 1;

        chromosome.genes.swap(first as usize, (first + offset) as usize);
    }
}

impl Display for SwapMutation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SwapMutation")
    }
}

/// Picks a random segment and scrambles the genes within it. Most appropriate
/// for permutation genomes.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrambleMutation;

impl Mutator for ScrambleMutation {
    fn mutate(&self, random: &dyn Random, chromosome: &mut Chromosome) {
        let len = chromosome.genes.len() as i32;
        let lower = random.uniform_int(0, len - 2);
        let span = random.uniform_int(0, len - lower - 2) + 1;

        for index in lower..lower + span {
            let other = lower + random.uniform_int(0, span);
            chromosome.genes.swap(index as usize, other as usize);
        }
    }
}

impl Display for ScrambleMutation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ScrambleMutation")
    }
}

/// Picks a random segment and reverses the gene order within it. Most
/// appropriate for permutation genomes.
#[derive(Clone, Copy, Debug, Default)]
pub struct InversionMutation;

impl Mutator for InversionMutation {
    fn mutate(&self, random: &dyn Random, chromosome: &mut Chromosome) {
        let len = chromosome.genes.len() as i32;
        let lower = random.uniform_int(0, len - 2);
        let span = random.uniform_int(0, len - lower - 2) + 1;

        let (lower, upper) = (lower as usize, (lower + span) as usize);
        chromosome.genes[lower..=upper].reverse();
    }
}

impl Display for InversionMutation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "InversionMutation")
    }
}
