#[cfg(test)]
#[path = "../../tests/unit/operators/selection_test.rs"]
mod selection_test;

use crate::genome::Fitness;
use crate::utils::Random;
use std::fmt::{Display, Formatter};

/// Selects which individuals of the current population become parents of the
/// next generation.
///
/// An implementation may not be used by more than one evolution at a time: all
/// randomness is drawn from the caller supplied source which is itself assumed
/// single threaded.
pub trait NaturalSelection: Display {
    /// Returns `num_parents` indices into the fitness vector. Indices may repeat.
    fn select_parents(&self, random: &dyn Random, num_parents: usize, fitness: &[Fitness]) -> Vec<usize>;
}

/// Creates a "roulette" wheel where each individual gets a slice proportional to
/// its fitness, then spins the wheel with `num_parents` equally spaced pointers.
///
/// The wheel uses integer arithmetic: it maps to faster ALUs than a float
/// distribution, but requires the total fitness to be much greater than
/// `num_parents`, otherwise the granularity error becomes visible.
#[derive(Clone, Copy, Debug, Default)]
pub struct StochasticUniversalSampling;

impl NaturalSelection for StochasticUniversalSampling {
    fn select_parents(&self, random: &dyn Random, num_parents: usize, fitness: &[Fitness]) -> Vec<usize> {
        let total = fitness.iter().sum::<Fitness>();

        let distance = total / num_parents as Fitness;
        // spinning the wheel up to distance is equivalent to spinning it fully
        // and taking the position modulo the wheel size
        let mut pos = random.uniform_long(0, distance - 1);

        // walk the wheel accumulating fitness; an index whose slice spans several
        // pointers is selected repeatedly
        let mut indexes = Vec::with_capacity(num_parents);
        let mut accumulated = 0;
        let mut next = 0;
        while indexes.len() < num_parents {
            accumulated += fitness[next];
            while pos < accumulated {
                indexes.push(next);
                pos += distance;
            }
            next += 1;
        }

        indexes
    }
}

impl Display for StochasticUniversalSampling {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "StochasticUniversalSampling")
    }
}

/// Gives each individual odds of reproduction based not on its proportional
/// fitness, but on its overall fitness rank: the best individual weighs `N`, the
/// worst weighs 1. This keeps populations converging even when raw fitness
/// magnitudes are heavily skewed or negative.
#[derive(Clone, Copy, Debug, Default)]
pub struct RankedSelection;

impl NaturalSelection for RankedSelection {
    fn select_parents(&self, random: &dyn Random, num_parents: usize, fitness: &[Fitness]) -> Vec<usize> {
        let mut ranked = fitness.iter().copied().enumerate().collect::<Vec<_>>();
        ranked.sort_by(|(_, a), (_, b)| b.cmp(a));

        let total = fitness.len() * (fitness.len() + 1) / 2;
        let distance = total / num_parents;
        let mut pos = random.uniform_int(0, distance as i32 - 1) as usize;

        let mut indexes = Vec::with_capacity(num_parents);
        let mut accumulated = 0;
        let mut next = 0;
        while indexes.len() < num_parents {
            accumulated += fitness.len() - next;
            while pos < accumulated {
                indexes.push(ranked[next].0);
                pos += distance;
            }
            next += 1;
        }

        indexes
    }
}

impl Display for RankedSelection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RankedSelection")
    }
}

/// Picks each parent by dealing `size` distinct candidates from the population
/// and selecting the one with the greatest fitness.
#[derive(Clone, Copy, Debug)]
pub struct TournamentSelection {
    /// Amount of candidates dealt per parent.
    pub size: usize,
}

impl NaturalSelection for TournamentSelection {
    fn select_parents(&self, random: &dyn Random, num_parents: usize, fitness: &[Fitness]) -> Vec<usize> {
        (0..num_parents).map(|_| self.select_one(random, fitness)).collect()
    }
}

impl TournamentSelection {
    fn select_one(&self, random: &dyn Random, fitness: &[Fitness]) -> usize {
        let candidates = random.deal(fitness.len(), self.size);

        // later drawn candidates win ties
        let mut max_index = candidates[0];
        for &candidate in candidates[1..].iter() {
            if fitness[candidate] >= fitness[max_index] {
                max_index = candidate;
            }
        }

        max_index
    }
}

impl Display for TournamentSelection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "TournamentSelection({})", self.size)
    }
}
