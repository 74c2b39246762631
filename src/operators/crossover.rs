#[cfg(test)]
#[path = "../../tests/unit/operators/crossover_test.rs"]
mod crossover_test;

use crate::genome::{Chromosome, Gene};
use crate::utils::Random;
use rustc_hash::FxHashSet;
use std::fmt::{Display, Formatter};

/// A strategy for generating two children based on two parents.
pub trait Crossover: Display {
    /// Produces two children from given parents.
    fn crossover(&self, random: &dyn Random, a: &Chromosome, b: &Chromosome) -> (Chromosome, Chromosome);
}

/// A generalization of the classic crossover method: `points` distinct cut
/// positions are dealt and the children alternate their source parent at every
/// cut. Appropriate for numeric chromosomes.
#[derive(Clone, Copy, Debug)]
pub struct MultiPointCrossover {
    /// Amount of cut positions.
    pub points: usize,
}

impl Crossover for MultiPointCrossover {
    fn crossover(&self, random: &dyn Random, a: &Chromosome, b: &Chromosome) -> (Chromosome, Chromosome) {
        let mut x = a.clone();
        let mut y = b.clone();

        let mut cuts = random.deal(x.species().num_genes(), self.points);
        cuts.sort_unstable();

        // swapping the remaining tails at every cut makes the segments between
        // cuts alternate their source parent
        for cut in cuts {
            x.genes[cut..].swap_with_slice(&mut y.genes[cut..]);
        }

        (x, y)
    }
}

impl Display for MultiPointCrossover {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "MultiPointCrossover({})", self.points)
    }
}

/// Picks a single random weight from [0, 1) and produces children as weighted
/// averages of the parents with inverse weights. Appropriate for numeric
/// chromosomes; gene values trend towards the population average.
#[derive(Clone, Copy, Debug, Default)]
pub struct WholeArithmeticRecombination;

impl Crossover for WholeArithmeticRecombination {
    fn crossover(&self, random: &dyn Random, a: &Chromosome, b: &Chromosome) -> (Chromosome, Chromosome) {
        let weight = random.uniform_real(0., 1.);

        let mut x = a.clone();
        let mut y = b.clone();
        for (index, (&gene_a, &gene_b)) in a.genes.iter().zip(b.genes.iter()).enumerate() {
            // interpolating integer genes twice would also round twice; rounding
            // happens once and the second child gets the mirrored integer delta
            let value = (weight * gene_a as f64 + (1. - weight) * gene_b as f64).round() as Gene;
            x.genes[index] = value;
            y.genes[index] = gene_b - (value - gene_a);
        }

        (x, y)
    }
}

impl Display for WholeArithmeticRecombination {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "WholeArithmeticRecombination")
    }
}

/// Davis Order Crossover, aka OX1: two cut points divide the genome into three
/// segments; the middle segment is preserved from the primary parent and the
/// rest is rotationally filled in the secondary parent's scan order.
///
/// Appropriate for permutation genomes, such as touring problems: the children
/// are valid permutations if and only if both parents are permutations of the
/// same value set.
#[derive(Clone, Copy, Debug, Default)]
pub struct DavisOrderCrossover;

impl Crossover for DavisOrderCrossover {
    fn crossover(&self, random: &dyn Random, a: &Chromosome, b: &Chromosome) -> (Chromosome, Chromosome) {
        let mut cuts = random.deal(b.species().num_genes() + 1, 2);
        cuts.sort_unstable();

        (build_order_child(a, b, cuts[0], cuts[1]), build_order_child(b, a, cuts[0], cuts[1]))
    }
}

fn build_order_child(primary: &Chromosome, secondary: &Chromosome, lower: usize, upper: usize) -> Chromosome {
    let num_genes = primary.species().num_genes();
    let mut child = Chromosome::new(primary.species().clone(), &[]);
    let mut seen = FxHashSet::default();

    for index in lower..upper {
        seen.insert(primary.genes[index]);
        child.genes[index] = primary.genes[index];
    }

    // fill unseen values of the secondary parent starting at upper, wrapping
    // around; for permutation parents this stops exactly at lower
    let mut insert = upper % num_genes;
    for &value in secondary.genes.iter() {
        if seen.contains(&value) {
            continue;
        }
        child.genes[insert] = value;
        insert = (insert + 1) % num_genes;
    }

    child
}

impl Display for DavisOrderCrossover {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "DavisOrderCrossover")
    }
}
