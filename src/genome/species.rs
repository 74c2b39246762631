#[cfg(test)]
#[path = "../../tests/unit/genome/species_test.rs"]
mod species_test;

/// A single trait value within a chromosome.
pub type Gene = i64;

/// An arbitrary fitness score of a chromosome. Higher is better; negative values
/// are allowed, e.g. a minimization problem scored as negated cost.
pub type Fitness = i64;

/// Describes the genome shape shared by all chromosomes of one experiment: the
/// amount of gene positions and the inclusive upper bound of any gene value.
///
/// A species is immutable once created and is shared by reference between any
/// amount of chromosomes. Keeping it separate from the chromosomes themselves
/// allows reuse of the same evolutionary setup in multiple experiments.
#[derive(Debug)]
pub struct Species {
    num_genes: usize,
    max_allele: Gene,
}

impl Species {
    /// Creates a new instance of `Species`.
    pub fn new(num_genes: usize, max_allele: Gene) -> Self {
        assert!(max_allele >= 0);
        Self { num_genes, max_allele }
    }

    /// Returns the amount of gene positions.
    pub fn num_genes(&self) -> usize {
        self.num_genes
    }

    /// Returns the inclusive upper bound of a gene value.
    pub fn max_allele(&self) -> Gene {
        self.max_allele
    }

    /// Returns the amount of bits a single gene occupies in the packed encoding.
    pub fn bits_per_gene(&self) -> u32 {
        u64::BITS - (self.max_allele as u64).leading_zeros()
    }
}
