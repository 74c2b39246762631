#[cfg(test)]
#[path = "../../tests/unit/genome/chromosome_test.rs"]
mod chromosome_test;

use super::{Gene, Species};
use crate::utils::{GenericResult, Random};
use std::sync::Arc;

/// A single genetic strategy of some species: an ordered, mutable sequence of
/// gene values, each within `[0, max_allele]`.
#[derive(Clone, Debug)]
pub struct Chromosome {
    species: Arc<Species>,
    /// Gene values. Index 0 is the most significant group in the packed encoding.
    pub genes: Vec<Gene>,
}

impl Chromosome {
    /// Creates a chromosome of given species. Passed gene values are assigned
    /// starting at index 0; surplus values are ignored and missing ones are left
    /// zero-initialized.
    pub fn new(species: Arc<Species>, values: &[Gene]) -> Self {
        let mut genes = vec![0; species.num_genes()];
        genes.iter_mut().zip(values.iter()).for_each(|(gene, &value)| *gene = value);

        Self { species, genes }
    }

    /// Creates a chromosome with each gene randomized independently: one random
    /// byte is drawn per gene and reduced modulo `max_allele + 1`.
    ///
    /// NOTE: the reduction is not perfectly uniform when `max_allele + 1` is not a
    /// power of two. The bias is kept as-is for compatibility with previously
    /// generated populations.
    pub fn new_random(species: Arc<Species>, random: &dyn Random) -> GenericResult<Self> {
        let mut chromosome = Self::new(species, &[]);

        let mut buffer = vec![0_u8; chromosome.species.num_genes()];
        random.fill_bytes(&mut buffer)?;

        let modulo = chromosome.species.max_allele() + 1;
        chromosome.genes.iter_mut().zip(buffer.iter()).for_each(|(gene, &byte)| *gene = byte as Gene % modulo);

        Ok(chromosome)
    }

    /// Creates a chromosome whose genes form a uniformly random permutation of
    /// `[0, num_genes)`. Fails when the permutation cannot fit the allele range.
    pub fn new_permutation(species: Arc<Species>, random: &dyn Random) -> GenericResult<Self> {
        if species.max_allele() < species.num_genes() as Gene - 1 {
            return Err(format!(
                "cannot create a permutation of {} elements with max allele {}",
                species.num_genes(),
                species.max_allele()
            )
            .into());
        }

        let mut chromosome = Self::new(species, &[]);
        let permutation = random.permutation(chromosome.species.num_genes());
        chromosome.genes.iter_mut().zip(permutation).for_each(|(gene, value)| *gene = value as Gene);

        Ok(chromosome)
    }

    /// Packs gene values into a single unsigned integer, most significant gene
    /// first: gene 0 occupies the highest `bits_per_gene` bits. This encoding is
    /// a binary-exact contract shared with previously persisted chromosomes.
    pub fn encode(&self) -> GenericResult<u64> {
        check_packed_width(&self.species)?;

        let bits = self.species.bits_per_gene();
        Ok(self.genes.iter().fold(0_u64, |packed, &gene| (packed << bits) | gene as u64))
    }

    /// Restores a chromosome from its packed form. Exact inverse of
    /// [`Chromosome::encode`].
    pub fn decode(species: Arc<Species>, packed: u64) -> GenericResult<Self> {
        check_packed_width(&species)?;

        let bits = species.bits_per_gene();
        let mask = if bits == 0 { 0 } else { u64::MAX >> (u64::BITS - bits) };

        let mut chromosome = Self::new(species, &[]);
        let mut packed = packed;
        for gene in chromosome.genes.iter_mut().rev() {
            *gene = (packed & mask) as Gene;
            packed >>= bits;
        }

        Ok(chromosome)
    }

    /// Returns the species this chromosome belongs to.
    pub fn species(&self) -> &Arc<Species> {
        &self.species
    }
}

fn check_packed_width(species: &Species) -> GenericResult<()> {
    let total = species.num_genes() as u64 * species.bits_per_gene() as u64;
    if total > u64::BITS as u64 {
        Err(format!(
            "cannot pack {} genes of {} bits each into {} bits",
            species.num_genes(),
            species.bits_per_gene(),
            u64::BITS
        )
        .into())
    } else {
        Ok(())
    }
}
