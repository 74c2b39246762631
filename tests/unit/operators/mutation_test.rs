use super::*;
use crate::genome::Species;
use crate::helpers::FakeRandom;
use std::sync::Arc;

/// Mutates a `0xBAADF00D` chromosome of four byte-wide genes and compares the
/// packed result.
fn assert_mutation(mutator: &dyn Mutator, ints: Vec<i64>, expected: u64) {
    let species = Arc::new(Species::new(4, 0xFF));
    let mut chromosome = Chromosome::decode(species, 0xBAADF00D).expect("cannot decode");
    let random = FakeRandom::new(ints, vec![]);

    mutator.mutate(&random, &mut chromosome);

    assert_eq!(chromosome.encode().expect("cannot encode"), expected);
}

#[test]
fn can_reset_first_gene() {
    assert_mutation(&RandomResettingMutation, vec![0, 0xDA], 0xDAADF00D);
}

#[test]
fn can_reset_middle_gene() {
    assert_mutation(&RandomResettingMutation, vec![2, 0xD0], 0xBAADD00D);
}

#[test]
fn can_reset_last_gene() {
    assert_mutation(&RandomResettingMutation, vec![3, 0x01], 0xBAADF001);
}

#[test]
fn can_keep_reset_values_below_max_allele() {
    let random = crate::utils::DefaultRandom::default();
    let species = Arc::new(Species::new(8, 5));

    for _ in 0..100 {
        let mut chromosome = Chromosome::new(species.clone(), &[5, 5, 5, 5, 5, 5, 5, 5]);
        RandomResettingMutation.mutate(&random, &mut chromosome);

        // exactly one gene is overwritten and the top allele value is excluded
        assert_eq!(chromosome.genes.iter().filter(|&&gene| gene == 5).count(), 7);
        assert!(chromosome.genes.iter().all(|&gene| (0..=5).contains(&gene)));
    }
}

#[test]
fn can_swap_with_first_gene() {
    assert_mutation(&SwapMutation, vec![0, 0], 0xADBAF00D);
}

#[test]
fn can_swap_with_last_gene() {
    assert_mutation(&SwapMutation, vec![2, 0], 0xBAAD0DF0);
}

#[test]
fn can_swap_first_and_last_gene() {
    assert_mutation(&SwapMutation, vec![0, 2], 0x0DADF0BA);
}

#[test]
fn can_swap_middle_genes() {
    assert_mutation(&SwapMutation, vec![1, 0], 0xBAF0AD0D);
}

#[test]
fn can_scramble_first_genes() {
    assert_mutation(&ScrambleMutation, vec![0, 0, 1], 0xADBAF00D);
}

#[test]
fn can_scramble_last_genes() {
    assert_mutation(&ScrambleMutation, vec![2, 0, 1], 0xBAAD0DF0);
}

#[test]
fn can_scramble_middle_genes() {
    assert_mutation(&ScrambleMutation, vec![1, 0, 1], 0xBAF0AD0D);
}

#[test]
fn can_scramble_many_genes() {
    assert_mutation(&ScrambleMutation, vec![1, 1, 1, 2], 0xBAF00DAD);
}

#[test]
fn can_invert_first_genes() {
    assert_mutation(&InversionMutation, vec![0, 0], 0xADBAF00D);
}

#[test]
fn can_invert_last_genes() {
    assert_mutation(&InversionMutation, vec![2, 0], 0xBAAD0DF0);
}

#[test]
fn can_invert_middle_genes() {
    assert_mutation(&InversionMutation, vec![1, 0], 0xBAF0AD0D);
}

#[test]
fn can_invert_all_genes() {
    assert_mutation(&InversionMutation, vec![0, 2], 0x0DF0ADBA);
}

#[test]
fn can_keep_permutation_mutators_value_preserving() {
    let random = crate::utils::DefaultRandom::default();
    let species = Arc::new(Species::new(10, 9));

    for mutator in [&SwapMutation as &dyn Mutator, &ScrambleMutation, &InversionMutation] {
        for _ in 0..100 {
            let mut chromosome =
                Chromosome::new_permutation(species.clone(), &random).expect("cannot create permutation");
            mutator.mutate(&random, &mut chromosome);

            let mut genes = chromosome.genes.clone();
            genes.sort_unstable();
            assert_eq!(genes, (0..10).collect::<Vec<_>>());
        }
    }
}
