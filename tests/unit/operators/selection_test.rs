use super::*;
use crate::helpers::FakeRandom;

fn assert_parents(
    strategy: &dyn NaturalSelection,
    ints: Vec<i64>,
    num_parents: usize,
    fitness: &[Fitness],
    expected: &[usize],
) {
    let random = FakeRandom::new(ints, vec![]);

    assert_eq!(strategy.select_parents(&random, num_parents, fitness), expected);
}

#[test]
fn can_pick_every_other_with_even_offset() {
    assert_parents(&StochasticUniversalSampling, vec![1], 3, &[2, 2, 2, 2, 2, 2], &[0, 2, 4]);
}

#[test]
fn can_pick_every_other_with_odd_offset() {
    assert_parents(&StochasticUniversalSampling, vec![3], 3, &[2, 2, 2, 2, 2, 2], &[1, 3, 5]);
}

#[test]
fn can_pick_top_individual_exclusively() {
    // a dominant individual spans all pointer positions
    assert_parents(&StochasticUniversalSampling, vec![1], 3, &[10, 1, 1], &[0, 0, 0]);
}

#[test]
fn can_pick_redundantly_on_wide_slices() {
    assert_parents(&StochasticUniversalSampling, vec![2], 3, &[10, 1, 1], &[0, 0, 1]);
}

#[test]
fn can_rank_from_wheel_begin() {
    // rank weights are 3 2 1, the wheel distance is 6 / 3 = 2
    assert_parents(&RankedSelection, vec![0], 3, &[10, 5, 1], &[0, 0, 1]);
}

#[test]
fn can_rank_from_wheel_end() {
    assert_parents(&RankedSelection, vec![1], 3, &[10, 5, 1], &[0, 1, 2]);
}

#[test]
fn can_rank_scrambled_fitness() {
    // rank weights are 2 4 3 1, the wheel distance is 10 / 2 = 5
    assert_parents(&RankedSelection, vec![4], 2, &[4, 20, 16, 3], &[2, 3]);
}

#[test]
fn can_rank_equal_fitness_in_stable_order() {
    assert_parents(&RankedSelection, vec![0], 3, &[7, 7, 7], &[0, 0, 1]);
}

#[test]
fn can_run_tournament_of_one() {
    assert_parents(&TournamentSelection { size: 1 }, vec![3, 1], 2, &[4, 20, 16, 3], &[3, 1]);
}

#[test]
fn can_run_tournament_of_two() {
    // deals are {3, 2} and {1, 2}
    assert_parents(&TournamentSelection { size: 2 }, vec![3, 2, 1, 2], 2, &[4, 20, 16, 3], &[2, 1]);
}

#[test]
fn can_prefer_later_drawn_candidate_on_ties() {
    assert_parents(&TournamentSelection { size: 2 }, vec![0, 3], 1, &[5, 9, 9, 5], &[3]);
}

#[test]
fn can_select_with_negative_fitness() {
    // ranked selection does not require positive fitness values
    assert_parents(&RankedSelection, vec![0], 2, &[-10, -5, -20], &[1, 0]);
}
