use super::*;

#[test]
fn can_keep_uniform_int_within_bounds() {
    let random = DefaultRandom::default();

    (0..1000).for_each(|_| {
        let value = random.uniform_int(3, 7);
        assert!((3..=7).contains(&value));
    });

    assert_eq!(random.uniform_int(5, 5), 5);
}

#[test]
fn can_keep_uniform_ratio_within_bounds() {
    let random = DefaultRandom::default();

    (0..1000).for_each(|_| {
        let value = random.uniform_ratio();
        assert!((0. ..1.).contains(&value));
    });
}

#[test]
fn can_fill_bytes() {
    let random = DefaultRandom::default();
    let mut buffer = [0_u8; 16];

    random.fill_bytes(&mut buffer).expect("cannot fill bytes");

    assert_ne!(buffer, [0_u8; 16]);
}

#[test]
fn can_return_complete_permutation() {
    let random = DefaultRandom::default();

    let mut values = random.permutation(100);
    values.sort_unstable();

    assert_eq!(values, (0..100).collect::<Vec<_>>());
}

#[test]
fn can_deal_distinct_values() {
    let random = DefaultRandom::default();

    for _ in 0..100 {
        let values = random.deal(10, 4);

        assert_eq!(values.len(), 4);
        assert!(values.iter().all(|&value| value < 10));

        let mut distinct = values;
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(distinct.len(), 4);
    }
}

#[test]
fn can_deal_all_values() {
    let random = DefaultRandom::default();

    let mut values = random.deal(8, 8);
    values.sort_unstable();

    assert_eq!(values, (0..8).collect::<Vec<_>>());
}

#[test]
fn can_shuffle_in_place() {
    let random = DefaultRandom::default();

    let mut values = (0..100).collect::<Vec<_>>();
    random.shuffle(&mut values);

    assert_ne!(values, (0..100).collect::<Vec<_>>());

    values.sort_unstable();
    assert_eq!(values, (0..100).collect::<Vec<_>>());
}
