use connect_api::{ConnectError, group_partitions};
use proptest::prelude::*;

fn sizes<T>(groups: &[Vec<T>]) -> Vec<usize> {
    groups.iter().map(Vec::len).collect()
}

#[test]
fn seven_into_three_puts_larger_groups_first() {
    let groups = group_partitions((1..=7).collect(), 3).unwrap();
    assert_eq!(sizes(&groups), [3, 2, 2]);
    assert_eq!(groups, [vec![1, 2, 3], vec![4, 5], vec![6, 7]]);
}

#[test]
fn even_split_and_single_group() {
    let groups = group_partitions(vec!["a", "b", "c", "d"], 2).unwrap();
    assert_eq!(groups, [vec!["a", "b"], vec!["c", "d"]]);

    let groups = group_partitions(vec!["a", "b"], 1).unwrap();
    assert_eq!(groups, [vec!["a", "b"]]);
}

#[test]
fn fewer_elements_than_groups_leaves_empty_groups() {
    let groups = group_partitions(vec![1, 2], 4).unwrap();
    assert_eq!(sizes(&groups), [1, 1, 0, 0]);

    let groups = group_partitions(Vec::<u8>::new(), 2).unwrap();
    assert_eq!(sizes(&groups), [0, 0]);
}

#[test]
fn zero_groups_is_an_error() {
    assert!(matches!(
        group_partitions(vec![1], 0),
        Err(ConnectError::InvalidGroupCount { num_groups: 0 })
    ));
}

proptest! {
    #[test]
    fn groups_are_balanced_contiguous_and_ordered(
        elements in proptest::collection::vec(any::<u16>(), 0..64),
        num_groups in 1usize..16,
    ) {
        let groups = group_partitions(elements.clone(), num_groups).unwrap();
        prop_assert_eq!(groups.len(), num_groups);

        let lens = sizes(&groups);
        let max = lens.iter().copied().max().unwrap_or(0);
        let min = lens.iter().copied().min().unwrap_or(0);
        prop_assert!(max - min <= 1);
        prop_assert!(lens.windows(2).all(|w| w[0] >= w[1]));

        let flattened: Vec<u16> = groups.into_iter().flatten().collect();
        prop_assert_eq!(flattened, elements);
    }
}
