//! Property-based tests comparing the forest with a naive labelling oracle.

use proptest::prelude::*;

use super::DisjointSet;
use crate::test_utils::{NaivePartition, suite_proptest_config};

const MAX_LEN: usize = 48;

#[derive(Clone, Copy, Debug)]
enum Operation {
    Unite(usize, usize),
    Same(usize, usize),
    Find(usize),
    Size(usize),
}

fn operation_strategy(len: usize) -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => (0..len, 0..len).prop_map(|(left, right)| Operation::Unite(left, right)),
        2 => (0..len, 0..len).prop_map(|(left, right)| Operation::Same(left, right)),
        1 => (0..len).prop_map(Operation::Find),
        1 => (0..len).prop_map(Operation::Size),
    ]
}

fn scenario_strategy() -> impl Strategy<Value = (usize, Vec<Operation>)> {
    (1..=MAX_LEN).prop_flat_map(|len| {
        (
            Just(len),
            prop::collection::vec(operation_strategy(len), 0..160),
        )
    })
}

fn assert_matches_oracle(
    set: &mut DisjointSet,
    oracle: &NaivePartition,
    len: usize,
) -> Result<(), TestCaseError> {
    prop_assert_eq!(set.group_count(), oracle.group_count());
    let mut total = 0;
    for node in 0..len {
        prop_assert_eq!(set.size(node), oracle.size(node));
        let root = set.find(node);
        prop_assert_eq!(set.parent_of(root), None);
        prop_assert!(set.same(node, root));
        if root == node {
            total += set.size(node);
        }
    }
    prop_assert_eq!(total, len);
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn agrees_with_naive_partition((len, operations) in scenario_strategy()) {
        let mut set = DisjointSet::new(len);
        let mut oracle = NaivePartition::new(len);

        for operation in operations {
            match operation {
                Operation::Unite(left, right) => {
                    let before = set.size(left) + set.size(right);
                    let merged = set.unite(left, right);
                    prop_assert_eq!(merged, oracle.unite(left, right));
                    if merged {
                        prop_assert_eq!(set.size(left), before);
                    }
                }
                Operation::Same(left, right) => {
                    prop_assert_eq!(set.same(left, right), oracle.same(left, right));
                    prop_assert_eq!(set.same(left, right), set.same(right, left));
                }
                Operation::Find(node) => {
                    let first = set.find(node);
                    prop_assert_eq!(set.find(node), first);
                    prop_assert!(set.parent_of(node).is_none_or(|parent| parent == first));
                }
                Operation::Size(node) => {
                    prop_assert_eq!(set.size(node), oracle.size(node));
                }
            }
        }

        assert_matches_oracle(&mut set, &oracle, len)?;
    }

    #[test]
    fn merged_pairs_stay_merged(
        (len, operations) in scenario_strategy(),
        checks in prop::collection::vec((0..MAX_LEN, 0..MAX_LEN), 1..8),
    ) {
        let mut set = DisjointSet::new(len);
        let checks: Vec<(usize, usize)> = checks
            .into_iter()
            .map(|(left, right)| (left % len, right % len))
            .collect();
        for &(left, right) in &checks {
            set.unite(left, right);
        }

        for operation in operations {
            if let Operation::Unite(left, right) = operation {
                set.unite(left, right);
            }
            for &(left, right) in &checks {
                prop_assert!(set.same(left, right));
            }
        }
    }
}
