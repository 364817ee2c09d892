use crate::{BTree, Outcome};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// The number of keys inserted in each proptest case.
const TEST_SIZE: usize = 300;

fn order_strategy() -> impl Strategy<Value = usize> {
    3usize..12
}

/// A narrow range so duplicates show up often
fn key_strategy() -> impl Strategy<Value = i32> {
    -500i32..500
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn invariants_hold_after_every_insert(
        order in order_strategy(),
        keys in proptest::collection::vec(key_strategy(), 0..TEST_SIZE),
    ) {
        let mut tree = BTree::with_order(order).unwrap();
        for key in keys {
            let _ = tree.insert(key);
            tree.assert_invariants();
        }
    }

    #[test]
    fn matches_btreeset(
        order in order_strategy(),
        keys in proptest::collection::vec(key_strategy(), 0..TEST_SIZE),
    ) {
        let mut tree = BTree::with_order(order).unwrap();
        let mut expected = BTreeSet::new();
        for key in keys {
            let outcome = tree.insert(key);
            let was_new = expected.insert(key);
            prop_assert_eq!(outcome == Outcome::Inserted, was_new);
        }

        prop_assert_eq!(tree.len(), expected.len());
        prop_assert_eq!(tree.traverse(), expected.iter().cloned().collect::<Vec<_>>());
        prop_assert!(tree.iter().eq(expected.iter()));
    }

    #[test]
    fn search_round_trip(
        order in order_strategy(),
        keys in proptest::collection::vec(key_strategy(), 0..TEST_SIZE),
        probes in proptest::collection::vec(-600i32..600, 50),
    ) {
        let mut tree = BTree::with_order(order).unwrap();
        tree.extend(keys.iter().cloned());
        for key in &keys {
            prop_assert!(tree.search(key));
        }
        for probe in &probes {
            prop_assert_eq!(tree.search(probe), keys.contains(probe));
        }
    }

    #[test]
    fn duplicates_are_idempotent(
        order in order_strategy(),
        keys in proptest::collection::vec(key_strategy(), 1..TEST_SIZE),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut tree = BTree::with_order(order).unwrap();
        tree.extend(keys.iter().cloned());
        let before = tree.traverse();
        let height = tree.height();

        let key = keys[pick.index(keys.len())];
        prop_assert_eq!(tree.insert(key), Outcome::Duplicate);
        prop_assert_eq!(tree.traverse(), before);
        prop_assert_eq!(tree.height(), height);
        tree.assert_invariants();
    }
}
