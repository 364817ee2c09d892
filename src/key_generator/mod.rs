//! Deterministic key streams used to load trees in tests and benchmarks
mod random;
mod sequential;

pub use random::*;
pub use sequential::*;

#[cfg(test)]
mod test {
    use super::*;
    use crate::BTree;

    #[test]
    fn load_tree() {
        fn check<I: Iterator<Item = u64>>(keys: I, expected_len: usize) {
            let mut tree = BTree::with_order(4).unwrap();
            tree.extend(keys);
            tree.assert_invariants();
            assert_eq!(tree.len(), expected_len);
        }

        check(SequentialGenerator::new(0, 1000, SequentialOrder::Ascending), 1000);
        check(SequentialGenerator::new(0, 1000, SequentialOrder::Descending), 1000);

        // Only 100 distinct keys can be drawn
        let mut distinct: Vec<u64> = RandomGenerator::new(1000, 100, 17).collect();
        distinct.sort();
        distinct.dedup();
        check(RandomGenerator::new(1000, 100, 17), distinct.len());
        assert!(distinct.len() <= 100);
    }
}
