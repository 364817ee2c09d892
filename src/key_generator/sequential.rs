use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator that will generate the `num` consecutive keys starting at `start`,
/// in the requested order.
/// Panics if the last key would not fit in a `u64`
pub struct SequentialGenerator {
    start: u64,
    position: usize,
    order: SequentialOrder,
    num: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SequentialOrder {
    Ascending,
    Descending,
}

impl SequentialGenerator {
    pub fn new(start: u64, num: usize, order: SequentialOrder) -> SequentialGenerator {
        assert!(
            num == 0 || start.checked_add(num as u64 - 1).is_some(),
            "Keys starting at {} overflow after {} values",
            start,
            num
        );
        SequentialGenerator {
            start,
            position: 0,
            order,
            num,
        }
    }
}

impl Iterator for SequentialGenerator {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.num {
            return None;
        }
        let offset = match self.order {
            SequentialOrder::Ascending => self.position,
            SequentialOrder::Descending => self.num - 1 - self.position,
        };
        self.position += 1;
        Some(self.start + offset as u64)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.num - self.position;
        (size, Some(size))
    }
}

impl FusedIterator for SequentialGenerator {}

impl ExactSizeIterator for SequentialGenerator {}
