use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator that will generate `num` random keys in `0..max`.
/// The same seed always produces the same sequence. Keys may repeat, which makes it
/// handy to exercise duplicate insertions
pub struct RandomGenerator {
    remaining: usize,
    max: u64,
    rng: Pcg64,
}

impl RandomGenerator {
    pub fn new(num: usize, max: u64, seed: u64) -> RandomGenerator {
        assert!(max > 0);
        RandomGenerator {
            remaining: num,
            max,
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl Iterator for RandomGenerator {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.rng.gen_range(0, self.max))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for RandomGenerator {}

impl ExactSizeIterator for RandomGenerator {}
