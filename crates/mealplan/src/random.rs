use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of the two random decisions taken while planning: the candidate
/// order of a run and the pick among eligible meals.
pub trait Randomness {
    fn shuffle<T>(&mut self, items: &mut [T]);

    /// Returns an index in `0..len`. Never called with `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// [`Randomness`] backed by a `rand` generator.
pub struct RngRandomness<R>(R);

pub type StdRandomness = RngRandomness<StdRng>;

impl<R: Rng> RngRandomness<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngRandomness<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Reproducible when a seed is given, entropy-seeded otherwise.
    pub fn from_seed_or_os(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os_rng(),
        }
    }
}

impl<R: Rng> Randomness for RngRandomness<R> {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.0);
    }

    fn pick(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RngRandomness::seeded(7);
        let mut b = RngRandomness::seeded(7);

        let mut left = (0..20).collect::<Vec<_>>();
        let mut right = left.clone();
        a.shuffle(&mut left);
        b.shuffle(&mut right);

        assert_eq!(left, right);
        assert_eq!(a.pick(10), b.pick(10));
    }

    #[test]
    fn test_pick_stays_in_range() {
        let mut randomness = RngRandomness::seeded(1);

        for len in 1..50 {
            assert!(randomness.pick(len) < len);
        }
    }
}
