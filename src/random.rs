//! Seedable random sources.
//!
//! Every random draw in the evolutionary loop goes through one generator
//! owned by the [`Evolution`](crate::ga::Evolution) value. These helpers
//! build that generator from an optional seed.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from `seed`.
///
/// The same seed always yields the same sequence of draws.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from a fresh random seed when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..100 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_rng_from_seed_matches_create_rng() {
        let mut a = rng_from_seed(Some(42));
        let mut b = create_rng(42);
        assert_eq!(a.random_range(0..1000), b.random_range(0..1000));
    }
}
