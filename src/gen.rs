//! Random dimension sequences for tests, benchmarks, and demo input.
//!
//! The generator takes an explicit [`Rng`] rather than touching any global
//! seed, so callers get reproducible sequences from a seeded `StdRng`.

use std::ops::RangeInclusive;

use rand::Rng;

/// Matrix count range the demo driver picks from, matching typical use.
pub const DEFAULT_MATRIX_COUNT: RangeInclusive<usize> = 5..=15;

/// Per-dimension value range the demo driver uses.
pub const DEFAULT_DIM_RANGE: RangeInclusive<u64> = 1..=1000;

/// Generate a dimension sequence for `n` matrices: `n + 1` values drawn
/// uniformly from `range`.
///
/// The range must not include zero; all produced dimensions are valid input
/// for [`ChainOptimizer::new`](crate::ChainOptimizer::new).
///
/// # Panics
/// Panics if `range` is empty or starts at zero.
pub fn random_dimensions<R: Rng>(rng: &mut R, n: usize, range: RangeInclusive<u64>) -> Vec<u64> {
    assert!(*range.start() > 0, "dimensions must be positive");
    (0..=n).map(|_| rng.gen_range(range.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn length_and_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let dims = random_dimensions(&mut rng, 8, 1..=1000);
        assert_eq!(dims.len(), 9);
        assert!(dims.iter().all(|&d| (1..=1000).contains(&d)));
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = random_dimensions(&mut StdRng::seed_from_u64(42), 10, DEFAULT_DIM_RANGE);
        let b = random_dimensions(&mut StdRng::seed_from_u64(42), 10, DEFAULT_DIM_RANGE);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "positive")]
    fn zero_lower_bound_panics() {
        let mut rng = StdRng::seed_from_u64(0);
        let _ = random_dimensions(&mut rng, 3, 0..=10);
    }
}
