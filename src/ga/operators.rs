//! Genetic operators for fixed-length symbol strings.
//!
//! Every operator returns a new [`Candidate`]; parents are only read.
//!
//! # Crossover
//!
//! - [`random_split_point`]: uniform split point strictly inside the genome
//! - [`single_point_crossover`]: head of one parent, tail of the other
//!
//! # Mutation
//!
//! - [`uniform_mutation`]: independent per-position redraw from the alphabet
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Shiffman (2012), *The Nature of Code*, ch. 9

use super::alphabet::Alphabet;
use super::candidate::Candidate;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Draws a split point uniformly from `1..len`.
///
/// Split points 0 and `len` are excluded so that a child always carries at
/// least one symbol from each parent.
///
/// # Panics
/// Panics if `len < 2` (no interior point exists).
pub fn random_split_point<R: Rng>(len: usize, rng: &mut R) -> usize {
    assert!(len >= 2, "split point needs a genome of at least 2 symbols");
    rng.random_range(1..len)
}

/// Single-point crossover.
///
/// Positions `[0, split)` come from `parent1`, positions `[split, len)` from
/// `parent2`.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or `split` is not in `1..len`.
pub fn single_point_crossover(parent1: &Candidate, parent2: &Candidate, split: usize) -> Candidate {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(
        split > 0 && split < n,
        "split point {split} outside 1..{n}"
    );

    parent1.genes()[..split]
        .iter()
        .chain(&parent2.genes()[split..])
        .copied()
        .collect()
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Uniform per-position mutation.
///
/// Each position is independently replaced, with probability `rate`, by a
/// symbol drawn uniformly from `alphabet`. The drawn symbol may equal the one
/// it replaces. A rate of 0 returns the candidate unchanged without touching
/// `rng`.
///
/// # Complexity
/// O(n)
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]`.
pub fn uniform_mutation<R: Rng>(
    candidate: Candidate,
    rate: f64,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Candidate {
    if rate == 0.0 {
        return candidate;
    }
    candidate
        .genes()
        .iter()
        .map(|&symbol| {
            if rng.random_bool(rate) {
                alphabet.random_symbol(rng)
            } else {
                symbol
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
