//! Genome value types.
//!
//! A [`Candidate`] is one trial string; the [`Target`] is the string the
//! population evolves toward. Both are immutable once built: the only way to
//! obtain a different genome is to construct a new value (see
//! [`operators`](super::operators)).

use super::alphabet::Alphabet;
use super::error::EvolutionError;
use rand::Rng;
use std::fmt;

/// A fixed-length sequence of symbols.
///
/// The symbol storage is private and never handed out mutably, so a
/// candidate cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    genes: Box<[u8]>,
}

impl Candidate {
    /// Builds a candidate of `len` symbols drawn uniformly from `alphabet`.
    pub fn random<R: Rng>(len: usize, alphabet: &Alphabet, rng: &mut R) -> Self {
        (0..len).map(|_| alphabet.random_symbol(rng)).collect()
    }

    /// The symbols, read-only.
    pub fn genes(&self) -> &[u8] {
        &self.genes
    }

    /// Genome length.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

impl FromIterator<u8> for Candidate {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self {
            genes: iter.into_iter().collect(),
        }
    }
}

impl From<&str> for Candidate {
    fn from(text: &str) -> Self {
        text.bytes().collect()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.genes))
    }
}

/// The string being evolved toward.
///
/// Construction checks that the target can actually be reached: it must be
/// long enough for a split point to exist, and every symbol must be one the
/// alphabet can produce.
///
/// # Examples
///
/// ```
/// use string_ga::ga::{Alphabet, Candidate, Target};
///
/// let target = Target::new("cat", &Alphabet::standard()).unwrap();
/// assert_eq!(target.fitness(&Candidate::from("car")), 2);
/// assert_eq!(target.fitness(&Candidate::from("act")), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    genes: Box<[u8]>,
}

impl Target {
    /// Validates `text` against `alphabet`.
    ///
    /// # Errors
    ///
    /// - [`EvolutionError::TargetTooShort`] if `text` has fewer than 2 symbols
    /// - [`EvolutionError::UnknownSymbol`] for the first symbol not in `alphabet`
    pub fn new(text: &str, alphabet: &Alphabet) -> Result<Self, EvolutionError> {
        let length = text.chars().count();
        if length < 2 {
            return Err(EvolutionError::TargetTooShort { length });
        }

        // Anything outside ASCII is rejected here, so bytes and chars line up.
        for (position, symbol) in text.chars().enumerate() {
            if !symbol.is_ascii() || !alphabet.contains(symbol as u8) {
                return Err(EvolutionError::UnknownSymbol { symbol, position });
            }
        }

        Ok(Self {
            genes: text.as_bytes().into(),
        })
    }

    pub fn genes(&self) -> &[u8] {
        &self.genes
    }

    /// Target length L.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Never `true` for a validated target.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Number of positions where `candidate` holds the target's symbol.
    ///
    /// Purely positional: a correct symbol at the wrong index scores nothing.
    /// The result lies in `[0, L]`.
    pub fn fitness(&self, candidate: &Candidate) -> usize {
        debug_assert_eq!(
            candidate.len(),
            self.len(),
            "candidate and target lengths differ"
        );
        self.genes
            .iter()
            .zip(candidate.genes())
            .filter(|(a, b)| a == b)
            .count()
    }

    /// Whether `candidate` matches the target at every position.
    pub fn is_matched_by(&self, candidate: &Candidate) -> bool {
        self.fitness(candidate) == self.len()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.genes))
    }
}
