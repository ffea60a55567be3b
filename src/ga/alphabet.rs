//! Symbol alphabet.
//!
//! The working alphabet is fixed: the 26 lowercase ASCII letters followed by
//! the space character. It seeds random genomes and supplies replacement
//! symbols during mutation.

use rand::Rng;

const STANDARD_SYMBOLS: [u8; 27] = *b"abcdefghijklmnopqrstuvwxyz ";

/// The set of symbols a genome may contain.
///
/// # Examples
///
/// ```
/// use string_ga::ga::Alphabet;
///
/// let alphabet = Alphabet::standard();
/// assert_eq!(alphabet.len(), 27);
/// assert!(alphabet.contains(b' '));
/// assert!(!alphabet.contains(b'A'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: &'static [u8],
}

impl Alphabet {
    /// Lowercase `a`–`z` then space, in that order.
    pub fn standard() -> Self {
        Self {
            symbols: &STANDARD_SYMBOLS,
        }
    }

    /// The symbols in draw order.
    pub fn symbols(&self) -> &[u8] {
        self.symbols
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false` for the standard alphabet.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Whether `symbol` belongs to the alphabet.
    pub fn contains(&self, symbol: u8) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Draws one symbol uniformly at random.
    pub fn random_symbol<R: Rng>(&self, rng: &mut R) -> u8 {
        self.symbols[rng.random_range(0..self.symbols.len())]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}
