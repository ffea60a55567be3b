//! Fixed-size collections of candidates.

use super::alphabet::Alphabet;
use super::candidate::{Candidate, Target};
use rand::Rng;
use std::ops::Index;

/// An ordered generation of candidates, indexed `0..N`.
///
/// A population is never edited in place. The next generation is assembled
/// separately and swapped in whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    candidates: Vec<Candidate>,
}

impl Population {
    /// `size` candidates of `genome_len` symbols, each drawn independently
    /// and uniformly from `alphabet`.
    pub fn random<R: Rng>(
        genome_len: usize,
        size: usize,
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Self {
        let candidates = (0..size)
            .map(|_| Candidate::random(genome_len, alphabet, rng))
            .collect();
        Self { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    /// Fitness of every candidate against `target`, in index order.
    pub fn fitnesses(&self, target: &Target) -> Vec<usize> {
        self.candidates.iter().map(|c| target.fitness(c)).collect()
    }

    /// The fittest candidate and its score. Ties go to the lowest index.
    ///
    /// Returns `None` for an empty population.
    pub fn best(&self, target: &Target) -> Option<(&Candidate, usize)> {
        self.candidates
            .iter()
            .map(|c| (c, target.fitness(c)))
            .reduce(|best, next| if next.1 > best.1 { next } else { best })
    }
}

impl From<Vec<Candidate>> for Population {
    fn from(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }
}

impl FromIterator<Candidate> for Population {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        Self {
            candidates: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for Population {
    type Output = Candidate;

    fn index(&self, index: usize) -> &Candidate {
        &self.candidates[index]
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}
