//! Fitness-proportional parent selection.
//!
//! Roulette-wheel selection realised as a flattened weighted list: every
//! population index is repeated once per point of fitness, and parents are
//! drawn uniformly from that list. This trades memory for simplicity, which
//! is fine for short strings and modest populations.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)

use super::candidate::Target;
use super::population::Population;
use rand::Rng;

/// Population indices weighted by fitness.
///
/// # Examples
///
/// ```
/// use string_ga::ga::{Alphabet, Candidate, MatingPool, Population, Target};
///
/// let target = Target::new("abc", &Alphabet::standard()).unwrap();
/// let pop: Population = ["abz", "zzz", "abc"].into_iter().map(Candidate::from).collect();
///
/// let pool = MatingPool::build(&target, &pop);
/// assert_eq!(pool.indices(), &[0, 0, 2, 2, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatingPool {
    indices: Vec<usize>,
}

impl MatingPool {
    /// Builds the pool for one generation.
    ///
    /// Index `i` appears exactly `target.fitness(&population[i])` times, in
    /// ascending index order. The pool is empty when every candidate scores 0.
    pub fn build(target: &Target, population: &Population) -> Self {
        let fitnesses = population.fitnesses(target);
        let mut indices = Vec::with_capacity(fitnesses.iter().sum());
        for (i, &fitness) in fitnesses.iter().enumerate() {
            indices.extend(std::iter::repeat(i).take(fitness));
        }
        Self { indices }
    }

    /// The flattened weighted list.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Total weight, i.e. the sum of fitness across the population.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// How many times `index` occurs.
    pub fn count(&self, index: usize) -> usize {
        self.indices.iter().filter(|&&i| i == index).count()
    }

    /// Draws one population index uniformly from the pool.
    ///
    /// Returns `None` if the pool is empty.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Option<usize> {
        if self.indices.is_empty() {
            return None;
        }
        Some(self.indices[rng.random_range(0..self.indices.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{Alphabet, Candidate};
    use crate::random::create_rng;

    fn setup(target: &str, members: &[&str]) -> (Target, Population) {
        let target = Target::new(target, &Alphabet::standard()).unwrap();
        let pop = members.iter().map(|&s| Candidate::from(s)).collect();
        (target, pop)
    }

    #[test]
    fn test_counts_match_fitness() {
        let (target, pop) = setup("abcd", &["abcd", "zzzz", "abzz", "azcz", "zzzd"]);
        let pool = MatingPool::build(&target, &pop);

        assert_eq!(pool.len(), 4 + 0 + 2 + 2 + 1);
        assert_eq!(pool.count(0), 4);
        assert_eq!(pool.count(1), 0);
        assert_eq!(pool.count(2), 2);
        assert_eq!(pool.count(3), 2);
        assert_eq!(pool.count(4), 1);
    }

    #[test]
    fn test_all_zero_fitness_gives_empty_pool() {
        let (target, pop) = setup("ab", &["zz", "yy", "ba"]);
        let pool = MatingPool::build(&target, &pop);
        let mut rng = create_rng(42);

        assert!(pool.is_empty());
        assert_eq!(pool.draw(&mut rng), None);
    }

    #[test]
    fn test_draw_never_picks_zero_fitness() {
        let (target, pop) = setup("abc", &["zzz", "abc", "zzz", "azz"]);
        let pool = MatingPool::build(&target, &pop);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10_000;
        for _ in 0..n {
            let idx = pool.draw(&mut rng).unwrap();
            counts[idx] += 1;
        }
        assert_eq!(counts[0], 0);
        assert_eq!(counts[2], 0);
        // Index 1 carries 3 of 4 weight units.
        assert!(
            counts[1] > counts[3] * 2,
            "fitter index should dominate: {counts:?}"
        );
    }

    #[test]
    fn test_single_entry_pool() {
        let (target, pop) = setup("ab", &["zz", "zb"]);
        let pool = MatingPool::build(&target, &pop);
        let mut rng = create_rng(42);

        assert_eq!(pool.indices(), &[1]);
        for _ in 0..10 {
            assert_eq!(pool.draw(&mut rng), Some(1));
        }
    }
}
