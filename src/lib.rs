//! Genetic algorithm that evolves random strings toward a target phrase.
//!
//! The classic "weasel" demonstration: a population of random strings over
//! the lowercase alphabet plus space is scored by how many positions match
//! the target, bred with fitness-proportional selection, single-point
//! crossover and per-symbol mutation, until one string matches exactly.
//!
//! ```
//! use string_ga::ga::{Evolution, EvolutionConfig};
//!
//! let config = EvolutionConfig::new(50, 0.01).with_seed(42);
//! let result = Evolution::new("ab", config).unwrap().run().unwrap();
//! assert_eq!(result.winner().unwrap().to_string(), "ab");
//! ```
//!
//! # Modules
//!
//! - [`ga`]: Alphabet, genomes, selection, operators and the evolutionary loop
//! - [`random`]: Seedable random sources

pub mod ga;
pub mod random;
