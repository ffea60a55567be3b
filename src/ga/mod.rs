//! String-matching Genetic Algorithm.
//!
//! Evolves a population of random strings toward a fixed target phrase.
//! Each generation builds a fitness-weighted mating pool, breeds every slot
//! by single-point crossover of two pool draws, mutates the child symbol by
//! symbol, and stops as soon as a child equals the target.
//!
//! # Key Types
//!
//! - [`Alphabet`]: The 27 symbols genomes are built from
//! - [`Candidate`] / [`Target`]: Immutable genomes and the positional fitness measure
//! - [`Population`]: One generation of candidates
//! - [`MatingPool`]: Fitness-proportional parent selection
//! - [`EvolutionConfig`]: Population size, mutation rate, optional cap and seed
//! - [`Evolution`]: Executes the evolutionary loop
//! - [`EvolutionResult`] / [`EvolutionOutcome`]: How the run ended
//!
//! # Submodules
//!
//! - [`operators`]: Split point, single-point crossover and uniform mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod alphabet;
mod candidate;
mod config;
mod error;
mod mating_pool;
pub mod operators;
mod population;
mod runner;

pub use alphabet::Alphabet;
pub use candidate::{Candidate, Target};
pub use config::EvolutionConfig;
pub use error::EvolutionError;
pub use mating_pool::MatingPool;
pub use population::Population;
pub use runner::{Evolution, EvolutionOutcome, EvolutionResult};
