//! Error type for configuration and runtime faults.

use thiserror::Error;

/// Everything that can go wrong when setting up or running an evolution.
///
/// Configuration faults are reported by [`Evolution::new`](super::Evolution::new)
/// before any random draw happens. [`EmptyMatingPool`](Self::EmptyMatingPool)
/// is the only fault that can surface while the loop runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvolutionError {
    /// Crossover needs a split point strictly inside the genome.
    #[error("target must have at least 2 symbols, got {length}")]
    TargetTooShort { length: usize },

    /// The target contains a symbol the alphabet cannot produce.
    #[error("target symbol {symbol:?} at position {position} is not in the alphabet")]
    UnknownSymbol { symbol: char, position: usize },

    #[error("population_size must be at least 1, got {0}")]
    InvalidPopulationSize(usize),

    #[error("mutation_rate must be within [0, 1], got {0}")]
    InvalidMutationRate(f64),

    #[error("max_generations must be at least 1 or None")]
    InvalidGenerationCap,

    /// Every candidate of the generation scored zero.
    #[error("mating pool is empty at generation {generation}: no candidate matches any target position")]
    EmptyMatingPool { generation: usize },
}
