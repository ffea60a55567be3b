//! Command-line front end: evolve a phrase and print the generation it
//! converged at.

use clap::Parser;
use string_ga::ga::{Evolution, EvolutionConfig, EvolutionError};

/// Evolve random strings toward a target phrase.
#[derive(Debug, Parser)]
#[command(name = "string-ga", version, about)]
struct Args {
    /// Phrase to evolve toward (lowercase letters and spaces).
    #[arg(default_value = "hello world")]
    target: String,

    /// Candidates per generation.
    #[arg(short, long, default_value_t = 200)]
    population: usize,

    /// Per-symbol mutation probability in [0, 1].
    #[arg(short, long, default_value_t = 0.01)]
    mutation_rate: f64,

    /// Give up after this many generations.
    #[arg(short = 'g', long)]
    max_generations: Option<usize>,

    /// Seed for a reproducible run.
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    fn config(&self) -> EvolutionConfig {
        EvolutionConfig {
            population_size: self.population,
            mutation_rate: self.mutation_rate,
            max_generations: self.max_generations,
            seed: self.seed,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Evolution(#[from] EvolutionError),

    #[error("{0}")]
    NotConverged(String),
}

fn main() -> Result<(), CliError> {
    env_logger::init();
    let args = Args::parse();

    let mut evolution = Evolution::new(&args.target, args.config())?;
    let result = evolution.run()?;

    if result.is_converged() {
        println!("{}", result.outcome);
        Ok(())
    } else {
        Err(CliError::NotConverged(result.outcome.to_string()))
    }
}
