//! Evolutionary loop execution.
//!
//! [`Evolution`] orchestrates the complete process:
//! initialization → mating pool → crossover → mutation → match check → repeat.

use super::alphabet::Alphabet;
use super::candidate::{Candidate, Target};
use super::config::EvolutionConfig;
use super::error::EvolutionError;
use super::mating_pool::MatingPool;
use super::operators::{random_split_point, single_point_crossover, uniform_mutation};
use super::population::Population;
use crate::random::rng_from_seed;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::Rng;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvolutionOutcome {
    /// A reproduction pass produced an exact copy of the target.
    Converged {
        winner: Candidate,
        /// The pass (1-based) that produced the winner.
        generation: usize,
    },

    /// The generation cap was reached without a match.
    Exhausted {
        best: Candidate,
        best_fitness: usize,
        generations: usize,
    },

    /// The cancel flag was raised before a match was found.
    Cancelled {
        best: Candidate,
        best_fitness: usize,
        generations: usize,
    },
}

impl EvolutionOutcome {
    /// The winning candidate, if the run converged.
    pub fn winner(&self) -> Option<&Candidate> {
        match self {
            Self::Converged { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// Number of reproduction passes executed.
    pub fn generations(&self) -> usize {
        match self {
            Self::Converged { generation, .. } => *generation,
            Self::Exhausted { generations, .. } | Self::Cancelled { generations, .. } => {
                *generations
            }
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }
}

impl fmt::Display for EvolutionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Converged { winner, generation } => {
                write!(f, "Evolution {generation}: New DNA = '{winner}'")
            }
            Self::Exhausted {
                best,
                best_fitness,
                generations,
            } => write!(
                f,
                "Evolution stopped after {generations} generations without a match: \
                 best DNA = '{best}' ({best_fitness}/{} symbols)",
                best.len()
            ),
            Self::Cancelled {
                best,
                best_fitness,
                generations,
            } => write!(
                f,
                "Evolution cancelled after {generations} generations: \
                 best DNA = '{best}' ({best_fitness}/{} symbols)",
                best.len()
            ),
        }
    }
}

/// Result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionResult {
    pub outcome: EvolutionOutcome,

    /// Best fitness of the initial population, then of every completed
    /// generation. Holds `generations + 1` entries.
    pub fitness_history: Vec<usize>,
}

impl EvolutionResult {
    pub fn winner(&self) -> Option<&Candidate> {
        self.outcome.winner()
    }

    pub fn generations(&self) -> usize {
        self.outcome.generations()
    }

    pub fn is_converged(&self) -> bool {
        self.outcome.is_converged()
    }
}

/// Evolves a population of random strings toward a target.
///
/// The value owns its random generator, so two runs built from the same seed
/// make the same draws and end the same way.
///
/// # Usage
///
/// ```
/// use string_ga::ga::{Evolution, EvolutionConfig};
///
/// let config = EvolutionConfig::new(100, 0.01)
///     .with_max_generations(100_000)
///     .with_seed(42);
/// let mut evolution = Evolution::new("to be", config).unwrap();
/// let result = evolution.run().unwrap();
///
/// assert_eq!(result.winner().unwrap().to_string(), "to be");
/// println!("{}", result.outcome);
/// ```
pub struct Evolution<R: Rng = StdRng> {
    target: Target,
    alphabet: Alphabet,
    config: EvolutionConfig,
    population: Population,
    generation: usize,
    winner: Option<Candidate>,
    fitness_history: Vec<usize>,
    rng: R,
}

impl Evolution<StdRng> {
    /// Validates the parameters and builds the initial population.
    ///
    /// The generator is seeded from `config.seed`, or randomly when `None`.
    ///
    /// # Errors
    /// Any configuration fault from [`EvolutionConfig::validate`] or
    /// [`Target::new`].
    pub fn new(target: &str, config: EvolutionConfig) -> Result<Self, EvolutionError> {
        config.validate()?;
        let rng = rng_from_seed(config.seed);
        Self::with_rng(target, config, rng)
    }
}

impl<R: Rng> Evolution<R> {
    /// Like [`new`](Evolution::new) but draws from the given generator.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(
        target: &str,
        config: EvolutionConfig,
        mut rng: R,
    ) -> Result<Self, EvolutionError> {
        config.validate()?;
        let alphabet = Alphabet::standard();
        let target = Target::new(target, &alphabet)?;

        let population =
            initial_population(&target, config.population_size, &alphabet, &mut rng);
        let (_, initial_best) = population
            .best(&target)
            .expect("population_size is validated to be at least 1");

        Ok(Self {
            target,
            alphabet,
            config,
            population,
            generation: 0,
            winner: None,
            fitness_history: vec![initial_best],
            rng,
        })
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// The current generation.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Reproduction passes completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Best fitness after initialization and after every completed pass.
    pub fn fitness_history(&self) -> &[usize] {
        &self.fitness_history
    }

    /// Whether a perfect match has been produced.
    pub fn is_done(&self) -> bool {
        self.winner.is_some()
    }

    /// Runs one reproduction pass.
    ///
    /// Returns the winner when the pass produced an exact match. Once a
    /// winner exists the evolution is finished: further calls return it
    /// again without drawing.
    ///
    /// # Errors
    /// [`EvolutionError::EmptyMatingPool`] if every candidate of the current
    /// generation scores zero.
    pub fn step(&mut self) -> Result<Option<Candidate>, EvolutionError> {
        if let Some(winner) = &self.winner {
            return Ok(Some(winner.clone()));
        }

        let offspring = reproduce(
            &self.target,
            &self.population,
            self.config.mutation_rate,
            &self.alphabet,
            self.generation,
            &mut self.rng,
        )?;

        self.population = offspring.population;
        self.generation += 1;
        self.fitness_history.push(offspring.best_fitness);

        debug!(
            "generation {}: best fitness {}/{}, mating pool {}",
            self.generation,
            offspring.best_fitness,
            self.target.len(),
            offspring.pool_size
        );

        self.winner = offspring.winner.clone();
        Ok(offspring.winner)
    }

    /// Runs until a perfect match, the generation cap, or an error.
    pub fn run(&mut self) -> Result<EvolutionResult, EvolutionError> {
        self.run_with_cancel(None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// before the next generation and reports the best candidate so far.
    pub fn run_with_cancel(
        &mut self,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<EvolutionResult, EvolutionError> {
        loop {
            if let Some(winner) = self.winner.clone() {
                info!(
                    "converged on '{}' after {} generations",
                    winner, self.generation
                );
                return Ok(self.finish(EvolutionOutcome::Converged {
                    winner,
                    generation: self.generation,
                }));
            }

            // Check cancellation
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    let (best, best_fitness) = self.best();
                    warn!(
                        "cancelled after {} generations, best fitness {}/{}",
                        self.generation,
                        best_fitness,
                        self.target.len()
                    );
                    return Ok(self.finish(EvolutionOutcome::Cancelled {
                        best,
                        best_fitness,
                        generations: self.generation,
                    }));
                }
            }

            if self.cap_reached() {
                let (best, best_fitness) = self.best();
                warn!(
                    "no match within {} generations, best fitness {}/{}",
                    self.generation,
                    best_fitness,
                    self.target.len()
                );
                return Ok(self.finish(EvolutionOutcome::Exhausted {
                    best,
                    best_fitness,
                    generations: self.generation,
                }));
            }

            self.step()?;
        }
    }

    fn cap_reached(&self) -> bool {
        self.config
            .max_generations
            .is_some_and(|max| self.generation >= max)
    }

    fn best(&self) -> (Candidate, usize) {
        let (best, fitness) = self
            .population
            .best(&self.target)
            .expect("population_size is validated to be at least 1");
        (best.clone(), fitness)
    }

    fn finish(&self, outcome: EvolutionOutcome) -> EvolutionResult {
        EvolutionResult {
            outcome,
            fitness_history: self.fitness_history.clone(),
        }
    }
}

/// One generation's worth of offspring.
struct Offspring {
    population: Population,
    winner: Option<Candidate>,
    best_fitness: usize,
    pool_size: usize,
}

/// Draws a population whose mating pool is non-empty.
///
/// Redraws the whole population while every candidate scores zero. Every
/// target symbol is in the alphabet, so each redraw has a positive chance of
/// scoring.
fn initial_population<R: Rng>(
    target: &Target,
    size: usize,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Population {
    loop {
        let population = Population::random(target.len(), size, alphabet, rng);
        if population.iter().any(|c| target.fitness(c) > 0) {
            return population;
        }
        warn!("initial population matches no target position, redrawing");
    }
}

/// Builds the next generation from `population`.
///
/// Each slot gets a child of two parents drawn from the mating pool, split at
/// a random interior point and then mutated. The first exact match stops the
/// fill; slots not yet refilled keep their previous candidate so the
/// population size never changes.
fn reproduce<R: Rng>(
    target: &Target,
    population: &Population,
    mutation_rate: f64,
    alphabet: &Alphabet,
    generation: usize,
    rng: &mut R,
) -> Result<Offspring, EvolutionError> {
    let pool = MatingPool::build(target, population);
    let empty_pool = || EvolutionError::EmptyMatingPool { generation };
    if pool.is_empty() {
        return Err(empty_pool());
    }

    let n = population.len();
    let mut next: Vec<Candidate> = Vec::with_capacity(n);
    let mut best_fitness = 0;
    let mut winner = None;

    for _ in 0..n {
        let p1 = pool.draw(rng).ok_or_else(empty_pool)?;
        let p2 = pool.draw(rng).ok_or_else(empty_pool)?;
        let split = random_split_point(target.len(), rng);

        let child = single_point_crossover(&population[p1], &population[p2], split);
        let child = uniform_mutation(child, mutation_rate, alphabet, rng);

        let fitness = target.fitness(&child);
        best_fitness = best_fitness.max(fitness);
        if fitness == target.len() {
            winner = Some(child.clone());
            next.push(child);
            break;
        }
        next.push(child);
    }

    let filled = next.len();
    next.extend(population.iter().skip(filled).cloned());

    Ok(Offspring {
        population: Population::from(next),
        winner,
        best_fitness,
        pool_size: pool.len(),
    })
}

// ============================================================================
// Tests
// ============================================================================
