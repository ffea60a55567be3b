//! Evolution configuration.
//!
//! [`EvolutionConfig`] holds the parameters that control the evolutionary
//! loop. The target string is passed separately to
//! [`Evolution::new`](super::Evolution::new).

use super::error::EvolutionError;

/// Configuration for a string evolution run.
///
/// # Defaults
///
/// ```
/// use string_ga::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 200);
/// assert_eq!(config.max_generations, None);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use string_ga::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::new(50, 0.01)
///     .with_max_generations(10_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig {
    /// Number of candidates per generation. Must be at least 1.
    pub population_size: usize,

    /// Per-position probability of replacing a symbol after crossover.
    ///
    /// Must lie in `[0, 1]`. Typical range: 0.005–0.05.
    pub mutation_rate: f64,

    /// Upper bound on reproduction passes.
    ///
    /// `None` runs until a perfect match appears (the default).
    pub max_generations: Option<usize>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            mutation_rate: 0.01,
            max_generations: None,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Configuration with the two required parameters and no cap or seed.
    pub fn new(population_size: usize, mutation_rate: f64) -> Self {
        Self {
            population_size,
            mutation_rate,
            ..Self::default()
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation rate.
    ///
    /// Out-of-range values are kept as given and rejected by
    /// [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Caps the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// - [`EvolutionError::InvalidPopulationSize`] if `population_size == 0`
    /// - [`EvolutionError::InvalidMutationRate`] if the rate is NaN or outside `[0, 1]`
    /// - [`EvolutionError::InvalidGenerationCap`] if `max_generations == Some(0)`
    pub fn validate(&self) -> Result<(), EvolutionError> {
        if self.population_size == 0 {
            return Err(EvolutionError::InvalidPopulationSize(self.population_size));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(EvolutionError::InvalidMutationRate(self.mutation_rate));
        }
        if self.max_generations == Some(0) {
            return Err(EvolutionError::InvalidGenerationCap);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvolutionConfig::default();
        assert_eq!(config.population_size, 200);
        assert!((config.mutation_rate - 0.01).abs() < 1e-12);
        assert!(config.max_generations.is_none());
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EvolutionConfig::default()
            .with_population_size(50)
            .with_mutation_rate(0.05)
            .with_max_generations(1000)
            .with_seed(7);

        assert_eq!(config.population_size, 50);
        assert!((config.mutation_rate - 0.05).abs() < 1e-12);
        assert_eq!(config.max_generations, Some(1000));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_new_keeps_defaults_for_optional_fields() {
        let config = EvolutionConfig::new(10, 0.5);
        assert_eq!(config.population_size, 10);
        assert!(config.max_generations.is_none());
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_population_zero() {
        let config = EvolutionConfig::new(0, 0.01);
        assert_eq!(
            config.validate(),
            Err(EvolutionError::InvalidPopulationSize(0))
        );
    }

    #[test]
    fn test_validate_single_candidate_population() {
        assert!(EvolutionConfig::new(1, 0.01).validate().is_ok());
    }

    #[test]
    fn test_validate_mutation_rate_bounds() {
        assert!(EvolutionConfig::new(10, 0.0).validate().is_ok());
        assert!(EvolutionConfig::new(10, 1.0).validate().is_ok());

        assert_eq!(
            EvolutionConfig::new(10, -0.1).validate(),
            Err(EvolutionError::InvalidMutationRate(-0.1))
        );
        assert_eq!(
            EvolutionConfig::new(10, 1.5).validate(),
            Err(EvolutionError::InvalidMutationRate(1.5))
        );
        assert!(matches!(
            EvolutionConfig::new(10, f64::NAN).validate(),
            Err(EvolutionError::InvalidMutationRate(_))
        ));
    }

    #[test]
    fn test_validate_zero_generation_cap() {
        let config = EvolutionConfig::default().with_max_generations(0);
        assert_eq!(config.validate(), Err(EvolutionError::InvalidGenerationCap));
    }

    #[test]
    fn test_validate_positive_generation_cap() {
        let config = EvolutionConfig::default().with_max_generations(1);
        assert!(config.validate().is_ok());
    }
}
