//! End-to-end runs of the evolutionary loop.

use string_ga::ga::{Evolution, EvolutionConfig, EvolutionError, EvolutionOutcome};

#[test]
fn test_two_symbol_target_converges() {
    let config = EvolutionConfig::new(50, 0.01)
        .with_max_generations(100_000)
        .with_seed(42);
    let result = Evolution::new("ab", config).unwrap().run().unwrap();

    assert!(result.is_converged(), "{}", result.outcome);
    assert_eq!(result.winner().unwrap().to_string(), "ab");
}

#[test]
fn test_hello_world_converges() {
    let config = EvolutionConfig::new(200, 0.05)
        .with_max_generations(100_000)
        .with_seed(2024);
    let mut evolution = Evolution::new("hello world", config).unwrap();
    let result = evolution.run().unwrap();

    let winner = result.winner().expect("run should converge");
    assert_eq!(winner.to_string(), "hello world");
    assert_eq!(result.fitness_history.len(), result.generations() + 1);
    assert_eq!(*result.fitness_history.last().unwrap(), 11);
    assert_eq!(
        result.outcome.to_string(),
        format!("Evolution {}: New DNA = 'hello world'", result.generations())
    );
}

#[test]
fn test_unseeded_run_converges() {
    let config = EvolutionConfig::new(100, 0.01).with_max_generations(100_000);
    let result = Evolution::new("to be", config).unwrap().run().unwrap();
    assert_eq!(result.winner().unwrap().to_string(), "to be");
}

#[test]
fn test_single_symbol_target_rejected() {
    let result = Evolution::new("a", EvolutionConfig::new(50, 0.01));
    assert!(matches!(
        result,
        Err(EvolutionError::TargetTooShort { length: 1 })
    ));
}

#[test]
fn test_mutation_rate_out_of_range_rejected() {
    for rate in [-0.01, 1.01, f64::INFINITY] {
        let result = Evolution::new("hello", EvolutionConfig::new(50, rate));
        assert!(
            matches!(result, Err(EvolutionError::InvalidMutationRate(_))),
            "rate {rate} should be rejected"
        );
    }
}

#[test]
fn test_zero_population_rejected() {
    let result = Evolution::new("hello", EvolutionConfig::new(0, 0.01));
    assert!(matches!(
        result,
        Err(EvolutionError::InvalidPopulationSize(0))
    ));
}

#[test]
fn test_symbol_outside_alphabet_rejected() {
    let result = Evolution::new("Hello, world", EvolutionConfig::default());
    assert!(matches!(
        result,
        Err(EvolutionError::UnknownSymbol { symbol: 'H', position: 0 })
    ));
}

#[test]
fn test_cap_yields_exhausted() {
    let config = EvolutionConfig::new(20, 0.01)
        .with_max_generations(2)
        .with_seed(11);
    let result = Evolution::new("a long phrase that will not appear in two rounds", config)
        .unwrap()
        .run()
        .unwrap();

    assert!(matches!(
        result.outcome,
        EvolutionOutcome::Exhausted { generations: 2, .. }
    ));
    assert!(result.winner().is_none());
}
