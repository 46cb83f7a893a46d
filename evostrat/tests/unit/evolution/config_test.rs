use super::*;
use crate::example::*;
use crate::helpers::example::*;
use std::sync::atomic::Ordering;

fn get_build_error(builder: EvolutionConfigBuilder<Vec<Float>>) -> EvolutionError {
    builder.build().err().expect("build should fail")
}

fn create_state<'a>(generation: usize, strategy: &'a StrategyParams, timer: &'a Timer) -> EvolutionState<'a> {
    EvolutionState { generation, best_fitness: 1., best_strategy: strategy, timer }
}

parameterized_test! {can_reject_invalid_sizes, (mu, rho, lambda, selection, expected), {
    let (objective, counter) = create_counting_sphere();
    let builder = create_sphere_builder(2, mu, rho, lambda).with_selection(selection).with_objective(objective);

    let error = get_build_error(builder);

    assert!(error.is_configuration());
    assert!(error.to_string().contains(expected), "unexpected error: {error}");
    assert_eq!(counter.load(Ordering::Relaxed), 0);
}}

can_reject_invalid_sizes! {
    case01_zero_mu: (0, 1, 2, Selection::Plus, "mu"),
    case02_zero_lambda: (1, 1, 0, Selection::Plus, "lambda"),
    case03_zero_rho: (2, 0, 2, Selection::Plus, "mixing number (rho) must be in [1, mu=2], got 0"),
    case04_rho_greater_mu: (2, 3, 4, Selection::Plus, "mixing number (rho) must be in [1, mu=2], got 3"),
    case05_comma_mu_equal_lambda: (3, 1, 3, Selection::Comma, "comma selection requires mu < lambda, got mu=3, lambda=3"),
    case06_comma_mu_greater_lambda: (4, 1, 2, Selection::Comma, "comma selection requires mu < lambda"),
}

parameterized_test! {can_accept_valid_sizes, (mu, rho, lambda, selection), {
    assert!(validate_sizes(mu, rho, lambda, &selection).is_ok());
}}

can_accept_valid_sizes! {
    case01_plus_lambda_smaller_mu: (4, 2, 1, Selection::Plus),
    case02_plus_rho_equal_mu: (3, 3, 3, Selection::Plus),
    case03_comma: (2, 1, 3, Selection::Comma),
}

#[test]
fn can_require_recombination_when_rho_greater_than_one() {
    let builder = EvolutionConfigBuilder::new(vec![0.; 2])
        .with_mu(3)
        .with_rho(2)
        .with_lambda(6)
        .with_objective(|input: &Vec<Float>| sphere(input.as_slice()))
        .with_mutation(isotropic_mutation());

    let error = get_build_error(builder);

    assert_eq!(error, EvolutionError::Configuration("recombination operator is required when rho=2 > 1".to_string()));
}

#[test]
fn can_build_without_recombination_when_rho_is_one() {
    let config = EvolutionConfigBuilder::new(vec![0.; 2])
        .with_mu(3)
        .with_lambda(6)
        .with_objective(|input: &Vec<Float>| sphere(input.as_slice()))
        .with_mutation(isotropic_mutation())
        .build()
        .unwrap();

    assert!(config.operators.recombination.is_none());
    assert_eq!((config.mu, config.rho, config.lambda), (3, 1, 6));
}

#[test]
fn can_reject_missing_objective_and_mutation() {
    let builder = EvolutionConfigBuilder::new(vec![0.; 2]).with_mutation(isotropic_mutation());
    assert_eq!(get_build_error(builder), EvolutionError::Configuration("missing objective function".to_string()));

    let builder = EvolutionConfigBuilder::new(vec![0.; 2]).with_objective(|input: &Vec<Float>| sphere(input.as_slice()));
    assert_eq!(get_build_error(builder), EvolutionError::Configuration("missing mutation operator".to_string()));
}

#[test]
fn can_reject_initial_population_of_wrong_size() {
    let builder = create_sphere_builder(2, 3, 1, 6).with_initial_population(vec![vec![0.; 2]; 2]);

    let error = get_build_error(builder);

    assert_eq!(
        error,
        EvolutionError::Configuration("initial population must have exactly 3 individuals, got 2".to_string())
    );
}

#[test]
fn can_reject_initial_population_with_wrong_shape() {
    let builder = create_sphere_builder(3, 2, 1, 4).with_initial_population(vec![vec![0.; 3], vec![0.; 2]]);

    let error = get_build_error(builder);

    assert!(error.is_configuration());
    assert!(error.to_string().contains("initial population individual 1 has shape"), "unexpected error: {error}");
}

parameterized_test! {can_use_max_generations, (dimensions, limit, expected), {
    let config = create_sphere_builder(dimensions, 1, 1, 1).with_max_generations(limit).build().unwrap();
    let strategy = StrategyParams::default();
    let timer = Timer::start();

    assert!(!config.termination.is_termination(&create_state(expected - 1, &strategy, &timer)));
    assert!(config.termination.is_termination(&create_state(expected, &strategy, &timer)));
}}

can_use_max_generations! {
    case01_default_one_dimension: (1, None, 100),
    case02_default_three_dimensions: (3, None, 300),
    case03_explicit: (3, Some(7), 7),
}

#[test]
fn can_use_strategy_predicate_and_target_fitness() {
    let config = create_sphere_builder(2, 1, 1, 1)
        .with_target_fitness(Some(0.5))
        .with_termination(Arc::new(|strategy: &StrategyParams| strategy.scalar(SIGMA).is_some_and(|sigma| sigma < 1E-3)))
        .build()
        .unwrap();
    let timer = Timer::start();

    let strategy = StrategyParams::new().with(SIGMA, 0.1);
    assert!(!config.termination.is_termination(&create_state(1, &strategy, &timer)));

    let strategy = StrategyParams::new().with(SIGMA, 1E-4);
    assert!(config.termination.is_termination(&create_state(1, &strategy, &timer)));

    let strategy = StrategyParams::new().with(SIGMA, 0.1);
    let state = EvolutionState { best_fitness: 0.5, ..create_state(1, &strategy, &timer) };
    assert!(config.termination.is_termination(&state));
}

#[test]
fn can_log_configuration_when_telemetry_is_enabled() {
    let (logger, messages) = create_collecting_logger();

    create_sphere_builder(2, 3, 2, 6)
        .with_selection(Selection::Comma)
        .with_max_time(Some(10.))
        .with_telemetry(TelemetryMode::verbose(logger))
        .build()
        .unwrap();

    let messages = messages.lock().unwrap();
    assert!(messages[0].starts_with("configured (3/2,6)-es"), "unexpected message: {}", messages[0]);
    assert!(messages[0].contains("max-generations: 200"));
    assert_eq!(messages[1], "configured to use max-time: 10s");
}
