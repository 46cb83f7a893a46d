use super::*;
use std::sync::Arc;

parameterized_test! {can_apply_predicate_to_best_strategy, (sigma, expected), {
    let strategy = StrategyParams::new().with("sigma", sigma);
    let timer = Timer::start();
    let state = EvolutionState { generation: 1, best_fitness: 0., best_strategy: &strategy, timer: &timer };
    let termination = StrategyPredicate::new(Arc::new(|strategy: &StrategyParams| {
        strategy.scalar("sigma").is_some_and(|sigma| sigma < 1e-3)
    }));

    assert_eq!(termination.is_termination(&state), expected);
    assert_eq!(termination.estimate(&state), 0.);
}}

can_apply_predicate_to_best_strategy! {
    case01_small_sigma: (1e-4, true),
    case02_large_sigma: (0.5, false),
}

#[test]
fn can_combine_terminations() {
    let strategy = StrategyParams::default();
    let timer = Timer::start();
    let state = EvolutionState { generation: 3, best_fitness: 1., best_strategy: &strategy, timer: &timer };

    let never = CompositeTermination::new(vec![
        Box::new(MaxGeneration::new(10)),
        Box::new(StrategyPredicate::new(Arc::new(|_: &StrategyParams| false))),
    ]);
    let any = CompositeTermination::new(vec![
        Box::new(MaxGeneration::new(10)),
        Box::new(StrategyPredicate::new(Arc::new(|_: &StrategyParams| true))),
    ]);

    assert!(!never.is_termination(&state));
    assert!(any.is_termination(&state));
    assert_eq!(never.estimate(&state), 0.3);
    assert_eq!(CompositeTermination::new(vec![]).estimate(&state), 0.);
}
