#[cfg(test)]
#[path = "../../tests/unit/termination/strategy_predicate_test.rs"]
mod strategy_predicate_test;

use super::*;
use crate::operators::TerminationFn;

/// A termination criteria which delegates decision to a user predicate evaluated on the
/// strategy parameters of the best parent.
pub struct StrategyPredicate {
    predicate: TerminationFn,
}

impl StrategyPredicate {
    /// Creates a new instance of `StrategyPredicate`.
    pub fn new(predicate: TerminationFn) -> Self {
        Self { predicate }
    }
}

impl Termination for StrategyPredicate {
    fn is_termination(&self, state: &EvolutionState) -> bool {
        (self.predicate)(state.best_strategy)
    }

    fn estimate(&self, _: &EvolutionState) -> Float {
        0.
    }
}
