#[cfg(test)]
#[path = "../../tests/unit/termination/target_fitness_test.rs"]
mod target_fitness_test;

use super::*;

/// Provides way to stop evolution when the best fitness reaches given target value.
pub struct TargetFitness {
    target: Float,
}

impl TargetFitness {
    /// Creates a new instance of `TargetFitness`.
    pub fn new(target: Float) -> Self {
        Self { target }
    }
}

impl Termination for TargetFitness {
    fn is_termination(&self, state: &EvolutionState) -> bool {
        state.best_fitness <= self.target
    }

    fn estimate(&self, _: &EvolutionState) -> Float {
        0.
    }
}
