//! The termination module contains logic which defines termination criteria for evolution,
//! e.g. when to stop producing new generations.

use crate::strategy::StrategyParams;
use crate::utils::{Float, Timer, compare_floats_refs};

/// A state of evolution after a completed generation.
pub struct EvolutionState<'a> {
    /// Amount of completed generations, starting from 1.
    pub generation: usize,
    /// Fitness of the best (rank 0) parent.
    pub best_fitness: Float,
    /// Strategy parameters of the best (rank 0) parent.
    pub best_strategy: &'a StrategyParams,
    /// A timer started when evolution has started.
    pub timer: &'a Timer,
}

/// A trait which specifies criteria when evolution should stop.
pub trait Termination: Send + Sync {
    /// Returns true if termination condition is met.
    fn is_termination(&self, state: &EvolutionState) -> bool;

    /// Returns a relative estimation till termination. Value is in the `[0, 1]` range.
    fn estimate(&self, state: &EvolutionState) -> Float;
}

mod max_generation;
pub use self::max_generation::MaxGeneration;

mod max_time;
pub use self::max_time::MaxTime;

mod strategy_predicate;
pub use self::strategy_predicate::StrategyPredicate;

mod target_fitness;
pub use self::target_fitness::TargetFitness;

/// A termination which encapsulates multiple termination criteria and stops when any of them does.
pub struct CompositeTermination {
    terminations: Vec<Box<dyn Termination>>,
}

impl CompositeTermination {
    /// Creates a new instance of `CompositeTermination`.
    pub fn new(terminations: Vec<Box<dyn Termination>>) -> Self {
        Self { terminations }
    }
}

impl Termination for CompositeTermination {
    fn is_termination(&self, state: &EvolutionState) -> bool {
        self.terminations.iter().any(|t| t.is_termination(state))
    }

    fn estimate(&self, state: &EvolutionState) -> Float {
        self.terminations.iter().map(|t| t.estimate(state)).max_by(compare_floats_refs).unwrap_or(0.)
    }
}
