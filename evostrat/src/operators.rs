//! Operator contracts: function shaped plug-points which are supplied by the caller and invoked
//! synchronously by the evolution strategy.

#[cfg(test)]
#[path = "../tests/unit/operators_test.rs"]
mod operators_test;

use crate::individual::{Individual, Shape};
use crate::strategy::StrategyParams;
use crate::utils::{Float, GenericResult, Random};
use std::sync::Arc;

/// An objective function to be minimized. Error aborts the run.
pub type ObjectiveFn<I> = Arc<dyn Fn(&I) -> GenericResult<Float> + Send + Sync>;

/// Creates a new random individual of the given shape.
pub type CreationFn<I> = Arc<dyn Fn(&Shape, &dyn Random) -> I + Send + Sync>;

/// Combines object parameters of selected parents into one recombinant.
pub type RecombinationFn<I> = Arc<dyn Fn(&[&I], &dyn Random) -> I + Send + Sync>;

/// Combines strategy parameters of selected parents into one set.
pub type StrategyRecombinationFn = Arc<dyn Fn(&[&StrategyParams], &dyn Random) -> StrategyParams + Send + Sync>;

/// Perturbs object parameters using given (already mutated) strategy parameters.
pub type MutationFn<I> = Arc<dyn Fn(&I, &StrategyParams, &dyn Random) -> I + Send + Sync>;

/// Self-adapts strategy parameters. Called before object mutation.
pub type StrategyMutationFn = Arc<dyn Fn(&StrategyParams, &dyn Random) -> StrategyParams + Send + Sync>;

/// An early stop predicate evaluated on the best strategy parameters.
pub type TerminationFn = Arc<dyn Fn(&StrategyParams) -> bool + Send + Sync>;

/// A full set of operators used by one run.
pub struct Operators<I: Individual> {
    /// Objective function.
    pub objective: ObjectiveFn<I>,
    /// Creation of initial individuals.
    pub creation: CreationFn<I>,
    /// Object parameters recombination, used only when more than one parent is mixed.
    pub recombination: Option<RecombinationFn<I>>,
    /// Strategy parameters recombination, used only when more than one parent is mixed.
    pub srecombination: StrategyRecombinationFn,
    /// Object parameters mutation.
    pub mutation: MutationFn<I>,
    /// Strategy parameters mutation.
    pub smutation: StrategyMutationFn,
    /// Early stop predicate.
    pub termination: TerminationFn,
}

impl<I: Individual> Clone for Operators<I> {
    fn clone(&self) -> Self {
        Self {
            objective: self.objective.clone(),
            creation: self.creation.clone(),
            recombination: self.recombination.clone(),
            srecombination: self.srecombination.clone(),
            mutation: self.mutation.clone(),
            smutation: self.smutation.clone(),
            termination: self.termination.clone(),
        }
    }
}

/// Wraps an infallible objective function.
pub fn objective_fn<I: Individual, F>(func: F) -> ObjectiveFn<I>
where
    F: Fn(&I) -> Float + Send + Sync + 'static,
{
    Arc::new(move |individual| Ok(func(individual)))
}

/// Returns a creation operator which clones given individual.
pub fn clone_creation<I: Individual>(individual: I) -> CreationFn<I> {
    Arc::new(move |_, _| individual.clone())
}

/// Returns a strategy recombination which averages parameters key-wise.
pub fn average_srecombination() -> StrategyRecombinationFn {
    Arc::new(|strategies, _| StrategyParams::average(strategies))
}

/// Returns a strategy mutation which keeps parameters as they are.
pub fn identity_smutation() -> StrategyMutationFn {
    Arc::new(|strategy, _| strategy.clone())
}

/// Returns a termination predicate which never stops evolution.
pub fn never_terminate() -> TerminationFn {
    Arc::new(|_| false)
}
