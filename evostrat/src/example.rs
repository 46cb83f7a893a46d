//! This module contains example operators and objective functions for real-valued vectors to
//! demonstrate practical usage of evostrat crate.

#[cfg(test)]
#[path = "../tests/unit/example_test.rs"]
mod example_test;

use crate::operators::*;
use crate::utils::Float;
use std::sync::Arc;

/// A strategy parameter key of a global mutation step size.
pub const SIGMA: &str = "sigma";

/// A real-valued vector individual.
pub type VectorIndividual = Vec<Float>;

/// Sphere function: `sum(x_i^2)`, global minimum 0 at origin.
pub fn sphere(input: &[Float]) -> Float {
    input.iter().map(|x| x * x).sum()
}

/// Rosenbrock function, global minimum 0 at `(1, .., 1)`.
pub fn rosenbrock(input: &[Float]) -> Float {
    input.windows(2).map(|pair| 100. * (pair[1] - pair[0].powi(2)).powi(2) + (1. - pair[0]).powi(2)).sum()
}

/// Creates vectors with elements uniformly distributed in `[min, max)`.
pub fn uniform_creation(min: Float, max: Float) -> CreationFn<VectorIndividual> {
    Arc::new(move |shape, random| (0..shape.len()).map(|_| random.uniform_real(min, max)).collect())
}

/// Adds isotropic gaussian noise `N(0, sigma^2)` to every element, sigma is taken from
/// strategy parameters (1 if missing).
pub fn isotropic_mutation() -> MutationFn<VectorIndividual> {
    Arc::new(|individual, strategy, random| {
        let sigma = strategy.scalar(SIGMA).unwrap_or(1.);
        individual.iter().map(|value| value + sigma * random.standard_normal()).collect()
    })
}

/// Self-adapts global step size with log-normal rule: `sigma' = sigma * exp(tau * N(0, 1))`.
pub fn log_normal_sigma(tau: Float) -> StrategyMutationFn {
    Arc::new(move |strategy, random| {
        let sigma = strategy.scalar(SIGMA).unwrap_or(1.);
        strategy.clone().with(SIGMA, sigma * (tau * random.standard_normal()).exp())
    })
}

/// Averages parents element-wise.
pub fn intermediate_recombination() -> RecombinationFn<VectorIndividual> {
    Arc::new(|parents, _| {
        let size = parents.first().map_or(0, |parent| parent.len());
        let count = parents.len() as Float;

        (0..size).map(|idx| parents.iter().map(|parent| parent[idx]).sum::<Float>() / count).collect()
    })
}

/// Takes every element from a randomly chosen parent.
pub fn discrete_recombination() -> RecombinationFn<VectorIndividual> {
    Arc::new(|parents, random| {
        let size = parents.first().map_or(0, |parent| parent.len());
        let last = parents.len() as i32 - 1;

        (0..size).map(|idx| parents[random.uniform_int(0, last) as usize][idx]).collect()
    })
}
