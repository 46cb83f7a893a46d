//! Population state: aligned individual, strategy and fitness slots of one generation.

#[cfg(test)]
#[path = "../tests/unit/population_test.rs"]
mod population_test;

use crate::individual::Individual;
use crate::operators::{ObjectiveFn, Operators};
use crate::selection::{Selection, select};
use crate::strategy::StrategyParams;
use crate::utils::{EvolutionError, EvolutionResult, Float, GenericResult, Random, compare_floats};
use std::sync::Arc;

/// One population slot: an individual together with its strategy parameters and fitness.
#[derive(Clone, Debug)]
pub struct Member<I: Individual> {
    /// Object parameters.
    pub individual: I,
    /// Strategy parameters, shared by reference until replaced by a mutation.
    pub strategy: Arc<StrategyParams>,
    /// Objective value, lower is better.
    pub fitness: Float,
}

impl<I: Individual> Member<I> {
    /// Creates a member which is not evaluated yet: its fitness is `+inf`.
    pub fn unevaluated(individual: I, strategy: Arc<StrategyParams>) -> Self {
        Self { individual, strategy, fitness: Float::INFINITY }
    }

    /// Calls objective function once and stores its value as fitness.
    pub fn evaluate(&mut self, objective: &ObjectiveFn<I>) -> GenericResult<()> {
        self.fitness = objective(&self.individual)?;
        Ok(())
    }
}

/// A parent population of fixed size.
pub struct Population<I: Individual> {
    members: Vec<Member<I>>,
}

impl<I: Individual> Population<I> {
    /// Creates initial population of `mu` evaluated members.
    ///
    /// If `individuals` are given, they are used as they are, otherwise `mu` individuals are
    /// created with the creation operator. Every member gets the same strategy template.
    pub fn initialize(
        initial: &I,
        individuals: Option<Vec<I>>,
        mu: usize,
        operators: &Operators<I>,
        strategy: Arc<StrategyParams>,
        random: &dyn Random,
    ) -> EvolutionResult<Self> {
        if mu == 0 {
            return Err(EvolutionError::Configuration("population size (mu) must be at least 1".to_string()));
        }

        let individuals = match individuals {
            Some(individuals) => {
                validate_initial_population(initial, individuals.as_slice(), mu)?;
                individuals
            }
            None => {
                let shape = initial.shape();
                (0..mu).map(|_| (operators.creation)(&shape, random)).collect()
            }
        };

        let members = individuals
            .into_iter()
            .map(|individual| {
                let mut member = Member::unevaluated(individual, strategy.clone());
                member.evaluate(&operators.objective).map(|_| member)
            })
            .collect::<GenericResult<Vec<_>>>()?;

        Ok(Self { members })
    }

    /// Replaces members with next generation chosen from current members and given offspring.
    /// Population size is preserved, members are stored ranked by fitness afterwards.
    pub fn evolve(&mut self, offspring: Vec<Member<I>>, selection: &Selection) {
        let mu = self.members.len();
        let parents = std::mem::take(&mut self.members);

        self.members = select(selection, parents, offspring, mu);
    }

    /// Returns the best member. On ties, the one with lower index wins.
    pub fn best(&self) -> &Member<I> {
        let idx = self
            .members
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| compare_floats(a.fitness, b.fitness))
            .map_or(0, |(idx, _)| idx);

        &self.members[idx]
    }

    /// Returns all members.
    pub fn members(&self) -> &[Member<I>] {
        self.members.as_slice()
    }

    /// Returns a copy of fitness values in member order.
    pub fn fitness(&self) -> Vec<Float> {
        self.members.iter().map(|member| member.fitness).collect()
    }

    /// Returns population size.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Consumes population and returns its members.
    pub fn into_members(self) -> Vec<Member<I>> {
        self.members
    }
}

/// Checks that explicit initial population has exactly `mu` individuals of initial individual's shape.
pub fn validate_initial_population<I: Individual>(initial: &I, individuals: &[I], mu: usize) -> EvolutionResult<()> {
    if individuals.len() != mu {
        return Err(EvolutionError::Configuration(format!(
            "initial population must have exactly {mu} individuals, got {}",
            individuals.len()
        )));
    }

    let expected = initial.shape();

    individuals.iter().enumerate().try_for_each(|(idx, individual)| {
        let actual = individual.shape();
        if actual == expected {
            Ok(())
        } else {
            Err(EvolutionError::Configuration(format!(
                "initial population individual {idx} has shape {actual}, expected dimensionality {expected}",
            )))
        }
    })
}
