#[cfg(test)]
#[path = "../../tests/unit/evolution/generation_test.rs"]
mod generation_test;

use crate::individual::Individual;
use crate::operators::{Operators, RecombinationFn, StrategyRecombinationFn};
use crate::population::Member;
use crate::strategy::StrategyParams;
use crate::utils::*;
use std::sync::Arc;

/// Specifies how parents are mixed into one recombinant.
enum Mixing<I: Individual> {
    /// A single random parent is copied as it is, no recombination is involved.
    Single,
    /// `rho` distinct random parents are combined by recombination operators.
    Recombine { rho: usize, recombination: RecombinationFn<I>, srecombination: StrategyRecombinationFn },
}

/// Produces offspring generation from parents: mixing, strategy mutation, object mutation
/// and evaluation of each offspring.
pub struct OffspringProducer<I: Individual> {
    operators: Operators<I>,
    mixing: Mixing<I>,
    lambda: usize,
    thread_pool: Option<ThreadPool>,
}

impl<I: Individual> OffspringProducer<I> {
    /// Creates a new instance of `OffspringProducer`.
    pub fn new(operators: Operators<I>, rho: usize, lambda: usize, parallelism: &Parallelism) -> GenericResult<Self> {
        let mixing = match (rho, operators.recombination.clone()) {
            (0, _) => return Err("mixing number (rho) must be at least 1".into()),
            (1, _) => Mixing::Single,
            (rho, Some(recombination)) => {
                Mixing::Recombine { rho, recombination, srecombination: operators.srecombination.clone() }
            }
            (rho, None) => return Err(format!("recombination operator is required when rho={rho} > 1").into()),
        };

        let thread_pool = match parallelism {
            Parallelism::Sequential => None,
            Parallelism::Threads(num_threads) => Some(ThreadPool::new(*num_threads)?),
        };

        Ok(Self { operators, mixing, lambda, thread_pool })
    }

    /// Produces exactly `lambda` evaluated offspring.
    ///
    /// Every offspring draws from its own random stream seeded from `random` before production
    /// starts, so results do not depend on whether offspring are produced in parallel.
    pub fn produce(&self, parents: &[Member<I>], random: &dyn Random) -> GenericResult<Vec<Member<I>>> {
        if parents.is_empty() {
            return Err("cannot produce offspring without parents".into());
        }

        let seeds = (0..self.lambda).map(|_| random.next_seed()).collect::<Vec<_>>();

        let offspring = match &self.thread_pool {
            Some(thread_pool) => {
                thread_pool.execute(|| parallel_into_collect(seeds, |seed| self.produce_one(parents, seed)))
            }
            None => seeds.into_iter().map(|seed| self.produce_one(parents, seed)).collect(),
        };

        offspring.into_iter().collect()
    }

    fn produce_one(&self, parents: &[Member<I>], seed: u64) -> GenericResult<Member<I>> {
        let random = DefaultRandom::new_with_seed(seed);
        let random: &dyn Random = &random;

        let (recombinant, strategy) = self.mix(parents, random);

        let strategy = (self.operators.smutation)(strategy.as_ref(), random);
        let individual = (self.operators.mutation)(&recombinant, &strategy, random);

        let mut offspring = Member::unevaluated(individual, Arc::new(strategy));
        offspring.evaluate(&self.operators.objective)?;

        Ok(offspring)
    }

    fn mix(&self, parents: &[Member<I>], random: &dyn Random) -> (I, Arc<StrategyParams>) {
        match &self.mixing {
            Mixing::Single => {
                let parent = &parents[random.uniform_int(0, parents.len() as i32 - 1) as usize];
                (parent.individual.clone(), parent.strategy.clone())
            }
            Mixing::Recombine { rho, recombination, srecombination } => {
                let selected = random
                    .sample_indices(parents.len(), (*rho).min(parents.len()))
                    .into_iter()
                    .map(|idx| &parents[idx])
                    .collect::<Vec<_>>();

                let individuals = selected.iter().map(|parent| &parent.individual).collect::<Vec<_>>();
                let strategies = selected.iter().map(|parent| parent.strategy.as_ref()).collect::<Vec<_>>();

                (recombination(individuals.as_slice(), random), Arc::new(srecombination(strategies.as_slice(), random)))
            }
        }
    }
}
