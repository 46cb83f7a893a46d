//! Contains functionality to run a (mu/rho +, lambda) evolution strategy.

#[cfg(test)]
#[path = "../../tests/unit/evolution/evolution_test.rs"]
mod evolution_test;

mod config;
pub use self::config::*;

mod generation;
pub use self::generation::OffspringProducer;

mod record;
pub use self::record::{GenerationRecord, RecordTag};
use self::record::InterimRecorder;

pub mod telemetry;
pub use self::telemetry::*;

use crate::individual::Individual;
use crate::population::{Member, Population};
use crate::strategy::StrategyParams;
use crate::termination::EvolutionState;
use crate::utils::{EvolutionError, EvolutionResult, Float, Timer};
use std::sync::Arc;

/// A final result of evolution run.
pub struct RunResult<I: Individual> {
    /// The best individual of the final parent generation.
    pub individual: I,
    /// Fitness of the best individual.
    pub fitness: Float,
    /// Strategy parameters of the best individual.
    pub strategy: Arc<StrategyParams>,
    /// Amount of executed generations.
    pub generations: usize,
    /// Amount of objective function evaluations, initialization included.
    pub evaluations: usize,
    /// Final parent generation, ranked by fitness.
    pub population: Vec<Member<I>>,
    /// Fitness history, empty if interim recording was disabled.
    pub record: GenerationRecord,
    /// Execution metrics.
    pub metrics: TelemetryMetrics,
}

/// An evolution strategy which runs generation cycles until termination.
pub struct EvolutionStrategy<I: Individual> {
    config: EvolutionConfig<I>,
    producer: OffspringProducer<I>,
}

impl<I: Individual> EvolutionStrategy<I> {
    /// Creates a new instance of `EvolutionStrategy`.
    pub fn new(config: EvolutionConfig<I>) -> EvolutionResult<Self> {
        validate_sizes(config.mu, config.rho, config.lambda, &config.selection)?;

        let producer =
            OffspringProducer::new(config.operators.clone(), config.rho, config.lambda, &config.environment.parallelism)
                .map_err(|err| EvolutionError::Configuration(err.to_string()))?;

        Ok(Self { config, producer })
    }

    /// Runs evolution and returns the best found individual with run details.
    pub fn run(self) -> EvolutionResult<RunResult<I>> {
        let Self { config, producer } = self;

        let random = config.environment.random.clone();
        let mut telemetry = Telemetry::new(config.telemetry_mode.clone());
        let mut recorder = InterimRecorder::new(config.interim);

        telemetry.log("preparing initial population");
        let init_time = Timer::start();
        let mut population = Population::initialize(
            &config.initial,
            config.initial_population,
            config.mu,
            &config.operators,
            config.initial_strategy,
            random.as_ref(),
        )?;
        let mut evaluations = population.size();

        recorder.on_parents(population.members());
        telemetry.on_initial(population.members(), init_time);

        let mut generation = 0;
        loop {
            let generation_time = Timer::start();
            generation += 1;

            let offspring = producer.produce(population.members(), random.as_ref())?;
            evaluations += offspring.len();

            recorder.on_offspring(offspring.as_slice());
            population.evolve(offspring, &config.selection);
            recorder.on_parents(population.members());

            telemetry.on_generation(generation, population.members(), config.lambda, generation_time);

            let best = population.best();
            let state = EvolutionState {
                generation,
                best_fitness: best.fitness,
                best_strategy: best.strategy.as_ref(),
                timer: telemetry.timer(),
            };

            if config.termination.is_termination(&state) {
                break;
            }
        }

        telemetry.on_result(population.members());

        let best = population.best().clone();

        Ok(RunResult {
            individual: best.individual,
            fitness: best.fitness,
            strategy: best.strategy,
            generations: generation,
            evaluations,
            population: population.into_members(),
            record: recorder.into_record(),
            metrics: telemetry.take_metrics(),
        })
    }
}

/// Runs evolution with given configuration.
pub fn optimize<I: Individual>(config: EvolutionConfig<I>) -> EvolutionResult<RunResult<I>> {
    EvolutionStrategy::new(config)?.run()
}
