#[cfg(test)]
#[path = "../../tests/unit/evolution/config_test.rs"]
mod config_test;

use crate::evolution::TelemetryMode;
use crate::individual::Individual;
use crate::operators::*;
use crate::population::validate_initial_population;
use crate::selection::Selection;
use crate::strategy::StrategyParams;
use crate::termination::*;
use crate::utils::*;
use std::sync::Arc;

/// Default amount of generations per element of an individual.
const GENERATIONS_PER_ELEMENT: usize = 100;

/// A validated configuration which controls evolution execution. Immutable during a run.
pub struct EvolutionConfig<I: Individual> {
    /// An initial individual which defines shape of the search space.
    pub initial: I,
    /// An explicit initial population, if any.
    pub initial_population: Option<Vec<I>>,
    /// A strategy parameters template shared by all initial individuals.
    pub initial_strategy: Arc<StrategyParams>,
    /// Amount of parents (mu).
    pub mu: usize,
    /// Amount of parents mixed into one offspring (rho).
    pub rho: usize,
    /// Amount of offspring (lambda).
    pub lambda: usize,
    /// Selection discipline.
    pub selection: Selection,
    /// Keep fitness history of every generation.
    pub interim: bool,
    /// Operators used by evolution.
    pub operators: Operators<I>,
    /// A termination defines when evolution should stop.
    pub termination: Box<dyn Termination>,
    /// An environment.
    pub environment: Environment,
    /// A telemetry mode.
    pub telemetry_mode: TelemetryMode,
}

/// Provides configurable way to build evolution configuration using fluent interface style.
pub struct EvolutionConfigBuilder<I: Individual> {
    initial: I,
    initial_population: Option<Vec<I>>,
    initial_strategy: StrategyParams,
    mu: usize,
    rho: usize,
    lambda: usize,
    selection: Selection,
    max_generations: Option<usize>,
    max_time: Option<Float>,
    target_fitness: Option<Float>,
    interim: bool,

    objective: Option<ObjectiveFn<I>>,
    creation: Option<CreationFn<I>>,
    recombination: Option<RecombinationFn<I>>,
    srecombination: Option<StrategyRecombinationFn>,
    mutation: Option<MutationFn<I>>,
    smutation: Option<StrategyMutationFn>,
    termination: Option<TerminationFn>,

    environment: Option<Environment>,
    telemetry_mode: TelemetryMode,
}

impl<I: Individual> EvolutionConfigBuilder<I> {
    /// Creates a new builder. Given individual defines shape of the search space.
    pub fn new(initial: I) -> Self {
        Self {
            initial,
            initial_population: None,
            initial_strategy: StrategyParams::default(),
            mu: 1,
            rho: 1,
            lambda: 1,
            selection: Selection::Plus,
            max_generations: None,
            max_time: None,
            target_fitness: None,
            interim: false,
            objective: None,
            creation: None,
            recombination: None,
            srecombination: None,
            mutation: None,
            smutation: None,
            termination: None,
            environment: None,
            telemetry_mode: TelemetryMode::None,
        }
    }

    /// Sets amount of parents (mu). Default is 1.
    pub fn with_mu(mut self, mu: usize) -> Self {
        self.mu = mu;
        self
    }

    /// Sets amount of parents mixed into one offspring (rho). Default is 1.
    pub fn with_rho(mut self, rho: usize) -> Self {
        self.rho = rho;
        self
    }

    /// Sets amount of offspring per generation (lambda). Default is 1.
    pub fn with_lambda(mut self, lambda: usize) -> Self {
        self.lambda = lambda;
        self
    }

    /// Sets selection discipline. Default is plus.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets max generations to be run by evolution.
    /// Default is 100 times amount of elements in the initial individual.
    pub fn with_max_generations(mut self, limit: Option<usize>) -> Self {
        self.max_generations = limit;
        self
    }

    /// Sets max running time limit in seconds. Default is None.
    pub fn with_max_time(mut self, limit: Option<Float>) -> Self {
        self.max_time = limit;
        self
    }

    /// Sets target fitness: evolution stops when the best fitness is not greater. Default is None.
    pub fn with_target_fitness(mut self, target: Option<Float>) -> Self {
        self.target_fitness = target;
        self
    }

    /// Enables fitness history recording. Default is false.
    pub fn with_interim(mut self, interim: bool) -> Self {
        self.interim = interim;
        self
    }

    /// Sets explicit initial population of exactly mu individuals.
    pub fn with_initial_population(mut self, individuals: Vec<I>) -> Self {
        self.initial_population = Some(individuals);
        self
    }

    /// Sets strategy parameters template. Default is an empty set.
    pub fn with_initial_strategy(mut self, strategy: StrategyParams) -> Self {
        self.initial_strategy = strategy;
        self
    }

    /// Sets an infallible objective function to be minimized.
    pub fn with_objective<F>(mut self, objective: F) -> Self
    where
        F: Fn(&I) -> Float + Send + Sync + 'static,
    {
        self.objective = Some(objective_fn(objective));
        self
    }

    /// Sets an objective function which can fail. Failure aborts evolution.
    pub fn with_fallible_objective(mut self, objective: ObjectiveFn<I>) -> Self {
        self.objective = Some(objective);
        self
    }

    /// Sets creation operator. Default clones the initial individual.
    pub fn with_creation(mut self, creation: CreationFn<I>) -> Self {
        self.creation = Some(creation);
        self
    }

    /// Sets recombination operator. Required if rho is greater than one.
    pub fn with_recombination(mut self, recombination: RecombinationFn<I>) -> Self {
        self.recombination = Some(recombination);
        self
    }

    /// Sets strategy recombination operator. Default averages parameters.
    pub fn with_strategy_recombination(mut self, srecombination: StrategyRecombinationFn) -> Self {
        self.srecombination = Some(srecombination);
        self
    }

    /// Sets mutation operator.
    pub fn with_mutation(mut self, mutation: MutationFn<I>) -> Self {
        self.mutation = Some(mutation);
        self
    }

    /// Sets strategy mutation operator. Default keeps strategy parameters unchanged.
    pub fn with_strategy_mutation(mut self, smutation: StrategyMutationFn) -> Self {
        self.smutation = Some(smutation);
        self
    }

    /// Sets early stop predicate evaluated on the best strategy parameters. Default never stops.
    pub fn with_termination(mut self, termination: TerminationFn) -> Self {
        self.termination = Some(termination);
        self
    }

    /// Sets environment. Default uses unseeded random and sequential production.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Sets telemetry mode. Default is no telemetry.
    pub fn with_telemetry(mut self, mode: TelemetryMode) -> Self {
        self.telemetry_mode = mode;
        self
    }

    /// Builds the evolution config. Fails if any parameter is invalid; no objective
    /// evaluation happens here.
    pub fn build(self) -> EvolutionResult<EvolutionConfig<I>> {
        let logger = self.telemetry_mode.logger().cloned();
        let log = |message: &str| {
            if let Some(logger) = logger.as_ref() {
                (logger)(message)
            }
        };

        validate_sizes(self.mu, self.rho, self.lambda, &self.selection)?;

        if self.rho > 1 && self.recombination.is_none() {
            return Err(configuration_error(format!("recombination operator is required when rho={} > 1", self.rho)));
        }

        if let Some(individuals) = self.initial_population.as_ref() {
            validate_initial_population(&self.initial, individuals.as_slice(), self.mu)?;
        }

        let objective = self.objective.ok_or_else(|| configuration_error("missing objective function"))?;
        let mutation = self.mutation.ok_or_else(|| configuration_error("missing mutation operator"))?;

        let termination = self.termination.unwrap_or_else(never_terminate);
        let max_generations =
            self.max_generations.unwrap_or_else(|| GENERATIONS_PER_ELEMENT * self.initial.shape().len());

        log(&format!(
            "configured ({}/{}{}{})-es for {}, max-generations: {max_generations}",
            self.mu,
            self.rho,
            if self.selection == Selection::Plus { "+" } else { "," },
            self.lambda,
            short_type_name::<I>(),
        ));

        let mut terminations: Vec<Box<dyn Termination>> =
            vec![Box::new(MaxGeneration::new(max_generations)), Box::new(StrategyPredicate::new(termination.clone()))];

        if let Some(limit) = self.max_time {
            log(&format!("configured to use max-time: {limit}s"));
            terminations.push(Box::new(MaxTime::new(limit)));
        }

        if let Some(target) = self.target_fitness {
            log(&format!("configured to use target fitness: {target}"));
            terminations.push(Box::new(TargetFitness::new(target)));
        }

        let creation = self.creation.unwrap_or_else(|| clone_creation(self.initial.clone()));

        Ok(EvolutionConfig {
            initial: self.initial,
            initial_population: self.initial_population,
            initial_strategy: Arc::new(self.initial_strategy),
            mu: self.mu,
            rho: self.rho,
            lambda: self.lambda,
            selection: self.selection,
            interim: self.interim,
            operators: Operators {
                objective,
                creation,
                recombination: self.recombination,
                srecombination: self.srecombination.unwrap_or_else(average_srecombination),
                mutation,
                smutation: self.smutation.unwrap_or_else(identity_smutation),
                termination,
            },
            termination: Box::new(CompositeTermination::new(terminations)),
            environment: self.environment.unwrap_or_default(),
            telemetry_mode: self.telemetry_mode,
        })
    }
}

/// Checks population sizes against each other and selection discipline.
pub fn validate_sizes(mu: usize, rho: usize, lambda: usize, selection: &Selection) -> EvolutionResult<()> {
    if mu == 0 {
        return Err(configuration_error("amount of parents (mu) must be at least 1"));
    }

    if lambda == 0 {
        return Err(configuration_error("amount of offspring (lambda) must be at least 1"));
    }

    if rho == 0 || rho > mu {
        return Err(configuration_error(format!("mixing number (rho) must be in [1, mu={mu}], got {rho}")));
    }

    if *selection == Selection::Comma && mu >= lambda {
        return Err(configuration_error(format!(
            "comma selection requires mu < lambda, got mu={mu}, lambda={lambda}"
        )));
    }

    Ok(())
}

fn configuration_error(message: impl Into<String>) -> EvolutionError {
    EvolutionError::Configuration(message.into())
}
