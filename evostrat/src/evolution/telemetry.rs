//! A module which provides the logic to collect metrics about evolution execution and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/evolution/telemetry_test.rs"]
mod telemetry_test;

use crate::individual::Individual;
use crate::population::Member;
use crate::utils::{Float, InfoLogger, Timer, compare_floats};

/// Encapsulates different measurements regarding evolution execution.
#[derive(Clone, Debug, Default)]
pub struct TelemetryMetrics {
    /// Evolution duration in milliseconds, initialization included.
    pub duration: usize,
    /// Total amount of generations.
    pub generations: usize,
    /// Total amount of objective function evaluations.
    pub evaluations: usize,
    /// Speed: generations per second.
    pub speed: Float,
    /// Ratio of generations which improved the best known fitness.
    pub improvement_ratio: Float,
}

/// Specifies a telemetry mode.
#[derive(Clone, Default)]
pub enum TelemetryMode {
    /// No logging at all.
    #[default]
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best individual is logged.
        log_best: usize,
        /// Specifies how often population is logged.
        log_population: usize,
    },
}

impl TelemetryMode {
    /// Logs the best fitness of every generation.
    pub fn verbose(logger: InfoLogger) -> Self {
        TelemetryMode::OnlyLogging { logger, log_best: 1, log_population: usize::MAX }
    }

    /// Logs the best fitness and fitness of all parents of every generation.
    pub fn debug(logger: InfoLogger) -> Self {
        TelemetryMode::OnlyLogging { logger, log_best: 1, log_population: 1 }
    }

    /// Returns logger if logging is enabled.
    pub fn logger(&self) -> Option<&InfoLogger> {
        match self {
            TelemetryMode::None => None,
            TelemetryMode::OnlyLogging { logger, .. } => Some(logger),
        }
    }
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    metrics: TelemetryMetrics,
    time: Timer,
    mode: TelemetryMode,
    improvement_tracker: ImprovementTracker,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self {
            metrics: TelemetryMetrics::default(),
            time: Timer::start(),
            mode,
            improvement_tracker: ImprovementTracker::default(),
        }
    }

    /// Reports initial population.
    pub fn on_initial<I: Individual>(&mut self, parents: &[Member<I>], init_time: Timer) {
        self.metrics.evaluations += parents.len();
        self.improvement_tracker.reset(best_fitness(parents));

        self.log(&format!(
            "[{}s] created initial population of {} in {}ms, best fitness: {}",
            self.time.elapsed_secs(),
            parents.len(),
            init_time.elapsed_millis(),
            format_fitness(best_fitness(parents))
        ));
    }

    /// Reports generation statistics. Parents are expected to be ranked.
    pub fn on_generation<I: Individual>(
        &mut self,
        generation: usize,
        parents: &[Member<I>],
        evaluations: usize,
        generation_time: Timer,
    ) {
        self.metrics.generations = generation;
        self.metrics.evaluations += evaluations;
        self.improvement_tracker.track(best_fitness(parents));
        self.metrics.improvement_ratio = self.improvement_tracker.ratio();

        let (log_best, log_population) = match &self.mode {
            TelemetryMode::None => return,
            TelemetryMode::OnlyLogging { log_best, log_population, .. } => (*log_best, *log_population),
        };

        if generation % log_best.max(1) == 0 {
            self.log(&format!(
                "[{}s] generation {} took {}ms, best fitness: {}, improvement ratio: {:.3}",
                self.time.elapsed_secs(),
                generation,
                generation_time.elapsed_millis(),
                format_fitness(best_fitness(parents)),
                self.metrics.improvement_ratio
            ));
        }

        if generation % log_population.max(1) == 0 {
            self.log(&format!("[{}s] population state at generation {generation}:", self.time.elapsed_secs()));
            parents.iter().for_each(|member| self.log(&format!("\tfitness: {}", format_fitness(member.fitness))));
        }
    }

    /// Reports final statistic.
    pub fn on_result<I: Individual>(&mut self, parents: &[Member<I>]) {
        let elapsed = self.time.elapsed_secs_as_float();
        let generations = self.metrics.generations;

        self.metrics.duration = self.time.elapsed_millis() as usize;
        self.metrics.speed = if elapsed > 0. { generations as Float / elapsed } else { 0. };

        self.log(&format!(
            "[{}s] total generations: {}, evaluations: {}, speed: {:.2} gen/sec",
            self.time.elapsed_secs(),
            generations,
            self.metrics.evaluations,
            self.metrics.speed
        ));
        self.log(&format!("\tbest fitness: {}", format_fitness(best_fitness(parents))));
    }

    /// Returns a timer started when telemetry was created.
    pub fn timer(&self) -> &Timer {
        &self.time
    }

    /// Gets metrics.
    pub fn take_metrics(self) -> TelemetryMetrics {
        self.metrics
    }

    /// Writes log message.
    pub fn log(&self, message: &str) {
        if let TelemetryMode::OnlyLogging { logger, .. } = &self.mode {
            (logger)(message)
        }
    }
}

#[derive(Default)]
struct ImprovementTracker {
    best: Option<Float>,
    generations: usize,
    improvements: usize,
}

impl ImprovementTracker {
    fn reset(&mut self, best: Float) {
        self.best = Some(best);
        self.generations = 0;
        self.improvements = 0;
    }

    fn track(&mut self, best: Float) {
        let is_improved = self.best.is_none_or(|previous| compare_floats(best, previous).is_lt());

        if is_improved {
            self.best = Some(best);
            self.improvements += 1;
        }

        self.generations += 1;
    }

    fn ratio(&self) -> Float {
        if self.generations == 0 { 0. } else { self.improvements as Float / self.generations as Float }
    }
}

fn best_fitness<I: Individual>(members: &[Member<I>]) -> Float {
    members.iter().map(|member| member.fitness).min_by(|a, b| compare_floats(*a, *b)).unwrap_or(Float::INFINITY)
}

fn format_fitness(fitness: Float) -> String {
    format!("{fitness:.6}")
}
