use crate::utils::{DefaultRandom, Random, get_cpus};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A logger type which is called with various information.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Specifies how offspring of one generation are produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Parallelism {
    /// All offspring are produced one by one on the calling thread.
    #[default]
    Sequential,
    /// Offspring are produced on a dedicated thread pool of given size.
    Threads(usize),
}

impl Parallelism {
    /// Returns parallelism which uses all available CPUs.
    pub fn available() -> Self {
        Parallelism::Threads(get_cpus())
    }
}

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random>,

    /// Specifies how offspring production is distributed.
    pub parallelism: Parallelism,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, parallelism: Parallelism, logger: InfoLogger) -> Self {
        Self { random, parallelism, logger }
    }

    /// Creates an instance of `Environment` with reproducible random generator.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { random: Arc::new(DefaultRandom::new_with_seed(seed)), ..Self::default() }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(DefaultRandom::default()), Parallelism::default(), Arc::new(|msg| println!("{msg}")))
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").field("parallelism", &self.parallelism).finish_non_exhaustive()
    }
}
