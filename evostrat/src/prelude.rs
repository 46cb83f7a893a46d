//! This module reimports a common used types.

pub use crate::evolution::EvolutionConfig;
pub use crate::evolution::EvolutionConfigBuilder;
pub use crate::evolution::EvolutionStrategy;
pub use crate::evolution::GenerationRecord;
pub use crate::evolution::RecordTag;
pub use crate::evolution::RunResult;
pub use crate::evolution::TelemetryMetrics;
pub use crate::evolution::TelemetryMode;
pub use crate::evolution::optimize;

pub use crate::individual::{Individual, Shape};
pub use crate::operators::*;
pub use crate::population::{Member, Population};
pub use crate::selection::Selection;
pub use crate::strategy::{Matrix, StrategyParams, StrategyValue};

pub use crate::termination::{EvolutionState, Termination};

pub use crate::utils::compare_floats;
pub use crate::utils::{DefaultRandom, Random};
pub use crate::utils::{Environment, InfoLogger, Parallelism};
pub use crate::utils::{EvolutionError, EvolutionResult, Float, GenericError, GenericResult};
