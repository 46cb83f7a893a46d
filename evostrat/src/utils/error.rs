#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<Box<dyn std::error::Error>> for GenericError {
    fn from(value: Box<dyn std::error::Error>) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<Self> for GenericError {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for GenericError {}

impl Hash for GenericError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// An error which aborts evolution run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvolutionError {
    /// Run parameters or initial data are invalid, detected before any generation runs.
    Configuration(String),
    /// Objective function failed to evaluate an individual.
    Evaluation(GenericError),
}

/// A type alias for result type with `EvolutionError`.
pub type EvolutionResult<T> = Result<T, EvolutionError>;

impl EvolutionError {
    /// Returns true if error is caused by invalid configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, EvolutionError::Configuration(_))
    }
}

impl Display for EvolutionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EvolutionError::Configuration(msg) => write!(f, "configuration error: {msg}"),
            EvolutionError::Evaluation(err) => write!(f, "evaluation error: {err}"),
        }
    }
}

impl std::error::Error for EvolutionError {}

impl From<GenericError> for EvolutionError {
    fn from(value: GenericError) -> Self {
        EvolutionError::Evaluation(value)
    }
}
