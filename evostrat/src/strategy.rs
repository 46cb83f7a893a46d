//! Strategy parameters: an open set of named values which steer mutation of an individual and
//! co-evolve with it.

#[cfg(test)]
#[path = "../tests/unit/strategy_test.rs"]
mod strategy_test;

use crate::utils::Float;
use rustc_hash::FxHashMap;

/// A dense row-major matrix of floats.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Float>,
}

impl Matrix {
    /// Creates a new instance of `Matrix` from row-major data.
    /// Returns `None` if data size does not match `rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<Float>) -> Option<Self> {
        if rows * cols != data.len() {
            return None;
        }

        Some(Self { rows, cols, data })
    }

    /// Creates a matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![0.; rows * cols] }
    }

    /// Creates a square identity matrix.
    pub fn identity(size: usize) -> Self {
        let mut matrix = Self::zeros(size, size);
        (0..size).for_each(|idx| matrix.data[idx * size + idx] = 1.);

        matrix
    }

    /// Returns amount of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns amount of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns value at given position.
    pub fn get(&self, row: usize, col: usize) -> Option<Float> {
        if row < self.rows && col < self.cols { self.data.get(row * self.cols + col).copied() } else { None }
    }

    /// Returns a row slice.
    pub fn row(&self, row: usize) -> Option<&[Float]> {
        (row < self.rows).then(|| &self.data[row * self.cols..(row + 1) * self.cols])
    }

    /// Returns underlying row-major data.
    pub fn data(&self) -> &[Float] {
        self.data.as_slice()
    }
}

/// A strategy parameter value.
#[derive(Clone, Debug, PartialEq)]
pub enum StrategyValue {
    /// A single number, e.g. a global step size.
    Scalar(Float),
    /// A vector, e.g. per dimension step sizes or rotation angles.
    Vector(Vec<Float>),
    /// A matrix, e.g. a covariance matrix.
    Matrix(Matrix),
}

impl StrategyValue {
    /// Returns a short kind name of the value.
    pub fn kind(&self) -> &'static str {
        match self {
            StrategyValue::Scalar(_) => "scalar",
            StrategyValue::Vector(_) => "vector",
            StrategyValue::Matrix(_) => "matrix",
        }
    }

    /// Averages values of the same kind and size element-wise.
    /// Returns `None` if any value differs from the first one in kind or size.
    fn average(values: &[&StrategyValue]) -> Option<StrategyValue> {
        let first = *values.first()?;
        let count = values.len() as Float;

        match first {
            StrategyValue::Scalar(_) => values
                .iter()
                .map(|value| match value {
                    StrategyValue::Scalar(value) => Some(*value),
                    _ => None,
                })
                .sum::<Option<Float>>()
                .map(|sum| StrategyValue::Scalar(sum / count)),
            StrategyValue::Vector(first) => values
                .iter()
                .map(|value| match value {
                    StrategyValue::Vector(data) if data.len() == first.len() => Some(data.as_slice()),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(|all| StrategyValue::Vector(average_slices(first.len(), all.as_slice(), count))),
            StrategyValue::Matrix(first) => values
                .iter()
                .map(|value| match value {
                    StrategyValue::Matrix(other) if other.rows == first.rows && other.cols == first.cols => {
                        Some(other.data.as_slice())
                    }
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(|all| {
                    StrategyValue::Matrix(Matrix {
                        rows: first.rows,
                        cols: first.cols,
                        data: average_slices(first.data.len(), all.as_slice(), count),
                    })
                }),
        }
    }
}

impl From<Float> for StrategyValue {
    fn from(value: Float) -> Self {
        StrategyValue::Scalar(value)
    }
}

impl From<Vec<Float>> for StrategyValue {
    fn from(value: Vec<Float>) -> Self {
        StrategyValue::Vector(value)
    }
}

impl From<Matrix> for StrategyValue {
    fn from(value: Matrix) -> Self {
        StrategyValue::Matrix(value)
    }
}

/// A named set of strategy parameters which is carried alongside each individual.
///
/// Keys are defined by the operators in use; the same keys are expected in every set of one run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrategyParams {
    values: FxHashMap<String, StrategyValue>,
}

impl StrategyParams {
    /// Creates an empty strategy parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a set with given value added.
    pub fn with(mut self, key: &str, value: impl Into<StrategyValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a value, returning previous one if it was present.
    pub fn insert(&mut self, key: &str, value: impl Into<StrategyValue>) -> Option<StrategyValue> {
        self.values.insert(key.to_string(), value.into())
    }

    /// Returns a value by its key.
    pub fn get(&self, key: &str) -> Option<&StrategyValue> {
        self.values.get(key)
    }

    /// Returns a scalar value by its key.
    pub fn scalar(&self, key: &str) -> Option<Float> {
        match self.get(key) {
            Some(StrategyValue::Scalar(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns a vector value by its key.
    pub fn vector(&self, key: &str) -> Option<&[Float]> {
        match self.get(key) {
            Some(StrategyValue::Vector(value)) => Some(value.as_slice()),
            _ => None,
        }
    }

    /// Returns a matrix value by its key.
    pub fn matrix(&self, key: &str) -> Option<&Matrix> {
        match self.get(key) {
            Some(StrategyValue::Matrix(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns all keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys = self.values.keys().map(|key| key.as_str()).collect::<Vec<_>>();
        keys.sort_unstable();

        keys
    }

    /// Returns amount of parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns key-wise arithmetic mean of given sets. Keys are taken from the first set; a key
    /// which is missing or has a different kind or size in another set keeps the first set's value.
    pub fn average(sets: &[&StrategyParams]) -> StrategyParams {
        let Some(first) = sets.first() else {
            return StrategyParams::default();
        };

        let values = first
            .values
            .iter()
            .map(|(key, value)| {
                let averaged = sets
                    .iter()
                    .map(|set| set.values.get(key))
                    .collect::<Option<Vec<_>>>()
                    .and_then(|values| StrategyValue::average(values.as_slice()))
                    .unwrap_or_else(|| value.clone());

                (key.clone(), averaged)
            })
            .collect();

        StrategyParams { values }
    }
}

fn average_slices(size: usize, slices: &[&[Float]], count: Float) -> Vec<Float> {
    (0..size).map(|idx| slices.iter().map(|slice| slice[idx]).sum::<Float>() / count).collect()
}
