//! Specifies individual representation: a fixed shape array of object parameters.

#[cfg(test)]
#[path = "../tests/unit/individual_test.rs"]
mod individual_test;

use crate::strategy::Matrix;
use std::fmt::{Display, Formatter};

/// Dimension extents of an individual. Fixed for the whole run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shape(Vec<usize>);

impl Shape {
    /// Creates a new instance of `Shape`.
    pub fn new(extents: Vec<usize>) -> Self {
        Self(extents)
    }

    /// Returns dimension extents.
    pub fn extents(&self) -> &[usize] {
        self.0.as_slice()
    }

    /// Returns amount of dimensions.
    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    /// Returns total amount of elements. Scalar shape (no dimensions) holds one element.
    pub fn len(&self) -> usize {
        self.0.iter().product()
    }

    /// Returns true if shape holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let extents = self.0.iter().map(|extent| extent.to_string()).collect::<Vec<_>>();
        write!(f, "({})", extents.join("x"))
    }
}

/// Represents a candidate solution point in the search space.
///
/// An individual is value-like: it is cloned, never shared between population slots.
pub trait Individual: Clone + Send + Sync + 'static {
    /// Returns the shape of the individual.
    fn shape(&self) -> Shape;
}

impl<T> Individual for Vec<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn shape(&self) -> Shape {
        Shape::new(vec![self.len()])
    }
}

impl<T, const N: usize> Individual for [T; N]
where
    T: Clone + Send + Sync + 'static,
{
    fn shape(&self) -> Shape {
        Shape::new(vec![N])
    }
}

impl<T> Individual for Box<[T]>
where
    T: Clone + Send + Sync + 'static,
{
    fn shape(&self) -> Shape {
        Shape::new(vec![self.len()])
    }
}

impl Individual for Matrix {
    fn shape(&self) -> Shape {
        Shape::new(vec![self.rows(), self.cols()])
    }
}
