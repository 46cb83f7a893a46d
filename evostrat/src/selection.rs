//! Specifies plus and comma selection of the next parent generation.

#[cfg(test)]
#[path = "../tests/unit/selection_test.rs"]
mod selection_test;

use crate::individual::Individual;
use crate::population::Member;
use crate::utils::{GenericError, compare_floats};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Selection discipline, fixed for the whole run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    /// Next parents are the best of parents and offspring together (elitist).
    #[default]
    Plus,
    /// Next parents are the best of offspring only. Requires more offspring than parents.
    Comma,
}

impl Display for Selection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::Plus => write!(f, "plus"),
            Selection::Comma => write!(f, "comma"),
        }
    }
}

impl FromStr for Selection {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "plus" | "+" => Ok(Selection::Plus),
            "comma" | "," => Ok(Selection::Comma),
            _ => Err(format!("unknown selection type: '{value}'").into()),
        }
    }
}

/// Selects `mu` members ranked by ascending fitness.
///
/// Plus: candidates are parents followed by offspring. Comma: candidates are offspring only.
/// Sorting is stable, so on equal fitness an earlier candidate wins: parents are preferred over
/// offspring and lower indices over higher ones.
pub fn select<I: Individual>(
    selection: &Selection,
    parents: Vec<Member<I>>,
    offspring: Vec<Member<I>>,
    mu: usize,
) -> Vec<Member<I>> {
    let mut candidates = match selection {
        Selection::Plus => parents.into_iter().chain(offspring).collect::<Vec<_>>(),
        Selection::Comma => offspring,
    };

    candidates.sort_by(|a, b| compare_floats(a.fitness, b.fitness));
    candidates.truncate(mu);

    candidates
}
