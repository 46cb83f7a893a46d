#[cfg(test)]
#[path = "../../tests/unit/termination/max_time_test.rs"]
mod max_time_test;

use super::*;

/// A termination criteria which is in terminated state when max time elapsed since evolution start.
pub struct MaxTime {
    limit_in_secs: Float,
}

impl MaxTime {
    /// Creates a new instance of `MaxTime`.
    pub fn new(limit_in_secs: Float) -> Self {
        Self { limit_in_secs }
    }
}

impl Termination for MaxTime {
    fn is_termination(&self, state: &EvolutionState) -> bool {
        state.timer.elapsed_secs_as_float() > self.limit_in_secs
    }

    fn estimate(&self, state: &EvolutionState) -> Float {
        if self.limit_in_secs > 0. { (state.timer.elapsed_secs_as_float() / self.limit_in_secs).min(1.) } else { 1. }
    }
}
