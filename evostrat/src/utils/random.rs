#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use rand::Error;
use rand_distr::StandardNormal;
use std::sync::{Arc, Mutex, PoisonError};

/// Provides the way to use randomized values in generic way.
pub trait Random: Send + Sync {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..=max)
    }

    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..max)
    }

    /// Produces a sample from the standard normal distribution N(0, 1).
    fn standard_normal(&self) -> Float {
        self.get_rng().sample::<Float, _>(StandardNormal)
    }

    /// Produces a sample from the normal distribution with given mean and standard deviation.
    fn normal(&self, mean: Float, std_dev: Float) -> Float {
        mean + std_dev * self.standard_normal()
    }

    /// Returns `amount` distinct indices uniformly drawn from `0..length`, in random order.
    /// Equivalent to taking first `amount` items of a random permutation of `0..length`.
    fn sample_indices(&self, length: usize, amount: usize) -> Vec<usize> {
        assert!(amount <= length);
        rand::seq::index::sample(&mut self.get_rng(), length, amount).into_vec()
    }

    /// Returns a new seed which can be used to create an independent random stream.
    fn next_seed(&self) -> u64 {
        self.get_rng().next_u64()
    }

    /// Returns RNG.
    fn get_rng(&self) -> RandomGen;
}

/// A default random implementation. Keeps its own generator state, so two instances created
/// with the same seed produce the same sequence of values.
#[derive(Clone)]
pub struct DefaultRandom {
    rng: Arc<Mutex<SmallRng>>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` with seed.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { rng: Arc::new(Mutex::new(SmallRng::seed_from_u64(seed))) }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: Arc::new(Mutex::new(SmallRng::from_entropy())) }
    }
}

impl Random for DefaultRandom {
    fn get_rng(&self) -> RandomGen {
        RandomGen { rng: self.rng.clone() }
    }
}

/// Specifies underlying random generator type.
#[derive(Clone, Debug)]
pub struct RandomGen {
    rng: Arc<Mutex<SmallRng>>,
}

impl RandomGen {
    #[inline(always)]
    fn apply<R>(&self, action: impl FnOnce(&mut SmallRng) -> R) -> R {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        action(&mut rng)
    }
}

impl RngCore for RandomGen {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.apply(|rng| rng.next_u32())
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.apply(|rng| rng.next_u64())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.apply(|rng| rng.fill_bytes(dest))
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.apply(|rng| rng.try_fill_bytes(dest))
    }
}
