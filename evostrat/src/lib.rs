//! This crate implements a (mu/rho +, lambda) evolution strategy: a black-box optimizer which
//! minimizes an objective function over a fixed shape search space using pluggable recombination,
//! mutation and termination operators with self-adaptive strategy parameters.
//!
//! # Examples
//!
//! ```
//! use evostrat::example::*;
//! use evostrat::prelude::*;
//!
//! let config = EvolutionConfigBuilder::new(vec![1., -1.])
//!     .with_mu(3)
//!     .with_lambda(6)
//!     .with_max_generations(Some(50))
//!     .with_initial_strategy(StrategyParams::new().with(SIGMA, 0.1))
//!     .with_objective(|x: &Vec<f64>| sphere(x.as_slice()))
//!     .with_creation(uniform_creation(-1., 1.))
//!     .with_mutation(isotropic_mutation())
//!     .with_environment(Environment::new_with_seed(42))
//!     .build()
//!     .expect("valid configuration");
//!
//! let result = optimize(config).expect("successful run");
//!
//! assert_eq!(result.generations, 50);
//! assert!(result.fitness < 1.);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod evolution;
pub mod example;
pub mod individual;
pub mod operators;
pub mod population;
pub mod prelude;
pub mod selection;
pub mod strategy;
pub mod termination;
pub mod utils;
