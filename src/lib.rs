//! Ant Colony Optimization for the symmetric Travelling Salesman Problem.
//!
//! A population of stochastic agents (ants) repeatedly constructs closed
//! tours over a city set, biased by a shared pheromone matrix that is
//! reinforced along good tours and evaporated over time. The crate is a
//! pure optimization library: instance parsing, batch drivers, and output
//! writing live with the caller, which hands in a [`DistanceMatrix`] and
//! receives the best tour found.
//!
//! # Components
//!
//! - [`DistanceMatrix`]: immutable problem instance, validated at
//!   construction (square, non-negative, infinite diagonal).
//! - [`PheromoneMatrix`]: shared colony state, mutated once per iteration.
//! - [`TourBuilder`]: one ant's probabilistic tour construction.
//! - [`AcoRunner`]: the iteration loop — tour generation, pheromone
//!   update, and global best tracking.
//!
//! # Example
//!
//! ```
//! use aco_tsp::{AcoConfig, AcoRunner, DistanceMatrix};
//!
//! let inf = f64::INFINITY;
//! let distances = DistanceMatrix::new(vec![
//!     vec![inf, 1.0, 2.0, 1.0],
//!     vec![1.0, inf, 1.0, 2.0],
//!     vec![2.0, 1.0, inf, 1.0],
//!     vec![1.0, 2.0, 1.0, inf],
//! ]).unwrap();
//!
//! let config = AcoConfig::default()
//!     .with_n_ants(10)
//!     .with_n_iter(50)
//!     .with_seed(42);
//!
//! let result = AcoRunner::run(&distances, &config);
//! assert_eq!(result.best_tour.len(), 4);
//! ```

mod builder;
mod config;
mod runner;
mod types;

pub use builder::TourBuilder;
pub use config::AcoConfig;
pub use runner::{AcoResult, AcoRunner};
pub use types::{DistanceMatrix, PheromoneMatrix};
