//! Colony iteration loop.
//!
//! # Algorithm
//!
//! 1. Seed the pheromone matrix uniformly
//! 2. Each iteration:
//!    a. Build `n_ants` independent tours from the frozen matrices
//!    b. Pick the iteration best (minimum length, first found wins ties)
//!    c. Deposit `1/distance` on every edge of the iteration best
//!    d. Evaporate the whole matrix by `decay`
//!    e. Update the global best on strict improvement
//! 3. Return the global best tour and its length
//!
//! Pheromone updates happen strictly after all ants of the iteration have
//! finished and before the next iteration starts, so tour construction
//! within one iteration only ever reads a frozen snapshot.
//!
//! # Reference
//!
//! Dorigo, M., Maniezzo, V. & Colorni, A. (1996). "Ant System: Optimization
//! by a Colony of Cooperating Agents", *IEEE Trans. SMC-B* 26(1), 29-41.

use crate::builder::TourBuilder;
use crate::config::AcoConfig;
use crate::types::{DistanceMatrix, PheromoneMatrix};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Best tour found across all iterations, as a permutation of city
    /// indices. Infinite-length only if the instance has no finite tour.
    pub best_tour: Vec<usize>,

    /// Closed-loop length of the best tour.
    pub best_length: f64,

    /// Iterations executed (less than `n_iter` only when cancelled).
    pub iterations: usize,

    /// Global best length after each iteration. Monotonically
    /// non-increasing.
    pub length_history: Vec<f64>,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Executes the Ant Colony Optimization loop.
///
/// # Usage
///
/// ```
/// use aco_tsp::{AcoConfig, AcoRunner, DistanceMatrix};
///
/// let inf = f64::INFINITY;
/// let distances = DistanceMatrix::new(vec![
///     vec![inf, 1.0, 2.0],
///     vec![1.0, inf, 1.5],
///     vec![2.0, 1.5, inf],
/// ]).unwrap();
///
/// let config = AcoConfig::default().with_n_iter(20).with_seed(42);
/// let result = AcoRunner::run(&distances, &config);
/// assert_eq!(result.best_tour.len(), 3);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the optimization.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`AcoConfig::validate`]
    /// first to get a descriptive error) or if the configured start city is
    /// out of range for the instance.
    pub fn run(distances: &DistanceMatrix, config: &AcoConfig) -> AcoResult {
        Self::run_with_cancel(distances, config, None)
    }

    /// Runs the optimization with an optional cancellation token.
    ///
    /// When the flag is set the run stops at the next iteration boundary
    /// and returns the best tour found so far.
    pub fn run_with_cancel(
        distances: &DistanceMatrix,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> AcoResult {
        config.validate().expect("invalid AcoConfig");

        let n = distances.n_cities();
        if let Some(start) = config.start {
            assert!(start < n, "start city {start} out of range for {n} cities");
        }

        // Single-city boundary case: the closing edge would be the
        // infinite self-distance, so the trivial tour is returned directly.
        if n == 1 {
            return AcoResult {
                best_tour: vec![0],
                best_length: 0.0,
                iterations: 0,
                length_history: Vec::new(),
                cancelled: false,
            };
        }

        let base_seed = config.seed.unwrap_or_else(rand::random);
        let mut pheromones = PheromoneMatrix::new(n, config.initial_pheromone);

        let mut best_tour: Vec<usize> = Vec::new();
        let mut best_length = f64::INFINITY;
        let mut length_history = Vec::with_capacity(config.n_iter);
        let mut iterations = 0usize;
        let mut cancelled = false;

        for iteration in 0..config.n_iter {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let tours = build_tours(distances, &pheromones, config, base_seed, iteration);

            // Iteration best: strict comparison keeps the first of equals.
            let mut iter_best = 0usize;
            let mut iter_length = distances.tour_length(&tours[0]);
            for (idx, tour) in tours.iter().enumerate().skip(1) {
                let length = distances.tour_length(tour);
                if length < iter_length {
                    iter_length = length;
                    iter_best = idx;
                }
            }

            pheromones.deposit(&tours[iter_best], distances);
            pheromones.evaporate(config.decay);

            // Strict improvement only, so the earliest-found optimum is
            // kept. The empty check seeds the result on the first
            // iteration even when every tour is infinite (unreachable
            // cities), keeping the returned tour a valid permutation.
            if iter_length < best_length || best_tour.is_empty() {
                best_length = iter_length;
                best_tour = tours.into_iter().nth(iter_best).expect("n_ants >= 1");
            }

            length_history.push(best_length);
            iterations = iteration + 1;
        }

        AcoResult {
            best_tour,
            best_length,
            iterations,
            length_history,
            cancelled,
        }
    }
}

/// Builds all tours for one iteration from the frozen matrices.
///
/// Every ant gets its own RNG derived from the base seed and the ant's
/// position in the run, so the sequential and parallel paths produce
/// identical tours.
fn build_tours(
    distances: &DistanceMatrix,
    pheromones: &PheromoneMatrix,
    config: &AcoConfig,
    base_seed: u64,
    iteration: usize,
) -> Vec<Vec<usize>> {
    let builder = TourBuilder::new(distances, pheromones, config.alpha, config.beta);
    let build_one = |ant: usize| {
        let mut rng = ChaCha8Rng::seed_from_u64(ant_seed(base_seed, iteration, ant, config.n_ants));
        let start = match config.start {
            Some(city) => city,
            None => rng.random_range(0..distances.n_cities()),
        };
        builder.build(start, &mut rng)
    };

    #[cfg(feature = "parallel")]
    if config.parallel {
        return (0..config.n_ants).into_par_iter().map(build_one).collect();
    }

    (0..config.n_ants).map(build_one).collect()
}

/// One independent RNG stream per (iteration, ant) pair.
fn ant_seed(base: u64, iteration: usize, ant: usize, n_ants: usize) -> u64 {
    let stream = (iteration as u64) * (n_ants as u64) + ant as u64;
    base ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
