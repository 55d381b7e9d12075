//! Probabilistic tour construction for a single ant.
//!
//! At each step the next city is drawn from a distribution over the
//! unvisited cities, weighted by pheromone intensity (exponent alpha) and
//! inverse distance (exponent beta). The construction is read-only with
//! respect to both matrices, so any number of ants can build tours from
//! the same iteration snapshot concurrently.

use crate::types::{DistanceMatrix, PheromoneMatrix};
use rand::Rng;

/// Builds one complete tour from a frozen colony snapshot.
///
/// Borrows the distance and pheromone matrices for the duration of one
/// iteration; [`build`](TourBuilder::build) produces a permutation of all
/// cities starting at the requested city.
pub struct TourBuilder<'a> {
    distances: &'a DistanceMatrix,
    pheromones: &'a PheromoneMatrix,
    alpha: f64,
    beta: f64,
}

impl<'a> TourBuilder<'a> {
    pub fn new(
        distances: &'a DistanceMatrix,
        pheromones: &'a PheromoneMatrix,
        alpha: f64,
        beta: f64,
    ) -> Self {
        Self {
            distances,
            pheromones,
            alpha,
            beta,
        }
    }

    /// Constructs a tour visiting every city exactly once.
    ///
    /// The permutation property holds by construction: each step draws
    /// from the unvisited set and marks the drawn city visited.
    ///
    /// # Panics
    /// Panics if `start` is not a valid city index.
    pub fn build<R: Rng>(&self, start: usize, rng: &mut R) -> Vec<usize> {
        let n = self.distances.n_cities();
        assert!(start < n, "start city {start} out of range for {n} cities");

        let mut tour = Vec::with_capacity(n);
        let mut visited = vec![false; n];
        tour.push(start);
        visited[start] = true;

        let mut current = start;
        for _ in 1..n {
            let next = self.choose_city(current, &visited, rng);
            tour.push(next);
            visited[next] = true;
            current = next;
        }
        tour
    }

    /// Desirability of moving from city `i` to city `j`:
    /// `pheromone^alpha * (1/distance)^beta`.
    fn score(&self, i: usize, j: usize) -> f64 {
        self.pheromones.get(i, j).powf(self.alpha) * self.distances.get(i, j).recip().powf(self.beta)
    }

    /// Draws the next city among the unvisited ones by cumulative-sum
    /// sampling over the normalized scores.
    ///
    /// Two fallbacks keep the draw well defined:
    /// - a zero-distance edge gives an infinite score, so the draw is
    ///   restricted to the infinite-score candidates (uniformly);
    /// - a zero (or non-finite) score total, e.g. after pheromone
    ///   underflow or when only unreachable cities remain, falls back to a
    ///   uniform draw over all candidates so construction always proceeds.
    fn choose_city<R: Rng>(&self, current: usize, visited: &[bool], rng: &mut R) -> usize {
        let candidates: Vec<usize> = (0..visited.len()).filter(|&j| !visited[j]).collect();
        debug_assert!(!candidates.is_empty());

        let scores: Vec<f64> = candidates
            .iter()
            .map(|&j| self.score(current, j))
            .collect();

        let infinite: Vec<usize> = scores
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_infinite())
            .map(|(idx, _)| idx)
            .collect();
        if !infinite.is_empty() {
            return candidates[infinite[rng.random_range(0..infinite.len())]];
        }

        let total: f64 = scores.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            return candidates[rng.random_range(0..candidates.len())];
        }

        let threshold = rng.random_range(0.0..total);
        let mut cumulative = 0.0;
        for (idx, &score) in scores.iter().enumerate() {
            cumulative += score;
            if cumulative > threshold {
                return candidates[idx];
            }
        }

        candidates[candidates.len() - 1] // floating-point fallback
    }
}
