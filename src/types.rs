//! Problem and colony state data structures.
//!
//! [`DistanceMatrix`] is the immutable problem instance; [`PheromoneMatrix`]
//! is the colony's shared state, mutated once per iteration by deposition
//! and evaporation.

/// Pairwise city distances for a TSP instance.
///
/// Square matrix of non-negative distances with an infinite diagonal, so a
/// city can never be selected as its own successor. Immutable once
/// constructed; the runner borrows it for the whole run.
///
/// # Examples
///
/// ```
/// use aco_tsp::DistanceMatrix;
///
/// let inf = f64::INFINITY;
/// let matrix = DistanceMatrix::new(vec![
///     vec![inf, 1.0, 2.0],
///     vec![1.0, inf, 1.5],
///     vec![2.0, 1.5, inf],
/// ]).unwrap();
///
/// assert_eq!(matrix.n_cities(), 3);
/// assert!((matrix.tour_length(&[0, 1, 2]) - 4.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: usize,
    cells: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a distance matrix from row vectors, validating the instance.
    ///
    /// Rejects empty input, non-square shapes, negative or NaN distances,
    /// and any diagonal entry that is not `+inf`. Malformed instances are
    /// configuration errors and are reported here, before any run starts.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, String> {
        let n = rows.len();
        if n == 0 {
            return Err("distance matrix must contain at least one city".into());
        }

        let mut cells = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(format!(
                    "distance matrix must be square: row {i} has {} entries, expected {n}",
                    row.len()
                ));
            }
            for (j, &d) in row.iter().enumerate() {
                if i == j {
                    if d != f64::INFINITY {
                        return Err(format!(
                            "distance[{i}][{i}] must be +inf to forbid self-loops, got {d}"
                        ));
                    }
                } else if !(d >= 0.0) {
                    return Err(format!("distance[{i}][{j}] must be non-negative, got {d}"));
                }
                cells.push(d);
            }
        }

        Ok(Self { n, cells })
    }

    /// Number of cities in the instance.
    pub fn n_cities(&self) -> usize {
        self.n
    }

    /// Distance from city `i` to city `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.n + j]
    }

    /// Closed-loop length of a tour: consecutive edges plus the closing
    /// edge back to the first city.
    ///
    /// A single-city tour has length zero (the closing self-edge is
    /// degenerate and excluded by convention).
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        if tour.len() < 2 {
            return 0.0;
        }
        let mut length: f64 = tour.windows(2).map(|w| self.get(w[0], w[1])).sum();
        length += self.get(tour[tour.len() - 1], tour[0]);
        length
    }
}

/// Symmetric matrix of pheromone intensities, one per city pair.
///
/// Seeded with a uniform positive value before the first iteration, then
/// mutated in place each iteration: additive deposition along the iteration
/// best tour, followed by multiplicative evaporation of every cell. Owned
/// exclusively by the runner; tour builders get read-only access.
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    n: usize,
    cells: Vec<f64>,
}

impl PheromoneMatrix {
    /// Creates an `n x n` matrix with every cell set to `initial`.
    pub fn new(n: usize, initial: f64) -> Self {
        Self {
            n,
            cells: vec![initial; n * n],
        }
    }

    /// Pheromone intensity on the edge from city `i` to city `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.n + j]
    }

    /// Deposits pheromone along every edge of a closed tour.
    ///
    /// Each edge (i, j), including the closing edge, gains `1 / distance`
    /// in both directions, keeping the matrix symmetric. Infinite-distance
    /// edges deposit nothing.
    pub fn deposit(&mut self, tour: &[usize], distances: &DistanceMatrix) {
        if tour.len() < 2 {
            return;
        }
        for k in 0..tour.len() {
            let i = tour[k];
            let j = tour[(k + 1) % tour.len()];
            let amount = distances.get(i, j).recip();
            self.cells[i * self.n + j] += amount;
            self.cells[j * self.n + i] += amount;
        }
    }

    /// Multiplies every cell by `decay`. A decay of 1.0 disables
    /// evaporation entirely.
    pub fn evaporate(&mut self, decay: f64) {
        for cell in &mut self.cells {
            *cell *= decay;
        }
    }
}
