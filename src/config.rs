//! Run parameters for the colony.

/// Configuration for an Ant Colony Optimization run.
///
/// Immutable for the duration of a run. The pheromone/distance exponents
/// (`alpha`, `beta`) shape the selection distribution; `decay` controls
/// evaporation speed (retention factor, 1.0 = no evaporation).
///
/// # Examples
///
/// ```
/// use aco_tsp::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_n_ants(20)
///     .with_n_iter(200)
///     .with_decay(0.8)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of ants (tours built per iteration).
    pub n_ants: usize,

    /// Number of iterations before stopping.
    pub n_iter: usize,

    /// Pheromone retention factor in (0, 1]: every cell is multiplied by
    /// this once per iteration. 1.0 disables evaporation.
    pub decay: f64,

    /// Weight of pheromone intensity in the selection score. 0 makes
    /// selection ignore pheromone entirely.
    pub alpha: f64,

    /// Weight of inverse distance in the selection score. 0 makes
    /// selection ignore distance entirely.
    pub beta: f64,

    /// Uniform pheromone level before the first iteration.
    pub initial_pheromone: f64,

    /// Fixed start city for every ant, or `None` to draw a uniformly
    /// random start per ant.
    pub start: Option<usize>,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Build the ants of one iteration in parallel. Requires the
    /// `parallel` cargo feature; per-ant seeding keeps the output
    /// identical to a sequential run.
    pub parallel: bool,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            n_ants: 10,
            n_iter: 100,
            decay: 0.5,
            alpha: 1.0,
            beta: 1.0,
            initial_pheromone: 0.5,
            start: None,
            seed: None,
            parallel: false,
        }
    }
}

impl AcoConfig {
    pub fn with_n_ants(mut self, n: usize) -> Self {
        self.n_ants = n;
        self
    }

    pub fn with_n_iter(mut self, n: usize) -> Self {
        self.n_iter = n;
        self
    }

    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_initial_pheromone(mut self, level: f64) -> Self {
        self.initial_pheromone = level;
        self
    }

    pub fn with_start(mut self, city: usize) -> Self {
        self.start = Some(city);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.n_ants < 1 {
            return Err("n_ants must be at least 1".into());
        }
        if self.n_iter < 1 {
            return Err("n_iter must be at least 1".into());
        }
        if !(self.decay > 0.0 && self.decay <= 1.0) {
            return Err(format!("decay must be in (0, 1], got {}", self.decay));
        }
        if !(self.alpha >= 0.0 && self.alpha.is_finite()) {
            return Err(format!("alpha must be finite and >= 0, got {}", self.alpha));
        }
        if !(self.beta >= 0.0 && self.beta.is_finite()) {
            return Err(format!("beta must be finite and >= 0, got {}", self.beta));
        }
        if !(self.initial_pheromone > 0.0 && self.initial_pheromone.is_finite()) {
            return Err(format!(
                "initial_pheromone must be finite and positive, got {}",
                self.initial_pheromone
            ));
        }
        Ok(())
    }
}
