//! Random script configuration.

/// Configuration for the seeded script generators in
/// [`generate`](crate::generate).
///
/// The same config always yields the same script.
#[derive(Clone, Debug)]
pub struct ScriptConfig {
    /// Seed for the ChaCha8 generator.
    pub seed: u64,

    /// Number of actions to generate.
    ///
    /// Default: 1_000. Must be at least 1.
    pub steps: usize,

    /// Upper bound on the container length a script may reach.
    ///
    /// Default: 10_000. Also the initial fill of
    /// [`random_erases`](crate::generate::random_erases).
    pub max_len: usize,

    /// Largest bulk insert or range erase a single action may perform.
    ///
    /// Default: 10.
    pub max_run: usize,

    /// Probability that a shrinking step in
    /// [`random_changes`](crate::generate::random_changes) is a `clear`.
    ///
    /// Default: 0.02.
    pub clear_probability: f64,
}

impl ScriptConfig {
    /// Default number of generated actions.
    pub const DEFAULT_STEPS: usize = 1_000;

    /// Default length bound.
    pub const DEFAULT_MAX_LEN: usize = 10_000;

    /// Default bulk run length.
    pub const DEFAULT_MAX_RUN: usize = 10;

    /// Default probability of `clear` among shrinking steps.
    pub const DEFAULT_CLEAR_PROBABILITY: f64 = 0.02;

    /// Create a config for the given seed with default values for all
    /// other parameters.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            steps: Self::DEFAULT_STEPS,
            max_len: Self::DEFAULT_MAX_LEN,
            max_run: Self::DEFAULT_MAX_RUN,
            clear_probability: Self::DEFAULT_CLEAR_PROBABILITY,
        }
    }

    /// Same config with a different step count.
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Same config with a different length bound.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Check that every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `steps`, `max_len` or `max_run` is zero
    /// - `clear_probability` is NaN or outside `[0, 1]`
    pub fn validate(&self) -> Result<(), String> {
        if self.steps == 0 {
            return Err("steps must be at least 1".to_string());
        }
        if self.max_len == 0 {
            return Err("max_len must be at least 1".to_string());
        }
        if self.max_run == 0 {
            return Err("max_run must be at least 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.clear_probability) {
            return Err(format!(
                "clear_probability must be within [0, 1], got {}",
                self.clear_probability
            ));
        }
        Ok(())
    }
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
