//! Refiner configuration.

/// Acceptance criterion applied when a candidate is not a strict
/// improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptanceRule {
    /// The flight firmware's literal formula, kept for behavioral parity:
    /// `exp(-(improved as f32) / T)` compared against the fixed
    /// [`SaConfig::acceptance_threshold`], where `improved` is the boolean
    /// "candidate energy is lower" used as the numerator instead of an
    /// energy delta.
    ///
    /// The boolean numerator inverts the intent: in this branch the rule
    /// accepts energy-worsening candidates (probability `exp(0) = 1`) and
    /// rejects energy-improving ones (`exp(-1/T)` stays below a 0.5
    /// threshold whenever `T < 1.44`). Almost certainly a defect in the
    /// original; retained as the default so results stay comparable.
    Legacy,

    /// Corrected Metropolis criterion on the actual energy delta: accept
    /// with probability `exp(-(E_candidate - E_current) / T)` against a
    /// uniform random draw.
    Metropolis,
}

/// Configuration for the simulated-annealing refiner.
///
/// # Examples
///
/// ```
/// use drone_traj::sa::{AcceptanceRule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_rule(AcceptanceRule::Metropolis)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Starting temperature.
    pub initial_temperature: f32,

    /// Linear temperature decrement applied after each inner block.
    pub cooling_step: f32,

    /// Candidate evaluations per temperature level.
    pub iterations_per_temperature: usize,

    /// Fixed probability threshold for [`AcceptanceRule::Legacy`].
    pub acceptance_threshold: f32,

    /// The search stops early once the best-so-far route misses no more
    /// than this fraction of the waypoint count (rounded to nearest).
    pub acceptable_miss_fraction: f32,

    /// Acceptance criterion for non-improving candidates.
    pub rule: AcceptanceRule,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 0.5,
            cooling_step: 0.02,
            iterations_per_temperature: 100,
            acceptance_threshold: 0.5,
            acceptable_miss_fraction: 0.1,
            rule: AcceptanceRule::Legacy,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f32) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_step(mut self, step: f32) -> Self {
        self.cooling_step = step;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_acceptance_threshold(mut self, threshold: f32) -> Self {
        self.acceptance_threshold = threshold;
        self
    }

    pub fn with_acceptable_miss_fraction(mut self, fraction: f32) -> Self {
        self.acceptable_miss_fraction = fraction;
        self
    }

    pub fn with_rule(mut self, rule: AcceptanceRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.cooling_step <= 0.0 {
            return Err("cooling_step must be positive".into());
        }
        if self.iterations_per_temperature == 0 {
            return Err("iterations_per_temperature must be positive".into());
        }
        if !(0.0..=1.0).contains(&self.acceptable_miss_fraction) {
            return Err(format!(
                "acceptable_miss_fraction must be in [0, 1], got {}",
                self.acceptable_miss_fraction
            ));
        }
        Ok(())
    }
}
