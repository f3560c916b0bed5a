//! Configuration for the confound simulation.

use serde::Serialize;

use crate::constants::{
    ALPHA, DEFAULT_CONFOUND_SIZE, DEFAULT_EFFECT_SIZE, DEFAULT_RUNS, DEFAULT_SAMPLES_PER_TRIAL,
    MIN_SAMPLES_PER_TRIAL,
};
use crate::error::ConfigError;

/// How a p-value exactly equal to [`ALPHA`] is classified.
///
/// Significance is always `p < ALPHA`. The policies differ only in what
/// counts as "insignificant".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BoundaryPolicy {
    /// Insignificant means `p > ALPHA`.
    ///
    /// A trial whose p-value is exactly `ALPHA` is neither significant nor
    /// insignificant and silently drops out of every bucket that depends on
    /// that test.
    #[default]
    Strict,

    /// Insignificant means `p >= ALPHA`.
    ///
    /// Every finite p-value is either significant or insignificant.
    Inclusive,
}

impl BoundaryPolicy {
    /// Whether `p` counts as significant.
    ///
    /// NaN is never significant.
    pub fn is_significant(self, p: f64) -> bool {
        p < ALPHA
    }

    /// Whether `p` counts as insignificant.
    ///
    /// NaN is never insignificant.
    pub fn is_insignificant(self, p: f64) -> bool {
        match self {
            Self::Strict => p > ALPHA,
            Self::Inclusive => p >= ALPHA,
        }
    }
}

/// Parameters of one simulation.
///
/// The defaults reproduce `run(n=20, effect_size=0.5, confound_size=0.5, runs=10000)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// Paired samples drawn per trial (`n`). Default: 20.
    pub samples_per_trial: usize,

    /// Mean shift added to the effect signal. Default: 0.5.
    pub effect_size: f64,

    /// Mean shift added to the confound signal. Default: 0.5.
    pub confound_size: f64,

    /// Number of independent trials. Default: 10,000.
    pub runs: usize,

    /// Treatment of p-values exactly at the threshold. Default: [`BoundaryPolicy::Strict`].
    pub boundary: BoundaryPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            samples_per_trial: DEFAULT_SAMPLES_PER_TRIAL,
            effect_size: DEFAULT_EFFECT_SIZE,
            confound_size: DEFAULT_CONFOUND_SIZE,
            runs: DEFAULT_RUNS,
            boundary: BoundaryPolicy::Strict,
        }
    }
}

impl Config {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a quick configuration for interactive exploration.
    ///
    /// Default shifts with 1,000 runs.
    pub fn quick() -> Self {
        Self {
            runs: 1_000,
            ..Default::default()
        }
    }

    /// Create a thorough configuration for tight rate estimates.
    ///
    /// Default shifts with 100,000 runs.
    pub fn thorough() -> Self {
        Self {
            runs: 100_000,
            ..Default::default()
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the number of samples per trial.
    pub fn samples_per_trial(mut self, n: usize) -> Self {
        assert!(n >= MIN_SAMPLES_PER_TRIAL, "samples_per_trial must be at least 2");
        self.samples_per_trial = n;
        self
    }

    /// Set the effect mean shift.
    pub fn effect_size(mut self, size: f64) -> Self {
        assert!(size.is_finite(), "effect_size must be finite");
        self.effect_size = size;
        self
    }

    /// Set the confound mean shift.
    pub fn confound_size(mut self, size: f64) -> Self {
        assert!(size.is_finite(), "confound_size must be finite");
        self.confound_size = size;
        self
    }

    /// Set the number of trials.
    pub fn runs(mut self, runs: usize) -> Self {
        assert!(runs > 0, "runs must be positive");
        self.runs = runs;
        self
    }

    /// Set the boundary policy.
    pub fn boundary(mut self, policy: BoundaryPolicy) -> Self {
        self.boundary = policy;
        self
    }

    /// Check if the configuration is valid.
    ///
    /// Fields are public, so a struct literal can bypass the builder
    /// assertions; the engine always calls this before drawing samples.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples_per_trial < MIN_SAMPLES_PER_TRIAL {
            return Err(ConfigError::TooFewSamples {
                n: self.samples_per_trial,
            });
        }
        if self.runs == 0 {
            return Err(ConfigError::NoRuns);
        }
        if !self.effect_size.is_finite() {
            return Err(ConfigError::NonFiniteShift {
                name: "effect_size",
                value: self.effect_size,
            });
        }
        if !self.confound_size.is_finite() {
            return Err(ConfigError::NonFiniteShift {
                name: "confound_size",
                value: self.confound_size,
            });
        }
        Ok(())
    }
}
