//! Error types for configuration and simulation.

use thiserror::Error;

/// Invalid simulation parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Each trial needs at least two samples for a t-test to have a degree of freedom.
    #[error("samples_per_trial must be at least 2, got {n}")]
    TooFewSamples {
        /// Requested samples per trial.
        n: usize,
    },

    /// At least one trial is required.
    #[error("runs must be positive")]
    NoRuns,

    /// A mean shift was NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFiniteShift {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Failure while running the simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// The configuration did not validate.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The reference t-distribution could not be constructed.
    #[error("t-distribution unavailable: {0}")]
    Distribution(String),

    /// An intermediate array did not have the expected length or shape.
    #[error("{what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Which array was checked.
        what: &'static str,
        /// Expected length.
        expected: usize,
        /// Observed length.
        actual: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimulationError>;
