//! Fixed constants for the confound simulation.

/// Significance threshold used for every test in the simulation.
///
/// Not configurable: all three test families share the same cutoff.
pub const ALPHA: f64 = 0.05;

/// Default number of paired samples per trial.
pub const DEFAULT_SAMPLES_PER_TRIAL: usize = 20;

/// Default mean shift applied to the effect signal.
pub const DEFAULT_EFFECT_SIZE: f64 = 0.5;

/// Default mean shift applied to the confound signal.
pub const DEFAULT_CONFOUND_SIZE: f64 = 0.5;

/// Default number of independent trials.
pub const DEFAULT_RUNS: usize = 10_000;

/// Smallest trial size for which a t-test has a degree of freedom.
pub const MIN_SAMPLES_PER_TRIAL: usize = 2;
