//! Main `ConfoundSimulation` entry point and builder.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::analysis::{compute_p_values, Classification};
use crate::config::{BoundaryPolicy, Config};
use crate::error::Result;
use crate::result::SimulationResult;
use crate::synthesis::generate_trials;

/// Main entry point for the confound simulation.
///
/// The engine never seeds itself: pass any [`Rng`] to [`run`](Self::run),
/// or use [`run_seeded`](Self::run_seeded) for a reproducible
/// `Xoshiro256PlusPlus` stream.
///
/// # Example
///
/// ```
/// use confound_sim::ConfoundSimulation;
///
/// let result = ConfoundSimulation::new()
///     .runs(500)
///     .confound_size(0.8)
///     .run_seeded(42)
///     .unwrap();
///
/// assert!(result.good_alarm.iter().all(|p| (0.0..=1.0).contains(p)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfoundSimulation {
    config: Config,
}

impl ConfoundSimulation {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from an existing configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Set samples per trial.
    pub fn samples_per_trial(mut self, n: usize) -> Self {
        self.config = self.config.samples_per_trial(n);
        self
    }

    /// Set the effect mean shift.
    pub fn effect_size(mut self, size: f64) -> Self {
        self.config = self.config.effect_size(size);
        self
    }

    /// Set the confound mean shift.
    pub fn confound_size(mut self, size: f64) -> Self {
        self.config = self.config.confound_size(size);
        self
    }

    /// Set the number of trials.
    pub fn runs(mut self, runs: usize) -> Self {
        self.config = self.config.runs(runs);
        self
    }

    /// Set the boundary policy.
    pub fn boundary(mut self, policy: BoundaryPolicy) -> Self {
        self.config = self.config.boundary(policy);
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the simulation, drawing from `rng`.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SimulationResult> {
        self.config.validate()?;

        let data = generate_trials(&self.config, rng);
        tracing::debug!(
            runs = data.runs(),
            samples_per_trial = data.samples_per_trial(),
            "synthesized trial data"
        );

        let p_values = compute_p_values(&data)?;
        let nan = p_values.nan_count();
        if nan > 0 {
            tracing::warn!(
                nan,
                "degenerate trials produced NaN p-values; they are left unclassified"
            );
        }

        let classification = Classification::classify(&p_values, self.config.boundary);
        let counts = classification.counts();
        tracing::debug!(
            sig_stim = counts.sig_stim,
            insig_stim = counts.insig_stim,
            no_alarm = counts.no_alarm,
            good_alarm = counts.good_alarm,
            false_rejection = counts.false_rejection,
            "classified trials"
        );

        Ok(SimulationResult::assemble(self.config.clone(), p_values, classification))
    }

    /// Run the simulation on `Xoshiro256PlusPlus::seed_from_u64(seed)`.
    pub fn run_seeded(&self, seed: u64) -> Result<SimulationResult> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        self.run(&mut rng)
    }
}

/// Run one simulation and return `(no_alarm, good_alarm, false_rejection)`.
///
/// Uses [`BoundaryPolicy::Strict`]. For the intermediate p-values and index
/// sets use [`ConfoundSimulation`] directly.
pub fn run<R: Rng + ?Sized>(
    n: usize,
    effect_size: f64,
    confound_size: f64,
    runs: usize,
    rng: &mut R,
) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>)> {
    let config = Config {
        samples_per_trial: n,
        effect_size,
        confound_size,
        runs,
        ..Config::default()
    };
    Ok(ConfoundSimulation::with_config(config).run(rng)?.into_buckets())
}
