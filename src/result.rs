//! Result types for a completed simulation.

use std::fmt;

use serde::Serialize;

use crate::analysis::{select, Classification, ClassificationCounts, TrialPValues};
use crate::config::Config;

/// Outcome of one simulation.
///
/// The three buckets hold unconfounded p-values, in ascending trial order.
/// Their lengths depend on the random draw and are generally unequal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    /// Configuration the simulation ran with.
    pub config: Config,

    /// Spurious significance from an unflagged confound.
    pub no_alarm: Vec<f64>,

    /// Spurious significance from a flagged confound.
    pub good_alarm: Vec<f64>,

    /// Real effects caught up in confound flagging.
    pub false_rejection: Vec<f64>,

    /// Intermediate index sets.
    pub classification: Classification,

    /// Per-trial p-values of all three test families.
    #[serde(skip)]
    pub p_values: TrialPValues,
}

impl SimulationResult {
    /// Assemble the buckets from classified trials.
    pub fn assemble(
        config: Config,
        p_values: TrialPValues,
        classification: Classification,
    ) -> Self {
        let no_alarm = select(&p_values.unconfounded, &classification.no_alarm);
        let good_alarm = select(&p_values.unconfounded, &classification.good_alarm);
        let false_rejection = select(&p_values.unconfounded, &classification.false_rejection);

        Self {
            config,
            no_alarm,
            good_alarm,
            false_rejection,
            classification,
            p_values,
        }
    }

    /// The `(no_alarm, good_alarm, false_rejection)` triple.
    pub fn into_buckets(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.no_alarm, self.good_alarm, self.false_rejection)
    }

    /// Sizes of every classification set.
    pub fn counts(&self) -> ClassificationCounts {
        self.classification.counts()
    }

    /// Bucket sizes as fractions of the number of classified trials.
    ///
    /// All rates are 0.0 when there are no trials.
    pub fn rates(&self) -> BucketRates {
        let runs = self.p_values.runs().max(1) as f64;
        BucketRates {
            no_alarm: self.no_alarm.len() as f64 / runs,
            good_alarm: self.good_alarm.len() as f64 / runs,
            false_rejection: self.false_rejection.len() as f64 / runs,
            confound_detected: self.classification.sig_stim.len() as f64 / runs,
        }
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rates = self.rates();
        writeln!(
            f,
            "n={} effect={} confound={} runs={}",
            self.config.samples_per_trial,
            self.config.effect_size,
            self.config.confound_size,
            self.config.runs
        )?;
        writeln!(f, "  confound detected: {:.1}%", rates.confound_detected * 100.0)?;
        writeln!(
            f,
            "  no alarm:          {} ({:.1}%)",
            self.no_alarm.len(),
            rates.no_alarm * 100.0
        )?;
        writeln!(
            f,
            "  good alarm:        {} ({:.1}%)",
            self.good_alarm.len(),
            rates.good_alarm * 100.0
        )?;
        write!(
            f,
            "  false rejection:   {} ({:.1}%)",
            self.false_rejection.len(),
            rates.false_rejection * 100.0
        )
    }
}

/// Bucket sizes relative to the number of classified trials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BucketRates {
    /// `|no_alarm| / runs`
    pub no_alarm: f64,
    /// `|good_alarm| / runs`
    pub good_alarm: f64,
    /// `|false_rejection| / runs`
    pub false_rejection: f64,
    /// `|sig_stim| / runs`
    pub confound_detected: f64,
}
