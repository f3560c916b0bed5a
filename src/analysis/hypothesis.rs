//! Per-trial hypothesis tests.
//!
//! Three families, each yielding one p-value per trial:
//!
//! - **unconfounded**: paired test of `group1 + effect` against `group2`
//! - **confounded**: paired test of `group1 + effect + confound` against `group2`
//! - **stim**: one-sample test of whether the confound's mean differs from 0

use serde::Serialize;

use crate::error::{Result, SimulationError};
use crate::statistics::{one_sample_rows, paired_rows};
use crate::types::TrialData;

/// p-values of the three test families, indexed by trial.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialPValues {
    /// Effect in isolation.
    pub unconfounded: Vec<f64>,
    /// Effect with the confound added.
    pub confounded: Vec<f64>,
    /// Detectability of the confound itself.
    pub stim_tests: Vec<f64>,
}

impl TrialPValues {
    /// Number of trials.
    pub fn runs(&self) -> usize {
        self.stim_tests.len()
    }

    /// Check that every family has exactly `runs` entries.
    pub fn ensure_len(&self, runs: usize) -> Result<()> {
        for (what, values) in [
            ("stim_tests", &self.stim_tests),
            ("unconfounded_results", &self.unconfounded),
            ("confounded_results", &self.confounded),
        ] {
            if values.len() != runs {
                return Err(SimulationError::ShapeMismatch {
                    what,
                    expected: runs,
                    actual: values.len(),
                });
            }
        }
        Ok(())
    }

    /// Number of NaN p-values across all families.
    pub fn nan_count(&self) -> usize {
        self.unconfounded
            .iter()
            .chain(&self.confounded)
            .chain(&self.stim_tests)
            .filter(|p| p.is_nan())
            .count()
    }
}

/// Run all three test families over the synthesized trials.
pub fn compute_p_values(data: &TrialData) -> Result<TrialPValues> {
    if !data.is_consistent() {
        return Err(SimulationError::ShapeMismatch {
            what: "trial matrices",
            expected: data.effect.len(),
            actual: data.confound.len().min(data.group1.len()).min(data.group2.len()),
        });
    }

    let p_values = TrialPValues {
        unconfounded: paired_rows(&data.unconfounded_condition(), &data.group2)?,
        confounded: paired_rows(&data.confounded_condition(), &data.group2)?,
        stim_tests: one_sample_rows(&data.confound, 0.0)?,
    };
    p_values.ensure_len(data.runs())?;

    Ok(p_values)
}
