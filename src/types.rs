//! Type aliases and common types.

use nalgebra::DMatrix;

/// Per-trial samples: one row per trial, one column per paired sample.
///
/// Shape is always `(runs, samples_per_trial)`.
pub type TrialMatrix = DMatrix<f64>;

/// The four synthesized signals for one simulation.
///
/// All four matrices share the same `(runs, samples_per_trial)` shape.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialData {
    /// Standard-normal noise shifted by `effect_size`.
    pub effect: TrialMatrix,
    /// Standard-normal noise shifted by `confound_size`.
    pub confound: TrialMatrix,
    /// Unshifted baseline for the first condition.
    pub group1: TrialMatrix,
    /// Unshifted baseline for the second condition.
    pub group2: TrialMatrix,
}

impl TrialData {
    /// Number of trials (rows).
    pub fn runs(&self) -> usize {
        self.effect.nrows()
    }

    /// Samples per trial (columns).
    pub fn samples_per_trial(&self) -> usize {
        self.effect.ncols()
    }

    /// Shape shared by all four matrices.
    pub fn shape(&self) -> (usize, usize) {
        self.effect.shape()
    }

    /// Whether all four matrices have the same shape.
    pub fn is_consistent(&self) -> bool {
        let shape = self.shape();
        self.confound.shape() == shape
            && self.group1.shape() == shape
            && self.group2.shape() == shape
    }

    /// Treatment condition without the confound: `group1 + effect`.
    pub fn unconfounded_condition(&self) -> TrialMatrix {
        &self.group1 + &self.effect
    }

    /// Treatment condition with the confound: `group1 + effect + confound`.
    pub fn confounded_condition(&self) -> TrialMatrix {
        &self.group1 + &self.effect + &self.confound
    }
}

/// Trial indices in ascending order with no duplicates.
pub type IndexSet = Vec<usize>;
