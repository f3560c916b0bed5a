//! Outcome classification by double-thresholding p-values.
//!
//! Every set holds trial indices in ascending order. The three buckets
//! returned to callers are:
//!
//! - **no alarm**: the confound went unflagged, the confounded test was
//!   significant, and the effect alone was not. Spurious significance with
//!   nothing to warn the user.
//! - **good alarm**: same spurious significance, but the confound was
//!   flagged, so the user can be warned.
//! - **false rejection**: the effect alone was significant and the confound
//!   was flagged anyway, so a real effect gets caught up in the flagging.

use serde::Serialize;

use crate::config::BoundaryPolicy;
use crate::types::IndexSet;

use super::TrialPValues;

/// Indices where `pred(values[i])` holds.
pub fn where_indices(values: &[f64], pred: impl Fn(f64) -> bool) -> IndexSet {
    values
        .iter()
        .enumerate()
        .filter(|&(_, &p)| pred(p))
        .map(|(i, _)| i)
        .collect()
}

/// Sorted intersection of two ascending index sets.
pub fn intersect(a: &[usize], b: &[usize]) -> IndexSet {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

/// Gather `values` at the given indices.
pub fn select(values: &[f64], indices: &[usize]) -> Vec<f64> {
    indices.iter().map(|&i| values[i]).collect()
}

/// Intermediate and final index sets of one simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Confound flagged: `stim_tests` significant.
    pub sig_stim: IndexSet,
    /// Confound not flagged: `stim_tests` insignificant.
    pub insig_stim: IndexSet,
    /// Confound not flagged, confounded test significant.
    pub nonrejected_insig_in_conf: IndexSet,
    /// Confound flagged, confounded test significant.
    pub rejected_sig_in_conf: IndexSet,
    /// Bucket: unflagged spurious significance.
    pub no_alarm: IndexSet,
    /// Bucket: flagged spurious significance.
    pub good_alarm: IndexSet,
    /// Bucket: real effect caught by confound flagging.
    pub false_rejection: IndexSet,
}

impl Classification {
    /// Partition trials according to `policy`.
    pub fn classify(p: &TrialPValues, policy: BoundaryPolicy) -> Self {
        let sig = |p: f64| policy.is_significant(p);
        let insig = |p: f64| policy.is_insignificant(p);

        let sig_stim = where_indices(&p.stim_tests, sig);
        let insig_stim = where_indices(&p.stim_tests, insig);
        let conf_sig = where_indices(&p.confounded, sig);
        let unconf_sig = where_indices(&p.unconfounded, sig);
        let unconf_insig = where_indices(&p.unconfounded, insig);

        let nonrejected_insig_in_conf = intersect(&insig_stim, &conf_sig);
        let no_alarm = intersect(&nonrejected_insig_in_conf, &unconf_insig);

        let rejected_sig_in_conf = intersect(&sig_stim, &conf_sig);
        let good_alarm = intersect(&rejected_sig_in_conf, &unconf_insig);

        let false_rejection = intersect(&sig_stim, &unconf_sig);

        Self {
            sig_stim,
            insig_stim,
            nonrejected_insig_in_conf,
            rejected_sig_in_conf,
            no_alarm,
            good_alarm,
            false_rejection,
        }
    }

    /// Set sizes, for reporting.
    pub fn counts(&self) -> ClassificationCounts {
        ClassificationCounts {
            sig_stim: self.sig_stim.len(),
            insig_stim: self.insig_stim.len(),
            nonrejected_insig_in_conf: self.nonrejected_insig_in_conf.len(),
            rejected_sig_in_conf: self.rejected_sig_in_conf.len(),
            no_alarm: self.no_alarm.len(),
            good_alarm: self.good_alarm.len(),
            false_rejection: self.false_rejection.len(),
        }
    }
}

/// Sizes of each [`Classification`] set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ClassificationCounts {
    /// `|sig_stim|`
    pub sig_stim: usize,
    /// `|insig_stim|`
    pub insig_stim: usize,
    /// `|nonrejected_insig_in_conf|`
    pub nonrejected_insig_in_conf: usize,
    /// `|rejected_sig_in_conf|`
    pub rejected_sig_in_conf: usize,
    /// `|no_alarm|`
    pub no_alarm: usize,
    /// `|good_alarm|`
    pub good_alarm: usize,
    /// `|false_rejection|`
    pub false_rejection: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ALPHA;

    #[test]
    fn test_intersect() {
        assert_eq!(intersect(&[0, 2, 4, 6], &[1, 2, 3, 6, 9]), vec![2, 6]);
        assert_eq!(intersect(&[], &[1, 2]), Vec::<usize>::new());
        assert_eq!(intersect(&[5], &[5]), vec![5]);
    }

    #[test]
    fn test_where_and_select() {
        let values = [0.01, 0.5, 0.04, 0.9];
        let idx = where_indices(&values, |p| p < ALPHA);
        assert_eq!(idx, vec![0, 2]);
        assert_eq!(select(&values, &idx), vec![0.01, 0.04]);
    }

    /// One trial per interesting combination of (stim, confounded, unconfounded).
    fn hand_built() -> TrialPValues {
        TrialPValues {
            // Trials 0..=5 in column order.
            stim_tests: vec![0.50, 0.01, 0.01, 0.50, 0.01, 0.50],
            confounded: vec![0.01, 0.01, 0.50, 0.01, 0.01, 0.50],
            unconfounded: vec![0.20, 0.30, 0.02, 0.01, 0.03, 0.40],
        }
    }

    #[test]
    fn test_buckets() {
        let c = Classification::classify(&hand_built(), BoundaryPolicy::Strict);

        assert_eq!(c.sig_stim, vec![1, 2, 4]);
        assert_eq!(c.insig_stim, vec![0, 3, 5]);
        assert_eq!(c.nonrejected_insig_in_conf, vec![0, 3]);
        assert_eq!(c.rejected_sig_in_conf, vec![1, 4]);
        assert_eq!(c.no_alarm, vec![0]);
        assert_eq!(c.good_alarm, vec![1]);
        assert_eq!(c.false_rejection, vec![2, 4]);
    }

    #[test]
    fn test_boundary_trial_dropped_under_strict() {
        let p = TrialPValues {
            stim_tests: vec![ALPHA, ALPHA],
            confounded: vec![0.01, 0.01],
            unconfounded: vec![0.5, 0.01],
        };

        let strict = Classification::classify(&p, BoundaryPolicy::Strict);
        assert!(strict.sig_stim.is_empty());
        assert!(strict.insig_stim.is_empty());
        assert!(strict.no_alarm.is_empty());

        let inclusive = Classification::classify(&p, BoundaryPolicy::Inclusive);
        assert!(inclusive.sig_stim.is_empty());
        assert_eq!(inclusive.insig_stim, vec![0, 1]);
        assert_eq!(inclusive.no_alarm, vec![0]);
    }

    #[test]
    fn test_unconfounded_at_alpha_strict() {
        let p = TrialPValues {
            stim_tests: vec![0.01],
            confounded: vec![0.01],
            unconfounded: vec![ALPHA],
        };
        let c = Classification::classify(&p, BoundaryPolicy::Strict);
        assert!(c.good_alarm.is_empty());
        assert!(c.false_rejection.is_empty());

        let c = Classification::classify(&p, BoundaryPolicy::Inclusive);
        assert_eq!(c.good_alarm, vec![0]);
    }

    #[test]
    fn test_nan_excluded() {
        let p = TrialPValues {
            stim_tests: vec![f64::NAN, 0.01],
            confounded: vec![0.01, f64::NAN],
            unconfounded: vec![0.5, 0.01],
        };
        let c = Classification::classify(&p, BoundaryPolicy::Inclusive);
        assert_eq!(c.sig_stim, vec![1]);
        assert!(c.insig_stim.is_empty());
        assert!(c.rejected_sig_in_conf.is_empty());
        assert_eq!(c.false_rejection, vec![1]);
    }

    #[test]
    fn test_counts() {
        let counts = Classification::classify(&hand_built(), BoundaryPolicy::Strict).counts();
        assert_eq!(counts.sig_stim, 3);
        assert_eq!(counts.no_alarm, 1);
        assert_eq!(counts.good_alarm, 1);
        assert_eq!(counts.false_rejection, 2);
    }
}
