//! Analysis stages of the confound simulation.
//!
//! 1. **Hypothesis testing** ([`hypothesis`]): per-trial p-values for the
//!    unconfounded, confounded and stim test families
//! 2. **Classification** ([`classification`]): index-set algebra that
//!    sorts trials into the no-alarm, good-alarm and false-rejection buckets

pub mod classification;
pub mod hypothesis;

pub use classification::{intersect, select, where_indices, Classification, ClassificationCounts};
pub use hypothesis::{compute_p_values, TrialPValues};
