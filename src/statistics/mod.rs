//! Statistical methods for the confound simulation.
//!
//! - Streaming mean/variance via Welford's algorithm
//! - One-sample and paired Student's t-tests, scalar and row-wise over a
//!   [`TrialMatrix`](crate::types::TrialMatrix)

mod online_stats;
mod ttest;

pub use online_stats::OnlineStats;
pub use ttest::{
    one_sample_rows, one_sample_t_test, paired_rows, paired_t_test, TTestResult, TwoSidedT,
};
