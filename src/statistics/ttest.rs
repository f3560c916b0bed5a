//! Student's t-tests with two-sided p-values.
//!
//! Matches the conventions of the usual `ttest_1samp` / `ttest_rel`
//! routines: sample variance uses ddof = 1, the statistic is
//! `(mean - popmean) / (s / sqrt(n))` with `n - 1` degrees of freedom, and
//! a zero-variance sample yields `t = ±inf` (p = 0) or, when the mean equals
//! `popmean` exactly, `t = NaN` (p = NaN).

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::{ConfigError, Result, SimulationError};
use crate::types::TrialMatrix;

use super::OnlineStats;

/// Outcome of a single t-test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TTestResult {
    /// t statistic.
    pub statistic: f64,
    /// Degrees of freedom.
    pub df: f64,
    /// Two-sided p-value in `[0, 1]`, or NaN for a degenerate sample.
    pub p_value: f64,
}

/// Reference t-distribution for two-sided tests at a fixed sample size.
///
/// Row-wise tests share one instance since every row has the same length.
#[derive(Debug, Clone)]
pub struct TwoSidedT {
    dist: StudentsT,
    df: f64,
}

impl TwoSidedT {
    /// Build the reference distribution for samples of size `n`.
    pub fn for_sample_size(n: usize) -> Result<Self> {
        if n < 2 {
            return Err(ConfigError::TooFewSamples { n }.into());
        }
        let df = (n - 1) as f64;
        let dist = StudentsT::new(0.0, 1.0, df)
            .map_err(|e| SimulationError::Distribution(e.to_string()))?;
        Ok(Self { dist, df })
    }

    /// Degrees of freedom.
    pub fn df(&self) -> f64 {
        self.df
    }

    /// Two-sided p-value for statistic `t`.
    pub fn p_value(&self, t: f64) -> f64 {
        if t.is_nan() {
            return f64::NAN;
        }
        if t.is_infinite() {
            return 0.0;
        }
        (2.0 * self.dist.cdf(-t.abs())).min(1.0)
    }

    /// Test whether the mean summarized by `stats` differs from `popmean`.
    pub fn test(&self, stats: &OnlineStats, popmean: f64) -> TTestResult {
        debug_assert_eq!(stats.count() as f64 - 1.0, self.df);
        let statistic = (stats.mean() - popmean) / stats.standard_error();
        TTestResult {
            statistic,
            df: self.df,
            p_value: self.p_value(statistic),
        }
    }
}

/// One-sample t-test of `H0: mean(data) == popmean`.
pub fn one_sample_t_test(data: &[f64], popmean: f64) -> Result<TTestResult> {
    let reference = TwoSidedT::for_sample_size(data.len())?;
    let stats: OnlineStats = data.iter().copied().collect();
    Ok(reference.test(&stats, popmean))
}

/// Paired (related-samples) t-test of `H0: mean(a - b) == 0`.
pub fn paired_t_test(a: &[f64], b: &[f64]) -> Result<TTestResult> {
    if a.len() != b.len() {
        return Err(SimulationError::ShapeMismatch {
            what: "paired samples",
            expected: a.len(),
            actual: b.len(),
        });
    }
    let reference = TwoSidedT::for_sample_size(a.len())?;
    let stats: OnlineStats = a.iter().zip(b).map(|(x, y)| x - y).collect();
    Ok(reference.test(&stats, 0.0))
}

/// One-sample t-test on every row of `m`; returns one p-value per row.
pub fn one_sample_rows(m: &TrialMatrix, popmean: f64) -> Result<Vec<f64>> {
    let reference = TwoSidedT::for_sample_size(m.ncols())?;
    Ok(m.row_iter()
        .map(|row| {
            let stats: OnlineStats = row.iter().copied().collect();
            reference.test(&stats, popmean).p_value
        })
        .collect())
}

/// Paired t-test of row `i` of `a` against row `i` of `b`; returns one p-value per row.
pub fn paired_rows(a: &TrialMatrix, b: &TrialMatrix) -> Result<Vec<f64>> {
    if a.shape() != b.shape() {
        return Err(SimulationError::ShapeMismatch {
            what: "paired matrices",
            expected: a.len(),
            actual: b.len(),
        });
    }
    let reference = TwoSidedT::for_sample_size(a.ncols())?;
    Ok(a.row_iter()
        .zip(b.row_iter())
        .map(|(ra, rb)| {
            let stats: OnlineStats = ra.iter().zip(rb.iter()).map(|(x, y)| x - y).collect();
            reference.test(&stats, 0.0).p_value
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_sample_known_value() {
        // mean 3, s = 1.5811, t = 4.2426 on 4 df
        let r = one_sample_t_test(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.0).unwrap();
        assert!((r.statistic - 4.242_640_687).abs() < 1e-8);
        assert_eq!(r.df, 4.0);
        assert!((r.p_value - 0.0132).abs() < 5e-4, "p = {}", r.p_value);
    }

    #[test]
    fn test_mean_equal_to_popmean() {
        let r = one_sample_t_test(&[2.0, 4.0, 6.0, 8.0, 10.0], 6.0).unwrap();
        assert_eq!(r.statistic, 0.0);
        assert!((r.p_value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_paired_equals_one_sample_on_differences() {
        let before = [5.0, 6.0, 7.0, 8.0, 9.0];
        let after = [5.5, 6.2, 7.1, 8.3, 9.4];
        let diffs: Vec<f64> = before.iter().zip(&after).map(|(a, b)| a - b).collect();

        let paired = paired_t_test(&before, &after).unwrap();
        let one = one_sample_t_test(&diffs, 0.0).unwrap();

        assert!(paired.statistic < 0.0);
        assert!((paired.statistic - one.statistic).abs() < 1e-12);
        assert!((paired.p_value - one.p_value).abs() < 1e-12);
    }

    #[test]
    fn test_zero_variance() {
        let shifted = one_sample_t_test(&[1.0, 1.0, 1.0], 0.0).unwrap();
        assert!(shifted.statistic.is_infinite());
        assert_eq!(shifted.p_value, 0.0);

        let centered = one_sample_t_test(&[0.0, 0.0, 0.0], 0.0).unwrap();
        assert!(centered.statistic.is_nan());
        assert!(centered.p_value.is_nan());
    }

    #[test]
    fn test_too_few_samples() {
        assert!(matches!(
            one_sample_t_test(&[1.0], 0.0),
            Err(SimulationError::Config(ConfigError::TooFewSamples { n: 1 }))
        ));
    }

    #[test]
    fn test_paired_length_mismatch() {
        assert!(matches!(
            paired_t_test(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(SimulationError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_rows_match_scalar_tests() {
        let a = TrialMatrix::from_row_slice(2, 4, &[1.0, 2.0, 3.5, 4.0, -1.0, 0.5, 0.25, 2.0]);
        let b = TrialMatrix::from_row_slice(2, 4, &[0.5, 2.5, 3.0, 3.0, 0.0, 0.0, 1.0, 1.0]);

        let one = one_sample_rows(&a, 0.0).unwrap();
        let paired = paired_rows(&a, &b).unwrap();
        assert_eq!(one.len(), 2);
        assert_eq!(paired.len(), 2);

        for i in 0..2 {
            let ra: Vec<f64> = a.row(i).iter().copied().collect();
            let rb: Vec<f64> = b.row(i).iter().copied().collect();
            assert!((one[i] - one_sample_t_test(&ra, 0.0).unwrap().p_value).abs() < 1e-12);
            assert!((paired[i] - paired_t_test(&ra, &rb).unwrap().p_value).abs() < 1e-12);
        }
    }

    #[test]
    fn test_paired_rows_shape_mismatch() {
        let a = TrialMatrix::zeros(2, 3);
        let b = TrialMatrix::zeros(3, 3);
        assert!(paired_rows(&a, &b).is_err());
    }
}
