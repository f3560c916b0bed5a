//! Parameter sweeps over effect and confound sizes.
//!
//! Runs one simulation per grid cell, sequentially on a single random
//! stream, and reports bucket rates so the cost and benefit of confound
//! flagging can be compared across parameter values.
//!
//! # Example
//!
//! ```
//! use confound_sim::sweep::{run_sweep, SweepConfig};
//! use confound_sim::Config;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let config = SweepConfig::new(Config::quick().runs(200))
//!     .effect_sizes(vec![0.0, 0.5])
//!     .confound_sizes(vec![0.0, 0.5, 1.0]);
//!
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
//! let points = run_sweep(&config, &mut rng).unwrap();
//! assert_eq!(points.len(), 6);
//! ```

use rand::Rng;
use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::result::BucketRates;
use crate::simulation::ConfoundSimulation;

/// Grid of parameters to sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// Template for every grid cell; its shift fields are overwritten.
    pub base: Config,
    /// Effect sizes to visit (outer loop).
    pub effect_sizes: Vec<f64>,
    /// Confound sizes to visit (inner loop).
    pub confound_sizes: Vec<f64>,
}

impl SweepConfig {
    /// A single-cell sweep at the base config's own sizes.
    pub fn new(base: Config) -> Self {
        Self {
            effect_sizes: vec![base.effect_size],
            confound_sizes: vec![base.confound_size],
            base,
        }
    }

    /// Confound sizes from 0.0 to 1.0 in steps of 0.1, at the base effect size.
    pub fn confound_ramp(base: Config) -> Self {
        Self::new(base).confound_sizes((0..=10).map(|i| i as f64 / 10.0).collect())
    }

    /// Set the effect sizes.
    pub fn effect_sizes(mut self, sizes: Vec<f64>) -> Self {
        self.effect_sizes = sizes;
        self
    }

    /// Set the confound sizes.
    pub fn confound_sizes(mut self, sizes: Vec<f64>) -> Self {
        self.confound_sizes = sizes;
        self
    }

    /// Number of grid cells.
    pub fn len(&self) -> usize {
        self.effect_sizes.len() * self.confound_sizes.len()
    }

    /// Whether the grid is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Configs in visiting order: effect sizes outer, confound sizes inner.
    pub fn configs(&self) -> impl Iterator<Item = Config> + '_ {
        self.effect_sizes.iter().flat_map(move |&effect_size| {
            self.confound_sizes.iter().map(move |&confound_size| Config {
                effect_size,
                confound_size,
                ..self.base.clone()
            })
        })
    }
}

/// Summary of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    /// Effect mean shift.
    pub effect_size: f64,
    /// Confound mean shift.
    pub confound_size: f64,
    /// Trials simulated.
    pub runs: usize,
    /// `|no_alarm|`
    pub no_alarm: usize,
    /// `|good_alarm|`
    pub good_alarm: usize,
    /// `|false_rejection|`
    pub false_rejection: usize,
    /// Bucket sizes relative to `runs`.
    pub rates: BucketRates,
}

/// Run every cell of `config`, drawing all cells from one `rng` stream.
pub fn run_sweep<R: Rng + ?Sized>(config: &SweepConfig, rng: &mut R) -> Result<Vec<SweepPoint>> {
    let total = config.len();
    let mut points = Vec::with_capacity(total);

    for (i, cell) in config.configs().enumerate() {
        tracing::trace!(
            cell = i + 1,
            total,
            effect_size = cell.effect_size,
            confound_size = cell.confound_size,
            "sweep cell"
        );

        let result = ConfoundSimulation::with_config(cell).run(rng)?;
        points.push(SweepPoint {
            effect_size: result.config.effect_size,
            confound_size: result.config.confound_size,
            runs: result.config.runs,
            no_alarm: result.no_alarm.len(),
            good_alarm: result.good_alarm.len(),
            false_rejection: result.false_rejection.len(),
            rates: result.rates(),
        });
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_grid_order() {
        let config = SweepConfig::new(Config::quick())
            .effect_sizes(vec![0.0, 1.0])
            .confound_sizes(vec![0.2, 0.4, 0.6]);

        let cells: Vec<(f64, f64)> = config
            .configs()
            .map(|c| (c.effect_size, c.confound_size))
            .collect();
        assert_eq!(
            cells,
            vec![(0.0, 0.2), (0.0, 0.4), (0.0, 0.6), (1.0, 0.2), (1.0, 0.4), (1.0, 0.6)]
        );
        assert_eq!(config.len(), 6);
    }

    #[test]
    fn test_confound_ramp() {
        let config = SweepConfig::confound_ramp(Config::quick());
        assert_eq!(config.confound_sizes.len(), 11);
        assert_eq!(config.confound_sizes[10], 1.0);
        assert_eq!(config.effect_sizes, vec![0.5]);
    }

    #[test]
    fn test_empty_sweep() {
        let config = SweepConfig::new(Config::quick()).confound_sizes(vec![]);
        assert!(config.is_empty());
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        assert!(run_sweep(&config, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_points_carry_cell_parameters() {
        let config = SweepConfig::new(Config::quick().runs(100))
            .confound_sizes(vec![0.0, 2.0]);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let points = run_sweep(&config, &mut rng).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].confound_size, 0.0);
        assert_eq!(points[1].confound_size, 2.0);
        assert!(points.iter().all(|p| p.runs == 100));
        // A shift of 2 sigma on 20 samples is detected essentially always
        assert!(points[1].rates.confound_detected > points[0].rates.confound_detected);
    }

    #[test]
    fn test_invalid_base_propagates() {
        let base = Config {
            runs: 0,
            ..Config::quick()
        };
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        assert!(run_sweep(&SweepConfig::new(base), &mut rng).is_err());
    }
}
