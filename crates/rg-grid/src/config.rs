//! Indicator run configuration.

use rg_core::{RgError, RgResult};

use crate::cell::CELL_SIZE_DEG;

/// Per-run configuration for the indicator engine.
///
/// The defaults are the calibrated values the downstream urbanization
/// classifier was tuned against; override them only for experiments, not
/// for production indicator tables.
#[derive(Clone, Debug)]
pub struct IndicatorConfig {
    /// Grid cell edge length in degrees.  Default: 0.01.
    pub cell_size_deg: f64,

    /// Walkability sampling epochs per cell.  Default: 10.
    pub epochs: usize,

    /// Random point pairs drawn per epoch.  Default: 20.
    pub pairs_per_epoch: usize,

    /// Master RNG seed.  The same seed always produces identical rows.
    pub seed: u64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            cell_size_deg: CELL_SIZE_DEG,
            epochs: 10,
            pairs_per_epoch: 20,
            seed: 0,
        }
    }
}

impl IndicatorConfig {
    /// Default configuration with an explicit seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, ..Self::default() }
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> RgResult<()> {
        if !(self.cell_size_deg > 0.0) {
            return Err(RgError::Config(format!(
                "cell_size_deg must be positive, got {}",
                self.cell_size_deg
            )));
        }
        if self.epochs == 0 || self.pairs_per_epoch == 0 {
            return Err(RgError::Config(
                "epochs and pairs_per_epoch must be nonzero".into(),
            ));
        }
        Ok(())
    }
}
