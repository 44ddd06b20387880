//! Adaptive movement scaling.
//!
//! The per-step movement divisor follows an empirically fit inverse power law
//! of the total population, `1271.2 * n^-0.899`, further divided by the
//! fast-forward multiplier. More agents means smaller per-step movement.

use crate::config::{validate_fast_forward, SpeedConfig};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

const FIT_COEFFICIENT: f64 = 1271.2;
const FIT_EXPONENT: f64 = -0.899;

/// Movement divisor derived from population size and fast-forward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedScale {
    fast_forward: u32,
    time_scale: f64,
}

impl SpeedScale {
    pub fn new(config: &SpeedConfig) -> Self {
        Self {
            fast_forward: config.fast_forward.max(1),
            time_scale: config.initial_time_scale,
        }
    }

    /// Current movement divisor
    pub fn current_factor(&self) -> f64 {
        self.time_scale
    }

    pub fn fast_forward(&self) -> u32 {
        self.fast_forward
    }

    /// Set the fast-forward multiplier; takes effect on the next recompute
    pub fn set_fast_forward(&mut self, value: u32) -> Result<(), ConfigError> {
        validate_fast_forward(value)?;
        self.fast_forward = value;
        Ok(())
    }

    /// Recompute the divisor for the given population. A zero population keeps the previous value.
    pub fn recompute(&mut self, total_population: usize) {
        if total_population == 0 {
            log::debug!("Empty population, keeping time scale {:.3}", self.time_scale);
            return;
        }
        self.time_scale =
            FIT_COEFFICIENT * (total_population as f64).powf(FIT_EXPONENT) / self.fast_forward as f64;
    }
}

/// `log10(fast_forward) + 1`
pub fn lifecycle_factor(fast_forward: u32) -> f64 {
    (fast_forward.max(1) as f64).log10() + 1.0
}
