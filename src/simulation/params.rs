//! Numerical and physical parameters for a run
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size,
//! - number of steps and trajectory sampling cadence
//!
//! The gravitational constant belongs to the force model

use super::error::{Result, SimError};

/// Newtonian gravitational constant (m^3 kg^-1 s^-2)
pub const G_SI: f64 = 6.67408e-11;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size (s)
    pub num_steps: usize, // loop bound, num_steps - 1 steps are integrated
    pub report_freq: usize, // sample positions every report_freq steps
}

impl Parameters {
    pub fn new(dt: f64, num_steps: usize, report_freq: usize) -> Self {
        Self {
            dt,
            num_steps,
            report_freq,
        }
    }

    /// Reject settings that would only fail (or silently misbehave) mid-run
    pub fn validate(&self) -> Result<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "time step must be positive and finite, got {}",
                self.dt
            )));
        }
        if self.num_steps < 1 {
            return Err(SimError::InvalidConfiguration(
                "num_steps must be at least 1".into(),
            ));
        }
        if self.report_freq < 1 {
            return Err(SimError::InvalidConfiguration(
                "report_freq must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Number of trajectory samples each body gets over a full run
    pub fn expected_samples(&self) -> usize {
        self.num_steps.saturating_sub(1) / self.report_freq.max(1)
    }
}
