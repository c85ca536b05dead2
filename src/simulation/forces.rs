//! Force / acceleration model for the n-body engine
//!
//! Defines the acceleration trait and direct (unsoftened) Newtonian gravity

use crate::simulation::error::{Result, SimError};
use crate::simulation::params::G_SI;
use crate::simulation::states::{Body, NVec3};

/// Source of the instantaneous acceleration on one body due to the rest
/// of the system. Implementations must be pure functions of the body state
pub trait ForceModel {
    /// Reject model constants that cannot produce a meaningful run
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Net acceleration on `bodies[target]`
    fn acceleration(&self, bodies: &[Body], target: usize) -> Result<NVec3>;

    /// Compute accelerations for every body in `bodies` into `out`
    /// - `out[i]` is overwritten with the acceleration on body `i`
    /// - all entries are computed from the same (unmodified) state
    fn accumulate_accels(&self, bodies: &[Body], out: &mut [NVec3]) -> Result<()> {
        for (i, a) in out.iter_mut().enumerate().take(bodies.len()) {
            *a = self.acceleration(bodies, i)?;
        }
        Ok(())
    }
}

/// Newtonian point-mass gravity, direct O(n) sum per body
///
/// No softening: two bodies at the same position are reported as
/// [`SimError::DegenerateGeometry`] instead of producing inf/NaN
#[derive(Debug, Clone)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self { G: G_SI }
    }
}

impl ForceModel for NewtonianGravity {
    fn validate(&self) -> Result<()> {
        if !(self.G.is_finite() && self.G > 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "gravitational constant must be positive and finite, got {}",
                self.G
            )));
        }
        Ok(())
    }

    fn acceleration(&self, bodies: &[Body], target: usize) -> Result<NVec3> {
        let xi = bodies[target].x; // position of the body under consideration
        let mut acc = NVec3::zeros();

        for (j, bj) in bodies.iter().enumerate() {
            if j == target {
                continue;
            }

            // r points from the target toward body j, so the pull is along +r
            let r = bj.x - xi;
            let dist = r.norm();
            if dist == 0.0 {
                return Err(SimError::DegenerateGeometry { a: target, b: j });
            }

            // a_i += G * m_j * r / |r|^3
            let coef = self.G * bj.m / dist.powi(3);
            acc += coef * r;
        }

        Ok(acc)
    }
}
