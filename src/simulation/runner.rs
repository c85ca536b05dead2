//! Time-stepping driver
//!
//! Runs the integrator for a fixed number of steps, keeps the global close
//! approach record and samples every body's position at a fixed cadence.

use tracing::{debug, info, trace};

use super::error::{Result, SimError};
use super::forces::ForceModel;
use super::integrator::euler_step;
use super::params::Parameters;
use super::proximity::{ClosestApproach, ProximityTracker};
use super::states::{NVec3, System};

/// Sampled path of a single body
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub name: String,
    pub samples: Vec<NVec3>,
}

/// One trajectory per body, same order as `System::bodies`
pub type TrajectoryHistory = Vec<Trajectory>;

#[derive(Debug, Clone)]
pub struct SimulationOutput {
    pub trajectories: TrajectoryHistory,
    pub closest: ClosestApproach,
}

pub struct SimulationRunner<F: ForceModel> {
    pub forces: F,
}

impl<F: ForceModel> SimulationRunner<F> {
    pub fn new(forces: F) -> Self {
        Self { forces }
    }

    /// Run `params.num_steps - 1` integration steps over `sys`
    ///
    /// The close-approach record is seeded from the state before the first
    /// step. Positions are sampled after step `k` whenever
    /// `k % report_freq == 0`. `sys` is left in its final state; on error
    /// nothing is returned beyond the error itself.
    pub fn run(&self, sys: &mut System, params: &Parameters) -> Result<SimulationOutput> {
        params.validate()?;
        self.forces.validate()?;
        validate_bodies(sys)?;

        info!(
            bodies = sys.bodies.len(),
            steps = params.num_steps,
            dt = params.dt,
            report_freq = params.report_freq,
            "starting simulation"
        );

        let samples = params.expected_samples();
        let mut trajectories: TrajectoryHistory = sys
            .bodies
            .iter()
            .map(|b| Trajectory {
                name: b.name.clone(),
                samples: Vec::with_capacity(samples),
            })
            .collect();

        let mut tracker = ProximityTracker::new(&sys.bodies)?;

        for step in 1..params.num_steps {
            euler_step(sys, &self.forces, params.dt)?;

            if let Some(body) = sys.bodies.iter().position(|b| !b.is_finite()) {
                return Err(SimError::NonFiniteState { step, body });
            }

            if tracker.observe(&sys.bodies, step)? {
                let r = tracker.record();
                debug!(step, distance = r.distance, a = r.a, b = r.b, "new closest approach");
            }

            if step % params.report_freq == 0 {
                trace!(step, t = sys.t, "sampling positions");
                for (traj, b) in trajectories.iter_mut().zip(sys.bodies.iter()) {
                    traj.samples.push(b.x);
                }
            }
        }

        let closest = tracker.record();
        info!(
            t = sys.t,
            distance = closest.distance,
            a = %sys.bodies[closest.a].name,
            b = %sys.bodies[closest.b].name,
            "simulation finished"
        );

        Ok(SimulationOutput {
            trajectories,
            closest,
        })
    }
}

fn validate_bodies(sys: &System) -> Result<()> {
    if sys.bodies.len() < 2 {
        return Err(SimError::InvalidConfiguration(format!(
            "at least two bodies are required, got {}",
            sys.bodies.len()
        )));
    }
    for (i, b) in sys.bodies.iter().enumerate() {
        if !(b.m.is_finite() && b.m > 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "body {i} ({}) has non-positive mass {}",
                b.name, b.m
            )));
        }
        if !b.is_finite() {
            return Err(SimError::InvalidConfiguration(format!(
                "body {i} ({}) has a non-finite initial state",
                b.name
            )));
        }
    }
    Ok(())
}
