//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0, SI units)
//! - the gravity model

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::error::Result;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::params::Parameters;
use crate::simulation::runner::{SimulationOutput, SimulationRunner};
use crate::simulation::states::{Body, NVec3, System};

/// Runtime bundle constructed from a [`ScenarioConfig`]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: NewtonianGravity,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let (pos_scale, vel_scale) = cfg.units.to_si();

        // Bodies: map `BodyConfig` -> runtime `Body`, converting to SI
        let bodies: Vec<Body> = cfg.bodies.iter().map(|bc: &BodyConfig| Body {
            x: NVec3::from(bc.x) * pos_scale,
            v: NVec3::from(bc.v) * vel_scale,
            m: bc.m,
            name: bc.name.clone(),
        }).collect();

        // Initial system state: bodies at t = 0
        let system = System::new(bodies);

        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            num_steps: p_cfg.num_steps,
            report_freq: p_cfg.report_freq,
        };

        let forces = NewtonianGravity { G: p_cfg.G };

        Self {
            parameters,
            system,
            forces,
        }
    }

    /// Run the scenario to completion, leaving `self.system` in its final state
    pub fn run(&mut self) -> Result<SimulationOutput> {
        let runner = SimulationRunner::new(self.forces.clone());
        runner.run(&mut self.system, &self.parameters)
    }
}
