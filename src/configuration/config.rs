//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, step count, sampling cadence, `G`
//! - [`Units`]            – unit system the body states are written in
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! ```yaml
//! parameters:
//!   dt: 1000.0              # seconds per step
//!   num_steps: 8000         # loop bound (num_steps - 1 steps are taken)
//!   report_freq: 100        # sample positions every N steps
//!   G: 6.67408e-11          # optional
//!
//! units: si                 # si (m, m/s) or au_day (AU, AU/day)
//!
//! bodies:
//!   - name: Sun
//!     x: [0.0, 0.0, 0.0]
//!     v: [0.0, 0.0, 0.0]
//!     m: 2.0e30
//!   - name: Earth
//!     x: [0.0, 1.5e11, 0.0]
//!     v: [30000.0, 0.0, 0.0]
//!     m: 6.0e24
//! ```
//!
//! Ephemeris exports usually come in AU and AU/day; with `units: au_day`
//! positions and velocities are converted to SI when the scenario is built.

use serde::Deserialize;

use crate::simulation::params::G_SI;

/// Metres per astronomical unit, as used by the scenario loader
pub const METERS_PER_AU: f64 = 1.5e11;
/// (m/s) per (AU/day)
pub const MPS_PER_AU_PER_DAY: f64 = 1731460.0;

/// Unit system of the `x` / `v` entries of every body. Masses are always kg
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Units {
    #[default]
    #[serde(rename = "si")] // metres, metres per second
    Si,

    #[serde(rename = "au_day")] // astronomical units, AU per day
    AuDay,
}

impl Units {
    /// Factors converting (position, velocity) in these units to SI
    pub fn to_si(self) -> (f64, f64) {
        match self {
            Units::Si => (1.0, 1.0),
            Units::AuDay => (METERS_PER_AU, MPS_PER_AU_PER_DAY),
        }
    }
}

fn default_g() -> f64 {
    G_SI
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ParametersConfig {
    pub dt: f64,            // time step size (s)
    pub num_steps: usize,   // loop bound
    pub report_freq: usize, // trajectory sampling cadence in steps
    #[serde(default = "default_g")]
    pub G: f64,             // gravitational constant
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    pub name: String, // Label used in reports and the viewer legend
    pub x: [f64; 3],  // Initial position
    pub v: [f64; 3],  // Initial velocity
    pub m: f64,       // Mass (kg)
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // Step size, step count, cadence
    #[serde(default)]
    pub units: Units,                 // Units of body x / v
    pub bodies: Vec<BodyConfig>,      // Initial state of the system
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }
}
