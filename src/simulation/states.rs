//! Core state types for the N-body simulation.
//!
//! Defines the 3D body/system structs using `NVec3`.
//! The system holds the list of bodies and the current simulation time `t`.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec3, // position (m)
    pub v: NVec3, // velocity (m/s)
    pub m: f64, // mass (kg)
    pub name: String, // label used in reports
}

impl Body {
    pub fn new(name: impl Into<String>, x: NVec3, v: NVec3, m: f64) -> Self {
        Self {
            x,
            v,
            m,
            name: name.into(),
        }
    }

    /// Euclidean distance between the positions of two bodies
    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.x - other.x).norm()
    }

    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|c| c.is_finite())
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64, // elapsed simulated time (s)
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    /// Total linear momentum `sum(m_i * v_i)`
    pub fn momentum(&self) -> NVec3 {
        self.bodies
            .iter()
            .fold(NVec3::zeros(), |p, b| p + b.v * b.m)
    }
}
