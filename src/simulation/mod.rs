pub mod states;
pub mod params;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod proximity;
pub mod runner;
pub mod scenario;
