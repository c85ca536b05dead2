pub mod simulation;
pub mod configuration;
pub mod reporting;
#[cfg(feature = "viewer")]
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec3};
pub use simulation::error::{SimError, Result};
pub use simulation::params::{Parameters, G_SI};
pub use simulation::forces::{ForceModel, NewtonianGravity};
pub use simulation::integrator::euler_step;
pub use simulation::proximity::{distance_matrix, closest_pair, ClosestApproach, DistanceMatrix, ProximityTracker};
pub use simulation::runner::{SimulationRunner, SimulationOutput, Trajectory, TrajectoryHistory};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, ParametersConfig, BodyConfig, Units};

pub use reporting::report::{close_approach_report, final_state_report, plot_bounds};

#[cfg(feature = "viewer")]
pub use visualization::trajectory_vis3d::run_3d;

pub use benchmark::benchmark::bench_euler_step;
