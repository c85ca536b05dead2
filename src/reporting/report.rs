//! Text reports and plot scaling for finished runs

use std::fmt::Write as _;

use crate::simulation::proximity::ClosestApproach;
use crate::simulation::runner::TrajectoryHistory;
use crate::simulation::states::Body;

/// One-line close approach summary, distance in scientific notation
///
/// `bodies` must be the collection the record was taken from
pub fn close_approach_report(record: &ClosestApproach, bodies: &[Body]) -> String {
    format!(
        "closest approach: {:.6e} m between {} and {} (step {})",
        record.distance, bodies[record.a].name, bodies[record.b].name, record.step
    )
}

/// Final position / velocity of every body, one per line
pub fn final_state_report(bodies: &[Body]) -> String {
    let mut out = String::new();
    for b in bodies {
        // writing into a String never fails
        let _ = writeln!(
            out,
            "{:<10} x = ({:+.4e}, {:+.4e}, {:+.4e}) m  |v| = {:.4e} m/s",
            b.name, b.x.x, b.x.y, b.x.z, b.v.norm()
        );
    }
    out
}

/// Half-width of a cube centred on the origin that contains every sample
///
/// Axes are scaled symmetrically around zero using the largest absolute
/// coordinate over all bodies and samples. Returns 0.0 for an empty history
pub fn plot_bounds(history: &TrajectoryHistory) -> f64 {
    history
        .iter()
        .flat_map(|t| t.samples.iter())
        .map(|p| p.amax())
        .fold(0.0, f64::max)
}
