//! Fixed-step time integrator for the N-body system
//!
//! Semi-implicit (symplectic) Euler: velocities are kicked with the
//! accelerations of the current positions, then positions drift with the
//! new velocities

use super::error::Result;
use super::forces::ForceModel;
use super::states::{NVec3, System};

/// Advance the system by one step of size `dt`
/// Updates positions, velocities, and `sys.t` in-place. If the force model
/// fails the system is left untouched
pub fn euler_step<F: ForceModel + ?Sized>(sys: &mut System, forces: &F, dt: f64) -> Result<()> {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return Ok(());
    }

    // a_n from x_n for every body, before anything moves
    let mut acc = vec![NVec3::zeros(); n];
    forces.accumulate_accels(&sys.bodies, &mut acc)?;

    // Kick: v_n+1 = v_n + dt * a_n
    for (b, a) in sys.bodies.iter_mut().zip(acc.iter()) {
        b.v += *a * dt;
    }

    // Drift: x_n+1 = x_n + dt * v_n+1
    for b in sys.bodies.iter_mut() {
        b.x += b.v * dt;
    }

    // advance time: t_n+1 = t_n + dt
    sys.t += dt;

    Ok(())
}
