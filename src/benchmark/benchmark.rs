use std::time::Instant;

use crate::simulation::forces::{ForceModel, NewtonianGravity};
use crate::simulation::integrator::euler_step;
use crate::simulation::proximity::distance_matrix;
use crate::simulation::states::{Body, NVec3, System};

/// Helper to build a manual System of size `n`
/// Deterministic positions on a ~1 AU shell, no rand needed
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec3::new(
            (i_f * 0.37).sin() * 1.5e11,
            (i_f * 0.13).cos() * 1.5e11,
            (i_f * 0.07).sin() * 1.5e11,
        );

        bodies.push(Body::new(format!("b{i}"), x, NVec3::zeros(), 1.0e24));
    }

    System::new(bodies)
}

/// Time one Euler step (O(n^2) force sum) and one distance matrix rebuild
/// for a range of n. Output is CSV so it can be pasted into a spreadsheet
pub fn bench_euler_step() {
    let ns = [2, 5, 10, 50, 100, 200, 400, 800];
    let steps = 20;
    let dt = 1000.0;
    let gravity = NewtonianGravity::default();

    println!("N,step_ms,matrix_ms");

    for n in ns {
        let mut sys = make_system(n);
        let mut out = vec![NVec3::zeros(); n];

        // Warm up
        if let Err(e) = gravity.accumulate_accels(&sys.bodies, &mut out) {
            println!("N = {n}: {e}");
            continue;
        }

        let t0 = Instant::now();
        for _ in 0..steps {
            if let Err(e) = euler_step(&mut sys, &gravity, dt) {
                println!("N = {n}: {e}");
                break;
            }
        }
        let step_ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let t1 = Instant::now();
        for _ in 0..steps {
            let m = distance_matrix(&sys.bodies);
            std::hint::black_box(m);
        }
        let matrix_ms = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.6}", n, step_ms, matrix_ms);
    }
}
