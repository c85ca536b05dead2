use approx::assert_relative_eq;
use proptest::prelude::*;

use orbsim::simulation::states::{Body, NVec3, System};
use orbsim::simulation::params::{Parameters, G_SI};
use orbsim::simulation::forces::{ForceModel, NewtonianGravity};
use orbsim::simulation::integrator::euler_step;
use orbsim::simulation::proximity::{closest_pair, distance_matrix, ProximityTracker};
use orbsim::simulation::runner::SimulationRunner;
use orbsim::simulation::error::SimError;
use orbsim::{Scenario, ScenarioConfig};

/// Sun at the origin, earth-like body on +y moving along +x
pub fn sun_earth_system() -> System {
    System::new(vec![
        Body::new("Sun", NVec3::zeros(), NVec3::zeros(), 2.0e30),
        Body::new(
            "Earth",
            NVec3::new(0.0, 1.5e11, 0.0),
            NVec3::new(30000.0, 0.0, 0.0),
            6.0e24,
        ),
    ])
}

/// Build a simple 2-body system separated along x-axis, at rest
pub fn two_body_system(dist: f64, m1: f64, m2: f64) -> System {
    System::new(vec![
        Body::new("a", NVec3::new(-dist / 2.0, 0.0, 0.0), NVec3::zeros(), m1),
        Body::new("b", NVec3::new(dist / 2.0, 0.0, 0.0), NVec3::zeros(), m2),
    ])
}

pub fn runner() -> SimulationRunner<NewtonianGravity> {
    SimulationRunner::new(NewtonianGravity::default())
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let sys = two_body_system(1.0e9, 2.0e24, 3.0e26);
    let forces = NewtonianGravity::default();

    let mut acc = vec![NVec3::zeros(); 2];
    forces.accumulate_accels(&sys.bodies, &mut acc).unwrap();

    let net = acc[0] * sys.bodies[0].m + acc[1] * sys.bodies[1].m;
    let scale = (acc[0] * sys.bodies[0].m).norm();

    assert!(net.norm() < scale * 1e-14, "Net force not zero: {:?}", net);
}

#[test]
fn gravity_points_toward_other_body() {
    let sys = sun_earth_system();
    let a = NewtonianGravity::default().acceleration(&sys.bodies, 1).unwrap();

    let dx = sys.bodies[0].x - sys.bodies[1].x;
    assert!(a.dot(&dx) > 0.0, "Acceleration is not toward the sun");
    assert!(a.y < 0.0);
}

#[test]
fn gravity_inverse_square_law() {
    let sys_r = two_body_system(1.0e8, 1.0e25, 1.0e25);
    let sys_2r = two_body_system(2.0e8, 1.0e25, 1.0e25);
    let forces = NewtonianGravity::default();

    let a_r = forces.acceleration(&sys_r.bodies, 0).unwrap();
    let a_2r = forces.acceleration(&sys_2r.bodies, 0).unwrap();

    assert_relative_eq!(a_r.norm() / a_2r.norm(), 4.0, max_relative = 1e-12);
}

#[test]
fn coincident_bodies_raise_degenerate_geometry() {
    let mut sys = two_body_system(0.0, 1.0e20, 1.0e20);
    let err = runner().run(&mut sys, &Parameters::new(10.0, 5, 1)).unwrap_err();
    assert_eq!(err, SimError::DegenerateGeometry { a: 0, b: 1 });
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn euler_single_step_sun_earth() {
    let mut sys = sun_earth_system();
    let dt = 1000.0;
    let r: f64 = 1.5e11;

    let old_x = sys.bodies[1].x;
    let old_v = sys.bodies[1].v;

    euler_step(&mut sys, &NewtonianGravity::default(), dt).unwrap();

    let a_mag = G_SI * 2.0e30 / (r * r);
    let expected_v = old_v + NVec3::new(0.0, -a_mag, 0.0) * dt;
    let expected_x = old_x + expected_v * dt;

    let earth = &sys.bodies[1];
    assert_relative_eq!(earth.v.x, expected_v.x, max_relative = 1e-12);
    assert_relative_eq!(earth.v.y, expected_v.y, max_relative = 1e-12);
    assert_eq!(earth.v.z, 0.0);

    // position uses the updated velocity
    assert_eq!(earth.x, old_x + earth.v * dt);
    assert_relative_eq!(earth.x.x, expected_x.x, max_relative = 1e-12);
    assert_relative_eq!(earth.x.y, expected_x.y, max_relative = 1e-12);
    assert_eq!(sys.t, dt);
}

#[test]
fn euler_conserves_momentum_two_body() {
    let mut sys = sun_earth_system();
    let before = sys.momentum();
    let forces = NewtonianGravity::default();

    for _ in 0..5000 {
        euler_step(&mut sys, &forces, 100.0).unwrap();
    }

    let after = sys.momentum();
    let eps = before.norm() * 1e-9;
    assert!((after - before).norm() < eps, "momentum drift {:?}", after - before);
}

#[test]
fn run_leaves_bodies_in_final_state() {
    let mut sys = sun_earth_system();
    let params = Parameters::new(1000.0, 11, 1);
    let out = runner().run(&mut sys, &params).unwrap();

    // 10 integration steps for a loop bound of 11
    assert_relative_eq!(sys.t, 10.0 * 1000.0);
    assert_eq!(out.trajectories[1].samples.len(), 10);
    assert_eq!(out.trajectories[1].samples[9], sys.bodies[1].x);
}

// ==================================================================================
// Proximity tests
// ==================================================================================

#[test]
fn closest_pair_first_minimum_wins() {
    // bodies 1-2 and 2-3 are both 1.0 apart, 0-1 is 2.0
    let bodies = vec![
        Body::new("a", NVec3::new(0.0, 0.0, 0.0), NVec3::zeros(), 1.0),
        Body::new("b", NVec3::new(2.0, 0.0, 0.0), NVec3::zeros(), 1.0),
        Body::new("c", NVec3::new(3.0, 0.0, 0.0), NVec3::zeros(), 1.0),
        Body::new("d", NVec3::new(4.0, 0.0, 0.0), NVec3::zeros(), 1.0),
    ];
    let m = distance_matrix(&bodies);
    assert_eq!(closest_pair(&m).unwrap(), (1, 2));
}

#[test]
fn closest_approach_seeded_before_motion() {
    // Earth falls straight in: separation only shrinks
    let mut sys = sun_earth_system();
    sys.bodies[1].v = NVec3::zeros();
    let out = runner().run(&mut sys, &Parameters::new(1000.0, 50, 10)).unwrap();

    assert!(out.closest.distance < 1.5e11);
    assert_eq!(out.closest.step, 49);
    assert_eq!((out.closest.a, out.closest.b), (0, 1));
}

// ==================================================================================
// Runner tests
// ==================================================================================

#[test]
fn sampling_cadence_matches_loop_bound() {
    let mut sys = sun_earth_system();
    let params = Parameters::new(1000.0, 8000, 100);
    let out = runner().run(&mut sys, &params).unwrap();

    for traj in &out.trajectories {
        assert_eq!(traj.samples.len(), (8000 - 1) / 100);
        assert_eq!(traj.samples.len(), 79);
    }
}

#[test]
fn invalid_configuration_rejected_at_entry() {
    let r = runner();

    let mut sys = sun_earth_system();
    assert!(matches!(
        r.run(&mut sys, &Parameters::new(0.0, 10, 1)),
        Err(SimError::InvalidConfiguration(_))
    ));

    let mut empty = System::new(Vec::new());
    assert!(matches!(
        r.run(&mut empty, &Parameters::new(1.0, 10, 1)),
        Err(SimError::InvalidConfiguration(_))
    ));
    assert_eq!(sys.t, 0.0);
}

#[test]
fn blow_up_reported_as_non_finite() {
    // absurd G makes the velocity overflow on the first kick
    let mut sys = sun_earth_system();
    let r = SimulationRunner::new(NewtonianGravity { G: 1.0e300 });
    let params = Parameters::new(1.0e10, 10, 1);

    let err = r.run(&mut sys, &params).unwrap_err();
    assert!(matches!(err, SimError::NonFiniteState { step: 1, .. }));
}

#[test]
fn negative_g_rejected_at_entry() {
    let mut sys = sun_earth_system();
    let r = SimulationRunner::new(NewtonianGravity { G: -1.0e-10 });
    let err = r.run(&mut sys, &Parameters::new(1000.0, 50, 10)).unwrap_err();
    assert!(matches!(err, SimError::InvalidConfiguration(_)));
    assert_eq!(sys.bodies[1].x.y, 1.5e11);
}

// ==================================================================================
// Scenario tests
// ==================================================================================

#[test]
fn bundled_solar_system_scenario_runs() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join("solar_system.yaml");
    let text = std::fs::read_to_string(path).unwrap();
    let mut cfg = ScenarioConfig::from_yaml_str(&text).unwrap();
    cfg.parameters.num_steps = 201;

    let mut scenario = Scenario::build_scenario(cfg);
    assert_eq!(scenario.system.bodies.len(), 10);

    let out = scenario.run().unwrap();
    assert_eq!(out.trajectories.len(), 10);
    assert!(out.trajectories.iter().all(|t| t.samples.len() == 2));
    // Venus-Earth start 4e10 m apart, the smallest initial gap
    assert!(out.closest.distance <= 4.0e10);
}

// ==================================================================================
// Properties
// ==================================================================================

fn coord() -> impl Strategy<Value = f64> {
    -1.0e12..1.0e12f64
}

fn positions(n: std::ops::Range<usize>) -> impl Strategy<Value = Vec<NVec3>> {
    prop::collection::vec((coord(), coord(), coord()).prop_map(|(x, y, z)| NVec3::new(x, y, z)), n)
}

fn bodies_at(ps: &[NVec3]) -> Vec<Body> {
    ps.iter()
        .enumerate()
        .map(|(i, p)| Body::new(format!("b{i}"), *p, NVec3::zeros(), 1.0e24))
        .collect()
}

proptest! {
    #[test]
    fn distance_matrix_symmetric(ps in positions(2..8)) {
        let m = distance_matrix(&bodies_at(&ps));
        for i in 0..ps.len() {
            prop_assert_eq!(m[(i, i)], 0.0);
            for j in 0..ps.len() {
                prop_assert_eq!(m[(i, j)], m[(j, i)]);
                prop_assert!(m[(i, j)] >= 0.0);
            }
        }
    }

    #[test]
    fn record_is_running_minimum(frames in prop::collection::vec(positions(4..5), 1..20)) {
        let first = bodies_at(&frames[0]);
        let mut tracker = ProximityTracker::new(&first).unwrap();
        let mut prev = tracker.record().distance;
        let mut seen_min = distance_matrix(&first)[closest_pair(&distance_matrix(&first)).unwrap()];

        for (step, ps) in frames.iter().enumerate().skip(1) {
            let bodies = bodies_at(ps);
            tracker.observe(&bodies, step).unwrap();
            let rec = tracker.record();

            let m = distance_matrix(&bodies);
            seen_min = seen_min.min(m[closest_pair(&m).unwrap()]);

            prop_assert!(rec.distance <= prev);
            prop_assert_eq!(rec.distance, seen_min);
            prop_assert!(rec.a != rec.b);
            prev = rec.distance;
        }
    }

    #[test]
    fn record_never_increases_during_integration(
        ps in positions(3..6),
        vs in prop::collection::vec((-3.0e4..3.0e4f64, -3.0e4..3.0e4f64, -3.0e4..3.0e4f64), 6),
    ) {
        let mut sys = System::new(bodies_at(&ps));
        for (b, v) in sys.bodies.iter_mut().zip(vs.iter()) {
            b.v = NVec3::new(v.0, v.1, v.2);
        }
        let forces = NewtonianGravity::default();
        let mut tracker = ProximityTracker::new(&sys.bodies).unwrap();
        let mut prev = tracker.record().distance;

        for step in 1..100 {
            if euler_step(&mut sys, &forces, 1000.0).is_err() {
                break;
            }
            tracker.observe(&sys.bodies, step).unwrap();
            let d = tracker.record().distance;
            prop_assert!(d <= prev);
            prev = d;
        }
    }
}
