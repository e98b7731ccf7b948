use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::body::{Body, Color};
use crate::config::G;
use crate::forces::{ForceModel, GravityLaw, MutualGravity};
use crate::integrator::{Integrator, SemiImplicitEuler};
use crate::state::SystemState;

fn make_pair() -> SystemState {
    let mut system = SystemState::new();
    system.add_body(
        Body::new(1000.0, Point2::new(0.0, 0.0), Vector2::zeros(), Color::RED).unwrap(),
    );
    system.add_body(
        Body::new(1000.0, Point2::new(100.0, 0.0), Vector2::zeros(), Color::BLUE).unwrap(),
    );
    system
}

fn run(system: &mut SystemState, dt: f64, n_steps: usize, force: &dyn ForceModel) -> f64 {
    for _ in 0..n_steps {
        SemiImplicitEuler.step(system, dt, force);
    }
    system.time
}

fn random_system(seed: u64, n: usize) -> SystemState {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut system = SystemState::new();

    for _ in 0..n {
        let body = Body::new(
            rng.gen_range(100.0..5_000.0),
            Point2::new(rng.gen_range(0.0..800.0), rng.gen_range(0.0..600.0)),
            Vector2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)),
            Color::GREEN,
        )
        .unwrap();
        system.add_body(body);
    }

    system
}

#[test]
fn test_euler_advances_time() {
    let mut system = make_pair();
    let force = MutualGravity::new(GravityLaw::default());

    SemiImplicitEuler.step(&mut system, 0.016, &force);

    assert!((system.time - 0.016).abs() < 1e-15);
}

#[test]
fn test_two_body_single_step_displacement() {
    let mut system = make_pair();
    let force = MutualGravity::new(GravityLaw::default());
    let dt = 0.016;

    SemiImplicitEuler.step(&mut system, dt, &force);

    // Force G*1000*1000/100², so each body accelerates at G*1000/100².
    // Velocity is updated first and then moves the body: dx = a dt².
    let a = G * 1000.0 / 10_000.0;
    let expected = a * dt * dt;

    assert_relative_eq!(system.bodies[0].position.x, expected, max_relative = 1e-12);
    assert_relative_eq!(system.bodies[1].position.x, 100.0 - expected, max_relative = 1e-12);
    assert_relative_eq!(system.bodies[0].velocity.x, a * dt, max_relative = 1e-12);
    assert_eq!(system.bodies[0].position.y, 0.0);
}

#[test]
fn test_momentum_conserved_over_many_steps() {
    for seed in 0..5 {
        let mut system = random_system(seed, 6);
        let force = MutualGravity::new(GravityLaw::default());
        let initial = system.total_momentum();
        let scale: f64 = system.bodies.iter().map(|b| b.momentum().magnitude()).sum();

        run(&mut system, 0.016, 2_000, &force);

        let drift = (system.total_momentum() - initial).magnitude();
        assert!(
            drift < scale * 1e-9,
            "seed {seed}: momentum drift {drift:.3e}"
        );
    }
}

#[test]
fn test_center_of_mass_moves_uniformly() {
    let mut system = random_system(42, 4);
    let force = MutualGravity::new(GravityLaw::default());

    let com0 = system.center_of_mass().unwrap();
    let v_com = system.total_momentum() / system.total_mass();
    let dt = 0.01;
    let n = 500;

    run(&mut system, dt, n, &force);

    let expected = com0 + v_com * (dt * n as f64);
    let com = system.center_of_mass().unwrap();
    assert_relative_eq!(com.x, expected.x, epsilon = 1e-6);
    assert_relative_eq!(com.y, expected.y, epsilon = 1e-6);
}

#[test]
fn test_multi_step_integration() {
    let mut system = make_pair();
    let force = MutualGravity::new(GravityLaw::default());

    let final_time = run(&mut system, 0.01, 50, &force);

    assert!((final_time - 0.5).abs() < 1e-10);
    assert!((system.time - 0.5).abs() < 1e-10);
}

#[test]
fn test_empty_system() {
    let mut system = SystemState::new();
    let force = MutualGravity::new(GravityLaw::default());

    // Should not panic with empty system
    SemiImplicitEuler.step(&mut system, 0.01, &force);
    assert_eq!(system.bodies.len(), 0);
}

#[test]
fn test_free_body_moves_in_straight_line() {
    let mut system = SystemState::new();
    system.add_body(
        Body::new(10.0, Point2::new(5.0, 5.0), Vector2::new(3.0, -1.0), Color::RED).unwrap(),
    );
    let force = MutualGravity::new(GravityLaw::default());

    run(&mut system, 0.5, 4, &force);

    assert_relative_eq!(system.bodies[0].position.x, 11.0);
    assert_relative_eq!(system.bodies[0].position.y, 3.0);
}
