use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};

use crate::attractor::{FixedAttractor, OrbitAttractor};
use crate::body::{Body, Color};
use crate::config::G;
use crate::diagnostics::Diagnostics;
use crate::forces::GravityLaw;
use crate::state::SystemState;

fn body(mass: f64, x: f64, y: f64, vx: f64, vy: f64) -> Body {
    Body::new(mass, Point2::new(x, y), Vector2::new(vx, vy), Color::GREEN).unwrap()
}

#[test]
fn test_empty_system_is_zero() {
    let diag = Diagnostics::compute(&SystemState::new(), &GravityLaw::default());

    assert!(diag.bodies.is_empty());
    assert_eq!(diag.total_energy, 0.0);
    assert_eq!(diag.momentum, Vector2::zeros());
}

#[test]
fn test_pair_potential_split_evenly() {
    let mut system = SystemState::new();
    let a = system.add_body(body(100.0, 0.0, 0.0, 0.0, 0.0));
    let b = system.add_body(body(300.0, 50.0, 0.0, 0.0, 0.0));

    let diag = Diagnostics::compute(&system, &GravityLaw::default());

    let pair = -G * 100.0 * 300.0 / 50.0;
    assert_relative_eq!(diag.body(a).unwrap().potential, 0.5 * pair);
    assert_relative_eq!(diag.body(b).unwrap().potential, 0.5 * pair);
    assert_relative_eq!(diag.potential, pair);
}

#[test]
fn test_three_body_total_counts_each_pair_once() {
    let mut system = SystemState::new();
    system.add_body(body(100.0, 0.0, 0.0, 0.0, 0.0));
    system.add_body(body(200.0, 30.0, 40.0, 0.0, 0.0));
    system.add_body(body(400.0, 0.0, 80.0, 0.0, 0.0));

    let diag = Diagnostics::compute(&system, &GravityLaw::default());

    let expected = -G * (100.0 * 200.0 / 50.0 + 100.0 * 400.0 / 80.0 + 200.0 * 400.0 / 50.0);
    assert_relative_eq!(diag.potential, expected, max_relative = 1e-12);

    let sum: f64 = diag.bodies.iter().map(|e| e.potential).sum();
    assert_relative_eq!(sum, diag.potential, max_relative = 1e-12);
}

#[test]
fn test_kinetic_and_speed_per_body() {
    let mut system = SystemState::new();
    let id = system.add_body(body(4.0, 0.0, 0.0, 3.0, 4.0));

    let diag = Diagnostics::compute(&system, &GravityLaw::default());
    let energy = diag.body(id).unwrap();

    assert_eq!(energy.kinetic, 50.0);
    assert_eq!(energy.speed, 5.0);
    assert_eq!(energy.total(), 50.0);
    assert_eq!(diag.total_energy, 50.0);
}

#[test]
fn test_orbit_potential_credited_in_full() {
    let mut system = SystemState::new();
    let id = system.add_body(body(10.0, 0.0, 0.0, 0.0, 0.0));
    // Starts at (100, 0)
    system.orbit_attractors.push(
        OrbitAttractor::new(Point2::new(60.0, 0.0), Vector2::new(40.0, 40.0), 1.0, 500.0).unwrap(),
    );

    let diag = Diagnostics::compute(&system, &GravityLaw::default());

    assert_relative_eq!(diag.body(id).unwrap().potential, -G * 10.0 * 500.0 / 100.0);
}

#[test]
fn test_fixed_attractors_excluded() {
    let mut system = SystemState::new();
    system.add_body(body(10.0, 0.0, 0.0, 1.0, 0.0));
    let before = Diagnostics::compute(&system, &GravityLaw::default());

    system
        .fixed_attractors
        .push(FixedAttractor::new(Point2::new(20.0, 0.0), 1.0e5).unwrap());
    let after = Diagnostics::compute(&system, &GravityLaw::default());

    assert_eq!(before, after);
}

#[test]
fn test_coincident_pair_skipped() {
    let mut system = SystemState::new();
    system.add_body(body(10.0, 5.0, 5.0, 0.0, 0.0));
    system.add_body(body(10.0, 5.0, 5.0, 0.0, 0.0));

    let diag = Diagnostics::compute(&system, &GravityLaw::default());

    assert_eq!(diag.potential, 0.0);
    assert!(diag.total_energy.is_finite());
}

#[test]
fn test_momentum_vector() {
    let mut system = SystemState::new();
    system.add_body(body(2.0, 0.0, 0.0, 1.0, -1.0));
    system.add_body(body(3.0, 10.0, 0.0, -1.0, 2.0));

    let diag = Diagnostics::compute(&system, &GravityLaw::default());

    assert_eq!(diag.momentum, Vector2::new(-1.0, 4.0));
}

#[test]
fn test_unknown_body_lookup() {
    let diag = Diagnostics::compute(&SystemState::new(), &GravityLaw::default());
    assert!(diag.body(crate::body::BodyId(99)).is_none());
}
