use nalgebra::{Point2, Vector2};

use crate::attractor::{FixedAttractor, OrbitAttractor};
use crate::body::{Body, BodyId, Color};
use crate::state::SystemState;

fn make_body(mass: f64, x: f64, y: f64, vx: f64, vy: f64) -> Body {
    Body::new(mass, Point2::new(x, y), Vector2::new(vx, vy), Color::RED).unwrap()
}

#[test]
fn test_new_system() {
    let system = SystemState::new();

    assert_eq!(system.time, 0.0);
    assert_eq!(system.body_count(), 0);
    assert!(system.fixed_attractors.is_empty());
    assert!(system.orbit_attractors.is_empty());
}

#[test]
fn test_add_body() {
    let mut system = SystemState::new();

    let id1 = system.add_body(make_body(1000.0, 100.0, 100.0, 0.0, 1.0));
    let id2 = system.add_body(make_body(2000.0, 200.0, 100.0, 0.0, -1.0));

    assert_eq!(system.body_count(), 2);
    assert_eq!(id1.0, 0);
    assert_eq!(id2.0, 1);
}

#[test]
fn test_add_body_overrides_placeholder_id() {
    let mut system = SystemState::new();
    let mut body = make_body(1000.0, 0.0, 0.0, 0.0, 0.0);
    body.id = BodyId(42);

    let id = system.add_body(body);

    assert_eq!(id, BodyId(0));
    assert_eq!(system.bodies[0].id, BodyId(0));
}

#[test]
fn test_remove_body() {
    let mut system = SystemState::new();

    let id = system.add_body(make_body(1000.0, 0.0, 0.0, 0.0, 0.0));
    assert_eq!(system.body_count(), 1);

    let removed = system.remove_body(id);
    assert!(removed.is_some());
    assert_eq!(removed.unwrap().id, id);
    assert_eq!(system.body_count(), 0);
}

#[test]
fn test_remove_nonexistent_body() {
    let mut system = SystemState::new();

    let removed = system.remove_body(BodyId(999));
    assert!(removed.is_none());
}

#[test]
fn test_ids_not_reused_after_removal() {
    let mut system = SystemState::new();
    let first = system.add_body(make_body(1000.0, 0.0, 0.0, 0.0, 0.0));
    system.remove_body(first);

    let second = system.add_body(make_body(1000.0, 0.0, 0.0, 0.0, 0.0));
    assert_ne!(first, second);
}

#[test]
fn test_get_body() {
    let mut system = SystemState::new();
    let id = system.add_body(make_body(1500.0, 10.0, 20.0, 0.0, 0.0));

    let body = system.get_body(id).unwrap();
    assert_eq!(body.mass, 1500.0);
    assert_eq!(body.position, Point2::new(10.0, 20.0));
    assert!(system.get_body(BodyId(id.0 + 1)).is_none());
}

#[test]
fn test_total_mass_and_momentum() {
    let mut system = SystemState::new();
    system.add_body(make_body(2.0, 0.0, 0.0, 1.0, 0.0));
    system.add_body(make_body(3.0, 10.0, 0.0, 0.0, -2.0));

    assert_eq!(system.total_mass(), 5.0);
    assert_eq!(system.total_momentum(), Vector2::new(2.0, -6.0));
    assert_eq!(system.kinetic_energy(), 0.5 * 2.0 + 0.5 * 3.0 * 4.0);
}

#[test]
fn test_center_of_mass() {
    let mut system = SystemState::new();
    assert!(system.center_of_mass().is_none());

    system.add_body(make_body(1.0, 0.0, 0.0, 0.0, 0.0));
    system.add_body(make_body(3.0, 4.0, 8.0, 0.0, 0.0));

    assert_eq!(system.center_of_mass(), Some(Point2::new(3.0, 6.0)));
}

#[test]
fn test_clear() {
    let mut system = SystemState::new();
    system.time = 12.5;
    system.add_body(make_body(1000.0, 0.0, 0.0, 0.0, 0.0));
    system
        .fixed_attractors
        .push(FixedAttractor::new(Point2::new(5.0, 5.0), 5000.0).unwrap());
    system.orbit_attractors.push(
        OrbitAttractor::new(Point2::origin(), Vector2::new(50.0, 50.0), 1.0, 1000.0).unwrap(),
    );

    system.clear();

    assert_eq!(system.time, 0.0);
    assert_eq!(system.body_count(), 0);
    assert!(system.fixed_attractors.is_empty());
    assert!(system.orbit_attractors.is_empty());
}
