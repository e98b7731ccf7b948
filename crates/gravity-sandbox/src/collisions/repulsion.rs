//! Penalty-based soft separation of overlapping bodies
//!
//! Not an energy-conserving collision: each overlapping pair receives an
//! impulse proportional to its penetration depth, pushing the two apart.

use crate::collisions::detection::find_contacts;
use crate::state::SystemState;

/// Push overlapping bodies apart
///
/// For each overlapping pair `(a, b)` with `a < b`, an impulse
/// `strength * penetration` along the `a -> b` normal is subtracted from
/// `a`'s velocity and added to `b`'s, each scaled by the inverse of that
/// body's mass. Coincident pairs have no normal and are skipped.
///
/// # Returns
///
/// Number of pairs that were pushed
///
/// # Examples
///
/// ```
/// use gravity_sandbox::body::{Body, Color};
/// use gravity_sandbox::collisions::apply_soft_repulsion;
/// use gravity_sandbox::state::SystemState;
/// use nalgebra::{Point2, Vector2};
///
/// let mut system = SystemState::new();
/// system.add_body(Body::new(1000.0, Point2::new(0.0, 0.0), Vector2::zeros(), Color::RED).unwrap());
/// system.add_body(Body::new(1000.0, Point2::new(4.0, 0.0), Vector2::zeros(), Color::BLUE).unwrap());
///
/// assert_eq!(apply_soft_repulsion(&mut system, 500.0), 1);
/// assert!(system.bodies[0].velocity.x < 0.0);
/// assert!(system.bodies[1].velocity.x > 0.0);
/// ```
pub fn apply_soft_repulsion(state: &mut SystemState, strength: f64) -> usize {
    // Positions are not touched by this pass, so all contacts can be found up front
    let contacts = find_contacts(&state.bodies);
    let mut pushed = 0;

    for contact in contacts.iter().filter(|c| c.separation > 0.0) {
        let impulse = contact.normal * (strength * contact.penetration());

        let a = &mut state.bodies[contact.a];
        a.velocity -= impulse / a.mass;
        let b = &mut state.bodies[contact.b];
        b.velocity += impulse / b.mass;

        pushed += 1;
    }

    pushed
}
