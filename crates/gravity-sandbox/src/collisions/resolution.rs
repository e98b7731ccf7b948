//! Collision resolution through perfectly inelastic mergers
//!
//! When bodies overlap, they merge into a single body that conserves:
//! - Total mass
//! - Total momentum
//! - Center of mass

use nalgebra::Point2;

use crate::body::{Body, BodyId};
use crate::state::SystemState;
use crate::trail::Trail;

/// Merge two bodies, conserving mass and momentum
///
/// Position and velocity are the mass-weighted averages of the pair, and the
/// color is the component-wise average. The result starts with an empty
/// trail of the same capacity as `a`'s.
///
/// # Examples
///
/// ```
/// use gravity_sandbox::body::{Body, BodyId, Color};
/// use gravity_sandbox::collisions::merge_bodies;
/// use nalgebra::{Point2, Vector2};
///
/// let a = Body::new(1.0, Point2::new(1.0, 0.0), Vector2::new(0.0, 5.0), Color::RED).unwrap();
/// let b = Body::new(1.0, Point2::new(3.0, 0.0), Vector2::new(0.0, 3.0), Color::BLUE).unwrap();
///
/// let merged = merge_bodies(&a, &b, BodyId(2));
///
/// assert_eq!(merged.mass, 2.0);
/// assert_eq!(merged.position, Point2::new(2.0, 0.0));
/// assert_eq!(merged.velocity, Vector2::new(0.0, 4.0));
/// assert_eq!(merged.color, Color::new(127, 0, 127));
/// ```
pub fn merge_bodies(a: &Body, b: &Body, new_id: BodyId) -> Body {
    let total_mass = a.mass + b.mass;

    // Center of mass position
    let pos_coords = (a.position.coords * a.mass + b.position.coords * b.mass) / total_mass;
    let position = Point2::from(pos_coords);

    // Momentum-conserving velocity
    let velocity = (a.momentum() + b.momentum()) / total_mass;

    Body {
        id: new_id,
        mass: total_mass,
        position,
        velocity,
        color: a.color.average(b.color),
        trail: Trail::with_capacity(a.trail.capacity()),
    }
}

/// Greedy single-pass merge of overlapping bodies
///
/// Walks bodies in index order. The first body not yet merged is tested
/// against every later unmerged body, and the first overlap replaces the
/// pair with their merger in the earlier body's slot. Each body takes part
/// in at most one merge per call; everything else keeps its order.
///
/// # Returns
///
/// `(consumed_a, consumed_b, merged_id)` for every merger performed
///
/// # Examples
///
/// ```
/// use gravity_sandbox::body::{Body, Color};
/// use gravity_sandbox::collisions::merge_overlapping;
/// use gravity_sandbox::state::SystemState;
/// use nalgebra::{Point2, Vector2};
///
/// let mut system = SystemState::new();
/// system.add_body(Body::new(1000.0, Point2::new(0.0, 0.0), Vector2::zeros(), Color::RED).unwrap());
/// system.add_body(Body::new(1000.0, Point2::new(2.0, 0.0), Vector2::zeros(), Color::BLUE).unwrap());
///
/// let mergers = merge_overlapping(&mut system);
///
/// assert_eq!(mergers.len(), 1);
/// assert_eq!(system.body_count(), 1);
/// assert_eq!(system.bodies[0].mass, 2000.0);
/// ```
pub fn merge_overlapping(state: &mut SystemState) -> Vec<(BodyId, BodyId, BodyId)> {
    let n = state.bodies.len();
    let mut consumed = vec![false; n];
    let mut partner: Vec<Option<usize>> = vec![None; n];

    for i in 0..n {
        if consumed[i] {
            continue;
        }
        let hit = ((i + 1)..n)
            .find(|&j| !consumed[j] && state.bodies[i].overlaps(&state.bodies[j]));

        if let Some(j) = hit {
            consumed[i] = true;
            consumed[j] = true;
            partner[i] = Some(j);
        }
    }

    if partner.iter().all(Option::is_none) {
        return Vec::new();
    }

    let old = std::mem::take(&mut state.bodies);
    let mut mergers = Vec::new();
    let mut bodies = Vec::with_capacity(n);

    for (i, body) in old.iter().enumerate() {
        match partner[i] {
            Some(j) => {
                let other = &old[j];
                let merged = merge_bodies(body, other, state.allocate_id());
                log::debug!(
                    "merged bodies {:?} and {:?} into {:?} (mass {:.1})",
                    body.id,
                    other.id,
                    merged.id,
                    merged.mass
                );
                mergers.push((body.id, other.id, merged.id));
                bodies.push(merged);
            }
            None if consumed[i] => {}
            None => bodies.push(body.clone()),
        }
    }

    state.bodies = bodies;
    mergers
}
