//! Overlap detection between bodies
//!
//! Two bodies are in contact when their separation is below the sum of
//! their display radii. Direct O(N²) pair scan; the sandbox targets small N.

use nalgebra::Vector2;

use crate::body::Body;

/// A detected overlap between the bodies at indices `a < b`
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub a: usize,
    pub b: usize,
    /// Current separation distance
    pub separation: f64,
    /// Sum of the display radii
    pub min_distance: f64,
    /// Unit vector from `a` towards `b`, zero for coincident bodies
    pub normal: Vector2<f64>,
}

impl Contact {
    pub fn penetration(&self) -> f64 {
        self.min_distance - self.separation
    }
}

/// Check if a pair of bodies overlaps
pub fn check_pair(a_idx: usize, a: &Body, b_idx: usize, b: &Body) -> Option<Contact> {
    let delta = b.position - a.position;
    let separation = delta.magnitude();
    let min_distance = a.display_radius() + b.display_radius();

    if separation < min_distance {
        let normal = if separation > 0.0 {
            delta / separation
        } else {
            Vector2::zeros()
        };
        Some(Contact {
            a: a_idx,
            b: b_idx,
            separation,
            min_distance,
            normal,
        })
    } else {
        None
    }
}

/// All overlapping pairs, ordered by `(a, b)` index
///
/// # Examples
///
/// ```
/// use gravity_sandbox::body::{Body, Color};
/// use gravity_sandbox::collisions::find_contacts;
/// use nalgebra::{Point2, Vector2};
///
/// let bodies = vec![
///     Body::new(1000.0, Point2::new(0.0, 0.0), Vector2::zeros(), Color::RED).unwrap(),
///     Body::new(1000.0, Point2::new(4.0, 0.0), Vector2::zeros(), Color::GREEN).unwrap(),
///     Body::new(1000.0, Point2::new(50.0, 0.0), Vector2::zeros(), Color::BLUE).unwrap(),
/// ];
///
/// let contacts = find_contacts(&bodies);
/// assert_eq!(contacts.len(), 1);
/// assert_eq!((contacts[0].a, contacts[0].b), (0, 1));
/// ```
pub fn find_contacts(bodies: &[Body]) -> Vec<Contact> {
    let n = bodies.len();

    (0..n)
        .flat_map(|i| {
            ((i + 1)..n).filter_map(move |j| check_pair(i, &bodies[i], j, &bodies[j]))
        })
        .collect()
}
