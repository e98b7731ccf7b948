//! Direct pairwise gravity (O(N²) implementation)

use nalgebra::{Point2, Vector2};

use crate::attractor::Source;
use crate::config::{G, SOFTENING};
use crate::forces::ForceModel;
use crate::state::SystemState;

/// Softened inverse-square law shared by every gravity model
///
/// `r² = max(|d|², softening)` keeps the force finite at small separations.
/// Exactly coincident positions have no direction and contribute nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityLaw {
    pub g: f64,
    /// Squared-distance floor (world units²)
    pub softening: f64,
    /// Flip attraction to repulsion
    pub inverted: bool,
}

impl GravityLaw {
    pub fn new(g: f64, softening: f64, inverted: bool) -> Self {
        Self {
            g,
            softening,
            inverted,
        }
    }

    /// Force on a mass `m` at `position` exerted by `source`
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity_sandbox::attractor::{FixedAttractor, Source};
    /// use gravity_sandbox::forces::GravityLaw;
    /// use nalgebra::Point2;
    ///
    /// let law = GravityLaw::default();
    /// let hole = FixedAttractor::new(Point2::new(0.0, 0.0), 5000.0).unwrap();
    ///
    /// // Coincident: no direction, no force
    /// let f = law.force(1000.0, Point2::new(0.0, 0.0), Source::Fixed(&hole));
    /// assert_eq!(f.magnitude(), 0.0);
    /// ```
    pub fn force(&self, m: f64, position: Point2<f64>, source: Source<'_>) -> Vector2<f64> {
        let (other_mass, other_position) = source.attracts_with();
        let d = other_position - position;
        let dist2 = d.magnitude_squared();
        if dist2 == 0.0 {
            return Vector2::zeros();
        }

        let r2 = dist2.max(self.softening);
        // m * other_mass grouped so that F(a, b) == -F(b, a) exactly
        let magnitude = self.g * (m * other_mass) / r2;
        let force = d / dist2.sqrt() * magnitude;

        if self.inverted { -force } else { force }
    }

    /// Potential energy `-G m1 m2 / r` between two point masses, unsoftened
    ///
    /// Returns `None` for coincident positions.
    pub fn potential(&self, m1: f64, p1: Point2<f64>, m2: f64, p2: Point2<f64>) -> Option<f64> {
        let r = (p1 - p2).magnitude();
        if r > 0.0 {
            Some(-self.g * m1 * m2 / r)
        } else {
            None
        }
    }
}

impl Default for GravityLaw {
    fn default() -> Self {
        Self::new(G, SOFTENING, false)
    }
}

/// Gravity from every other body and every orbit attractor
pub struct MutualGravity {
    pub law: GravityLaw,
}

impl MutualGravity {
    pub fn new(law: GravityLaw) -> Self {
        Self { law }
    }
}

impl ForceModel for MutualGravity {
    fn acceleration(&self, idx: usize, state: &SystemState) -> Vector2<f64> {
        let body = &state.bodies[idx];

        let from_bodies = state
            .bodies
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, other)| Source::Body(other));
        let from_orbits = state.orbit_attractors.iter().map(Source::Orbit);

        let force = from_bodies
            .chain(from_orbits)
            .map(|source| self.law.force(body.mass, body.position, source))
            .fold(Vector2::zeros(), |acc, f| acc + f);

        force / body.mass
    }
}

/// Gravity from fixed attractors (black holes) only
pub struct FixedAttractorGravity {
    pub law: GravityLaw,
}

impl FixedAttractorGravity {
    pub fn new(law: GravityLaw) -> Self {
        Self { law }
    }
}

impl ForceModel for FixedAttractorGravity {
    fn acceleration(&self, idx: usize, state: &SystemState) -> Vector2<f64> {
        let body = &state.bodies[idx];

        let force = state
            .fixed_attractors
            .iter()
            .map(|hole| self.law.force(body.mass, body.position, Source::Fixed(hole)))
            .fold(Vector2::zeros(), |acc, f| acc + f);

        force / body.mass
    }
}
