//! Gravity sources that are not themselves accelerated
//!
//! Two kinds exist:
//! - [`FixedAttractor`]: an immovable mass ("black hole")
//! - [`OrbitAttractor`]: a mass moving along a prescribed ellipse
//!
//! Both pull on bodies but never feel a reaction force. [`Source`] gives the
//! force field a uniform view over them and over bodies.

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::body::{Body, Color, validate_mass, validate_vector};
use crate::error::SimError;

/// Angular rate substituted when an orbit is requested with ω = 0
pub const DEFAULT_OMEGA: f64 = 1.0;

/// Immovable gravity source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedAttractor {
    pub position: Point2<f64>,
    pub mass: f64,
}

impl FixedAttractor {
    pub fn new(position: Point2<f64>, mass: f64) -> Result<Self, SimError> {
        validate_mass(mass)?;
        validate_vector("position", &position.coords)?;
        Ok(Self { position, mass })
    }

    /// Radius within which a click selects this attractor
    pub fn pick_radius(&self) -> f64 {
        self.mass.sqrt() * 0.1
    }

    pub fn contains(&self, point: Point2<f64>) -> bool {
        (point - self.position).magnitude() < self.pick_radius()
    }
}

/// Mass source on a kinematic elliptical path
///
/// Its position is a pure function of the phase angle `theta`, which
/// advances at `omega` regardless of any force.
///
/// # Examples
///
/// ```
/// use gravity_sandbox::attractor::OrbitAttractor;
/// use nalgebra::{Point2, Vector2};
///
/// let mut orbit = OrbitAttractor::new(Point2::origin(), Vector2::new(50.0, 50.0), 1.0, 1000.0).unwrap();
/// orbit.advance(std::f64::consts::PI);
///
/// let p = orbit.position();
/// assert!((p.x + 50.0).abs() < 1e-9);
/// assert!(p.y.abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitAttractor {
    pub center: Point2<f64>,
    /// Semi-axes (a along x, b along y)
    pub radii: Vector2<f64>,
    pub omega: f64,
    pub theta: f64,
    pub mass: f64,
    pub color: Color,
}

impl OrbitAttractor {
    /// Creates an orbit attractor starting at phase 0
    ///
    /// An `omega` of exactly zero is replaced by [`DEFAULT_OMEGA`].
    pub fn new(
        center: Point2<f64>,
        radii: Vector2<f64>,
        omega: f64,
        mass: f64,
    ) -> Result<Self, SimError> {
        validate_mass(mass)?;
        validate_vector("center", &center.coords)?;
        validate_vector("radii", &radii)?;
        if !omega.is_finite() {
            return Err(SimError::invalid(format!("omega must be finite, got {omega}")));
        }

        Ok(Self {
            center,
            radii,
            omega: if omega == 0.0 { DEFAULT_OMEGA } else { omega },
            theta: 0.0,
            mass,
            color: Color::ORBIT,
        })
    }

    pub fn position(&self) -> Point2<f64> {
        Point2::new(
            self.center.x + self.radii.x * self.theta.cos(),
            self.center.y + self.radii.y * self.theta.sin(),
        )
    }

    /// Advances the phase by `omega * dt`
    pub fn advance(&mut self, dt: f64) {
        self.theta += self.omega * dt;
    }

    /// Live ω edit; zero and non-finite values are ignored
    pub fn set_omega(&mut self, omega: f64) -> bool {
        if omega == 0.0 || !omega.is_finite() {
            return false;
        }
        self.omega = omega;
        true
    }

    /// Live mass edit; non-positive and non-finite values are ignored
    pub fn set_mass(&mut self, mass: f64) -> bool {
        if validate_mass(mass).is_err() {
            return false;
        }
        self.mass = mass;
        true
    }
}

/// Capability-tagged view of anything that exerts gravity
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    /// Mutual: pulls and is pulled
    Body(&'a Body),
    /// One-way: pulls, never pulled
    Fixed(&'a FixedAttractor),
    /// One-way: pulls, never pulled
    Orbit(&'a OrbitAttractor),
}

impl Source<'_> {
    /// Mass and position with which this source attracts others
    pub fn attracts_with(&self) -> (f64, Point2<f64>) {
        match self {
            Source::Body(b) => (b.mass, b.position),
            Source::Fixed(f) => (f.mass, f.position),
            Source::Orbit(o) => (o.mass, o.position()),
        }
    }
}
