use std::str::FromStr;

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::trail::Trail;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// RGB display color carried through merges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const ORBIT: Color = Color::new(220, 220, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Component-wise average, rounded down
    pub fn average(self, other: Color) -> Color {
        let mid = |a: u8, b: u8| ((u16::from(a) + u16::from(b)) / 2) as u8;
        Color::new(mid(self.r, other.r), mid(self.g, other.g), mid(self.b, other.b))
    }
}

impl FromStr for Color {
    type Err = SimError;

    /// Parses `"r,g,b"` with each channel in `0..=255`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let channels = s
            .split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<Vec<u8>, _>>()
            .map_err(|_| SimError::parse("color", s))?;

        match channels.as_slice() {
            [r, g, b] => Ok(Color::new(*r, *g, *b)),
            _ => Err(SimError::parse("color", s)),
        }
    }
}

/// A freely moving, mutually gravitating point mass
///
/// Serializable as a snapshot for front-ends, trail included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: BodyId,
    pub mass: f64,
    pub position: Point2<f64>,
    pub velocity: Vector2<f64>,
    pub color: Color,
    pub trail: Trail,
}

impl Body {
    /// Creates a body after validating its inputs
    ///
    /// The id is a placeholder until the body is added to a
    /// [`SystemState`](crate::state::SystemState), which assigns a fresh one.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity_sandbox::body::{Body, Color};
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let body = Body::new(1000.0, Point2::new(10.0, 0.0), Vector2::zeros(), Color::RED).unwrap();
    /// assert_eq!(body.display_radius(), 3.0);
    ///
    /// assert!(Body::new(0.0, Point2::origin(), Vector2::zeros(), Color::RED).is_err());
    /// assert!(Body::new(1.0, Point2::new(f64::NAN, 0.0), Vector2::zeros(), Color::RED).is_err());
    /// ```
    pub fn new(
        mass: f64,
        position: Point2<f64>,
        velocity: Vector2<f64>,
        color: Color,
    ) -> Result<Self, SimError> {
        validate_mass(mass)?;
        validate_vector("position", &position.coords)?;
        validate_vector("velocity", &velocity)?;

        Ok(Body {
            id: BodyId(0),
            mass,
            position,
            velocity,
            color,
            trail: Trail::with_capacity(0),
        })
    }

    /// Collision radius derived from mass: `max(3, floor(mass^(1/3) * 0.2))`
    pub fn display_radius(&self) -> f64 {
        display_radius(self.mass)
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).magnitude()
    }

    /// Whether the two bodies are closer than the sum of their radii
    pub fn overlaps(&self, other: &Body) -> bool {
        self.distance_to(other) < self.display_radius() + other.display_radius()
    }
}

pub fn display_radius(mass: f64) -> f64 {
    (mass.cbrt() * 0.2).floor().max(3.0)
}

pub(crate) fn validate_mass(mass: f64) -> Result<(), SimError> {
    if !mass.is_finite() || mass <= 0.0 {
        return Err(SimError::invalid(format!(
            "mass must be positive and finite, got {mass}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_vector(name: &str, v: &Vector2<f64>) -> Result<(), SimError> {
    if !(v.x.is_finite() && v.y.is_finite()) {
        return Err(SimError::invalid(format!(
            "{name} must be finite, got ({}, {})",
            v.x, v.y
        )));
    }
    Ok(())
}
