//! Text-derived entity input from the front-end
//!
//! Front-ends hand over raw widget text. Each row is parsed on its own; a
//! row that fails to parse or validate is skipped with a warning and the
//! rest of the batch still goes through.

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::attractor::{DEFAULT_OMEGA, OrbitAttractor};
use crate::body::{Body, Color};
use crate::error::SimError;

/// Mass used when the orbit tool's mass field does not parse
pub const DEFAULT_ORBIT_MASS: f64 = 1_000.0;

/// Semi-axis floor for orbits placed with the orbit tool
pub const MIN_ORBIT_RADIUS: f64 = 20.0;

/// Semi-axes used when the orbit tool drag was shorter than the floor on both axes
pub const DEFAULT_ORBIT_RADIUS: f64 = 80.0;

/// One body row: mass, position, velocity and color as entered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyInput {
    pub mass: String,
    pub pos_x: String,
    pub pos_y: String,
    pub vel_x: String,
    pub vel_y: String,
    /// `"r,g,b"`
    pub color: String,
}

impl BodyInput {
    /// Default contents of the `i`-th row for a world of `world_size`
    ///
    /// Rows start at the world center, 30 units apart, with decreasing
    /// vertical velocity.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity_sandbox::input::BodyInput;
    /// use nalgebra::Vector2;
    ///
    /// let row = BodyInput::default_row(1, Vector2::new(800.0, 600.0));
    /// assert_eq!(row.pos_x, "430");
    /// assert_eq!(row.vel_y, "1");
    /// assert_eq!(row.color, "0,255,0");
    /// ```
    pub fn default_row(i: usize, world_size: Vector2<f64>) -> Self {
        let color = match i {
            0 => "255,0,0",
            1 => "0,255,0",
            _ => "0,0,255",
        };

        Self {
            mass: "1000".to_string(),
            pos_x: (world_size.x / 2.0 + i as f64 * 30.0).to_string(),
            pos_y: (world_size.y / 2.0).to_string(),
            vel_x: "0".to_string(),
            vel_y: (1.5 - i as f64 * 0.5).to_string(),
            color: color.to_string(),
        }
    }

    /// Parses and validates the row into a body
    pub fn parse(&self) -> Result<Body, SimError> {
        let mass = parse_number("mass", &self.mass)?;
        let position = Point2::new(
            parse_number("pos_x", &self.pos_x)?,
            parse_number("pos_y", &self.pos_y)?,
        );
        let velocity = Vector2::new(
            parse_number("vel_x", &self.vel_x)?,
            parse_number("vel_y", &self.vel_y)?,
        );
        let color: Color = self.color.parse()?;

        Body::new(mass, position, velocity, color)
    }
}

/// Builds bodies from up to `limit` rows, skipping rows that fail
///
/// # Examples
///
/// ```
/// use gravity_sandbox::input::{BodyInput, build_bodies};
/// use nalgebra::Vector2;
///
/// let size = Vector2::new(800.0, 600.0);
/// let mut rows: Vec<BodyInput> = (0..3).map(|i| BodyInput::default_row(i, size)).collect();
/// rows[1].mass = "heavy".to_string();
///
/// let bodies = build_bodies(&rows, 7);
/// assert_eq!(bodies.len(), 2);
/// ```
pub fn build_bodies(rows: &[BodyInput], limit: usize) -> Vec<Body> {
    if rows.len() > limit {
        log::warn!("{} body rows given, only the first {limit} are used", rows.len());
    }

    rows.iter()
        .take(limit)
        .enumerate()
        .filter_map(|(i, row)| match row.parse() {
            Ok(body) => Some(body),
            Err(err) => {
                log::warn!("skipping body row {}: {err}", i + 1);
                None
            }
        })
        .collect()
}

/// Orbit tool input: two clicked world points plus the default-field text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitInput {
    pub center: Point2<f64>,
    pub radii: Vector2<f64>,
    pub mass: f64,
    pub omega: f64,
}

impl OrbitInput {
    /// Derives an orbit from a center click and a corner click
    ///
    /// The semi-axes are the absolute offsets of the corner from the center.
    /// If both are below [`MIN_ORBIT_RADIUS`], both become
    /// [`DEFAULT_ORBIT_RADIUS`]; if only one is, it is raised to the floor.
    /// Unparseable mass falls back to [`DEFAULT_ORBIT_MASS`]; unparseable or
    /// zero ω falls back to [`DEFAULT_OMEGA`].
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity_sandbox::input::OrbitInput;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let input = OrbitInput::from_drag(Point2::new(100.0, 100.0), Point2::new(105.0, 40.0), "abc", "0");
    /// assert_eq!(input.radii, Vector2::new(20.0, 60.0));
    /// assert_eq!(input.mass, 1000.0);
    /// assert_eq!(input.omega, 1.0);
    /// ```
    pub fn from_drag(
        center: Point2<f64>,
        corner: Point2<f64>,
        mass_text: &str,
        omega_text: &str,
    ) -> Self {
        let delta = corner - center;
        let (mut a, mut b) = (delta.x.abs(), delta.y.abs());

        if a < MIN_ORBIT_RADIUS && b < MIN_ORBIT_RADIUS {
            a = DEFAULT_ORBIT_RADIUS;
            b = DEFAULT_ORBIT_RADIUS;
        } else if a < MIN_ORBIT_RADIUS {
            a = MIN_ORBIT_RADIUS;
        } else if b < MIN_ORBIT_RADIUS {
            b = MIN_ORBIT_RADIUS;
        }

        let mass = parse_number("orbit mass", mass_text).unwrap_or(DEFAULT_ORBIT_MASS);
        let omega = match parse_number("orbit omega", omega_text) {
            Ok(omega) if omega != 0.0 => omega,
            _ => DEFAULT_OMEGA,
        };

        Self {
            center,
            radii: Vector2::new(a, b),
            mass,
            omega,
        }
    }

    pub fn build(&self) -> Result<OrbitAttractor, SimError> {
        OrbitAttractor::new(self.center, self.radii, self.omega, self.mass)
    }
}

/// Parses a finite floating-point number from widget text
pub fn parse_number(field: &'static str, text: &str) -> Result<f64, SimError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| SimError::parse(field, text))
}
