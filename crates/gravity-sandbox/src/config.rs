//! Simulation-wide constants and policy toggles

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::boundary::{BoundaryMode, Bounds};

/// Gravitational constant in world units
pub const G: f64 = 0.667430;

/// Squared-distance floor for force evaluation (world units²)
pub const SOFTENING: f64 = 100.0;

/// Impulse per unit of penetration depth used by soft repulsion
pub const REPULSION_STRENGTH: f64 = 500.0;

pub const MIN_SPEED: f64 = 0.1;
pub const MAX_SPEED: f64 = 20.0;

pub const MIN_BLACK_HOLE_MASS: f64 = 1_000.0;
pub const MAX_BLACK_HOLE_MASS: f64 = 1_000_000.0;

pub const MAX_PATH_LENGTH: usize = 1_000;

/// Every tunable of a simulation session
///
/// All fields have defaults, so a partial serialized config is enough to
/// construct one.
///
/// # Examples
///
/// ```
/// use gravity_sandbox::config::SimulationConfig;
///
/// let config = SimulationConfig {
///     merge: true,
///     ..SimulationConfig::default()
/// };
/// assert_eq!(config.max_path_length, 300);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub gravitational_constant: f64,
    pub softening: f64,
    pub repulsion_strength: f64,
    /// Trail capacity per body
    pub max_path_length: usize,
    /// Number of body input rows the front-end may submit
    pub max_bodies: usize,
    pub max_orbit_attractors: usize,
    /// Mass given to newly placed fixed attractors
    pub black_hole_mass: f64,
    pub world_width: f64,
    pub world_height: f64,
    pub invert_gravity: bool,
    pub merge: bool,
    pub repulsion: bool,
    pub boundary_mode: BoundaryMode,
    pub zoom_follow: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: G,
            softening: SOFTENING,
            repulsion_strength: REPULSION_STRENGTH,
            max_path_length: 300,
            max_bodies: 7,
            max_orbit_attractors: 5,
            black_hole_mass: 5_000.0,
            world_width: 850.0,
            world_height: 634.0,
            invert_gravity: false,
            merge: false,
            repulsion: false,
            boundary_mode: BoundaryMode::Reflect,
            zoom_follow: false,
        }
    }
}

impl SimulationConfig {
    pub fn world_size(&self) -> Vector2<f64> {
        Vector2::new(self.world_width, self.world_height)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            mode: self.boundary_mode,
            size: self.world_size(),
            zoom_follow: self.zoom_follow,
        }
    }
}

/// Clamps a user speed factor to the supported range
pub fn clamp_speed(speed: f64) -> f64 {
    if speed.is_nan() {
        return MIN_SPEED;
    }
    speed.clamp(MIN_SPEED, MAX_SPEED)
}
