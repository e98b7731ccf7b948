//! Force models for the sandbox
//!
//! This module provides the `ForceModel` trait and the two gravity models the
//! stepper applies at different points of a tick:
//! - [`MutualGravity`]: body/body and orbit-attractor/body
//! - [`FixedAttractorGravity`]: black-hole/body

use nalgebra::Vector2;

use crate::state::SystemState;

pub mod gravity;


pub use gravity::{FixedAttractorGravity, GravityLaw, MutualGravity};

/// A source of acceleration on bodies
///
/// # Examples
///
/// ```
/// use gravity_sandbox::body::{Body, Color};
/// use gravity_sandbox::forces::{ForceModel, GravityLaw, MutualGravity};
/// use gravity_sandbox::state::SystemState;
/// use nalgebra::{Point2, Vector2};
///
/// let mut system = SystemState::new();
/// system.add_body(Body::new(1000.0, Point2::new(0.0, 0.0), Vector2::zeros(), Color::RED).unwrap());
/// system.add_body(Body::new(1000.0, Point2::new(100.0, 0.0), Vector2::zeros(), Color::BLUE).unwrap());
///
/// let gravity = MutualGravity::new(GravityLaw::default());
/// let accel = gravity.acceleration(0, &system);
/// assert!(accel.x > 0.0);
/// ```
pub trait ForceModel: Send + Sync {
    /// Acceleration on body at index `idx` given the full system state
    fn acceleration(&self, idx: usize, state: &SystemState) -> Vector2<f64>;

    /// Accelerations of every body, in body order
    fn accelerations(&self, state: &SystemState) -> Vec<Vector2<f64>> {
        (0..state.bodies.len())
            .map(|i| self.acceleration(i, state))
            .collect()
    }
}
