//! Time integration for the sandbox
//!
//! A single first-order, fixed-step scheme is used: semi-implicit
//! (symplectic) Euler. Velocities are updated first and the new velocity
//! moves the position.

use nalgebra::Vector2;

use crate::forces::ForceModel;
use crate::state::SystemState;

/// A time integrator for the body set
pub trait Integrator: Send + Sync {
    /// Advance every body by one timestep
    ///
    /// # Arguments
    ///
    /// * `state` - Current system state (modified in place)
    /// * `dt` - Timestep, already multiplied by the speed factor
    /// * `force` - Force model to compute accelerations
    fn step(&self, state: &mut SystemState, dt: f64, force: &dyn ForceModel);
}

/// Semi-implicit Euler integrator (1st order, symplectic)
///
/// 1. Kick: v(t + dt) = v(t) + a(t) * dt
/// 2. Drift: x(t + dt) = x(t) + v(t + dt) * dt
///
/// All accelerations are evaluated on the state at the start of the step.
///
/// # Examples
///
/// ```
/// use gravity_sandbox::body::{Body, Color};
/// use gravity_sandbox::forces::{GravityLaw, MutualGravity};
/// use gravity_sandbox::integrator::{Integrator, SemiImplicitEuler};
/// use gravity_sandbox::state::SystemState;
/// use nalgebra::{Point2, Vector2};
///
/// let mut system = SystemState::new();
/// system.add_body(Body::new(1000.0, Point2::new(0.0, 0.0), Vector2::zeros(), Color::RED).unwrap());
/// system.add_body(Body::new(1000.0, Point2::new(100.0, 0.0), Vector2::zeros(), Color::BLUE).unwrap());
///
/// let force = MutualGravity::new(GravityLaw::default());
/// SemiImplicitEuler.step(&mut system, 0.016, &force);
///
/// assert!(system.bodies[0].position.x > 0.0);
/// assert!(system.time > 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SemiImplicitEuler;

impl SemiImplicitEuler {
    /// Update velocities from precomputed accelerations
    pub fn kick(state: &mut SystemState, accelerations: &[Vector2<f64>], dt: f64) {
        state
            .bodies
            .iter_mut()
            .zip(accelerations.iter())
            .for_each(|(body, accel)| {
                body.velocity += accel * dt;
            });
    }

    /// Update positions from current velocities
    pub fn drift(state: &mut SystemState, dt: f64) {
        state.bodies.iter_mut().for_each(|body| {
            body.position += body.velocity * dt;
        });
    }
}

impl Integrator for SemiImplicitEuler {
    fn step(&self, state: &mut SystemState, dt: f64, force: &dyn ForceModel) {
        let accelerations = force.accelerations(state);
        Self::kick(state, &accelerations, dt);
        Self::drift(state, dt);

        state.time += dt;
    }
}
