//! Energy and momentum diagnostics
//!
//! Always recomputed from scratch from the current state and never fed back
//! into the dynamics.

use nalgebra::Vector2;
use serde::Serialize;

use crate::body::BodyId;
use crate::forces::GravityLaw;
use crate::state::SystemState;

/// Energy breakdown for a single body
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyEnergy {
    pub id: BodyId,
    pub kinetic: f64,
    pub potential: f64,
    pub speed: f64,
}

impl BodyEnergy {
    pub fn total(&self) -> f64 {
        self.kinetic + self.potential
    }
}

/// Snapshot of the system's conserved quantities
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostics {
    pub bodies: Vec<BodyEnergy>,
    pub kinetic: f64,
    pub potential: f64,
    pub total_energy: f64,
    pub momentum: Vector2<f64>,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self {
            bodies: Vec::new(),
            kinetic: 0.0,
            potential: 0.0,
            total_energy: 0.0,
            momentum: Vector2::zeros(),
        }
    }
}

impl Diagnostics {
    /// Computes diagnostics for `state` under `law`
    ///
    /// Pairwise body potential is split evenly between both participants, so
    /// summing per-body potentials counts each pair once. Potential against
    /// an orbit attractor is credited in full to the body. Fixed attractors
    /// are not part of the potential energy. Coincident pairs are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity_sandbox::body::{Body, Color};
    /// use gravity_sandbox::diagnostics::Diagnostics;
    /// use gravity_sandbox::forces::GravityLaw;
    /// use gravity_sandbox::state::SystemState;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let mut system = SystemState::new();
    /// system.add_body(Body::new(2.0, Point2::new(0.0, 0.0), Vector2::new(3.0, 4.0), Color::RED).unwrap());
    ///
    /// let diag = Diagnostics::compute(&system, &GravityLaw::default());
    /// assert_eq!(diag.kinetic, 25.0);
    /// assert_eq!(diag.potential, 0.0);
    /// assert_eq!(diag.momentum, Vector2::new(6.0, 8.0));
    /// ```
    pub fn compute(state: &SystemState, law: &GravityLaw) -> Self {
        let bodies = &state.bodies;
        let mut potential = vec![0.0; bodies.len()];

        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let (a, b) = (&bodies[i], &bodies[j]);
                if let Some(u) = law.potential(a.mass, a.position, b.mass, b.position) {
                    potential[i] += 0.5 * u;
                    potential[j] += 0.5 * u;
                }
            }
        }

        for (i, body) in bodies.iter().enumerate() {
            potential[i] += state
                .orbit_attractors
                .iter()
                .filter_map(|o| law.potential(body.mass, body.position, o.mass, o.position()))
                .sum::<f64>();
        }

        let per_body: Vec<BodyEnergy> = bodies
            .iter()
            .zip(potential.iter())
            .map(|(body, &pot)| BodyEnergy {
                id: body.id,
                kinetic: body.kinetic_energy(),
                potential: pot,
                speed: body.speed(),
            })
            .collect();

        let kinetic: f64 = per_body.iter().map(|e| e.kinetic).sum();
        let potential: f64 = per_body.iter().map(|e| e.potential).sum();

        Self {
            bodies: per_body,
            kinetic,
            potential,
            total_energy: kinetic + potential,
            momentum: state.total_momentum(),
        }
    }

    pub fn body(&self, id: BodyId) -> Option<&BodyEnergy> {
        self.bodies.iter().find(|e| e.id == id)
    }
}
