use nalgebra::{Point2, Vector2};

use crate::attractor::{FixedAttractor, OrbitAttractor};
use crate::body::{Body, BodyId};

/// Complete physical state of the sandbox at a given time
///
/// Body order is the front-end's row order; it has no physical meaning.
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    /// Accumulated scaled simulation time
    pub time: f64,
    pub bodies: Vec<Body>,
    pub fixed_attractors: Vec<FixedAttractor>,
    pub orbit_attractors: Vec<OrbitAttractor>,
    /// Next available body ID
    next_id: u32,
}

impl SystemState {
    /// Creates an empty system
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity_sandbox::state::SystemState;
    ///
    /// let system = SystemState::new();
    /// assert_eq!(system.body_count(), 0);
    /// assert_eq!(system.time, 0.0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a body, assigning it a fresh ID
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity_sandbox::body::{Body, Color};
    /// use gravity_sandbox::state::SystemState;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let mut system = SystemState::new();
    /// let body = Body::new(1000.0, Point2::new(100.0, 100.0), Vector2::zeros(), Color::RED).unwrap();
    /// let id = system.add_body(body);
    ///
    /// assert_eq!(system.body_count(), 1);
    /// assert_eq!(system.get_body(id).unwrap().mass, 1000.0);
    /// ```
    pub fn add_body(&mut self, mut body: Body) -> BodyId {
        body.id = self.allocate_id();
        let id = body.id;
        self.bodies.push(body);
        id
    }

    pub(crate) fn allocate_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Removes a body from the system
    ///
    /// # Returns
    ///
    /// The removed Body if found, None otherwise
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        self.bodies
            .iter()
            .position(|b| b.id == id)
            .map(|idx| self.bodies.remove(idx))
    }

    pub fn get_body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Drops every body and attractor and rewinds time
    pub fn clear(&mut self) {
        self.time = 0.0;
        self.bodies.clear();
        self.fixed_attractors.clear();
        self.orbit_attractors.clear();
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    /// Returns the total momentum of all bodies
    ///
    /// Conserved when only mutual gravity acts
    /// (useful for checking numerical drift)
    pub fn total_momentum(&self) -> Vector2<f64> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector2::zeros(), |acc, p| acc + p)
    }

    pub fn center_of_mass(&self) -> Option<Point2<f64>> {
        let total = self.total_mass();
        if total <= 0.0 {
            return None;
        }
        let weighted = self
            .bodies
            .iter()
            .fold(Vector2::zeros(), |acc, b| acc + b.position.coords * b.mass);
        Some(Point2::from(weighted / total))
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }
}
