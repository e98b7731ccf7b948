//! Simulation driver: run state, tick orchestration and runtime edits
//!
//! The [`Simulation`] owns the [`SystemState`] and every policy toggle. The
//! embedding loop calls [`Simulation::step`] once per frame with the frame
//! time, the speed factor and the current viewport zoom. All other mutation
//! happens through `&mut self` methods between ticks.

use std::cmp::Ordering;

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::attractor::{FixedAttractor, OrbitAttractor};
use crate::body::{Body, BodyId};
use crate::boundary::{BoundaryMode, Bounds};
use crate::collisions::{apply_soft_repulsion, merge_overlapping};
use crate::config::{
    MAX_BLACK_HOLE_MASS, MAX_PATH_LENGTH, MIN_BLACK_HOLE_MASS, SimulationConfig, clamp_speed,
};
use crate::diagnostics::Diagnostics;
use crate::error::SimError;
use crate::forces::{FixedAttractorGravity, ForceModel, GravityLaw, MutualGravity};
use crate::input::{BodyInput, build_bodies};
use crate::integrator::{Integrator, SemiImplicitEuler};
use crate::state::SystemState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
    Paused,
}

/// Entity the front-end camera follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackTarget {
    /// Index into the body list
    Body(usize),
    /// Index into the orbit attractor list
    Orbit(usize),
}

/// A complete sandbox session
///
/// # Examples
///
/// ```
/// use gravity_sandbox::config::SimulationConfig;
/// use gravity_sandbox::input::BodyInput;
/// use gravity_sandbox::simulation::{RunState, Simulation};
///
/// let mut sim = Simulation::new(SimulationConfig::default());
/// let size = sim.config().world_size();
/// let rows: Vec<BodyInput> = (0..3).map(|i| BodyInput::default_row(i, size)).collect();
///
/// sim.start(&rows);
/// assert_eq!(sim.run_state(), RunState::Running);
///
/// sim.step(1.0 / 60.0, 1.0, 1.0);
/// assert_eq!(sim.bodies().len(), 3);
/// assert!(sim.diagnostics().kinetic > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    state: SystemState,
    config: SimulationConfig,
    run_state: RunState,
    tracked: Option<TrackTarget>,
    diagnostics: Diagnostics,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            state: SystemState::new(),
            config,
            run_state: RunState::Stopped,
            tracked: None,
            diagnostics: Diagnostics::default(),
        }
    }

    // ---------------------------------------------------------------------
    // Lifecycle
    // ---------------------------------------------------------------------

    /// Builds bodies from the input rows and starts running
    ///
    /// Rows that fail to parse are skipped. Existing bodies are replaced;
    /// attractors are kept. Also unpauses a paused session.
    ///
    /// # Returns
    ///
    /// IDs of the bodies that were created
    pub fn start(&mut self, rows: &[BodyInput]) -> Vec<BodyId> {
        let bodies = build_bodies(rows, self.config.max_bodies);
        self.start_with(bodies)
    }

    /// Starts running with an already validated body set
    pub fn start_with(&mut self, bodies: Vec<Body>) -> Vec<BodyId> {
        self.state.bodies.clear();
        self.state.time = 0.0;
        let ids = bodies.into_iter().map(|b| self.add_body(b)).collect::<Vec<_>>();

        log::info!("simulation started with {} bodies", ids.len());
        self.run_state = RunState::Running;
        self.refresh_diagnostics();
        ids
    }

    pub fn pause(&mut self) {
        if self.run_state == RunState::Running {
            log::info!("simulation paused");
            self.run_state = RunState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.run_state == RunState::Paused {
            log::info!("simulation resumed");
            self.run_state = RunState::Running;
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.run_state {
            RunState::Running => self.pause(),
            RunState::Paused => self.resume(),
            RunState::Stopped => {}
        }
    }

    /// Stops and discards all bodies, attractors and tracking state
    pub fn reset(&mut self) {
        log::info!("simulation reset");
        self.state.clear();
        self.tracked = None;
        self.run_state = RunState::Stopped;
        self.diagnostics = Diagnostics::default();
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    // ---------------------------------------------------------------------
    // Tick
    // ---------------------------------------------------------------------

    /// Advances one frame
    ///
    /// Physics only advances while running and with at least one body.
    /// Diagnostics are refreshed on every call.
    ///
    /// # Arguments
    ///
    /// * `dt` - Wall-clock frame time in seconds
    /// * `speed` - Time-scale factor, clamped to `[0.1, 20.0]`
    /// * `zoom` - Current viewport zoom, used by zoom-follow bounds
    pub fn step(&mut self, dt: f64, speed: f64, zoom: f64) {
        if self.is_running() && !self.state.bodies.is_empty() {
            self.advance(dt, clamp_speed(speed), zoom);
        }
        self.refresh_diagnostics();
    }

    fn advance(&mut self, dt: f64, speed: f64, zoom: f64) {
        let scaled_dt = dt * speed;
        let law = self.gravity_law();
        let bounds = self.bounds();

        // Mutual and orbit-attractor gravity, then the boundary policy
        SemiImplicitEuler.step(&mut self.state, scaled_dt, &MutualGravity::new(law));
        for body in &mut self.state.bodies {
            bounds.apply(body, zoom);
            body.trail.push(body.position);
        }

        if self.config.repulsion {
            apply_soft_repulsion(&mut self.state, self.config.repulsion_strength);
        }
        if self.config.merge {
            let tracked_id = match self.tracked {
                Some(TrackTarget::Body(i)) => self.state.bodies.get(i).map(|b| b.id),
                _ => None,
            };
            let mergers = merge_overlapping(&mut self.state);

            // A tracked body that merged is followed into its merger
            if let Some(id) = tracked_id {
                let id = mergers
                    .iter()
                    .find(|(a, b, _)| *a == id || *b == id)
                    .map_or(id, |&(_, _, merged)| merged);
                self.tracked = self
                    .state
                    .bodies
                    .iter()
                    .position(|b| b.id == id)
                    .map(TrackTarget::Body);
            }
        }

        // Black holes kick the post-collision velocities; the resulting
        // displacement shows up on the next tick
        if !self.state.fixed_attractors.is_empty() {
            let accelerations = FixedAttractorGravity::new(law).accelerations(&self.state);
            SemiImplicitEuler::kick(&mut self.state, &accelerations, dt * speed);
        }

        for orbit in &mut self.state.orbit_attractors {
            orbit.advance(dt * speed);
        }

        debug_assert!(
            self.state.bodies.iter().all(|b| b.mass > 0.0),
            "body mass must stay positive"
        );
    }

    fn refresh_diagnostics(&mut self) {
        self.diagnostics = Diagnostics::compute(&self.state, &self.gravity_law());
    }

    // ---------------------------------------------------------------------
    // Bodies and attractors
    // ---------------------------------------------------------------------

    /// Adds a body with the configured trail capacity
    pub fn add_body(&mut self, mut body: Body) -> BodyId {
        body.trail.set_capacity(self.config.max_path_length);
        self.state.add_body(body)
    }

    /// Removes a body; a tracked body index is shifted or cleared to match
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        let index = self.state.bodies.iter().position(|b| b.id == id)?;

        if let Some(TrackTarget::Body(tracked)) = self.tracked {
            self.tracked = match tracked.cmp(&index) {
                Ordering::Less => self.tracked,
                Ordering::Equal => None,
                Ordering::Greater => Some(TrackTarget::Body(tracked - 1)),
            };
        }

        Some(self.state.bodies.remove(index))
    }

    pub fn add_fixed_attractor(
        &mut self,
        position: Point2<f64>,
        mass: f64,
    ) -> Result<(), SimError> {
        let hole = FixedAttractor::new(position, mass)?;
        log::debug!("fixed attractor placed at ({:.1}, {:.1})", position.x, position.y);
        self.state.fixed_attractors.push(hole);
        Ok(())
    }

    pub fn remove_fixed_attractor(&mut self, index: usize) -> Option<FixedAttractor> {
        (index < self.state.fixed_attractors.len())
            .then(|| self.state.fixed_attractors.remove(index))
    }

    /// Black-hole tool click at a world position
    ///
    /// Removes the first fixed attractor whose pick radius contains `position`,
    /// otherwise places a new one with the configured black-hole mass.
    ///
    /// # Returns
    ///
    /// `true` if an attractor was placed, `false` if one was removed
    pub fn toggle_fixed_attractor_at(&mut self, position: Point2<f64>) -> Result<bool, SimError> {
        if let Some(idx) = self
            .state
            .fixed_attractors
            .iter()
            .position(|hole| hole.contains(position))
        {
            self.state.fixed_attractors.remove(idx);
            log::debug!("fixed attractor {idx} removed");
            return Ok(false);
        }

        self.add_fixed_attractor(position, self.config.black_hole_mass)?;
        Ok(true)
    }

    /// Adds an orbit attractor, returning its index
    pub fn add_orbit_attractor(&mut self, orbit: OrbitAttractor) -> Result<usize, SimError> {
        let limit = self.config.max_orbit_attractors;
        if self.state.orbit_attractors.len() >= limit {
            return Err(SimError::CapacityExceeded {
                kind: "orbit attractors",
                limit,
            });
        }
        self.state.orbit_attractors.push(orbit);
        Ok(self.state.orbit_attractors.len() - 1)
    }

    /// Removes an orbit attractor; tracking is cleared since indices shift
    pub fn remove_orbit_attractor(&mut self, index: usize) -> Option<OrbitAttractor> {
        self.tracked = None;
        (index < self.state.orbit_attractors.len())
            .then(|| self.state.orbit_attractors.remove(index))
    }

    /// Live mass edit; returns whether the value was accepted
    pub fn set_orbit_mass(&mut self, index: usize, mass: f64) -> bool {
        let accepted = self
            .state
            .orbit_attractors
            .get_mut(index)
            .is_some_and(|orbit| orbit.set_mass(mass));
        if !accepted {
            log::debug!("ignored orbit {index} mass {mass}");
        }
        accepted
    }

    /// Live ω edit; zero is ignored and the previous ω kept
    pub fn set_orbit_omega(&mut self, index: usize, omega: f64) -> bool {
        let accepted = self
            .state
            .orbit_attractors
            .get_mut(index)
            .is_some_and(|orbit| orbit.set_omega(omega));
        if !accepted {
            log::debug!("ignored orbit {index} omega {omega}");
        }
        accepted
    }

    // ---------------------------------------------------------------------
    // Policy toggles
    // ---------------------------------------------------------------------

    pub fn set_invert_gravity(&mut self, inverted: bool) {
        self.config.invert_gravity = inverted;
    }

    pub fn set_merge(&mut self, enabled: bool) {
        self.config.merge = enabled;
    }

    pub fn set_repulsion(&mut self, enabled: bool) {
        self.config.repulsion = enabled;
    }

    pub fn set_boundary_mode(&mut self, mode: BoundaryMode) {
        self.config.boundary_mode = mode;
    }

    pub fn cycle_boundary_mode(&mut self) -> BoundaryMode {
        self.config.boundary_mode = self.config.boundary_mode.next();
        log::debug!("boundary mode now {:?}", self.config.boundary_mode);
        self.config.boundary_mode
    }

    pub fn set_zoom_follow(&mut self, enabled: bool) {
        self.config.zoom_follow = enabled;
    }

    /// Sets the trail capacity of every current and future body
    pub fn set_max_path_length(&mut self, length: usize) {
        let length = length.min(MAX_PATH_LENGTH);
        self.config.max_path_length = length;
        for body in &mut self.state.bodies {
            body.trail.set_capacity(length);
        }
    }

    /// Mass for black holes placed from now on
    pub fn set_black_hole_mass(&mut self, mass: f64) {
        if mass.is_finite() {
            self.config.black_hole_mass = mass.clamp(MIN_BLACK_HOLE_MASS, MAX_BLACK_HOLE_MASS);
        }
    }

    // ---------------------------------------------------------------------
    // Tracking
    // ---------------------------------------------------------------------

    /// Toggles camera tracking of `target`
    ///
    /// Starting to track in a walled mode turns zoom-follow on, so the walls
    /// move with the camera instead of trapping the view.
    pub fn track(&mut self, target: TrackTarget) {
        if self.tracked == Some(target) {
            self.tracked = None;
            return;
        }

        self.tracked = Some(target);
        if self.config.boundary_mode.is_constrained() && !self.config.zoom_follow {
            log::debug!("tracking enabled zoom-follow");
            self.config.zoom_follow = true;
        }
    }

    pub fn tracked(&self) -> Option<TrackTarget> {
        self.tracked
    }

    /// Current position of the tracked entity
    ///
    /// Clears the target if it no longer exists.
    pub fn tracked_position(&mut self) -> Option<Point2<f64>> {
        let position = match self.tracked? {
            TrackTarget::Body(i) => self.state.bodies.get(i).map(|b| b.position),
            TrackTarget::Orbit(i) => self.state.orbit_attractors.get(i).map(|o| o.position()),
        };
        if position.is_none() {
            self.tracked = None;
        }
        position
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub fn state(&self) -> &SystemState {
        &self.state
    }

    pub fn bodies(&self) -> &[Body] {
        &self.state.bodies
    }

    pub fn fixed_attractors(&self) -> &[FixedAttractor] {
        &self.state.fixed_attractors
    }

    pub fn orbit_attractors(&self) -> &[OrbitAttractor] {
        &self.state.orbit_attractors
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Diagnostics as of the last `step` or `start`
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn bounds(&self) -> Bounds {
        self.config.bounds()
    }

    pub fn effective_extent(&self, zoom: f64) -> Vector2<f64> {
        self.bounds().extent(zoom)
    }

    /// Drawable trail polylines of a body, split at wrap-around jumps
    pub fn trail_segments(&self, id: BodyId, zoom: f64) -> Vec<Vec<Point2<f64>>> {
        let threshold = self.bounds().jump_threshold(zoom);
        self.state
            .get_body(id)
            .map(|b| b.trail.segments(threshold))
            .unwrap_or_default()
    }

    pub fn gravity_law(&self) -> GravityLaw {
        GravityLaw::new(
            self.config.gravitational_constant,
            self.config.softening,
            self.config.invert_gravity,
        )
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
