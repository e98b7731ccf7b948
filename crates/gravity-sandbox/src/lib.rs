//! Real-time 2D gravitational N-body sandbox engine.
//!
//! A small set of bodies attract each other, optionally pulled by fixed
//! attractors and kinematic orbit attractors. A boundary policy keeps them in
//! the world and optional collision passes repel or merge overlapping bodies.
//! Rendering, camera handling and input widgets live in the embedding
//! front-end; this crate is the physics and state engine behind them.

pub mod attractor;
pub mod body;
pub mod boundary;
pub mod collisions;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod forces;
pub mod input;
pub mod integrator;
pub mod simulation;
pub mod state;
pub mod trail;

pub use error::SimError;
pub use simulation::{RunState, Simulation, TrackTarget};

#[cfg(test)]
mod diagnostics_test;
#[cfg(test)]
mod integrator_test;
#[cfg(test)]
mod state_test;
