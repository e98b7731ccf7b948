//! Collision handling for overlapping bodies
//!
//! Two independent passes, run in this order when enabled:
//! 1. Soft repulsion: penalty impulses that push overlapping pairs apart
//! 2. Merging: perfectly inelastic mergers of overlapping pairs

pub mod detection;
pub mod repulsion;
pub mod resolution;

#[cfg(test)]
mod detection_test;

pub use detection::{Contact, check_pair, find_contacts};
pub use repulsion::apply_soft_repulsion;
pub use resolution::{merge_bodies, merge_overlapping};
