//! Physics Module
//!
//! The move-and-collide boundary the locomotion core delegates to. The core
//! submits a desired displacement plus collider shape each tick and reads
//! back what the collision layer actually applied.
//!
//! # Submodules
//!
//! - [`mover`] - the [`CollisionMover`] contract, its [`MoveOutcome`], and
//!   the flat-world reference implementation

pub mod mover;

pub use mover::{CollisionMover, FlatWorldMover, MoveOutcome};
