//! Wayfarer Engine Library
//!
//! First-person character locomotion: per-tick input in, orientation and
//! world-space displacement out, with a stamina resource gating sprint.
//!
//! # Modules
//!
//! - [`player`] - the locomotion core, config, stance blending, stamina pool
//! - [`input`] - platform-agnostic input state and the per-tick input sample
//! - [`camera`] - the look output boundary and the first-person camera rig
//! - [`physics`] - the move-and-collide boundary and a flat-world reference mover
//! - [`ui`] - logic-only observers (stamina bar model, pause state)
//!
//! # Example
//!
//! ```ignore
//! use glam::Vec3;
//! use wayfarer_engine::camera::FpsCameraRig;
//! use wayfarer_engine::input::InputCollector;
//! use wayfarer_engine::physics::FlatWorldMover;
//! use wayfarer_engine::player::{LocomotionConfig, LocomotionCore};
//!
//! let mut core = LocomotionCore::new(LocomotionConfig::default());
//! let mut mover = FlatWorldMover::new(Vec3::ZERO);
//! let mut rig = FpsCameraRig::new();
//! let mut collector = InputCollector::new();
//!
//! // Host loop, once per simulation tick:
//! let sample = collector.sample();
//! core.tick(&sample, &mut mover, &mut rig, dt);
//! rig.set_position(mover.position() + Vec3::Y * core.eye_height());
//! ```

pub mod camera;
pub mod input;
pub mod physics;
pub mod player;
pub mod ui;

// Re-export the main entry points at crate level for convenience
pub use camera::{FpsCameraRig, LookSink};
pub use input::{InputCollector, InputSample, KeyCode};
pub use physics::{CollisionMover, FlatWorldMover, MoveOutcome};
pub use player::{LocomotionConfig, LocomotionCore};
