//! Input Module
//!
//! Platform-agnostic input handling for the locomotion system. Device events
//! land in [`MovementKeys`] and [`LookAccumulator`]; once per tick an
//! [`InputCollector`] condenses them into the [`InputSample`] the locomotion
//! core consumes. [`LocomotionBindings`] maps winit key codes onto the
//! engine's generic keys.
//!
//! # Example
//!
//! ```rust,ignore
//! use glam::Vec2;
//! use wayfarer_engine::input::{InputCollector, KeyCode};
//!
//! let mut collector = InputCollector::new();
//! collector.look.set_captured(true);
//!
//! // Event loop:
//! collector.handle_key(KeyCode::W, true);
//! collector.handle_mouse_delta(Vec2::new(4.0, -1.0));
//!
//! // Once per tick:
//! let sample = collector.sample();
//! ```

pub mod bindings;
pub mod keyboard;
pub mod mouse_state;
pub mod sample;

pub use bindings::LocomotionBindings;
pub use keyboard::{KeyCode, MovementKeys};
pub use mouse_state::LookAccumulator;
pub use sample::{InputCollector, InputSample};
