//! Per-Tick Input Sample
//!
//! The locomotion core consumes exactly one [`InputSample`] per tick: raw
//! movement and look axes plus the three held buttons. The sample is plain
//! data - it carries no timing and no device knowledge, so tests and scripted
//! simulations can fabricate samples directly.
//!
//! [`InputCollector`] assembles samples for a real host: key state feeds the
//! movement axes and buttons, the look accumulator feeds the look axis.

use glam::Vec2;

use super::keyboard::{KeyCode, MovementKeys};
use super::mouse_state::LookAccumulator;

/// One tick's worth of player input.
///
/// `move_axis` is raw: x = strafe (+right), y = forward (+forward). The core
/// caps its square magnitude at 1, so diagonal key input is not faster than
/// axial. `look_axis` is in raw device units; the core applies sensitivity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    /// Raw movement axes, x = right, y = forward
    pub move_axis: Vec2,
    /// Raw look deltas, x = horizontal, y = vertical
    pub look_axis: Vec2,
    /// Sprint button held
    pub sprint_held: bool,
    /// Crouch button held
    pub crouch_held: bool,
    /// Jump button held
    pub jump_held: bool,
}

impl InputSample {
    /// A sample with no input at all.
    pub fn idle() -> Self {
        Self::default()
    }

    /// A sample holding only a movement direction.
    pub fn moving(move_axis: Vec2) -> Self {
        Self {
            move_axis,
            ..Default::default()
        }
    }

    /// Whether any movement input is present.
    #[inline]
    pub fn has_move_input(&self) -> bool {
        self.move_axis != Vec2::ZERO
    }
}

/// Builds an [`InputSample`] each tick from device-level input state.
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    /// Held key state, fed from the event loop
    pub keys: MovementKeys,
    /// Raw mouse motion, fed from the event loop
    pub look: LookAccumulator,
}

impl InputCollector {
    /// Create a collector with no input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a key event to the key state.
    ///
    /// Returns `true` if the key was a locomotion key.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        self.keys.handle_key(key, pressed)
    }

    /// Forward raw mouse motion to the look accumulator.
    pub fn handle_mouse_delta(&mut self, delta: Vec2) {
        self.look.accumulate(delta);
    }

    /// Assemble the sample for this tick, consuming accumulated mouse motion.
    ///
    /// Call exactly once per tick; the look delta drains on each call.
    pub fn sample(&mut self) -> InputSample {
        InputSample {
            move_axis: Vec2::new(self.keys.right_axis(), self.keys.forward_axis()),
            look_axis: self.look.take(),
            sprint_held: self.keys.sprint_held(),
            crouch_held: self.keys.crouch_held(),
            jump_held: self.keys.jump_held(),
        }
    }

    /// Drop all device state (focus loss, pause).
    pub fn reset(&mut self) {
        self.keys.reset();
        self.look.take();
    }
}
