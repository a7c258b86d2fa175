//! Keyboard Input State
//!
//! Tracks held movement keys with generic key codes, decoupled from the
//! windowing system. The locomotion core never sees keys - it consumes an
//! [`InputSample`](super::InputSample) assembled from this state once per
//! tick.

/// Generic key codes for locomotion input, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,

    // Non-movement keys the host may care about
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Held state of the locomotion keys.
///
/// Keys stay set while held so continuous movement works without key-repeat
/// events. Sprint and crouch each have two alternate bindings (left/right
/// modifier); either one held is sufficient.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementKeys {
    /// W - move forward
    pub forward: bool,
    /// S - move backward
    pub backward: bool,
    /// A - strafe left
    pub left: bool,
    /// D - strafe right
    pub right: bool,
    /// Space - jump (held semantics; the core applies its own cooldown)
    pub jump: bool,
    /// Left Shift - sprint
    pub sprint_left: bool,
    /// Right Shift - sprint
    pub sprint_right: bool,
    /// Left Ctrl - crouch
    pub crouch_left: bool,
    /// Right Ctrl - crouch
    pub crouch_right: bool,
}

impl MovementKeys {
    /// Create a state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update state from a key press/release.
    ///
    /// Returns `true` if the key was a locomotion key and was handled.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W => {
                self.forward = pressed;
                true
            }
            KeyCode::S => {
                self.backward = pressed;
                true
            }
            KeyCode::A => {
                self.left = pressed;
                true
            }
            KeyCode::D => {
                self.right = pressed;
                true
            }
            KeyCode::Space => {
                self.jump = pressed;
                true
            }
            KeyCode::ShiftLeft => {
                self.sprint_left = pressed;
                true
            }
            KeyCode::ShiftRight => {
                self.sprint_right = pressed;
                true
            }
            KeyCode::ControlLeft => {
                self.crouch_left = pressed;
                true
            }
            KeyCode::ControlRight => {
                self.crouch_right = pressed;
                true
            }
            _ => false,
        }
    }

    /// Forward/backward axis (-1, 0, or 1). Opposing keys cancel.
    #[inline]
    pub fn forward_axis(&self) -> f32 {
        (self.forward as i32 - self.backward as i32) as f32
    }

    /// Left/right axis (-1, 0, or 1). Opposing keys cancel.
    #[inline]
    pub fn right_axis(&self) -> f32 {
        (self.right as i32 - self.left as i32) as f32
    }

    /// Whether any directional key is held.
    #[inline]
    pub fn has_move_input(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Whether either sprint binding is held.
    #[inline]
    pub fn sprint_held(&self) -> bool {
        self.sprint_left || self.sprint_right
    }

    /// Whether either crouch binding is held.
    #[inline]
    pub fn crouch_held(&self) -> bool {
        self.crouch_left || self.crouch_right
    }

    /// Whether the jump key is held.
    #[inline]
    pub fn jump_held(&self) -> bool {
        self.jump
    }

    /// Release all keys (e.g. on focus loss).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
