//! Input Bindings
//!
//! Maps winit key codes to the engine's generic locomotion keys as a data
//! structure, so hosts can remap keys without touching the event-loop match
//! arms. `LocomotionBindings::default()` is the standard WASD layout.

use winit::keyboard::KeyCode as WinitKey;

use super::keyboard::KeyCode;

/// Movement key bindings (WASD + jump + two sprint/crouch modifiers each).
#[derive(Clone, Debug)]
pub struct LocomotionBindings {
    pub forward: WinitKey,
    pub backward: WinitKey,
    pub left: WinitKey,
    pub right: WinitKey,
    pub jump: WinitKey,
    pub sprint_left: WinitKey,
    pub sprint_right: WinitKey,
    pub crouch_left: WinitKey,
    pub crouch_right: WinitKey,
}

impl Default for LocomotionBindings {
    fn default() -> Self {
        Self {
            forward: WinitKey::KeyW,
            backward: WinitKey::KeyS,
            left: WinitKey::KeyA,
            right: WinitKey::KeyD,
            jump: WinitKey::Space,
            sprint_left: WinitKey::ShiftLeft,
            sprint_right: WinitKey::ShiftRight,
            crouch_left: WinitKey::ControlLeft,
            crouch_right: WinitKey::ControlRight,
        }
    }
}

impl LocomotionBindings {
    /// Create the default WASD layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a winit key to the engine key it is bound to.
    ///
    /// Returns [`KeyCode::Unknown`] for keys with no locomotion binding.
    pub fn translate(&self, key: WinitKey) -> KeyCode {
        if key == self.forward {
            KeyCode::W
        } else if key == self.backward {
            KeyCode::S
        } else if key == self.left {
            KeyCode::A
        } else if key == self.right {
            KeyCode::D
        } else if key == self.jump {
            KeyCode::Space
        } else if key == self.sprint_left {
            KeyCode::ShiftLeft
        } else if key == self.sprint_right {
            KeyCode::ShiftRight
        } else if key == self.crouch_left {
            KeyCode::ControlLeft
        } else if key == self.crouch_right {
            KeyCode::ControlRight
        } else if key == WinitKey::Escape {
            KeyCode::Escape
        } else {
            KeyCode::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let bindings = LocomotionBindings::default();
        assert_eq!(bindings.translate(WinitKey::KeyW), KeyCode::W);
        assert_eq!(bindings.translate(WinitKey::Space), KeyCode::Space);
        assert_eq!(bindings.translate(WinitKey::ShiftRight), KeyCode::ShiftRight);
        assert_eq!(bindings.translate(WinitKey::ControlLeft), KeyCode::ControlLeft);
    }

    #[test]
    fn test_unbound_key() {
        let bindings = LocomotionBindings::default();
        assert_eq!(bindings.translate(WinitKey::KeyZ), KeyCode::Unknown);
    }

    #[test]
    fn test_remapped_forward() {
        let bindings = LocomotionBindings {
            forward: WinitKey::ArrowUp,
            ..Default::default()
        };
        assert_eq!(bindings.translate(WinitKey::ArrowUp), KeyCode::W);
        // The old key no longer maps to forward
        assert_eq!(bindings.translate(WinitKey::KeyW), KeyCode::Unknown);
    }
}
