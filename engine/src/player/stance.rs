//! Stance Blending
//!
//! Tracks the character's collider shape as it blends between standing and
//! crouching. The stance itself is not a guarded state machine: the target is
//! recomputed every tick straight from the crouch input, and only the shape
//! interpolates.
//!
//! # Blend Model
//!
//! - Height approaches its target with a bounded linear step (reaches the
//!   target in finite time, never overshoots). The collision layer needs a
//!   deterministic height.
//! - Center approaches its target with exponential smoothing (asymptotic,
//!   never exactly arrives). Softer visually, and nothing downstream needs it
//!   to land exactly.
//!
//! The two rates are intentionally different models; do not unify them.
//!
//! # Shape Authority
//!
//! The blended shape is only a request. The collision layer may clamp the
//! applied height (un-crouching under a low ceiling), and the clamped shape
//! becomes this blender's baseline for the next tick via [`StanceBlend::adopt`].

use glam::Vec3;

use super::config::LocomotionConfig;

/// Character posture, derived each tick from the crouch input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stance {
    /// Upright at the standing height
    #[default]
    Standing,
    /// Held-crouch at the crouching height
    Crouching,
}

impl Stance {
    /// Derive the stance for a tick from the crouch input.
    #[inline]
    pub fn from_input(crouch_held: bool) -> Self {
        if crouch_held {
            Stance::Crouching
        } else {
            Stance::Standing
        }
    }

    /// Target collider height for this stance.
    #[inline]
    pub fn target_height(&self, config: &LocomotionConfig) -> f32 {
        match self {
            Stance::Standing => config.stand_height,
            Stance::Crouching => config.crouch_height,
        }
    }

    /// Target collider center for this stance.
    #[inline]
    pub fn target_center(&self, config: &LocomotionConfig) -> Vec3 {
        match self {
            Stance::Standing => config.stand_center,
            Stance::Crouching => config.crouch_center,
        }
    }
}

/// Interpolated collider shape, blended toward the current stance target.
#[derive(Debug, Clone, Copy)]
pub struct StanceBlend {
    current_height: f32,
    current_center: Vec3,
}

impl StanceBlend {
    /// Create a blend starting at the standing reference shape.
    pub fn new(config: &LocomotionConfig) -> Self {
        Self {
            current_height: config.stand_height,
            current_center: config.stand_center,
        }
    }

    /// Current interpolated collider height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.current_height
    }

    /// Current interpolated collider center.
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.current_center
    }

    /// Advance the blend one tick toward the stance target.
    ///
    /// Height takes a bounded linear step of at most
    /// `crouch_blend_rate * dt`; center lerps by `center_lerp_rate * dt`
    /// (capped at 1 so large ticks cannot overshoot).
    pub fn update(&mut self, stance: Stance, config: &LocomotionConfig, dt: f32) {
        let target_height = stance.target_height(config);
        let target_center = stance.target_center(config);

        self.current_height = move_towards(
            self.current_height,
            target_height,
            config.crouch_blend_rate * dt,
        );
        let t = (config.center_lerp_rate * dt).min(1.0);
        self.current_center = self.current_center.lerp(target_center, t);

        self.clamp_height(config);
    }

    /// Adopt the shape the collision layer actually applied.
    ///
    /// Called after every move so a refused resize (not enough clearance to
    /// stand) becomes the baseline the next tick blends from.
    pub fn adopt(&mut self, actual_height: f32, actual_center: Vec3, config: &LocomotionConfig) {
        self.current_height = actual_height;
        self.current_center = actual_center;
        self.clamp_height(config);
    }

    fn clamp_height(&mut self, config: &LocomotionConfig) {
        self.current_height = self
            .current_height
            .clamp(config.crouch_height, config.stand_height);
    }
}

/// Step `current` toward `target` by at most `max_step`, without overshoot.
#[inline]
fn move_towards(current: f32, target: f32, max_step: f32) -> f32 {
    let diff = target - current;
    if diff.abs() <= max_step {
        target
    } else {
        current + max_step.copysign(diff)
    }
}
