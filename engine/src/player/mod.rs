//! Player Module
//!
//! First-person locomotion: the per-tick state core and its supporting
//! pieces.
//!
//! # Components
//!
//! - [`LocomotionCore`] - the single per-tick update owning all movement
//!   state (look, stance, sprint/stamina, jump/gravity)
//! - [`LocomotionConfig`] - immutable per-character tuning, clamped at
//!   construction
//! - [`StanceBlend`] / [`Stance`] - crouch/stand collider shape blending
//! - [`StaminaPool`] - depletable sprint resource with delayed regen

pub mod config;
pub mod locomotion;
pub mod stamina;
pub mod stance;

pub use config::{
    LocomotionConfig, BASE_GRAVITY, CROUCH_MULTIPLIER, FALL_GRAVITY_MULTIPLIER, JUMP_COOLDOWN,
    JUMP_HEIGHT, MAX_STAMINA, MOVE_SPEED, RISE_GRAVITY_MULTIPLIER, SPRINT_MULTIPLIER,
    STAND_HEIGHT,
};
pub use locomotion::LocomotionCore;
pub use stamina::StaminaPool;
pub use stance::{Stance, StanceBlend};
