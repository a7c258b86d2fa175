//! Locomotion Core
//!
//! The single per-tick update that turns an input sample into orientation and
//! world-space displacement. Owns all locomotion state exclusively; nothing
//! outside [`LocomotionCore::tick`] mutates it.
//!
//! # Tick Pipeline
//!
//! 1. Look: scale the look axis by sensitivity, accumulate yaw, clamp pitch,
//!    emit both to the [`LookSink`].
//! 2. Stance: pick the stand/crouch target from the crouch button and blend
//!    the collider shape toward it.
//! 3. Planar: cap the movement axis at unit square-magnitude, rotate it into
//!    the facing frame, scale by base speed and the one active multiplier
//!    (crouch > sprint > neither).
//! 4. Stamina: drain while the sprint predicate held this tick, otherwise run
//!    the regen cooldown and regenerate.
//! 5. Vertical: decay the jump cooldown, seat the grounded character against
//!    the ground probe, fire a held jump if permitted, integrate asymmetric
//!    gravity.
//! 6. Submit one combined displacement and the blended shape to the
//!    [`CollisionMover`]; adopt its grounded flag and applied shape for the
//!    next tick.
//!
//! Sprinting and crouching are not stored states. Both are re-derived from
//! the input every tick, which keeps the response frame-perfect: a denied
//! affordance (sprint out of stamina, jump in the air, stand under a low
//! ceiling) simply re-evaluates next tick.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wayfarer_engine::camera::FpsCameraRig;
//! use wayfarer_engine::physics::FlatWorldMover;
//! use wayfarer_engine::player::{LocomotionConfig, LocomotionCore};
//! use glam::Vec3;
//!
//! let mut core = LocomotionCore::new(LocomotionConfig::default());
//! let mut mover = FlatWorldMover::new(Vec3::ZERO);
//! let mut rig = FpsCameraRig::new();
//!
//! // Each simulation tick:
//! let sample = collector.sample();
//! let outcome = core.tick(&sample, &mut mover, &mut rig, dt);
//! rig.set_position(mover.position() + Vec3::Y * core.eye_height());
//! ```

use glam::{Vec2, Vec3};

use crate::camera::LookSink;
use crate::input::InputSample;
use crate::physics::{CollisionMover, MoveOutcome};

use super::config::LocomotionConfig;
use super::stamina::StaminaPool;
use super::stance::{Stance, StanceBlend};

/// Eye point as a fraction of the current collider height
const EYE_HEIGHT_FRACTION: f32 = 0.9;

/// First-person locomotion state and its per-tick update.
///
/// Created once when the character spawns and kept for its lifetime. All
/// fields are private; observers read through the accessor surface.
#[derive(Debug, Clone)]
pub struct LocomotionCore {
    config: LocomotionConfig,
    /// Accumulated heading in degrees, unbounded
    yaw: f32,
    /// Camera pitch in degrees, always inside the configured bounds
    pitch: f32,
    /// Signed vertical speed; negative = falling
    vertical_velocity: f32,
    /// Interpolated collider shape
    stance: StanceBlend,
    /// Sprint resource
    stamina: StaminaPool,
    /// Refractory timer blocking jump re-triggers
    jump_cooldown: f32,
    /// Support flag reported by the mover for the previous tick's move
    grounded: bool,
}

impl LocomotionCore {
    /// Create a core from a config. The config is normalized here, so callers
    /// may pass raw values straight from data files.
    pub fn new(config: LocomotionConfig) -> Self {
        let config = config.normalized();
        Self {
            yaw: 0.0,
            pitch: 0.0_f32.clamp(config.pitch_min, config.pitch_max),
            vertical_velocity: 0.0,
            stance: StanceBlend::new(&config),
            stamina: StaminaPool::new(&config),
            jump_cooldown: 0.0,
            grounded: false,
            config,
        }
    }

    /// Create a core whose standing reference shape is taken from the
    /// attached collider's current measurements (spawn-time wiring).
    pub fn with_collider_shape(config: LocomotionConfig, height: f32, center: Vec3) -> Self {
        Self::new(LocomotionConfig {
            stand_height: height,
            stand_center: center,
            // A pre-configured crouch shape for a different stand height is
            // stale; re-derive both from the measured collider.
            crouch_height: 0.0,
            crouch_center: Vec3::ZERO,
            ..config
        })
    }

    /// The normalized config this core runs with.
    #[inline]
    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Accumulated heading in degrees.
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Camera pitch in degrees, inside the configured bounds.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Signed vertical speed; negative = falling.
    #[inline]
    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    /// Whether the previous tick ended resting on a support.
    #[inline]
    pub fn grounded(&self) -> bool {
        self.grounded
    }

    /// Interpolated collider height.
    #[inline]
    pub fn current_height(&self) -> f32 {
        self.stance.height()
    }

    /// Interpolated collider center.
    #[inline]
    pub fn current_center(&self) -> Vec3 {
        self.stance.center()
    }

    /// Eye point above the feet, for camera placement.
    #[inline]
    pub fn eye_height(&self) -> f32 {
        self.stance.height() * EYE_HEIGHT_FRACTION
    }

    /// Current stamina points.
    #[inline]
    pub fn stamina(&self) -> f32 {
        self.stamina.stamina()
    }

    /// Stamina as a 0..=1 fraction (0 for a zero-capacity pool).
    #[inline]
    pub fn stamina_normalized(&self) -> f32 {
        self.stamina.normalized(&self.config)
    }

    /// Seconds left on the jump refractory timer.
    #[inline]
    pub fn jump_cooldown(&self) -> f32 {
        self.jump_cooldown
    }

    /// Run one simulation tick.
    ///
    /// `dt` is the externally supplied delta, clamped to at most 0.1s so a
    /// hitch cannot explode the integration. Returns the mover's outcome so
    /// the host can use the applied displacement directly.
    pub fn tick<M, L>(&mut self, input: &InputSample, mover: &mut M, look: &mut L, dt: f32) -> MoveOutcome
    where
        M: CollisionMover + ?Sized,
        L: LookSink + ?Sized,
    {
        let dt = dt.clamp(0.0, 0.1);

        self.update_look(input.look_axis, look);

        let stance = Stance::from_input(input.crouch_held);
        self.stance.update(stance, &self.config, dt);

        let crouching = input.crouch_held;
        let sprinting = !crouching
            && input.sprint_held
            && input.has_move_input()
            && self.stamina.allows_sprint(&self.config);

        let planar_velocity = self.planar_velocity(input.move_axis, crouching, sprinting);

        self.stamina.update(sprinting, &self.config, dt);

        self.update_vertical(input.jump_held, crouching, dt);

        let displacement = (planar_velocity + Vec3::Y * self.vertical_velocity) * dt;
        let outcome = mover.apply(displacement, self.stance.height(), self.stance.center());

        self.grounded = outcome.grounded;
        self.stance
            .adopt(outcome.actual_height, outcome.actual_center, &self.config);

        outcome
    }

    /// Scale the look axis by sensitivity, accumulate yaw, clamp pitch, and
    /// emit both to the sink. Horizontal delta turns the heading; vertical
    /// delta tilts the camera (positive axis looks down, hence the subtract).
    fn update_look<L: LookSink + ?Sized>(&mut self, look_axis: Vec2, look: &mut L) {
        let yaw_delta = look_axis.x * self.config.mouse_sensitivity;
        let pitch_delta = look_axis.y * self.config.mouse_sensitivity;

        self.yaw += yaw_delta;
        self.pitch =
            (self.pitch - pitch_delta).clamp(self.config.pitch_min, self.config.pitch_max);

        look.apply_yaw_delta(yaw_delta);
        look.set_pitch(self.pitch);
    }

    /// Planar velocity: the raw axis capped at unit square-magnitude (no
    /// diagonal speed boost, analog deflection below 1 preserved), rotated
    /// into the facing frame, scaled by base speed and the active multiplier.
    fn planar_velocity(&self, move_axis: Vec2, crouching: bool, sprinting: bool) -> Vec3 {
        let mut axis = move_axis;
        if axis.length_squared() > 1.0 {
            axis = axis.normalize();
        }

        let yaw_rad = self.yaw.to_radians();
        let forward = Vec3::new(yaw_rad.sin(), 0.0, -yaw_rad.cos());
        let right = Vec3::new(yaw_rad.cos(), 0.0, yaw_rad.sin());

        let speed = self.config.move_speed * self.config.speed_multiplier(crouching, sprinting);
        (forward * axis.y + right * axis.x) * speed
    }

    /// Vertical phase: cooldown decay, grounded settling, held-jump trigger,
    /// asymmetric gravity integration - in that order.
    fn update_vertical(&mut self, jump_held: bool, crouching: bool, dt: f32) {
        if self.jump_cooldown > 0.0 {
            self.jump_cooldown = (self.jump_cooldown - dt).max(0.0);
        }

        // Seat the character against the ground probe instead of zeroing the
        // velocity; exact zero loses contact intermittently on uneven ground.
        if self.grounded && self.vertical_velocity < 0.0 {
            self.vertical_velocity = self.config.ground_stick_velocity;
        }

        // Held trigger, not edge trigger: with the button held through a
        // landing, the jump fires again once grounded and off cooldown.
        if jump_held && self.grounded && !crouching && self.jump_cooldown <= 0.0 {
            self.vertical_velocity = self.config.jump_launch_velocity();
            self.jump_cooldown = self.config.jump_cooldown;
        }

        let gravity_scale = if self.vertical_velocity < 0.0 {
            self.config.fall_gravity_multiplier
        } else {
            self.config.rise_gravity_multiplier
        };
        self.vertical_velocity += self.config.base_gravity * gravity_scale * dt;
    }
}
