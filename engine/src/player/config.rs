//! Locomotion Configuration
//!
//! Defines the immutable per-character tuning values for the locomotion core:
//! movement speeds, stance geometry, jump/gravity shaping, stamina pool, and
//! look sensitivity.
//!
//! Invalid values are never rejected. [`LocomotionConfig::normalized`] clamps
//! everything into a usable range at construction time, so the tick path can
//! assume well-formed numbers and carries no error channel.
//!
//! # Example
//!
//! ```rust,ignore
//! use wayfarer_engine::player::LocomotionConfig;
//!
//! // Defaults tuned for a 1.8m character
//! let config = LocomotionConfig::default();
//!
//! // Custom character, cleaned up before use
//! let heavy = LocomotionConfig {
//!     move_speed: 3.5,
//!     jump_height: 0.8,
//!     ..LocomotionConfig::default()
//! }
//! .normalized();
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Base walking speed in units per second
pub const MOVE_SPEED: f32 = 5.0;

/// Sprint speed multiplier applied on top of the base speed
pub const SPRINT_MULTIPLIER: f32 = 1.6;

/// Crouch speed multiplier applied on top of the base speed
pub const CROUCH_MULTIPLIER: f32 = 0.5;

/// Jump apex height in units
pub const JUMP_HEIGHT: f32 = 1.2;

/// Base gravity in units per second squared (negative = down)
pub const BASE_GRAVITY: f32 = -9.81;

/// Gravity scale while moving upward
pub const RISE_GRAVITY_MULTIPLIER: f32 = 2.0;

/// Gravity scale while falling
pub const FALL_GRAVITY_MULTIPLIER: f32 = 2.6;

/// Standing collider height in units
pub const STAND_HEIGHT: f32 = 1.8;

/// Fraction of the standing height used when a crouch height is not configured
pub const CROUCH_HEIGHT_FRACTION: f32 = 0.6;

/// Smallest collider height a crouch may be clamped to
pub const MIN_CROUCH_HEIGHT: f32 = 0.2;

/// Stance height approach rate in units per second (bounded linear)
pub const CROUCH_BLEND_RATE: f32 = 6.0;

/// Stance center smoothing rate per second (exponential)
pub const CENTER_LERP_RATE: f32 = 12.0;

/// Maximum stamina points
pub const MAX_STAMINA: f32 = 100.0;

/// Stamina drained per second while sprinting
pub const STAMINA_DRAIN_RATE: f32 = 20.0;

/// Stamina regenerated per second once the regen delay has elapsed
pub const STAMINA_REGEN_RATE: f32 = 15.0;

/// Seconds after the last sprinting tick before regen begins
pub const STAMINA_REGEN_DELAY: f32 = 1.0;

/// Stamina required (exclusive) for sprint to engage
pub const MIN_STAMINA_TO_SPRINT: f32 = 10.0;

/// Look sensitivity in degrees per raw axis unit
pub const MOUSE_SENSITIVITY: f32 = 2.0;

/// Camera pitch lower bound in degrees
pub const PITCH_MIN: f32 = -80.0;

/// Camera pitch upper bound in degrees
pub const PITCH_MAX: f32 = 80.0;

/// Downward bias applied while grounded, in units per second
pub const GROUND_STICK_VELOCITY: f32 = -2.0;

/// Refractory period after a jump trigger, in seconds
pub const JUMP_COOLDOWN: f32 = 0.55;

/// Pitch bounds are kept strictly inside the poles to avoid gimbal flip
const PITCH_HARD_LIMIT: f32 = 89.9;

/// Denominator floor used when normalizing stamina
const STAMINA_DENOM_EPSILON: f32 = 1e-4;

/// Immutable per-character locomotion tuning.
///
/// All fields are plain numbers so a config can be loaded from JSON, stored in
/// asset data, or built in code. Any instance that did not come from
/// [`LocomotionConfig::default`] should pass through
/// [`LocomotionConfig::normalized`] before it reaches a
/// [`LocomotionCore`](super::LocomotionCore) - the constructor does this
/// automatically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Base walking speed in units per second.
    pub move_speed: f32,

    /// Sprint speed multiplier. Applied instead of (never with) the crouch
    /// multiplier; crouch wins when both would apply.
    pub sprint_multiplier: f32,

    /// Crouch speed multiplier.
    pub crouch_multiplier: f32,

    /// Jump apex height in units. The launch speed is derived as
    /// `sqrt(jump_height * 2 * |base_gravity|)`.
    pub jump_height: f32,

    /// Base gravity in units per second squared. Negative values point down;
    /// positive input is flipped during normalization.
    pub base_gravity: f32,

    /// Gravity scale while vertical velocity is upward (>= 0).
    pub rise_gravity_multiplier: f32,

    /// Gravity scale while vertical velocity is downward.
    pub fall_gravity_multiplier: f32,

    /// Standing collider height in units.
    pub stand_height: f32,

    /// Standing collider center offset from the character origin.
    pub stand_center: Vec3,

    /// Crouching collider height. Zero or negative means "derive from the
    /// standing height" (0.6x, clamped to [0.2, stand_height]).
    pub crouch_height: f32,

    /// Crouching collider center offset. `Vec3::ZERO` means "derive from the
    /// crouch height" (half height on Y, standing X/Z).
    pub crouch_center: Vec3,

    /// Stance height approach rate in units per second.
    pub crouch_blend_rate: f32,

    /// Stance center smoothing rate per second.
    pub center_lerp_rate: f32,

    /// Maximum stamina points.
    pub max_stamina: f32,

    /// Stamina drained per second while sprinting.
    pub stamina_drain_rate: f32,

    /// Stamina regenerated per second after the regen delay.
    pub stamina_regen_rate: f32,

    /// Seconds of not sprinting before regen begins.
    pub stamina_regen_delay: f32,

    /// Stamina that must be exceeded for sprint to engage.
    pub min_stamina_to_sprint: f32,

    /// Look sensitivity in degrees per raw axis unit.
    pub mouse_sensitivity: f32,

    /// Camera pitch lower bound in degrees.
    pub pitch_min: f32,

    /// Camera pitch upper bound in degrees.
    pub pitch_max: f32,

    /// Downward bias applied while grounded (keeps the ground probe seated).
    pub ground_stick_velocity: f32,

    /// Refractory period after a jump trigger, in seconds.
    pub jump_cooldown: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            sprint_multiplier: SPRINT_MULTIPLIER,
            crouch_multiplier: CROUCH_MULTIPLIER,
            jump_height: JUMP_HEIGHT,
            base_gravity: BASE_GRAVITY,
            rise_gravity_multiplier: RISE_GRAVITY_MULTIPLIER,
            fall_gravity_multiplier: FALL_GRAVITY_MULTIPLIER,
            stand_height: STAND_HEIGHT,
            stand_center: Vec3::new(0.0, STAND_HEIGHT * 0.5, 0.0),
            crouch_height: 0.0,
            crouch_center: Vec3::ZERO,
            crouch_blend_rate: CROUCH_BLEND_RATE,
            center_lerp_rate: CENTER_LERP_RATE,
            max_stamina: MAX_STAMINA,
            stamina_drain_rate: STAMINA_DRAIN_RATE,
            stamina_regen_rate: STAMINA_REGEN_RATE,
            stamina_regen_delay: STAMINA_REGEN_DELAY,
            min_stamina_to_sprint: MIN_STAMINA_TO_SPRINT,
            mouse_sensitivity: MOUSE_SENSITIVITY,
            pitch_min: PITCH_MIN,
            pitch_max: PITCH_MAX,
            ground_stick_velocity: GROUND_STICK_VELOCITY,
            jump_cooldown: JUMP_COOLDOWN,
        }
    }
}

impl LocomotionConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config whose standing shape matches an existing collider.
    ///
    /// Used at spawn time so the standing reference is whatever the attached
    /// collider already measures.
    pub fn with_collider_shape(height: f32, center: Vec3) -> Self {
        Self {
            stand_height: height,
            stand_center: center,
            ..Default::default()
        }
    }

    /// Return a copy with every field clamped into a usable range.
    ///
    /// This is the only validation the locomotion system performs. Nothing is
    /// rejected: a negative speed becomes zero, an upward gravity is flipped,
    /// inverted pitch bounds are reordered, an unset crouch height is derived
    /// from the standing height.
    pub fn normalized(&self) -> Self {
        let mut cfg = *self;

        cfg.move_speed = cfg.move_speed.max(0.0);
        cfg.sprint_multiplier = cfg.sprint_multiplier.max(0.0);
        cfg.crouch_multiplier = cfg.crouch_multiplier.max(0.0);
        cfg.jump_height = cfg.jump_height.max(0.0);

        // Gravity always pulls down.
        if cfg.base_gravity > 0.0 {
            cfg.base_gravity = -cfg.base_gravity;
        }
        cfg.rise_gravity_multiplier = cfg.rise_gravity_multiplier.max(0.0);
        cfg.fall_gravity_multiplier = cfg.fall_gravity_multiplier.max(0.0);

        cfg.stand_height = cfg.stand_height.max(MIN_CROUCH_HEIGHT);
        if cfg.crouch_height <= 0.0 {
            cfg.crouch_height = cfg.stand_height * CROUCH_HEIGHT_FRACTION;
        }
        cfg.crouch_height = cfg.crouch_height.clamp(MIN_CROUCH_HEIGHT, cfg.stand_height);
        if cfg.crouch_center == Vec3::ZERO {
            cfg.crouch_center = Vec3::new(
                cfg.stand_center.x,
                cfg.crouch_height * 0.5,
                cfg.stand_center.z,
            );
        }
        cfg.crouch_blend_rate = cfg.crouch_blend_rate.max(0.0);
        cfg.center_lerp_rate = cfg.center_lerp_rate.max(0.0);

        cfg.max_stamina = cfg.max_stamina.max(0.0);
        cfg.stamina_drain_rate = cfg.stamina_drain_rate.max(0.0);
        cfg.stamina_regen_rate = cfg.stamina_regen_rate.max(0.0);
        cfg.stamina_regen_delay = cfg.stamina_regen_delay.max(0.0);
        cfg.min_stamina_to_sprint = cfg.min_stamina_to_sprint.max(0.0);

        cfg.mouse_sensitivity = cfg.mouse_sensitivity.max(0.0);
        let lo = cfg.pitch_min.clamp(-PITCH_HARD_LIMIT, PITCH_HARD_LIMIT);
        let hi = cfg.pitch_max.clamp(-PITCH_HARD_LIMIT, PITCH_HARD_LIMIT);
        cfg.pitch_min = lo.min(hi);
        cfg.pitch_max = lo.max(hi);

        cfg.ground_stick_velocity = cfg.ground_stick_velocity.min(0.0);
        cfg.jump_cooldown = cfg.jump_cooldown.max(0.0);

        cfg
    }

    /// Launch speed for the configured jump apex under the base gravity.
    #[inline]
    pub fn jump_launch_velocity(&self) -> f32 {
        (self.jump_height * 2.0 * self.base_gravity.abs()).sqrt()
    }

    /// Denominator used when normalizing stamina. Floored at a small epsilon
    /// so a zero-capacity pool divides to 0 instead of faulting.
    #[inline]
    pub fn stamina_denominator(&self) -> f32 {
        self.max_stamina.max(STAMINA_DENOM_EPSILON)
    }

    /// The speed multiplier for a tick, chosen by priority crouch > sprint >
    /// neither. The two multipliers are never combined.
    #[inline]
    pub fn speed_multiplier(&self, crouching: bool, sprinting: bool) -> f32 {
        if crouching {
            self.crouch_multiplier
        } else if sprinting {
            self.sprint_multiplier
        } else {
            1.0
        }
    }
}
