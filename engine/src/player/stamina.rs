//! Sprint Stamina Pool
//!
//! Depletable resource that gates the sprint affordance. Drains while
//! sprinting, and regenerates only after a cooldown has elapsed with sprint
//! inactive. The cooldown is re-armed on every sprinting tick, so regen never
//! starts mid-sprint.
//!
//! Whether the character is sprinting is not stored here - it is a per-tick
//! predicate evaluated by the locomotion core. This pool only answers "is
//! there enough stamina" and integrates drain/regen.

use super::config::LocomotionConfig;

/// Drain/regen state for the sprint resource.
#[derive(Debug, Clone, Copy)]
pub struct StaminaPool {
    stamina: f32,
    regen_cooldown: f32,
}

impl StaminaPool {
    /// Create a full pool for the given config.
    pub fn new(config: &LocomotionConfig) -> Self {
        Self {
            stamina: config.max_stamina,
            regen_cooldown: 0.0,
        }
    }

    /// Current stamina points.
    #[inline]
    pub fn stamina(&self) -> f32 {
        self.stamina
    }

    /// Stamina as a 0..=1 fraction of the configured maximum.
    ///
    /// A zero-capacity pool reads 0 (the denominator is epsilon-floored),
    /// never a division fault.
    #[inline]
    pub fn normalized(&self, config: &LocomotionConfig) -> f32 {
        self.stamina / config.stamina_denominator()
    }

    /// Seconds remaining before regen may begin.
    #[inline]
    pub fn regen_cooldown(&self) -> f32 {
        self.regen_cooldown
    }

    /// Whether the pool currently permits sprinting (strictly above the
    /// configured minimum).
    #[inline]
    pub fn allows_sprint(&self, config: &LocomotionConfig) -> bool {
        self.stamina > config.min_stamina_to_sprint
    }

    /// Integrate one tick of drain or regen.
    ///
    /// `sprinting` is the tick's derived sprint predicate. A sprinting tick
    /// drains and re-arms the regen cooldown; a non-sprinting tick first runs
    /// the cooldown down, then regenerates.
    pub fn update(&mut self, sprinting: bool, config: &LocomotionConfig, dt: f32) {
        if sprinting {
            self.stamina = (self.stamina - config.stamina_drain_rate * dt).max(0.0);
            self.regen_cooldown = config.stamina_regen_delay;
        } else if self.regen_cooldown > 0.0 {
            self.regen_cooldown = (self.regen_cooldown - dt).max(0.0);
        } else {
            self.stamina = (self.stamina + config.stamina_regen_rate * dt).min(config.max_stamina);
        }
    }

    /// Refill to maximum and clear the cooldown (respawn).
    pub fn reset(&mut self, config: &LocomotionConfig) {
        self.stamina = config.max_stamina;
        self.regen_cooldown = 0.0;
    }
}
