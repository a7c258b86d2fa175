//! Stamina Bar Model
//!
//! Display-side state for a stamina bar. Reads the locomotion core's
//! normalized stamina and derives everything a widget needs: fill amount and
//! a faded visibility alpha that hides the bar while stamina is effectively
//! full.
//!
//! Pure logic - no draw calls. A renderer maps `fill` and `alpha` onto
//! whatever widget it owns. The model never writes back into the locomotion
//! state.

/// Normalized stamina at or above this reads as "full" and hides the bar
pub const SHOW_THRESHOLD: f32 = 0.98;

/// Alpha approach rate per second
pub const FADE_SPEED: f32 = 8.0;

/// Fade/fill state for a stamina display.
#[derive(Debug, Clone, Copy)]
pub struct StaminaBarModel {
    fill: f32,
    alpha: f32,
    /// Hide the bar once stamina is back above the show threshold
    pub hide_when_full: bool,
}

impl Default for StaminaBarModel {
    fn default() -> Self {
        Self {
            fill: 1.0,
            // Starts hidden; the first update fades it in if needed
            alpha: 0.0,
            hide_when_full: true,
        }
    }
}

impl StaminaBarModel {
    /// Create a model that hides itself while stamina is full.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model that is always visible.
    pub fn always_visible() -> Self {
        Self {
            hide_when_full: false,
            alpha: 1.0,
            ..Default::default()
        }
    }

    /// Current fill amount, equal to the last observed normalized stamina.
    #[inline]
    pub fn fill(&self) -> f32 {
        self.fill
    }

    /// Current visibility alpha in 0..=1.
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Whether the bar should accept pointer interaction this frame.
    #[inline]
    pub fn visible(&self) -> bool {
        !self.hide_when_full || self.fill < SHOW_THRESHOLD
    }

    /// Observe the current normalized stamina and advance the fade.
    pub fn update(&mut self, stamina_normalized: f32, dt: f32) {
        self.fill = stamina_normalized.clamp(0.0, 1.0);

        let target_alpha = if self.visible() { 1.0 } else { 0.0 };
        let step = FADE_SPEED * dt.max(0.0);
        let diff = target_alpha - self.alpha;
        if diff.abs() <= step {
            self.alpha = target_alpha;
        } else {
            self.alpha += step.copysign(diff);
        }
    }
}
