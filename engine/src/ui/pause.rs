//! Pause State
//!
//! Pause/resume for the simulation loop. Pausing scales global time flow to
//! zero and remembers the previous scale, so a host running slow-motion
//! resumes at its own rate rather than 1.0. Also tracks the cursor capture
//! intent: paused gameplay releases the cursor for menu interaction.
//!
//! Pure logic - the host applies `scaled_dt` to its tick and the capture
//! intent to its window.

/// Pause toggle with time-scale save/restore.
#[derive(Debug, Clone, Copy)]
pub struct PauseState {
    paused: bool,
    time_scale: f32,
    previous_time_scale: f32,
}

impl Default for PauseState {
    fn default() -> Self {
        Self {
            paused: false,
            time_scale: 1.0,
            previous_time_scale: 1.0,
        }
    }
}

impl PauseState {
    /// Create an unpaused state at normal speed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the game is currently paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Current global time scale (0 while paused).
    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Scale a frame delta by the current time flow.
    #[inline]
    pub fn scaled_dt(&self, dt: f32) -> f32 {
        dt * self.time_scale
    }

    /// Whether the cursor should be captured for gameplay right now.
    #[inline]
    pub fn wants_cursor_captured(&self) -> bool {
        !self.paused
    }

    /// Set a gameplay time scale (slow motion etc.). Applied immediately when
    /// unpaused, otherwise stored for resume.
    pub fn set_time_scale(&mut self, scale: f32) {
        let scale = scale.max(0.0);
        if self.paused {
            self.previous_time_scale = scale;
        } else {
            self.time_scale = scale;
        }
    }

    /// Pause, remembering the current time scale. Idempotent.
    pub fn pause(&mut self) {
        if self.paused {
            return;
        }
        self.paused = true;
        self.previous_time_scale = self.time_scale;
        self.time_scale = 0.0;
    }

    /// Resume at the time scale that was active before pausing. Idempotent.
    pub fn resume(&mut self) {
        if !self.paused {
            return;
        }
        self.paused = false;
        self.time_scale = self.previous_time_scale;
    }

    /// Flip between paused and resumed.
    pub fn toggle(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}
