//! Captured-Mouse Look Accumulator
//!
//! Accumulates raw mouse motion between simulation ticks and hands it out as
//! a single look-axis delta. Raw deltas can arrive many times per frame from
//! the OS; the locomotion core wants exactly one axis pair per tick.
//!
//! Deltas only accumulate while the cursor is captured, and releasing capture
//! discards anything pending so the camera never jumps when the cursor comes
//! back.

use glam::Vec2;

/// Accumulates raw mouse deltas into a per-tick look axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct LookAccumulator {
    pending: Vec2,
    captured: bool,
}

impl LookAccumulator {
    /// Create an accumulator with no pending motion and the cursor released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed raw mouse motion from the event loop.
    ///
    /// Motion arriving while the cursor is not captured is dropped - an
    /// uncaptured cursor is pointing at UI, not steering the camera.
    pub fn accumulate(&mut self, delta: Vec2) {
        if self.captured {
            self.pending += delta;
        }
    }

    /// Take the accumulated delta for this tick, resetting it to zero.
    pub fn take(&mut self) -> Vec2 {
        std::mem::take(&mut self.pending)
    }

    /// Pending delta without consuming it.
    #[inline]
    pub fn peek(&self) -> Vec2 {
        self.pending
    }

    /// Set cursor capture. Releasing capture clears pending motion.
    pub fn set_captured(&mut self, captured: bool) {
        self.captured = captured;
        if !captured {
            self.pending = Vec2::ZERO;
        }
    }

    /// Whether the cursor is currently captured.
    #[inline]
    pub fn is_captured(&self) -> bool {
        self.captured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncaptured_motion_dropped() {
        let mut acc = LookAccumulator::new();
        acc.accumulate(Vec2::new(10.0, 5.0));
        assert_eq!(acc.peek(), Vec2::ZERO);
    }

    #[test]
    fn test_accumulates_while_captured() {
        let mut acc = LookAccumulator::new();
        acc.set_captured(true);
        acc.accumulate(Vec2::new(10.0, 5.0));
        acc.accumulate(Vec2::new(3.0, -2.0));
        assert_eq!(acc.peek(), Vec2::new(13.0, 3.0));
    }

    #[test]
    fn test_take_consumes() {
        let mut acc = LookAccumulator::new();
        acc.set_captured(true);
        acc.accumulate(Vec2::new(4.0, -1.0));

        assert_eq!(acc.take(), Vec2::new(4.0, -1.0));
        assert_eq!(acc.take(), Vec2::ZERO);
    }

    #[test]
    fn test_release_clears_pending() {
        let mut acc = LookAccumulator::new();
        acc.set_captured(true);
        acc.accumulate(Vec2::new(100.0, 100.0));

        acc.set_captured(false);
        assert_eq!(acc.peek(), Vec2::ZERO);
        assert!(!acc.is_captured());
    }
}
