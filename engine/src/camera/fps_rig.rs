//! First-Person Camera Rig
//!
//! Receives the locomotion core's look output (yaw deltas and a clamped
//! pitch) and maintains the camera transform: position, heading, and the
//! forward/right/up basis used for rendering.
//!
//! The rig never clamps or smooths on its own - the locomotion core owns the
//! pitch bounds and the sensitivity scaling, and this rig applies whatever it
//! is handed. Mouse response is instant, with no interpolation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wayfarer_engine::camera::FpsCameraRig;
//!
//! let mut rig = FpsCameraRig::new();
//!
//! // Each tick the locomotion core drives the rig through LookSink:
//! core.tick(&input, &mut mover, &mut rig, dt);
//!
//! // Rendering reads the basis:
//! let forward = rig.forward();
//! let right = rig.right();
//! ```

use glam::Vec3;

/// Receiver for the locomotion core's look output.
///
/// Yaw arrives as per-tick deltas (the heading is unbounded and wraps through
/// rotation composition); pitch arrives absolute and already clamped. Both are
/// in degrees. Implementations apply rotation only - no roll, and no coupling
/// between the two axes.
pub trait LookSink {
    /// Rotate the facing about the vertical axis by `delta_degrees`.
    fn apply_yaw_delta(&mut self, delta_degrees: f32);

    /// Set the camera pivot's pitch about the lateral axis, in degrees.
    fn set_pitch(&mut self, pitch_degrees: f32);
}

/// A [`LookSink`] that ignores everything. For tests and headless hosts that
/// do not render.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLookSink;

impl LookSink for NullLookSink {
    fn apply_yaw_delta(&mut self, _delta_degrees: f32) {}
    fn set_pitch(&mut self, _pitch_degrees: f32) {}
}

/// First-person camera transform driven by the locomotion core.
#[derive(Debug, Clone)]
pub struct FpsCameraRig {
    /// Camera pivot position in world space
    pub position: Vec3,
    /// Accumulated heading in radians - unrestricted, wraps around
    yaw: f32,
    /// Pitch in radians - pre-clamped by the locomotion core
    pitch: f32,
}

impl Default for FpsCameraRig {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl FpsCameraRig {
    /// Create a rig at the origin looking toward -Z.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rig with a custom pivot position.
    pub fn with_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Current heading in radians.
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in radians.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Move the camera pivot (e.g. to follow the character's eye point).
    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// View direction derived from yaw and pitch. Normalized.
    ///
    /// Coordinate convention matches the rest of the crate: +X right, +Y up,
    /// -Z forward at yaw 0.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Right direction, horizontal. Normalized.
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    /// Up direction, perpendicular to forward and right. Normalized.
    #[inline]
    pub fn up(&self) -> Vec3 {
        let forward = self.forward();
        self.right().cross(forward).normalize()
    }

    /// Reset orientation to yaw 0, pitch 0 (looking toward -Z).
    pub fn reset_orientation(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }
}

impl LookSink for FpsCameraRig {
    fn apply_yaw_delta(&mut self, delta_degrees: f32) {
        self.yaw += delta_degrees.to_radians();
    }

    fn set_pitch(&mut self, pitch_degrees: f32) {
        self.pitch = pitch_degrees.to_radians();
    }
}
