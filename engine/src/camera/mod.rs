//! Camera Module
//!
//! The look output boundary of the locomotion system. The core pushes yaw
//! deltas and a clamped pitch through [`LookSink`]; [`FpsCameraRig`] is the
//! standard first-person receiver maintaining the camera basis.

pub mod fps_rig;

pub use fps_rig::{FpsCameraRig, LookSink, NullLookSink};
