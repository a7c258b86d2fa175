//! Move-and-Collide Boundary
//!
//! The locomotion core never integrates a world position itself. Each tick it
//! hands the collision layer a desired displacement plus a desired collider
//! shape, and reads back what was actually applied: the resolved displacement,
//! whether the character ended the move resting on a support, and the shape
//! the collision layer accepted.
//!
//! The shape readback is the important part of the contract. A resize request
//! (un-crouching under a low ceiling) may be clamped, and the clamped height
//! is authoritative - the core blends from it on the next tick. Denial is a
//! plain outcome, not an error.
//!
//! [`FlatWorldMover`] is the reference implementation used by the sim binary
//! and the test suites: an infinite ground plane with an optional flat
//! ceiling. Anything with real geometry supplies its own [`CollisionMover`].

use glam::Vec3;

/// Contact tolerance for the ground probe, in units
const GROUND_EPSILON: f32 = 1e-4;

/// Result of one move-and-collide request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    /// Displacement that was actually applied after collision resolution
    pub applied_displacement: Vec3,
    /// Whether the collider ended the move resting on a supporting surface
    pub grounded: bool,
    /// Collider height the collision layer accepted (may be less than requested)
    pub actual_height: f32,
    /// Collider center the collision layer accepted
    pub actual_center: Vec3,
}

/// Collision collaborator: resolves a desired displacement and collider shape
/// against world geometry.
pub trait CollisionMover {
    /// Attempt to move by `desired_displacement` with the collider resized to
    /// `desired_height`/`desired_center`. Returns what was actually applied.
    fn apply(
        &mut self,
        desired_displacement: Vec3,
        desired_height: f32,
        desired_center: Vec3,
    ) -> MoveOutcome;
}

/// Reference mover: infinite ground plane, optional flat ceiling.
///
/// Tracks the character's foot position. Downward motion is clamped at the
/// ground plane, and resize requests are clamped to the clearance under the
/// ceiling, which is how un-crouching gets denied in a tunnel.
#[derive(Debug, Clone)]
pub struct FlatWorldMover {
    /// Character foot position in world space
    position: Vec3,
    /// Elevation of the ground plane
    ground_elevation: f32,
    /// Elevation of an optional flat ceiling
    ceiling_elevation: Option<f32>,
}

impl FlatWorldMover {
    /// Create a mover with the character's feet at `position`, standing on a
    /// ground plane at that elevation.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ground_elevation: position.y,
            ceiling_elevation: None,
        }
    }

    /// Create a mover with an explicit ground elevation.
    pub fn with_ground(position: Vec3, ground_elevation: f32) -> Self {
        Self {
            position,
            ground_elevation,
            ceiling_elevation: None,
        }
    }

    /// Add or move a flat ceiling at the given elevation.
    pub fn set_ceiling(&mut self, elevation: Option<f32>) {
        self.ceiling_elevation = elevation;
    }

    /// Current foot position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Teleport the character (no collision resolution).
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Vertical clearance from the feet to the ceiling, if one exists.
    fn clearance(&self) -> Option<f32> {
        self.ceiling_elevation.map(|c| (c - self.position.y).max(0.0))
    }
}

impl CollisionMover for FlatWorldMover {
    fn apply(
        &mut self,
        desired_displacement: Vec3,
        desired_height: f32,
        desired_center: Vec3,
    ) -> MoveOutcome {
        let start = self.position;
        let mut end = start + desired_displacement;

        // Clamp penetration at the ground plane.
        if end.y < self.ground_elevation {
            end.y = self.ground_elevation;
        }

        // Grounded means resting on the plane at the end of a non-upward move.
        let grounded =
            end.y <= self.ground_elevation + GROUND_EPSILON && desired_displacement.y <= 0.0;

        self.position = end;

        // Resize requests are honored up to the ceiling clearance. A clamped
        // height re-centers vertically so the collider stays inside the gap.
        let (actual_height, actual_center) = match self.clearance() {
            Some(clearance) if desired_height > clearance => {
                let clamped = clearance.max(0.0);
                (
                    clamped,
                    Vec3::new(desired_center.x, clamped * 0.5, desired_center.z),
                )
            }
            _ => (desired_height, desired_center),
        };

        MoveOutcome {
            applied_displacement: end - start,
            grounded,
            actual_height,
            actual_center,
        }
    }
}
