//! Projectile vs. target collision through the rotating gap ring
//!
//! A shot only counts once the arrow tip enters the target's hit box. At that
//! moment the tip's angle around the ring center decides the outcome: inside
//! an open gap of every active ring pops the target, anything else is a miss.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::ring::{Ring, RotationClock, is_angle_in_gap};
use super::state::{Projectile, Target};
use crate::screen_angle_degrees;

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionOutcome {
    /// Arrow reached the target through an open gap
    Hit,
    /// Arrow reached the target but the ring was in the way
    Miss,
    /// Arrow is not at the target yet
    NoEvent,
}

/// Angle of the projectile tip around the ring center, in [0, 360)
#[inline]
pub fn projectile_angle(center: IVec2, projectile: &Projectile) -> f32 {
    screen_angle_degrees(center, projectile.pos)
}

/// Whether `angle` clears every ring (all rings share the clock's phase)
pub fn passes_rings(angle: f32, rings: &[Ring], clock: &RotationClock) -> bool {
    !rings.is_empty() && rings.iter().all(|ring| is_angle_in_gap(angle, ring, clock))
}

/// Classify the projectile against the target and the active rings.
///
/// Returns `NoEvent` unless the arrow is in flight, the target is visible and
/// the tip lies inside the target's hit box.
pub fn check_collision(
    projectile: &Projectile,
    target: &Target,
    rings: &[Ring],
    clock: &RotationClock,
) -> CollisionOutcome {
    if !projectile.in_flight || !target.visible {
        return CollisionOutcome::NoEvent;
    }
    if !target.bounds_contain(projectile.pos) {
        return CollisionOutcome::NoEvent;
    }

    let Some(outer) = rings.first() else {
        // Nothing blocks the shot
        return CollisionOutcome::Hit;
    };
    let angle = projectile_angle(outer.center, projectile);

    if passes_rings(angle, rings, clock) {
        CollisionOutcome::Hit
    } else {
        CollisionOutcome::Miss
    }
}
