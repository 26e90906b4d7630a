// Smooth turning toward the movement direction

use glam::{Quat, Vec3};

use crate::core::math::{clamp01, look_rotation};

/// Rotation after one frame of turning toward `direction`.
///
/// Interpolates a fraction `rotation_speed * dt` (clamped to 1) of the way
/// to the facing rotation, so alignment is approached exponentially and only
/// snaps when that fraction reaches 1. Zero direction keeps `current`.
pub fn turn_toward(current: Quat, direction: Vec3, rotation_speed: f32, dt: f32) -> Quat {
    if direction == Vec3::ZERO {
        return current;
    }

    let Some(target) = look_rotation(direction, Vec3::Y) else {
        return current;
    };

    current.slerp(target, clamp01(rotation_speed * dt)).normalize()
}
