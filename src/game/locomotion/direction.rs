// Input-to-direction mapping and speed selection

use glam::Vec3;

use crate::core::math::{clamp, clamp01, flatten_horizontal};

use super::config::LocomotionConfig;

/// Basis vectors of the camera the movement input is relative to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl CameraBasis {
    pub fn new(forward: Vec3, right: Vec3) -> Self {
        Self { forward, right }
    }

    /// Orbit camera basis from yaw (about +Y, 0 looks along +Z) and pitch
    /// (positive looks down), both in radians.
    ///
    /// `right = up × forward`, so at yaw 0 it points along +X and agrees with
    /// the raw mapping used when no camera is bound.
    pub fn from_yaw_pitch(yaw: f32, pitch: f32) -> Self {
        let forward = Vec3::new(
            yaw.sin() * pitch.cos(),
            -pitch.sin(),
            yaw.cos() * pitch.cos(),
        );
        let right = Vec3::new(yaw.cos(), 0.0, -yaw.sin());
        Self { forward, right }
    }
}

/// One frame of locomotion input
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocomotionInput {
    /// Strafe axis in [-1, 1], positive is right
    pub horizontal: f32,
    /// Forward axis in [-1, 1], positive is forward
    pub vertical: f32,
    /// Sprint modifier held
    pub sprint: bool,
    /// Jump went down this frame
    pub jump_pressed: bool,
}

impl LocomotionInput {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
            ..Default::default()
        }
    }

    pub fn sprinting(mut self) -> Self {
        self.sprint = true;
        self
    }

    pub fn jumping(mut self) -> Self {
        self.jump_pressed = true;
        self
    }
}

/// World-space movement direction for the given axes.
///
/// With a camera the axes are relative to its flattened basis, otherwise they
/// map straight to world x (horizontal) and z (vertical). The result is unit
/// length, or zero for zero input.
///
/// Axes outside [-1, 1] are clamped before mixing, so `(5.0, 1.0)` points the
/// same way as `(1.0, 1.0)`.
pub fn movement_direction(horizontal: f32, vertical: f32, camera: Option<&CameraBasis>) -> Vec3 {
    let horizontal = clamp(horizontal, -1.0, 1.0);
    let vertical = clamp(vertical, -1.0, 1.0);

    match camera {
        Some(camera) => {
            let forward = flatten_horizontal(camera.forward);
            let right = flatten_horizontal(camera.right);
            (forward * vertical + right * horizontal).normalize_or_zero()
        }
        None => Vec3::new(horizontal, 0.0, vertical).normalize_or_zero(),
    }
}

/// Ground speed for a movement direction.
///
/// Sprinting with any movement gives the full sprint speed; otherwise walking
/// speed scales with the direction's magnitude clamped to [0, 1].
pub fn select_speed(direction: Vec3, sprint: bool, config: &LocomotionConfig) -> f32 {
    let magnitude = direction.length();
    if sprint && magnitude > 0.0 {
        config.sprint_speed
    } else {
        config.walk_speed * clamp01(magnitude)
    }
}
