// Math utilities and helper functions

use glam::{Mat3, Quat, Vec3};

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamp a value into the unit interval
pub fn clamp01(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Project a vector onto the horizontal (XZ) plane and renormalize it.
/// Returns zero when the vector is (nearly) vertical.
pub fn flatten_horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z).normalize_or_zero()
}

/// Rotation whose local +Z axis points along `forward`, using `up` as the
/// vertical reference. Returns `None` if `forward` is zero or parallel to `up`.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Option<Quat> {
    let z = forward.normalize_or_zero();
    if z == Vec3::ZERO {
        return None;
    }

    let x = up.cross(z).normalize_or_zero();
    if x == Vec3::ZERO {
        return None;
    }
    let y = z.cross(x);

    Some(Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize())
}

/// Heading (yaw about +Y) of a rotation in radians, measured from +Z toward +X
pub fn heading(rotation: Quat) -> f32 {
    let forward = rotation * Vec3::Z;
    forward.x.atan2(forward.z)
}

/// Smallest absolute difference between two angles, in radians [0, PI]
pub fn angle_delta(a: f32, b: f32) -> f32 {
    let diff = (b - a).rem_euclid(std::f32::consts::TAU);
    if diff > std::f32::consts::PI {
        std::f32::consts::TAU - diff
    } else {
        diff
    }
}
