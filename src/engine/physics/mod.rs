// Collision scene using rapier3d

pub mod body;
mod character;
mod collision;
mod world;

pub use body::{CapsuleShape, ColliderHandle, RigidBodyHandle};
pub use character::{MotorSettings, RapierCharacter};
pub use collision::CollisionGroups;
pub use world::{CollisionWorld, PhysicsError};

use glam::{Quat, Vec3};
use rapier3d::na::{Quaternion, UnitQuaternion};
use rapier3d::prelude::{Real, Vector};

/// Convert a glam vector into rapier's vector type
pub fn to_vector(v: Vec3) -> Vector<Real> {
    Vector::new(v.x, v.y, v.z)
}

/// Convert a rapier vector into glam
pub fn from_vector(v: &Vector<Real>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

/// Convert a glam quaternion into rapier's rotation type
pub fn to_rotation(q: Quat) -> UnitQuaternion<Real> {
    UnitQuaternion::from_quaternion(Quaternion::new(q.w, q.x, q.y, q.z))
}

/// Convert a rapier rotation into glam
pub fn from_rotation(q: &UnitQuaternion<Real>) -> Quat {
    Quat::from_xyzw(q.i, q.j, q.k, q.w)
}
