// Capabilities the controller needs from the host's collision system

use glam::{Quat, Vec3};

/// Contact report of a swept move
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveContact {
    /// The capsule base rests on a surface after the move
    pub grounded: bool,
}

/// Collision-aware displacement of the actor plus access to its transform.
///
/// The controller never writes position components directly; translation only
/// changes through `move_by`.
pub trait MotionPrimitive {
    /// Sweep the actor by `displacement` and report the resulting contact
    fn move_by(&mut self, displacement: Vec3) -> MoveContact;

    /// Actor origin in world space, used as the ground probe origin
    fn position(&self) -> Vec3;

    fn rotation(&self) -> Quat;

    fn set_rotation(&mut self, rotation: Quat);
}

/// Ray query against the world collision scene
pub trait RaycastQuery {
    /// Distance to the first hit within `max_distance`, if any
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<f32>;
}

/// Everything the controller drives during one callback
pub trait CharacterBody: MotionPrimitive + RaycastQuery {}

impl<T: MotionPrimitive + RaycastQuery + ?Sized> CharacterBody for T {}
