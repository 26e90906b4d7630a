use glam::{Quat, Vec3};
use rapier3d::control::{CharacterAutostep, CharacterLength, KinematicCharacterController};
use rapier3d::prelude::*;

use super::body::{ColliderHandle, RigidBodyHandle};
use super::collision::CollisionGroups;
use super::world::CollisionWorld;
use super::{from_rotation, from_vector, to_rotation, to_vector};

/// Tuning of the swept capsule move
#[derive(Debug, Clone, Copy)]
pub struct MotorSettings {
    /// Gap kept between the capsule and obstacles
    pub skin_offset: Real,
    /// Steepest slope the character can walk up (radians)
    pub max_slope_climb_angle: Real,
    /// Slopes steeper than this make the character slide (radians)
    pub min_slope_slide_angle: Real,
    /// Highest step climbed automatically, `None` disables stepping
    pub step_offset: Option<Real>,
}

impl Default for MotorSettings {
    fn default() -> Self {
        Self {
            skin_offset: 0.01,
            max_slope_climb_angle: 45.0_f32.to_radians(),
            min_slope_slide_angle: 30.0_f32.to_radians(),
            step_offset: Some(0.3),
        }
    }
}

impl MotorSettings {
    fn controller(&self) -> KinematicCharacterController {
        KinematicCharacterController {
            offset: CharacterLength::Absolute(self.skin_offset),
            slide: true,
            max_slope_climb_angle: self.max_slope_climb_angle,
            min_slope_slide_angle: self.min_slope_slide_angle,
            autostep: self.step_offset.map(|height| CharacterAutostep {
                max_height: CharacterLength::Absolute(height),
                min_width: CharacterLength::Absolute(0.2),
                include_dynamic_bodies: false,
            }),
            // Ground contact is maintained by the controller's downward velocity
            snap_to_ground: None,
            ..Default::default()
        }
    }
}

/// Outcome of one swept move
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SweptMove {
    /// Translation actually applied after collision resolution
    pub translation: Vec3,
    /// Whether the capsule base rests on a walkable surface after the move
    pub grounded: bool,
}

/// A kinematic capsule in the collision world, borrowed for one callback
pub struct RapierCharacter<'w> {
    world: &'w mut CollisionWorld,
    body: RigidBodyHandle,
    collider: ColliderHandle,
    controller: KinematicCharacterController,
    dt: Real,
}

impl<'w> RapierCharacter<'w> {
    pub fn new(
        world: &'w mut CollisionWorld,
        body: RigidBodyHandle,
        collider: ColliderHandle,
        settings: &MotorSettings,
        dt: Real,
    ) -> Self {
        Self {
            world,
            body,
            collider,
            controller: settings.controller(),
            dt,
        }
    }

    fn query_filter(&self) -> QueryFilter<'static> {
        QueryFilter::default()
            .exclude_sensors()
            .exclude_rigid_body(self.body)
            .groups(CollisionGroups::character_query())
    }

    /// Sweep the capsule by `displacement`, stopping or sliding at contacts
    pub fn move_by(&mut self, displacement: Vec3) -> SweptMove {
        let filter = self.query_filter();

        let resolved = {
            let (bodies, colliders, queries) = self.world.query_parts();
            let (Some(body), Some(collider)) = (bodies.get(self.body), colliders.get(self.collider))
            else {
                return SweptMove::default();
            };

            let movement = self.controller.move_shape(
                self.dt,
                bodies,
                colliders,
                queries,
                collider.shape(),
                collider.position(),
                to_vector(displacement),
                filter,
                |_| {},
            );

            let translation = body.translation() + movement.translation;
            let pose = Isometry::from_parts(translation.into(), *body.rotation());
            (movement, pose)
        };

        let (movement, pose) = resolved;
        self.world.set_body_pose(self.body, pose);

        SweptMove {
            translation: from_vector(&movement.translation),
            grounded: movement.grounded,
        }
    }

    /// Distance to the first surface hit by a ray, ignoring the character itself
    pub fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: Real) -> Option<Real> {
        self.world
            .raycast(origin, direction, max_distance, self.query_filter())
            .map(|(_, distance)| distance)
    }

    /// Position of the body origin (the capsule's feet)
    pub fn position(&self) -> Vec3 {
        self.world
            .get_rigid_body(self.body)
            .map(|body| from_vector(body.translation()))
            .unwrap_or(Vec3::ZERO)
    }

    pub fn rotation(&self) -> Quat {
        self.world
            .get_rigid_body(self.body)
            .map(|body| from_rotation(body.rotation()))
            .unwrap_or(Quat::IDENTITY)
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        let Some(body) = self.world.get_rigid_body(self.body) else {
            return;
        };
        let pose = Isometry::from_parts((*body.translation()).into(), to_rotation(rotation));
        self.world.set_body_pose(self.body, pose);
    }
}
