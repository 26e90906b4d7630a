// Player: a locomotion controller bound to a capsule in the collision world

use glam::{Quat, Vec3};
use log::{error, info};
use thiserror::Error;

use crate::engine::physics::{
    CapsuleShape, ColliderHandle, CollisionWorld, MotorSettings, PhysicsError, RapierCharacter,
    RigidBodyHandle,
};
use crate::engine::physics::body::presets;
use crate::game::locomotion::{
    AnimationSink, AnimatorParameters, CameraBasis, ConfigError, FrameReport, LocomotionConfig,
    LocomotionController, LocomotionInput, MotionPrimitive, MoveContact, RaycastQuery,
};

/// Reasons a player cannot be created
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("invalid locomotion config: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Physics(#[from] PhysicsError),
}

impl MotionPrimitive for RapierCharacter<'_> {
    fn move_by(&mut self, displacement: Vec3) -> MoveContact {
        let swept = RapierCharacter::move_by(self, displacement);
        MoveContact {
            grounded: swept.grounded,
        }
    }

    fn position(&self) -> Vec3 {
        RapierCharacter::position(self)
    }

    fn rotation(&self) -> Quat {
        RapierCharacter::rotation(self)
    }

    fn set_rotation(&mut self, rotation: Quat) {
        RapierCharacter::set_rotation(self, rotation)
    }
}

impl RaycastQuery for RapierCharacter<'_> {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<f32> {
        RapierCharacter::raycast(self, origin, direction, max_distance)
    }
}

/// The controlled actor
#[derive(Debug)]
pub struct Player<A: AnimationSink = AnimatorParameters> {
    body: RigidBodyHandle,
    /// `None` when the body has no collision volume; steps are skipped
    collider: Option<ColliderHandle>,
    motor: MotorSettings,
    controller: LocomotionController<A>,
}

impl<A: AnimationSink> Player<A> {
    /// Create the capsule body with its feet at `feet` and bind a controller to it
    pub fn spawn(
        world: &mut CollisionWorld,
        feet: Vec3,
        capsule: CapsuleShape,
        config: LocomotionConfig,
        camera: Option<CameraBasis>,
        animator: Option<A>,
    ) -> Result<Self, PlayerError> {
        let controller = LocomotionController::new(config, camera, animator)?;

        let body = world.add_rigid_body(presets::character_body(feet.x, feet.y, feet.z));
        let collider = world.add_collider(presets::character_collider(capsule), body);
        info!(
            "Spawned player at ({:.2}, {:.2}, {:.2}), capsule {}x{}",
            feet.x, feet.y, feet.z, capsule.height, capsule.radius
        );

        Ok(Self {
            body,
            collider: Some(collider),
            motor: MotorSettings::default(),
            controller,
        })
    }

    /// Bind a controller to an existing body.
    ///
    /// A body without a collider is accepted: the problem is logged once here
    /// and both steps become no-ops.
    pub fn attach(
        world: &CollisionWorld,
        body: RigidBodyHandle,
        config: LocomotionConfig,
        camera: Option<CameraBasis>,
        animator: Option<A>,
    ) -> Result<Self, PlayerError> {
        let controller = LocomotionController::new(config, camera, animator)?;

        let collider = world.first_collider(body)?;
        match collider {
            Some(collider) => info!("Attached player to body {body:?} (collider {collider:?})"),
            None => error!("Body {body:?} has no collider, player movement is disabled"),
        }

        Ok(Self {
            body,
            collider,
            motor: MotorSettings::default(),
            controller,
        })
    }

    pub fn with_motor(mut self, motor: MotorSettings) -> Self {
        self.motor = motor;
        self
    }

    pub fn body(&self) -> RigidBodyHandle {
        self.body
    }

    /// Whether the player can move at all
    pub fn is_movable(&self) -> bool {
        self.collider.is_some()
    }

    pub fn controller(&self) -> &LocomotionController<A> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut LocomotionController<A> {
        &mut self.controller
    }

    /// Feet position in world space
    pub fn position(&self, world: &CollisionWorld) -> Vec3 {
        world
            .get_rigid_body(self.body)
            .map(|body| {
                let t = body.translation();
                Vec3::new(t.x, t.y, t.z)
            })
            .unwrap_or(Vec3::ZERO)
    }

    /// Variable-rate callback. `None` when running without a collider.
    pub fn variable_step(
        &mut self,
        world: &mut CollisionWorld,
        dt: f32,
        input: &LocomotionInput,
    ) -> Option<FrameReport> {
        let collider = self.collider?;
        let mut character = RapierCharacter::new(world, self.body, collider, &self.motor, dt);
        Some(self.controller.advance_variable_step(dt, input, &mut character))
    }

    /// Fixed-rate callback. `None` when running without a collider.
    pub fn fixed_step(&mut self, world: &mut CollisionWorld, fixed_dt: f32) -> Option<MoveContact> {
        let collider = self.collider?;
        let mut character = RapierCharacter::new(world, self.body, collider, &self.motor, fixed_dt);
        Some(self.controller.advance_fixed_step(fixed_dt, &mut character))
    }
}
