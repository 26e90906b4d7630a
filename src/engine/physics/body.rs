use super::collision::CollisionGroups;
use rapier3d::prelude::*;

pub use rapier3d::prelude::{ColliderHandle, RigidBodyHandle};

/// Dimensions of the character capsule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapsuleShape {
    /// Total height from the bottom of the lower cap to the top of the upper cap
    pub height: Real,
    /// Radius of the caps and the cylinder
    pub radius: Real,
}

impl Default for CapsuleShape {
    fn default() -> Self {
        Self {
            height: 2.0,
            radius: 0.5,
        }
    }
}

impl CapsuleShape {
    /// Half-length of the cylindrical segment between the two cap centers
    pub fn half_segment(&self) -> Real {
        (self.height / 2.0 - self.radius).max(0.0)
    }
}

/// Builder for creating rigid bodies with common configurations
pub struct BodyBuilder {
    body_type: RigidBodyType,
    translation: Vector<Real>,
}

impl BodyBuilder {
    /// Create a kinematic body moved explicitly by position (the character)
    pub fn new_kinematic_position_based() -> Self {
        Self {
            body_type: RigidBodyType::KinematicPositionBased,
            translation: Vector::zeros(),
        }
    }

    /// Create a fixed (static) body (level geometry)
    pub fn new_fixed() -> Self {
        Self {
            body_type: RigidBodyType::Fixed,
            translation: Vector::zeros(),
        }
    }

    /// Set the initial position of the body
    pub fn position(mut self, x: Real, y: Real, z: Real) -> Self {
        self.translation = Vector::new(x, y, z);
        self
    }

    /// Build the rigid body
    pub fn build(self) -> RigidBody {
        RigidBodyBuilder::new(self.body_type)
            .translation(self.translation)
            .can_sleep(false)
            .build()
    }
}

/// Builder for creating colliders with common configurations
pub struct ColliderBuilder3D {
    shape: SharedShape,
    offset: Vector<Real>,
    collision_groups: CollisionGroups,
    friction: Real,
}

impl ColliderBuilder3D {
    /// Create a box-shaped collider
    pub fn cuboid(half_x: Real, half_y: Real, half_z: Real) -> Self {
        Self::with_shape(SharedShape::cuboid(half_x, half_y, half_z))
    }

    /// Create an upright capsule whose lowest point sits at the body origin
    pub fn capsule_from_feet(capsule: CapsuleShape) -> Self {
        let half_segment = capsule.half_segment();
        let mut builder = Self::with_shape(SharedShape::capsule_y(half_segment, capsule.radius));
        builder.offset = Vector::new(0.0, half_segment + capsule.radius, 0.0);
        builder
    }

    fn with_shape(shape: SharedShape) -> Self {
        Self {
            shape,
            offset: Vector::zeros(),
            collision_groups: CollisionGroups::Default,
            friction: 0.5,
        }
    }

    /// Set the collision groups for filtering
    pub fn collision_groups(mut self, groups: CollisionGroups) -> Self {
        self.collision_groups = groups;
        self
    }

    /// Set friction coefficient
    pub fn friction(mut self, friction: Real) -> Self {
        self.friction = friction;
        self
    }

    /// Build the collider
    pub fn build(self) -> Collider {
        ColliderBuilder::new(self.shape)
            .translation(self.offset)
            .collision_groups(self.collision_groups.to_interaction_groups())
            .friction(self.friction)
            .build()
    }
}

/// Common body configurations for the locomotion scene
pub mod presets {
    use super::*;

    /// Create the character body (kinematic, origin at the feet)
    pub fn character_body(x: Real, y: Real, z: Real) -> RigidBody {
        BodyBuilder::new_kinematic_position_based()
            .position(x, y, z)
            .build()
    }

    /// Create the character capsule collider
    pub fn character_collider(capsule: CapsuleShape) -> Collider {
        ColliderBuilder3D::capsule_from_feet(capsule)
            .collision_groups(CollisionGroups::Character)
            .friction(0.0)
            .build()
    }

    /// Create a static box whose top face is at `top_y`
    pub fn level_box(
        center_x: Real,
        top_y: Real,
        center_z: Real,
        half_extents: [Real; 3],
    ) -> (RigidBody, Collider) {
        let [hx, hy, hz] = half_extents;
        let body = BodyBuilder::new_fixed()
            .position(center_x, top_y - hy, center_z)
            .build();
        let collider = ColliderBuilder3D::cuboid(hx, hy, hz)
            .collision_groups(CollisionGroups::Level)
            .friction(0.7)
            .build();
        (body, collider)
    }
}
