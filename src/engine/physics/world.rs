use glam::Vec3;
use rapier3d::prelude::*;
use thiserror::Error;

use super::body::{presets, ColliderHandle, RigidBodyHandle};
use super::to_vector;

/// Errors raised while wiring bodies into the collision scene
#[derive(Debug, Error)]
pub enum PhysicsError {
    #[error("rigid body {0:?} is not part of the collision world")]
    UnknownBody(RigidBodyHandle),
}

/// Collision scene queried and swept against by the character.
///
/// There is no solver here: level geometry is static and the character body is
/// kinematic, so positions only change through explicit moves. Every mutation
/// refreshes collider poses and the query pipeline immediately, which keeps
/// raycasts and sweeps consistent between the variable and fixed callbacks.
pub struct CollisionWorld {
    /// Rigid body set
    rigid_body_set: RigidBodySet,

    /// Collider set
    collider_set: ColliderSet,

    /// Query pipeline for raycasts and shape casts
    query_pipeline: QueryPipeline,
}

impl CollisionWorld {
    /// Create an empty collision world
    pub fn new() -> Self {
        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Add a rigid body to the world
    pub fn add_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.rigid_body_set.insert(body)
    }

    /// Add a collider attached to a rigid body
    pub fn add_collider(
        &mut self,
        collider: Collider,
        parent_handle: RigidBodyHandle,
    ) -> ColliderHandle {
        let handle =
            self.collider_set
                .insert_with_parent(collider, parent_handle, &mut self.rigid_body_set);
        self.query_pipeline.update(&self.rigid_body_set, &self.collider_set);
        handle
    }

    /// Add a static box whose top face sits at `top_y`
    pub fn add_level_box(
        &mut self,
        center: Vec3,
        top_y: Real,
        half_extents: [Real; 3],
    ) -> (RigidBodyHandle, ColliderHandle) {
        let (body, collider) = presets::level_box(center.x, top_y, center.z, half_extents);
        let body_handle = self.add_rigid_body(body);
        let collider_handle = self.add_collider(collider, body_handle);
        (body_handle, collider_handle)
    }

    /// Get a reference to a rigid body
    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    /// Get a reference to a collider
    pub fn get_collider(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.collider_set.get(handle)
    }

    /// First collider attached to a body, if any
    pub fn first_collider(&self, body: RigidBodyHandle) -> Result<Option<ColliderHandle>, PhysicsError> {
        self.rigid_body_set
            .get(body)
            .map(|b| b.colliders().first().copied())
            .ok_or(PhysicsError::UnknownBody(body))
    }

    /// Number of colliders in the scene
    pub fn collider_count(&self) -> usize {
        self.collider_set.len()
    }

    /// Cast a ray and return the first hit and its distance
    pub fn raycast(
        &self,
        ray_origin: Vec3,
        ray_dir: Vec3,
        max_toi: Real,
        filter: QueryFilter,
    ) -> Option<(ColliderHandle, Real)> {
        let ray = Ray::new(Point::from(to_vector(ray_origin)), to_vector(ray_dir));
        self.query_pipeline.cast_ray(
            &self.rigid_body_set,
            &self.collider_set,
            &ray,
            max_toi,
            true,
            filter,
        )
    }

    /// Bodies, colliders and queries, borrowed together for shape sweeps
    pub(super) fn query_parts(&self) -> (&RigidBodySet, &ColliderSet, &QueryPipeline) {
        (&self.rigid_body_set, &self.collider_set, &self.query_pipeline)
    }

    /// Replace a body's pose and bring its colliders and the query pipeline up to date
    pub(super) fn set_body_pose(&mut self, handle: RigidBodyHandle, pose: Isometry<Real>) {
        let Some(body) = self.rigid_body_set.get_mut(handle) else {
            return;
        };
        body.set_position(pose, true);

        for collider_handle in body.colliders() {
            if let Some(collider) = self.collider_set.get_mut(*collider_handle) {
                let local = collider
                    .position_wrt_parent()
                    .copied()
                    .unwrap_or_else(Isometry::identity);
                collider.set_position(pose * local);
            }
        }

        self.query_pipeline.update(&self.rigid_body_set, &self.collider_set);
    }
}

impl Default for CollisionWorld {
    fn default() -> Self {
        Self::new()
    }
}
