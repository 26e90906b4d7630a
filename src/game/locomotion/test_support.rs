// Analytic stand-in for the collision scene: an infinite floor at y = 0

use glam::{Quat, Vec3};

use super::body::{MotionPrimitive, MoveContact, RaycastQuery};

#[derive(Debug, Clone)]
pub struct FlatGround {
    pub position: Vec3,
    pub rotation: Quat,
    /// Floor height, `None` for a bottomless void
    pub floor: Option<f32>,
    /// Every displacement requested through `move_by`
    pub moves: Vec<Vec3>,
}

impl FlatGround {
    /// Actor standing `height` above a floor at y = 0
    pub fn at_height(height: f32) -> Self {
        Self {
            position: Vec3::new(0.0, height, 0.0),
            rotation: Quat::IDENTITY,
            floor: Some(0.0),
            moves: Vec::new(),
        }
    }

    /// Actor with nothing below it
    pub fn bottomless(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            floor: None,
            moves: Vec::new(),
        }
    }

    pub fn height(&self) -> f32 {
        self.position.y - self.floor.unwrap_or(0.0)
    }
}

impl MotionPrimitive for FlatGround {
    fn move_by(&mut self, displacement: Vec3) -> MoveContact {
        self.moves.push(displacement);
        let mut next = self.position + displacement;

        let grounded = match self.floor {
            Some(floor) if next.y <= floor + 1e-4 => {
                next.y = next.y.max(floor);
                true
            }
            _ => false,
        };

        self.position = next;
        MoveContact { grounded }
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}

impl RaycastQuery for FlatGround {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<f32> {
        let floor = self.floor?;
        if direction.y >= 0.0 {
            return None;
        }

        let distance = (origin.y - floor) / -direction.y;
        (0.0..=max_distance).contains(&distance).then_some(distance)
    }
}
