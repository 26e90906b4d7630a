// Locomotion tuning - fixed once the controller is built

use thiserror::Error;

/// Ground probe reading below which the actor counts as grounded
pub const GROUND_SNAP_DISTANCE: f32 = 0.2;

/// Maximum range of the downward ground probe
pub const GROUND_PROBE_RANGE: f32 = 2.0;

/// Clearance the probe must report before the fall animation starts
pub const FALL_CLEARANCE: f32 = 0.5;

/// Vertical speed the actor must exceed downward before it counts as falling
pub const FALL_VELOCITY_THRESHOLD: f32 = -0.1;

/// Vertical velocity held while grounded so the capsule stays pressed to the floor
pub const GROUNDED_VERTICAL_VELOCITY: f32 = -2.0;

/// Rejected tuning values
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("gravity must be a finite negative acceleration, got {0}")]
    Gravity(f32),
    #[error("sprint speed must be finite and positive, got {0}")]
    SprintSpeed(f32),
    #[error("{field} must be finite and non-negative, got {value}")]
    NonNegative { field: &'static str, value: f32 },
}

/// Movement tuning for one actor
#[derive(Debug, Clone, PartialEq)]
pub struct LocomotionConfig {
    /// Ground speed at full walking input (units/second)
    pub walk_speed: f32,
    /// Ground speed while the sprint modifier is held (units/second)
    pub sprint_speed: f32,
    /// Slerp rate toward the movement heading (fraction per second)
    pub rotation_speed: f32,
    /// Apex height of a jump (units)
    pub jump_height: f32,
    /// Vertical acceleration, negative is down (units/second²)
    pub gravity: f32,
}

/// Default tuning: a human-scale third-person character
pub const DEFAULT_CONFIG: LocomotionConfig = LocomotionConfig {
    walk_speed: 5.0,
    sprint_speed: 10.0,
    rotation_speed: 10.0,
    jump_height: 1.0,
    gravity: -9.81,
};

impl Default for LocomotionConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

impl LocomotionConfig {
    pub fn with_walk_speed(mut self, walk_speed: f32) -> Self {
        self.walk_speed = walk_speed;
        self
    }

    pub fn with_sprint_speed(mut self, sprint_speed: f32) -> Self {
        self.sprint_speed = sprint_speed;
        self
    }

    pub fn with_rotation_speed(mut self, rotation_speed: f32) -> Self {
        self.rotation_speed = rotation_speed;
        self
    }

    pub fn with_jump_height(mut self, jump_height: f32) -> Self {
        self.jump_height = jump_height;
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Check that every value is usable by the integrator
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravity.is_finite() || self.gravity >= 0.0 {
            return Err(ConfigError::Gravity(self.gravity));
        }
        if !self.sprint_speed.is_finite() || self.sprint_speed <= 0.0 {
            return Err(ConfigError::SprintSpeed(self.sprint_speed));
        }

        let non_negative = [
            ("walk_speed", self.walk_speed),
            ("rotation_speed", self.rotation_speed),
            ("jump_height", self.jump_height),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NonNegative { field, value });
            }
        }

        Ok(())
    }

    /// Initial upward speed that reaches `jump_height` under `gravity`
    pub fn jump_velocity(&self) -> f32 {
        (2.0 * self.jump_height * -self.gravity).sqrt()
    }
}
