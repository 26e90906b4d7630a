// Character locomotion
//
// Kinematic ground movement for a single actor:
// - Ground sensing from the swept-move contact plus a downward probe
// - Input mapping (raw or camera-relative) and speed selection
// - Gravity and jumping on the fixed physics step
// - Smooth turning toward the movement heading
// - Animation parameter output

pub mod animation;
pub mod body;
pub mod config;
pub mod controller;
pub mod direction;
pub mod orientation;
pub mod sensor;
pub mod state;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use animation::{AnimationSink, AnimatorParameters};
pub use body::{CharacterBody, MotionPrimitive, MoveContact, RaycastQuery};
pub use config::{ConfigError, LocomotionConfig};
pub use controller::{FrameReport, LocomotionController};
pub use direction::{CameraBasis, LocomotionInput};
pub use state::{GroundState, GroundTransition};
