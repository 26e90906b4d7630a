// Animation parameter output
//
// The controller only pushes named parameters; blend trees and state
// transitions live in whatever animation system implements the sink.

use std::collections::HashMap;

use crate::core::math::clamp01;

use super::config::{FALL_CLEARANCE, FALL_VELOCITY_THRESHOLD};

/// Normalised ground speed, 0 = idle, 1 = full sprint
pub const PARAM_SPEED: &str = "Speed";
/// Raw vertical velocity
pub const PARAM_VERTICAL_SPEED: &str = "VerticalSpeed";
/// Set once a descent is clearly underway, cleared on landing
pub const PARAM_IS_FALLING: &str = "IsFalling";
/// Set on takeoff, cleared on landing
pub const PARAM_IS_JUMPING: &str = "IsJumping";

/// Receiver of animation parameters
pub trait AnimationSink {
    fn set_float(&mut self, name: &str, value: f32);
    fn set_bool(&mut self, name: &str, value: bool);
}

/// A single stored parameter value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterValue {
    Float(f32),
    Bool(bool),
}

/// In-memory parameter table
#[derive(Debug, Default, Clone)]
pub struct AnimatorParameters {
    values: HashMap<String, ParameterValue>,
    writes: u64,
}

impl AnimatorParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a float parameter, if one has been written under `name`
    pub fn float(&self, name: &str) -> Option<f32> {
        match self.values.get(name) {
            Some(ParameterValue::Float(value)) => Some(*value),
            _ => None,
        }
    }

    /// Get a bool parameter, `false` if it was never written
    pub fn bool(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(ParameterValue::Bool(true)))
    }

    /// Total number of parameter writes received
    pub fn write_count(&self) -> u64 {
        self.writes
    }

    /// Number of distinct parameters written so far
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Overwrite in place; the name is only copied on its first write
    fn write(&mut self, name: &str, value: ParameterValue) {
        self.writes += 1;
        match self.values.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.values.insert(name.to_string(), value);
            }
        }
    }
}

impl AnimationSink for AnimatorParameters {
    fn set_float(&mut self, name: &str, value: f32) {
        self.write(name, ParameterValue::Float(value));
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.write(name, ParameterValue::Bool(value));
    }
}

/// Per-frame values the animation parameters are derived from
#[derive(Debug, Clone, Copy)]
pub struct AnimationFrame {
    pub speed: f32,
    pub sprint_speed: f32,
    pub vertical_velocity: f32,
    pub airborne: bool,
    pub probe_distance: f32,
}

impl AnimationFrame {
    /// Airborne, descending past the threshold and well clear of the ground
    pub fn is_falling(&self) -> bool {
        self.airborne
            && self.vertical_velocity < FALL_VELOCITY_THRESHOLD
            && self.probe_distance > FALL_CLEARANCE
    }
}

/// Write the per-frame parameters.
///
/// `IsFalling` is only ever raised here; clearing it belongs to the landing
/// transition, as does clearing `IsJumping`.
pub fn drive<A: AnimationSink + ?Sized>(sink: &mut A, frame: &AnimationFrame) {
    sink.set_float(PARAM_SPEED, clamp01(frame.speed / frame.sprint_speed));
    sink.set_float(PARAM_VERTICAL_SPEED, frame.vertical_velocity);

    if frame.is_falling() {
        sink.set_bool(PARAM_IS_FALLING, true);
    }
}

/// Raise the jump flag on takeoff
pub fn signal_jump<A: AnimationSink + ?Sized>(sink: &mut A) {
    sink.set_bool(PARAM_IS_JUMPING, true);
}

/// Clear the airborne flags on landing
pub fn signal_landing<A: AnimationSink + ?Sized>(sink: &mut A) {
    sink.set_bool(PARAM_IS_FALLING, false);
    sink.set_bool(PARAM_IS_JUMPING, false);
}
