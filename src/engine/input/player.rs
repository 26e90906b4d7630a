// Player input state: held actions, press edges and smoothed axes

use super::action::Action;
use super::axis::{AxisSmoothing, SmoothedAxis};
use crate::game::locomotion::LocomotionInput;
use std::collections::{HashMap, HashSet};
use winit::keyboard::KeyCode;

/// Input state for the controlled actor
#[derive(Debug)]
pub struct PlayerInput {
    /// Keys currently holding each action; an action is held while any of its keys is down
    pressed: HashMap<Action, HashSet<KeyCode>>,

    /// Actions that went down this frame
    just_pressed: HashSet<Action>,

    /// Actions that went up this frame
    just_released: HashSet<Action>,

    horizontal: SmoothedAxis,
    vertical: SmoothedAxis,
}

impl PlayerInput {
    pub fn new(smoothing: AxisSmoothing) -> Self {
        Self {
            pressed: HashMap::new(),
            just_pressed: HashSet::new(),
            just_released: HashSet::new(),
            horizontal: SmoothedAxis::new(smoothing),
            vertical: SmoothedAxis::new(smoothing),
        }
    }

    /// Check if an action is currently held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.get(&action).is_some_and(|keys| !keys.is_empty())
    }

    /// Check if an action went down this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action went up this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register `key` going down for `action`. Only the first held key is an edge.
    pub(crate) fn press(&mut self, action: Action, key: KeyCode) {
        let keys = self.pressed.entry(action).or_default();
        let was_held = !keys.is_empty();
        if keys.insert(key) && !was_held {
            self.just_pressed.insert(action);
        }
    }

    /// Register `key` going up. The action is released with its last key.
    pub(crate) fn release(&mut self, action: Action, key: KeyCode) {
        let Some(keys) = self.pressed.get_mut(&action) else {
            return;
        };
        if keys.remove(&key) && keys.is_empty() {
            self.pressed.remove(&action);
            self.just_released.insert(action);
        }
    }

    /// Digital axis targets from the held movement keys, (horizontal, vertical)
    pub fn raw_direction(&self) -> (f32, f32) {
        let axis = |negative: Action, positive: Action| {
            let mut value = 0.0;
            if self.is_pressed(negative) {
                value -= 1.0;
            }
            if self.is_pressed(positive) {
                value += 1.0;
            }
            value
        };

        (
            axis(Action::MoveLeft, Action::MoveRight),
            axis(Action::MoveBackward, Action::MoveForward),
        )
    }

    /// Advance the smoothed axes by `dt`. Call once per frame after events.
    pub fn smooth_axes(&mut self, dt: f32) {
        let (horizontal, vertical) = self.raw_direction();
        self.horizontal.update(horizontal, dt);
        self.vertical.update(vertical, dt);
    }

    /// Smoothed axes, (horizontal, vertical)
    pub fn direction(&self) -> (f32, f32) {
        (self.horizontal.value(), self.vertical.value())
    }

    /// Snapshot consumed by the locomotion controller this frame
    pub fn locomotion_input(&self) -> LocomotionInput {
        let (horizontal, vertical) = self.direction();
        LocomotionInput {
            horizontal,
            vertical,
            sprint: self.is_pressed(Action::Sprint),
            jump_pressed: self.just_pressed(Action::Jump),
        }
    }

    /// Clear per-frame edges. Call once at the end of each frame.
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Drop all held keys, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
        self.horizontal.reset();
        self.vertical.reset();
    }
}

impl Default for PlayerInput {
    fn default() -> Self {
        Self::new(AxisSmoothing::default())
    }
}
