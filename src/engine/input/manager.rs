// Input manager - routes winit keyboard events to the player input state

use super::action::Action;
use super::config::{default_input_bindings, InputBindings};
use super::player::PlayerInput;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Keyboard bindings plus the input state they feed
#[derive(Debug)]
pub struct InputManager {
    bindings: InputBindings,
    player: PlayerInput,
}

impl InputManager {
    pub fn new(bindings: InputBindings, player: PlayerInput) -> Self {
        Self { bindings, player }
    }

    /// Default layout and axis smoothing
    pub fn with_default_bindings() -> Self {
        Self::new(default_input_bindings(), PlayerInput::default())
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only physical keys are bound
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.handle_key(key_code, event.state, event.repeat);
        }
    }

    /// Apply one key transition. Returns the bound action, if any.
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState, repeat: bool) -> Option<Action> {
        let action = self.bindings.action(key)?;
        match state {
            ElementState::Pressed => {
                if !repeat {
                    self.player.press(action, key);
                }
            }
            ElementState::Released => self.player.release(action, key),
        }
        Some(action)
    }

    /// Clear per-frame edges. Call once per frame after the state was consumed.
    pub fn update(&mut self) {
        self.player.update();
    }

    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerInput {
        &mut self.player
    }

    pub fn bindings(&self) -> &InputBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut InputBindings {
        &mut self.bindings
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::with_default_bindings()
    }
}
