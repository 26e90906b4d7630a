// Key binding table and remapping

use super::action::{default_bindings, Action};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Mapping from physical keys to actions, with a reverse index
#[derive(Debug, Clone, Default)]
pub struct InputBindings {
    bindings: HashMap<KeyCode, Action>,
    action_to_keys: HashMap<Action, Vec<KeyCode>>,
}

impl InputBindings {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bindings(bindings: Vec<(KeyCode, Action)>) -> Self {
        let mut table = Self::new();
        for (key, action) in bindings {
            table.bind(key, action);
        }
        table
    }

    /// Bind a key to an action, replacing whatever the key did before
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.unbind_key(key);
        self.bindings.insert(key, action);
        self.action_to_keys.entry(action).or_default().push(key);
    }

    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.bindings.remove(&key) {
            if let Some(keys) = self.action_to_keys.get_mut(&action) {
                keys.retain(|k| *k != key);
                if keys.is_empty() {
                    self.action_to_keys.remove(&action);
                }
            }
        }
    }

    /// Remove every key bound to `action`
    pub fn unbind_action(&mut self, action: Action) {
        if let Some(keys) = self.action_to_keys.remove(&action) {
            for key in keys {
                self.bindings.remove(&key);
            }
        }
    }

    /// Action bound to `key`, if any
    pub fn action(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// All keys bound to `action`
    pub fn keys(&self, action: Action) -> &[KeyCode] {
        self.action_to_keys
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// The default layout
pub fn default_input_bindings() -> InputBindings {
    InputBindings::from_bindings(default_bindings())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_lookup() {
        let bindings = default_input_bindings();
        assert_eq!(bindings.action(KeyCode::KeyW), Some(Action::MoveForward));
        assert_eq!(bindings.action(KeyCode::ArrowUp), Some(Action::MoveForward));
        assert_eq!(bindings.action(KeyCode::Space), Some(Action::Jump));
        assert_eq!(bindings.action(KeyCode::KeyZ), None);
        assert_eq!(bindings.keys(Action::MoveForward).len(), 2);
    }

    #[test]
    fn test_rebind_replaces_previous_action() {
        let mut bindings = default_input_bindings();
        bindings.bind(KeyCode::Space, Action::Sprint);

        assert_eq!(bindings.action(KeyCode::Space), Some(Action::Sprint));
        assert!(bindings.keys(Action::Jump).is_empty());
        assert_eq!(bindings.keys(Action::Sprint).len(), 2);
    }

    #[test]
    fn test_unbind_key() {
        let mut bindings = default_input_bindings();
        let before = bindings.len();
        bindings.unbind_key(KeyCode::KeyW);

        assert_eq!(bindings.action(KeyCode::KeyW), None);
        assert_eq!(bindings.keys(Action::MoveForward), &[KeyCode::ArrowUp]);
        assert_eq!(bindings.len(), before - 1);
    }

    #[test]
    fn test_unbind_action() {
        let mut bindings = default_input_bindings();
        bindings.unbind_action(Action::MoveLeft);

        assert_eq!(bindings.action(KeyCode::KeyA), None);
        assert_eq!(bindings.action(KeyCode::ArrowLeft), None);
        assert!(bindings.keys(Action::MoveLeft).is_empty());
    }

    #[test]
    fn test_empty_table() {
        let bindings = InputBindings::new();
        assert!(bindings.is_empty());
        assert_eq!(bindings.action(KeyCode::KeyW), None);
    }
}
