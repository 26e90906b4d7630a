// Keyboard input
//
// ## Architecture
//
// - `action`: actions and the default key layout
// - `config`: the remappable key binding table
// - `axis`: keyboard axis smoothing
// - `player`: held actions, press edges and the locomotion snapshot
// - `manager`: routes winit keyboard events into the player state
//
// ## Usage
//
// ```rust
// let mut input = InputManager::with_default_bindings();
//
// // In the event loop
// input.process_keyboard_event(&key_event);
//
// // Once per frame
// input.player_mut().smooth_axes(dt);
// let snapshot = input.player().locomotion_input();
// // ... drive the controller ...
// input.update();
// ```

pub mod action;
pub mod axis;
pub mod config;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::Action;
pub use axis::AxisSmoothing;
pub use config::InputBindings;
pub use manager::InputManager;
pub use player::PlayerInput;
