// Input actions and their default key bindings

use winit::keyboard::KeyCode;

/// Everything the player can ask for from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement axes
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,

    // Modifiers and edges
    Sprint,
    Jump,

    // Camera
    OrbitLeft,
    OrbitRight,

    // Meta
    Pause,
}

/// Default keyboard layout: WASD and arrows, shift to sprint, space to jump
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        (KeyCode::KeyW, Action::MoveForward),
        (KeyCode::KeyS, Action::MoveBackward),
        (KeyCode::KeyA, Action::MoveLeft),
        (KeyCode::KeyD, Action::MoveRight),
        (KeyCode::ArrowUp, Action::MoveForward),
        (KeyCode::ArrowDown, Action::MoveBackward),
        (KeyCode::ArrowLeft, Action::MoveLeft),
        (KeyCode::ArrowRight, Action::MoveRight),
        (KeyCode::ShiftLeft, Action::Sprint),
        (KeyCode::Space, Action::Jump),
        (KeyCode::KeyQ, Action::OrbitLeft),
        (KeyCode::KeyE, Action::OrbitRight),
        (KeyCode::KeyP, Action::Pause),
    ]
}
