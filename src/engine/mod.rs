// Engine modules: frame scheduling, collision, input

pub mod game_loop;
pub mod input;
pub mod physics;
