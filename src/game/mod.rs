// Game layer: locomotion rules and the player binding to the collision world

pub mod locomotion;
pub mod player;
