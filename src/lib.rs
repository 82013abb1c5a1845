//! Skerry - procedural island world with a first-person walking character

pub mod core;
pub mod terrain;
pub mod world;
pub mod player;
