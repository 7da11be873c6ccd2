//! Entity creation
//!
//! The controlled player entity and the spawner the state machine uses to
//! create and move it.

pub mod player;

pub use player::{Health, Name, Player, PlayerDetail, PlayerHandle, PlayerSpawner, Renderable, WorldSpawner};
