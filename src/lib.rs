//! Dungeon Gunner - game-state core
//!
//! The finite-state game loop that coordinates dungeon level loading, room
//! transitions, scoring and player placement, plus the event bus that ties
//! gameplay code to it.

pub mod data;
pub mod dungeon;
pub mod entities;
pub mod error;
pub mod events;
pub mod game;

// Re-export commonly used types
pub use data::GameConfig;
pub use error::{ConfigError, GameError, GenerationError, SpawnError};
pub use events::{EventBus, EventKind, GameEvent};
pub use game::{Game, GameState};
