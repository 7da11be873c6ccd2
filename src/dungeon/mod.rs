//! Dungeon module
//!
//! Rooms, level definitions, and the builder and spawn-point collaborators
//! consumed by the game state machine.

pub mod builder;
pub mod level;
pub mod room;
pub mod spawn;

pub use builder::{DungeonBuilder, RoomGraphBuilder};
pub use level::{default_levels, DungeonLevel};
pub use room::{Position, Room, RoomId};
pub use spawn::{NearestSpawnPoint, SpawnPointResolver};
