//! Spawn point lookup

use super::room::{Position, Room};

/// Resolves where an entity may be placed near a requested position
pub trait SpawnPointResolver {
    /// Nearest valid spawn point in `room` to `position`.
    ///
    /// Always returns a point; when the room has no spawn points the
    /// requested position itself is the best-effort answer.
    fn nearest_spawn_point(&self, room: &Room, position: Position) -> Position;
}

/// Picks the room spawn point with the smallest Manhattan distance
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestSpawnPoint;

impl SpawnPointResolver for NearestSpawnPoint {
    fn nearest_spawn_point(&self, room: &Room, position: Position) -> Position {
        room.spawn_positions
            .iter()
            .min_by_key(|p| p.distance(&position))
            .copied()
            .unwrap_or(position)
    }
}
