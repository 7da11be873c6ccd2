//! Dungeon building
//!
//! The state machine only sees the [`DungeonBuilder`] trait. [`RoomGraphBuilder`]
//! is the stock implementation: rectangular rooms scattered over the map, each
//! new room joined to the previous one so the graph is always connected.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::level::DungeonLevel;
use super::room::{Position, Room, RoomId};
use crate::error::GenerationError;

/// Produces a connected graph of rooms from a level definition
pub trait DungeonBuilder {
    /// Build a dungeon for `level`.
    ///
    /// On success [`current_room`](Self::current_room) returns the entrance.
    /// On failure the previously built dungeon, if any, is left untouched.
    fn generate_dungeon(&mut self, level: &DungeonLevel) -> Result<(), GenerationError>;

    /// The room the player should start in
    fn current_room(&self) -> Option<Arc<Room>>;

    /// Look up a room of the current dungeon
    fn room(&self, id: RoomId) -> Option<Arc<Room>>;

    /// Every room of the current dungeon
    fn rooms(&self) -> &[Arc<Room>];
}

/// Room-and-corridor generator
pub struct RoomGraphBuilder {
    rng: StdRng,
    rooms: Vec<Arc<Room>>,
    entrance: Option<RoomId>,
}

impl RoomGraphBuilder {
    /// Create a builder; `None` seeds from entropy
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            rooms: Vec::new(),
            entrance: None,
        }
    }

    fn place_rooms(&mut self, level: &DungeonLevel) -> Vec<Room> {
        let mut rooms: Vec<Room> = Vec::new();

        for _ in 0..level.max_attempts {
            if rooms.len() >= level.max_rooms {
                break;
            }

            let w = self.rng.gen_range(level.min_room_size..=level.max_room_size);
            let h = self.rng.gen_range(level.min_room_size..=level.max_room_size);
            let x = self.rng.gen_range(1..=level.width - w - 1);
            let y = self.rng.gen_range(1..=level.height - h - 1);

            let mut candidate = Room::new(
                RoomId(rooms.len()),
                Position::new(x, y),
                Position::new(x + w - 1, y + h - 1),
            );

            if rooms.iter().any(|r| candidate.intersects(r)) {
                continue;
            }

            if let Some(prev) = rooms.last_mut() {
                prev.connections.push(candidate.id);
                candidate.connections.push(prev.id);
            }
            rooms.push(candidate);
        }

        rooms
    }
}

impl DungeonBuilder for RoomGraphBuilder {
    fn generate_dungeon(&mut self, level: &DungeonLevel) -> Result<(), GenerationError> {
        level
            .validate()
            .map_err(|_| GenerationError::InvalidLevel(level.name.clone()))?;

        let mut rooms = self.place_rooms(level);
        if rooms.len() < level.min_rooms {
            log::warn!(
                "Level '{}': placed {} of {} required rooms in {} attempts",
                level.name,
                rooms.len(),
                level.min_rooms,
                level.max_attempts
            );
            return Err(GenerationError::InsufficientRooms {
                placed: rooms.len(),
                required: level.min_rooms,
            });
        }

        let first = rooms.first_mut().ok_or(GenerationError::NoEntrance)?;
        first.is_entrance = true;
        self.entrance = Some(first.id);
        self.rooms = rooms.into_iter().map(Arc::new).collect();

        log::info!("Generated '{}' with {} rooms", level.name, self.rooms.len());
        Ok(())
    }

    fn current_room(&self) -> Option<Arc<Room>> {
        self.entrance.and_then(|id| self.room(id))
    }

    fn room(&self, id: RoomId) -> Option<Arc<Room>> {
        self.rooms.get(id.0).cloned()
    }

    fn rooms(&self) -> &[Arc<Room>] {
        &self.rooms
    }
}
