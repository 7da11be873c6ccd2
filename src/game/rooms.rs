//! Current/previous room tracking
//!
//! Rooms are owned by the dungeon builder; the registry only keeps weak
//! references, so a room dropped by regeneration reads back as `None`.

use std::sync::{Arc, Weak};

use crate::dungeon::Room;

#[derive(Debug, Default)]
pub struct RoomRegistry {
    current: Weak<Room>,
    previous: Weak<Room>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `room` current, keeping the old current room as previous
    pub fn set_current_room(&mut self, room: &Arc<Room>) {
        self.previous = std::mem::replace(&mut self.current, Arc::downgrade(room));
    }

    pub fn current_room(&self) -> Option<Arc<Room>> {
        self.current.upgrade()
    }

    pub fn previous_room(&self) -> Option<Arc<Room>> {
        self.previous.upgrade()
    }
}
