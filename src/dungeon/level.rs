//! Dungeon level definitions
//!
//! A level is pure configuration: it tells the builder how many rooms to lay
//! out and how big they may be.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration describing the rooms to generate for one playthrough segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DungeonLevel {
    /// Display name, e.g. "Level 1 - Entrance"
    pub name: String,
    /// Fewest rooms that count as a successful build
    pub min_rooms: usize,
    /// Most rooms the builder will try to place
    pub max_rooms: usize,
    /// Smallest room side, walls included
    pub min_room_size: i32,
    /// Largest room side, walls included
    pub max_room_size: i32,
    /// Map extent in cells
    pub width: i32,
    pub height: i32,
    /// Placement attempts before the builder gives up
    #[serde(default = "default_attempts")]
    pub max_attempts: u32,
}

fn default_attempts() -> u32 {
    100
}

impl DungeonLevel {
    pub fn new(name: impl Into<String>, min_rooms: usize, max_rooms: usize) -> Self {
        Self {
            name: name.into(),
            min_rooms,
            max_rooms,
            min_room_size: 5,
            max_room_size: 10,
            width: 80,
            height: 50,
            max_attempts: default_attempts(),
        }
    }

    /// Check the definition is internally consistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidLevel {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.min_rooms == 0 {
            return Err(invalid("min_rooms must be at least 1"));
        }
        if self.min_rooms > self.max_rooms {
            return Err(invalid("min_rooms exceeds max_rooms"));
        }
        // Smaller than 3 leaves no interior cell to spawn on
        if self.min_room_size < 3 || self.min_room_size > self.max_room_size {
            return Err(invalid("room size bounds must satisfy 3 <= min <= max"));
        }
        if self.max_room_size + 2 > self.width || self.max_room_size + 2 > self.height {
            return Err(invalid("largest room does not fit inside the map"));
        }
        Ok(())
    }
}

/// Built-in level list used when no config file is present
pub fn default_levels() -> Vec<DungeonLevel> {
    vec![
        DungeonLevel::new("Level 1 - Entrance", 4, 8),
        DungeonLevel {
            max_room_size: 12,
            width: 100,
            height: 60,
            ..DungeonLevel::new("Level 2 - Catacombs", 6, 14)
        },
    ]
}
