//! Rooms and grid positions

use serde::{Deserialize, Serialize};

/// Position on the dungeon grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another position
    pub fn distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Identifier of a room within one generated dungeon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

/// A connected playable area within a generated dungeon level
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: RoomId,
    /// Inclusive lower-left corner
    pub lower_bounds: Position,
    /// Inclusive upper-right corner
    pub upper_bounds: Position,
    /// Cells where an entity may be placed
    pub spawn_positions: Vec<Position>,
    /// Rooms reachable through a corridor from this one
    pub connections: Vec<RoomId>,
    pub is_entrance: bool,
}

impl Room {
    /// Create a room spanning the given bounds with every interior cell as a spawn point
    pub fn new(id: RoomId, lower_bounds: Position, upper_bounds: Position) -> Self {
        let mut spawn_positions = Vec::new();
        for y in (lower_bounds.y + 1)..upper_bounds.y {
            for x in (lower_bounds.x + 1)..upper_bounds.x {
                spawn_positions.push(Position::new(x, y));
            }
        }

        Self {
            id,
            lower_bounds,
            upper_bounds,
            spawn_positions,
            connections: Vec::new(),
            is_entrance: false,
        }
    }

    pub fn with_spawn_positions(mut self, positions: Vec<Position>) -> Self {
        self.spawn_positions = positions;
        self
    }

    pub fn as_entrance(mut self) -> Self {
        self.is_entrance = true;
        self
    }

    /// Centre of the room's bounds
    pub fn middle_position(&self) -> Position {
        Position::new(
            (self.lower_bounds.x + self.upper_bounds.x) / 2,
            (self.lower_bounds.y + self.upper_bounds.y) / 2,
        )
    }

    pub fn width(&self) -> i32 {
        self.upper_bounds.x - self.lower_bounds.x + 1
    }

    pub fn height(&self) -> i32 {
        self.upper_bounds.y - self.lower_bounds.y + 1
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.lower_bounds.x
            && pos.x <= self.upper_bounds.x
            && pos.y >= self.lower_bounds.y
            && pos.y <= self.upper_bounds.y
    }

    /// Whether two rooms overlap, counting a one-cell wall margin
    pub fn intersects(&self, other: &Room) -> bool {
        self.lower_bounds.x <= other.upper_bounds.x + 1
            && self.upper_bounds.x + 1 >= other.lower_bounds.x
            && self.lower_bounds.y <= other.upper_bounds.y + 1
            && self.upper_bounds.y + 1 >= other.lower_bounds.y
    }
}
