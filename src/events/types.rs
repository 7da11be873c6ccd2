//! Event payloads

use std::sync::Arc;

use crate::dungeon::Room;

/// Kinds of events carried by the bus
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum EventKind {
    RoomChanged,
    PointScored,
    MultiplierChanged,
    ScoreChanged,
}

/// The player entered a new room
#[derive(Debug, Clone)]
pub struct RoomChangedArgs {
    pub room: Arc<Room>,
}

/// Points were earned, before the multiplier is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointScoredArgs {
    pub point: u32,
}

/// The score multiplier should step up or down by one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiplierChangedArgs {
    pub is_increment: bool,
}

/// Score or multiplier changed; published after every fold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreChangedArgs {
    pub score: u64,
    pub multiplier: u32,
}

/// Event wrapper routed by [`EventKind`]
#[derive(Debug, Clone)]
pub enum GameEvent {
    RoomChanged(RoomChangedArgs),
    PointScored(PointScoredArgs),
    MultiplierChanged(MultiplierChangedArgs),
    ScoreChanged(ScoreChangedArgs),
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::RoomChanged(_) => EventKind::RoomChanged,
            GameEvent::PointScored(_) => EventKind::PointScored,
            GameEvent::MultiplierChanged(_) => EventKind::MultiplierChanged,
            GameEvent::ScoreChanged(_) => EventKind::ScoreChanged,
        }
    }

    pub fn room_changed(room: Arc<Room>) -> Self {
        GameEvent::RoomChanged(RoomChangedArgs { room })
    }

    pub fn point_scored(point: u32) -> Self {
        GameEvent::PointScored(PointScoredArgs { point })
    }

    pub fn multiplier_changed(is_increment: bool) -> Self {
        GameEvent::MultiplierChanged(MultiplierChangedArgs { is_increment })
    }

    pub fn score_changed(score: u64, multiplier: u32) -> Self {
        GameEvent::ScoreChanged(ScoreChangedArgs { score, multiplier })
    }
}
