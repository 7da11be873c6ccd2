//! Game module - state machine, score and room tracking

mod rooms;
mod score;
mod state;

pub use rooms::RoomRegistry;
pub use score::{ScoreTracker, MAX_MULTIPLIER, MIN_MULTIPLIER};
pub use state::{Game, GameState};
