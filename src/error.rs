//! Error types
//!
//! Configuration problems are fatal and abort startup. Generation failures are
//! reported and leave the state machine where it was.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("level list is empty")]
    EmptyLevelList,

    #[error("level index {index} out of range (have {len} levels)")]
    LevelIndexOutOfRange { index: usize, len: usize },

    #[error("level '{name}' is invalid: {reason}")]
    InvalidLevel { name: String, reason: String },

    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
}

/// Dungeon generation failures (recoverable, reported to the host)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("level '{0}' cannot be generated from its definition")]
    InvalidLevel(String),

    #[error("placed {placed} rooms but the level needs at least {required}")]
    InsufficientRooms { placed: usize, required: usize },

    #[error("dungeon has no entrance room")]
    NoEntrance,
}

/// Failures while creating the controlled entity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpawnError {
    #[error("could not instantiate player: {0}")]
    Instantiate(String),

    #[error("could not initialise player: {0}")]
    Init(String),

    #[error("player handle does not refer to a live entity")]
    UnknownPlayer,
}

/// Top-level error for state machine operations
#[derive(Debug, Error)]
pub enum GameError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("dungeon generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("player spawn failed: {0}")]
    Spawn(#[from] SpawnError),

    #[error("game has not been initialized")]
    NotInitialized,
}

impl GameError {
    /// Whether the error must abort the game rather than be reported and retried
    pub fn is_fatal(&self) -> bool {
        !matches!(self, GameError::Generation(_))
    }
}
