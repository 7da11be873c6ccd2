//! Player detail and entity creation

use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use crate::dungeon::Position;
use crate::error::SpawnError;

/// Immutable description of the controlled character, read once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDetail {
    pub character_name: String,
    pub glyph: char,
    pub color: (u8, u8, u8),
    /// Icon shown for the player on the dungeon overview map
    pub minimap_icon: String,
    pub max_health: i32,
}

impl Default for PlayerDetail {
    fn default() -> Self {
        Self {
            character_name: "Gunner".to_string(),
            glyph: '@',
            color: (255, 255, 200),
            minimap_icon: "gunner_minimap".to_string(),
            max_health: 100,
        }
    }
}

/// Opaque handle to the spawned player entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerHandle(pub u64);

/// Creates and positions the controlled entity
pub trait PlayerSpawner {
    /// Create the entity from its detail record
    fn instantiate(&mut self, detail: &PlayerDetail) -> Result<PlayerHandle, SpawnError>;

    /// Finish setting up a freshly instantiated entity
    fn init(&mut self, player: PlayerHandle, detail: &PlayerDetail) -> Result<(), SpawnError>;

    /// Move the entity
    fn set_position(&mut self, player: PlayerHandle, position: Position) -> Result<(), SpawnError>;

    /// Current position of the entity, if it exists
    fn position(&self, player: PlayerHandle) -> Option<Position>;
}

// ============================================================================
// ECS components
// ============================================================================

/// Marks the player entity
#[derive(Debug, Clone, Copy)]
pub struct Player;

#[derive(Debug, Clone)]
pub struct Name(pub String);

#[derive(Debug, Clone, Copy)]
pub struct Renderable {
    pub glyph: char,
    pub fg: (u8, u8, u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }
}

/// Spawns the player into a `hecs` world
#[derive(Default)]
pub struct WorldSpawner {
    world: World,
}

impl WorldSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    fn entity(&self, player: PlayerHandle) -> Result<Entity, SpawnError> {
        Entity::from_bits(player.0)
            .filter(|e| self.world.contains(*e))
            .ok_or(SpawnError::UnknownPlayer)
    }
}

impl PlayerSpawner for WorldSpawner {
    fn instantiate(&mut self, detail: &PlayerDetail) -> Result<PlayerHandle, SpawnError> {
        if detail.character_name.trim().is_empty() {
            return Err(SpawnError::Instantiate("character name is empty".to_string()));
        }

        let entity = self.world.spawn((Player, Position::default()));
        Ok(PlayerHandle(entity.to_bits().get()))
    }

    fn init(&mut self, player: PlayerHandle, detail: &PlayerDetail) -> Result<(), SpawnError> {
        if detail.max_health <= 0 {
            return Err(SpawnError::Init(format!(
                "max_health must be positive, got {}",
                detail.max_health
            )));
        }

        let entity = self.entity(player)?;
        self.world
            .insert(
                entity,
                (
                    Name(detail.character_name.clone()),
                    Renderable {
                        glyph: detail.glyph,
                        fg: detail.color,
                    },
                    Health::new(detail.max_health),
                ),
            )
            .map_err(|_| SpawnError::UnknownPlayer)
    }

    fn set_position(&mut self, player: PlayerHandle, position: Position) -> Result<(), SpawnError> {
        let entity = self.entity(player)?;
        let mut pos = self
            .world
            .get::<&mut Position>(entity)
            .map_err(|_| SpawnError::UnknownPlayer)?;
        *pos = position;
        Ok(())
    }

    fn position(&self, player: PlayerHandle) -> Option<Position> {
        let entity = self.entity(player).ok()?;
        self.world.get::<&Position>(entity).ok().map(|p| *p)
    }
}
