//! RON game configuration
//!
//! Level definitions and the player detail are supplied by the host at
//! startup. A missing file falls back to built-in defaults; a file that exists
//! but cannot be read or parsed is a fatal error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dungeon::{default_levels, DungeonLevel};
use crate::entities::PlayerDetail;
use crate::error::ConfigError;

/// Everything the host hands to the state machine at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Ordered level definitions; index 0 is played first
    pub levels: Vec<DungeonLevel>,
    pub player: PlayerDetail,
    /// Dungeon RNG seed, entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_ticks_per_second")]
    pub ticks_per_second: u32,
}

fn default_ticks_per_second() -> u32 {
    30
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            levels: default_levels(),
            player: PlayerDetail::default(),
            seed: None,
            ticks_per_second: default_ticks_per_second(),
        }
    }
}

impl GameConfig {
    /// Parse a config from RON text
    pub fn from_ron(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        ron::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Read and parse a config file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron(&text, path)?;
        log::info!("Config loaded from {:?}", path);
        Ok(config)
    }

    /// Load `path`, or the default location when `None`, falling back to defaults if absent
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => config_path(),
        };

        if path.exists() {
            Self::load_from_path(&path)
        } else {
            log::warn!("No config at {:?}, using built-in defaults", path);
            Ok(Self::default())
        }
    }

    /// Startup checks, always run before the game is initialized
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.levels.is_empty() {
            return Err(ConfigError::EmptyLevelList);
        }
        for level in &self.levels {
            level.validate()?;
        }
        Ok(())
    }

    /// Serialize as pretty RON
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }
}

/// Default config location in the platform config directory
pub fn config_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "dungeon-gunner", "DungeonGunner") {
        proj_dirs.config_dir().join("config.ron")
    } else {
        PathBuf::from("./config.ron")
    }
}

/// Write the built-in defaults to `path` for editing
pub fn export_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(io_err)?;
    }
    let text = GameConfig::default().to_ron()?;
    fs::write(path, text).map_err(io_err)
}
