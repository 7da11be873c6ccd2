//! Data loading
//!
//! Game configuration read from RON files.

pub mod config;

pub use config::{config_path, export_default_config, GameConfig};
