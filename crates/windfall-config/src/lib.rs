//! Game configuration: RON-backed settings with sensible defaults.

pub mod config;
pub mod error;

pub use config::{Config, DebugConfig, InputConfig, MovementConfig, WindowConfig, default_config_dir};
pub use error::ConfigError;
