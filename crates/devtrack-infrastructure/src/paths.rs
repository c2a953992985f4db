//! Unified path management for devtrack files.
//!
//! This ensures consistency across all platforms (Linux, macOS, Windows).

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
    /// Platform data directory could not be determined.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
            PathError::DataDirNotFound => write!(f, "Cannot find data directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for devtrack.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/devtrack/          # Config directory
/// ├── config.toml              # Application configuration
/// └── logs/                    # Application logs
///     └── devtrack.log.YYYY-MM-DD
///
/// ~/.local/share/devtrack/     # Data directory
/// └── devices.json             # The device collection
/// ```
pub struct DevtrackPaths;

impl DevtrackPaths {
    const APP_DIR: &'static str = "devtrack";

    /// Name of the storage slot holding the device collection.
    pub const DEVICES_SLOT: &'static str = "devices";

    /// Returns the devtrack configuration directory (e.g. `~/.config/devtrack/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the devtrack data directory (e.g. `~/.local/share/devtrack/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::DataDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the default path of the devices slot.
    pub fn devices_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join(format!("{}.json", Self::DEVICES_SLOT)))
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}
