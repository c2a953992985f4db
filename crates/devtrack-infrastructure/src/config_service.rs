//! Configuration file loading.

use std::fs;
use std::path::{Path, PathBuf};

use devtrack_core::config::DevtrackConfig;
use devtrack_core::error::{DevtrackError, Result};

use crate::paths::DevtrackPaths;

/// Reads `config.toml`.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Uses the platform config file location.
    pub fn new() -> Result<Self> {
        let path = DevtrackPaths::config_file().map_err(|e| DevtrackError::config(e.to_string()))?;
        Ok(Self { path })
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the config. A missing file yields defaults; an unreadable or
    /// malformed file is an error.
    pub fn load(&self) -> Result<DevtrackConfig> {
        if !self.path.exists() {
            return Ok(DevtrackConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let config: DevtrackConfig = toml::from_str(&content).map_err(|e| {
            DevtrackError::config(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        assert_eq!(service.load().unwrap(), DevtrackConfig::default());
    }

    #[test]
    fn test_load_values() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "log_level = \"debug\"\ndata_file = \"/srv/devices.json\"\n").unwrap();

        let config = ConfigService::with_path(path).load().unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.data_file, Some(PathBuf::from("/srv/devices.json")));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "log_level = [").unwrap();

        let err = ConfigService::with_path(path).load().unwrap_err();
        assert!(matches!(err, DevtrackError::Config(_)));
    }
}
