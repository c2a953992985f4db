//! Application configuration model.
//!
//! Read from `config.toml` by the infrastructure layer. Every field has a
//! default so an empty or partial file is valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default log filter when nothing else is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DevtrackConfig {
    /// Storage slot file. `None` uses the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// `tracing` filter directive, e.g. `"info"` or `"devtrack_core=debug"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Write logs to the rolling file in the logs directory.
    #[serde(default = "default_log_to_file")]
    pub log_to_file: bool,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_log_to_file() -> bool {
    true
}

impl Default for DevtrackConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            log_level: default_log_level(),
            log_to_file: default_log_to_file(),
        }
    }
}
