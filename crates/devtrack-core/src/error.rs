//! Error types for devtrack.

use thiserror::Error;

/// Errors raised by the device store, its storage ports, and config loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DevtrackError {
    /// A row reference or id matched nothing.
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Storage slot could not be read or written.
    #[error("IO error: {message}")]
    Io { message: String },

    /// The storage slot holds something other than a device list.
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Missing or malformed `config.toml`, or no usable platform directory.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A poisoned lock or similar broken invariant.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DevtrackError {
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

impl From<std::io::Error> for DevtrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for DevtrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, DevtrackError>`.
pub type Result<T> = std::result::Result<T, DevtrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_conversion_keeps_kind() {
        let err: DevtrackError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(err.is_io());
        assert!(err.to_string().contains("PermissionDenied"));
    }

    #[test]
    fn test_json_conversion() {
        let parse_err = serde_json::from_str::<Vec<String>>("{not json").unwrap_err();
        let err: DevtrackError = parse_err.into();
        assert!(err.is_serialization());
        assert!(err.to_string().starts_with("Serialization error: JSON"));
    }

    #[test]
    fn test_not_found_message() {
        let err = DevtrackError::not_found("device", "42");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: device '42'");
    }
}
