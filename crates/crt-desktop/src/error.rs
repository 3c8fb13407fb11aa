//! Error types for the desktop
//!
//! Window and icon operations never fail: stale ids and unknown apps are
//! ignored. Errors only come out of construction paths (configuration,
//! app registry) and the browser binding's serialization.

use crate::types::AppId;

/// Errors that can occur while building or exporting desktop state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// No application registered under the given id
    UnknownApp(AppId),

    /// Two descriptors in one registry share an id
    DuplicateApp(AppId),

    /// A configuration value is out of range
    InvalidConfig {
        /// The offending field
        field: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// JSON serialization or deserialization failed
    SerializationError(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownApp(id) => write!(f, "unknown app: {}", id),
            Self::DuplicateApp(id) => write!(f, "duplicate app id: {}", id),
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config '{}': {}", field, reason)
            }
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;
