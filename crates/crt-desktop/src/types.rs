//! Core type definitions for the desktop
//!
//! This module centralizes the identifier types used throughout the crate
//! for consistency and discoverability.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique window instance identifier
///
/// Instances are identified by a monotonically increasing 64-bit integer
/// handed out by the `WindowRegistry`. An id is never reused, even after
/// the instance it named has been closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(u64);

impl InstanceId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value (for host bindings)
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Rebuild an id received back from a host binding
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "win-{}", self.0)
    }
}

/// Stable identifier of a registered application ("about", "gallery", ...)
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AppId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AppId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for AppId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for AppId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_id_display() {
        assert_eq!(InstanceId::new(7).to_string(), "win-7");
        assert_eq!(InstanceId::from_raw(7), InstanceId::new(7));
    }

    #[test]
    fn test_app_id_compares_with_str() {
        let id = AppId::from("about");
        assert_eq!(id, "about");
        assert_eq!(id.as_str(), "about");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"about\"");
    }
}
