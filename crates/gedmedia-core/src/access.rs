//! Viewer access levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Privilege level of the viewer a URL or etag is produced for.
///
/// Lower values are more privileged. The numeric value is part of the etag
/// input, so changing it invalidates cached protected media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Manager,
    Member,
    Public,
}

impl AccessLevel {
    pub fn as_i32(self) -> i32 {
        match self {
            AccessLevel::Manager => 0,
            AccessLevel::Member => 1,
            AccessLevel::Public => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccessLevel::Manager => "manager",
            AccessLevel::Member => "member",
            AccessLevel::Public => "public",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The viewer and tree a request is served for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessContext {
    pub tree_name: String,
    pub access_level: AccessLevel,
}

impl AccessContext {
    pub fn new(tree_name: impl Into<String>, access_level: AccessLevel) -> Self {
        Self {
            tree_name: tree_name.into(),
            access_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_levels() {
        assert_eq!(AccessLevel::Manager.as_i32(), 0);
        assert_eq!(AccessLevel::Member.as_i32(), 1);
        assert_eq!(AccessLevel::Public.as_i32(), 2);
    }

    #[test]
    fn serde_lowercase() {
        let level: AccessLevel = serde_json::from_str("\"member\"").unwrap();
        assert_eq!(level, AccessLevel::Member);
        assert_eq!(serde_json::to_string(&AccessLevel::Public).unwrap(), "\"public\"");
        assert_eq!(AccessLevel::Manager.to_string(), "manager");
    }
}
